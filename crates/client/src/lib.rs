pub mod config;
pub mod error;
pub mod http_client;
pub mod registration_form;
pub mod traits;

pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use http_client::RegistrationClient;
pub use registration_form::RegistrationForm;
pub use traits::{RegistrationTransport, TransportResponse};
