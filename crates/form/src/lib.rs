pub mod dsl;
pub mod error;
pub mod models;
pub mod response;
pub mod state;

pub use dsl::transform_to_dsl;
pub use error::{FormError, Result};
pub use models::{
    Categoria, FormField, InputChange, Participant, ParticipantForm, RegistrationReceipt, Sexo,
};
pub use response::{interpret_response, parse_response, success_message};
pub use state::SubmissionState;
