pub mod participant;
pub mod participant_form;

pub use participant::{Participant, RegistrationReceipt};
pub use participant_form::{Categoria, FormField, InputChange, ParticipantForm, Sexo};
