use crate::{Result, RegistrationTransport};
use form::{
    FormField, InputChange, ParticipantForm, RegistrationReceipt, SubmissionState,
    parse_response, success_message, transform_to_dsl,
};
use tokio::sync::watch;
use tracing::{info, warn};

/// Form state container driving one registration.
///
/// Field edits and submissions go through `&mut self`, so a form cannot be
/// edited or submitted again while a request is in flight. Submission status
/// is published on a watch channel for anyone rendering it.
pub struct RegistrationForm {
    data: ParticipantForm,
    state: watch::Sender<SubmissionState>,
    receipt: Option<RegistrationReceipt>,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::with_data(ParticipantForm::default())
    }

    pub fn with_data(data: ParticipantForm) -> Self {
        let (state, _) = watch::channel(SubmissionState::default());
        Self {
            data,
            state,
            receipt: None,
        }
    }

    pub fn data(&self) -> &ParticipantForm {
        &self.data
    }

    pub fn state(&self) -> SubmissionState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    /// Receipt of the last successful submission.
    pub fn receipt(&self) -> Option<&RegistrationReceipt> {
        self.receipt.as_ref()
    }

    pub fn handle_input_change(&mut self, name: &str, change: InputChange) -> Result<()> {
        let field: FormField = name.parse()?;
        self.data.apply_change(field, change)?;
        Ok(())
    }

    pub fn transform_to_dsl(&self) -> String {
        transform_to_dsl(&self.data)
    }

    /// Sends the form and records the outcome in the submission state.
    ///
    /// Only a form that fails the pre-submit checks returns `Err`; in that
    /// case nothing is sent and the state is left as it was. Transport and
    /// server failures end up in the returned state with `is_error` set.
    pub async fn submit<T>(&mut self, transport: &T) -> Result<SubmissionState>
    where
        T: RegistrationTransport + ?Sized,
    {
        self.data.ensure_submittable()?;

        let payload = self.transform_to_dsl();
        info!("Submitting registration to {}", transport.endpoint());

        self.state.send_modify(|state| *state = state.begin());
        let settle = SettleOnDrop(&self.state);

        match exchange(transport, payload).await {
            Ok(receipt) => {
                for warning in receipt.warnings() {
                    warn!("Server warning: {}", warning);
                }
                let message = success_message(&receipt);
                info!("Registration accepted");
                self.state
                    .send_modify(|state| *state = state.succeed(message.as_str()));
                self.receipt = Some(receipt);
            }
            Err(e) => {
                warn!("Registration failed: {}", e);
                self.state.send_modify(|state| *state = state.fail(&e));
            }
        }

        drop(settle);
        Ok(self.state())
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

async fn exchange<T>(transport: &T, payload: String) -> Result<RegistrationReceipt>
where
    T: RegistrationTransport + ?Sized,
{
    let response = transport.post_dsl(payload).await?;
    let receipt = parse_response(response.is_ok(), &response.body)?;
    Ok(receipt)
}

/// Clears the loading flag when the submission ends, including when the
/// submit future is dropped before the request resolves.
struct SettleOnDrop<'a>(&'a watch::Sender<SubmissionState>);

impl Drop for SettleOnDrop<'_> {
    fn drop(&mut self) {
        self.0.send_modify(|state| *state = state.settle());
    }
}
