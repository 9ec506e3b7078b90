//! Intake view state and the submit operation.
//!
//! The view is one value shared by every request. A submit takes the write
//! lock twice (before and after the generation call) and never holds it
//! across the call itself.

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::errors::GENERIC_FAILURE_MESSAGE;
use crate::generation::{GenerationError, GenerationService};
use crate::intake::validation::validate_input;
use crate::models::intake::{GeneratedContent, IntakeInput, IntakeRequest};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IntakeView {
    /// Last submitted field values, echoed back into the form.
    pub form: IntakeInput,
    pub loading: bool,
    pub error: Option<String>,
    pub result: Option<GeneratedContent>,
    /// Token of the newest accepted submission. Only its completion may
    /// touch `loading`, `error` or `result`.
    pub generation: u64,
}

/// What happened to a single submit call.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; no request was made.
    Rejected(String),
    /// The generated content is now the current result.
    Completed,
    /// The service failed; the generic failure message is set.
    Failed(GenerationError),
    /// A newer submission was accepted while this one was in flight, so its
    /// outcome was dropped.
    Superseded,
}

impl IntakeView {
    /// Records the submitted fields and, if they validate, starts a new
    /// generation. Returns the token to hand back to `finish`.
    ///
    /// A rejected submit leaves the previous result in place.
    pub fn begin(&mut self, input: IntakeInput) -> Result<(u64, IntakeRequest), String> {
        self.form = input;
        self.error = None;

        let request = match validate_input(&self.form) {
            Ok(request) => request,
            Err(message) => {
                self.error = Some(message.clone());
                return Err(message);
            }
        };

        self.loading = true;
        self.result = None;
        self.generation += 1;
        Ok((self.generation, request))
    }

    /// Applies a completed generation. `None` means the call failed.
    ///
    /// Returns `false` without touching any state if `token` is stale.
    pub fn finish(&mut self, token: u64, content: Option<GeneratedContent>) -> bool {
        if token != self.generation {
            return false;
        }

        match content {
            Some(content) => self.result = Some(content),
            None => {
                self.error = Some(GENERIC_FAILURE_MESSAGE.to_string());
                self.result = None;
            }
        }
        self.loading = false;
        true
    }
}

/// Runs one intake submission against `service` and updates `view`.
pub async fn submit(
    view: &RwLock<IntakeView>,
    service: &dyn GenerationService,
    input: IntakeInput,
) -> SubmitOutcome {
    let begun = view.write().await.begin(input);
    let (token, request) = match begun {
        Ok(begun) => begun,
        Err(message) => {
            debug!("Intake rejected: {message}");
            return SubmitOutcome::Rejected(message);
        }
    };

    info!(
        "Generating content (generation {}, tone {}) via {}",
        token,
        request.tone,
        service.describe()
    );

    let result = service.generate(&request).await;

    let applied = view
        .write()
        .await
        .finish(token, result.as_ref().ok().cloned());

    if !applied {
        match &result {
            Ok(_) => debug!("Dropping outcome of superseded generation {token}"),
            Err(e) => warn!("Superseded generation {token} failed: {e}"),
        }
        return SubmitOutcome::Superseded;
    }

    match result {
        Ok(_) => SubmitOutcome::Completed,
        Err(e) => {
            warn!("Generation {token} failed: {e}");
            SubmitOutcome::Failed(e)
        }
    }
}
