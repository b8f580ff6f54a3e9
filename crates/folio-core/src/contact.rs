//! Contact form: draft, submission state and the e-mail relay client.

use std::fmt;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::RelayCredentials;
use crate::error::{ConfigError, SubmitError};

/// A required input of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Form control name, also the relay template parameter.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Values typed into the form so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// First required field that is blank, if any.
    pub fn missing_field(&self) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|field| self.get(*field).trim().is_empty())
    }

    pub fn is_complete(&self) -> bool {
        self.missing_field().is_none()
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    pub fn clear(&mut self) {
        *self = FormDraft::default();
    }
}

/// Acknowledgment shown after a submission finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Sent,
    Failed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Sent => "Message Sent!",
            Notice::Failed => "Oops! Something went wrong. Please try again.",
        }
    }
}

/// Contact form state: the draft plus the in-flight flag that disables the
/// submit control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    draft: FormDraft,
    sending: bool,
    notice: Option<Notice>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    /// Records a keystroke.
    pub fn update(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// True while a request is in flight; the submit control is disabled.
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Starts a submission and returns the draft to send.
    ///
    /// Refused while another submission is in flight or while a required
    /// field is blank; in both cases nothing changes.
    pub fn begin_submit(&mut self) -> Result<FormDraft, SubmitError> {
        if self.sending {
            return Err(SubmitError::InFlight);
        }
        if let Some(field) = self.draft.missing_field() {
            return Err(SubmitError::Incomplete(field));
        }
        self.sending = true;
        self.notice = None;
        Ok(self.draft.clone())
    }

    /// Finishes the in-flight submission. Success clears the draft, failure
    /// keeps it for another attempt; both re-enable the submit control.
    pub fn finish(&mut self, outcome: Result<(), SubmitError>) -> Notice {
        self.sending = false;
        let notice = match outcome {
            Ok(()) => {
                self.draft.clear();
                Notice::Sent
            }
            Err(e) => {
                warn!(error = %e, "Contact message not delivered");
                Notice::Failed
            }
        };
        self.notice = Some(notice);
        notice
    }

    /// Runs a whole submission against `relay`: one request, no retry.
    pub async fn submit(&mut self, relay: &dyn MailRelay) -> Result<Notice, SubmitError> {
        let draft = self.begin_submit()?;
        let outcome = relay.send(&draft).await;
        Ok(self.finish(outcome))
    }
}

/// Delivers a contact message.
#[async_trait]
pub trait MailRelay: Send + Sync {
    async fn send(&self, draft: &FormDraft) -> Result<(), SubmitError>;
}

/// Request body of the EmailJS send endpoint.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a FormDraft,
}

/// Sends messages through the EmailJS REST API.
pub struct EmailJsRelay {
    client: reqwest::Client,
    credentials: RelayCredentials,
}

impl EmailJsRelay {
    pub fn new(credentials: RelayCredentials) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(credentials.timeout)
            .build()
            .map_err(|e| ConfigError::invalid("relay", format!("http client: {e}")))?;
        Ok(Self {
            client,
            credentials,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.credentials.endpoint
    }
}

#[async_trait]
impl MailRelay for EmailJsRelay {
    async fn send(&self, draft: &FormDraft) -> Result<(), SubmitError> {
        let body = SendRequest {
            service_id: &self.credentials.service_id,
            template_id: &self.credentials.template_id,
            user_id: &self.credentials.public_key,
            template_params: draft,
        };

        info!(
            endpoint = %self.credentials.endpoint,
            template = %self.credentials.template_id,
            "Sending contact message"
        );

        let response = self
            .client
            .post(&self.credentials.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(SubmitError::Relay {
                status: status.as_u16(),
                body,
            });
        }

        info!("Contact message accepted by relay");
        Ok(())
    }
}
