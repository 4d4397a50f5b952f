use serde::{Deserialize, Serialize};

/// One status poll response from the remote service, in its wire shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusSnapshot {
    #[serde(default)]
    pub status: u8,
    pub error_message: Option<String>,
    pub audio_url: Option<String>,
    pub audio_title: Option<String>,
    pub response_text: Option<String>,
}

/// Terminal classification of a poll response. An error message dominates
/// at any numeric status; at 100 the success branch is chosen by payload
/// shape alone, never by echoing the request's output type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Terminality {
    Pending { status: u8 },
    Failed { message: String },
    SucceededText { body: String },
    SucceededAudio { url: String, title: String },
}

impl StatusSnapshot {
    pub fn classify(&self) -> Terminality {
        if let Some(message) = &self.error_message {
            if !message.is_empty() {
                return Terminality::Failed {
                    message: message.clone(),
                };
            }
        }

        if self.status < 100 {
            return Terminality::Pending {
                status: self.status,
            };
        }

        if let Some(body) = &self.response_text {
            if !body.is_empty() {
                return Terminality::SucceededText { body: body.clone() };
            }
        }

        Terminality::SucceededAudio {
            url: self.audio_url.clone().unwrap_or_default(),
            title: self.audio_title.clone().unwrap_or_default(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self.classify(), Terminality::Pending { .. })
    }
}
