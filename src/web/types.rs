//! Most of the structs in `web` module and their implementations live here.
//! Includes structs that need to be validated, their parsing implementations and tests for those

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;
use validator::ValidateEmail;

// ###################################
// ->   STRUCTS
// ###################################
/// Deserializable Submission
/// A waitlist submission that can be Deserialized but can have invalid fields.
/// Used for both the JSON body of the API route and the form body of the fallback route.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeserSubmission {
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
}

impl DeserSubmission {
    pub fn new(name: Option<String>, email: String) -> Self {
        Self { name, email }
    }
}

/// Validated Submission
/// A waitlist submission with the email validated and the name resolved.
#[derive(Debug, Clone)]
pub struct ValidSubmission {
    pub name: SubmitterName,
    pub email: ValidEmail,
}

impl TryFrom<DeserSubmission> for ValidSubmission {
    type Error = DataParsingError;

    fn try_from(deser_sub: DeserSubmission) -> Result<Self, Self::Error> {
        Ok(ValidSubmission {
            email: ValidEmail::parse(deser_sub.email)?,
            name: SubmitterName::from_optional(deser_sub.name),
        })
    }
}

/// Validated Email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidEmail(String);

impl AsRef<str> for ValidEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl ValidEmail {
    pub fn parse<S>(value: S) -> Result<Self, DataParsingError>
    where
        S: AsRef<str>,
    {
        let value = value.as_ref();

        if value.graphemes(true).count() > 256 {
            return Err(DataParsingError::EmailTooLong);
        }

        if value.validate_email() {
            Ok(ValidEmail(value.to_owned()))
        } else {
            Err(DataParsingError::EmailInvalid)
        }
    }
}

/// Name of the person joining the waitlist.
/// Free-form, a blank name resolves to `SubmitterName::PLACEHOLDER`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitterName(String);

impl AsRef<str> for SubmitterName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SubmitterName {
    pub const PLACEHOLDER: &'static str = "Anonymous";

    pub fn from_optional(value: Option<String>) -> Self {
        match value {
            Some(name) if !name.trim().is_empty() => SubmitterName(name),
            _ => SubmitterName(Self::PLACEHOLDER.to_string()),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.0 == Self::PLACEHOLDER
    }
}

/// The envelope every `/api/waitlist` response is wrapped in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Envelope {
    pub fn success() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}

/// State of the server-rendered waitlist form.
/// The in-flight state only exists on the client, see `static/waitlist.js`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Succeeded,
    /// Keeps the entered values so the visitor can correct and resubmit.
    Failed {
        message: String,
        name: String,
        email: String,
    },
}

impl FormState {
    pub fn failed(message: impl Into<String>, submission: &DeserSubmission) -> Self {
        FormState::Failed {
            message: message.into(),
            name: submission.name.clone().unwrap_or_default(),
            email: submission.email.clone(),
        }
    }

    /// Inserts the state into the template context under `form`.
    pub fn insert_into(&self, ctx: &mut tera::Context) {
        let form = match self {
            FormState::Idle => FormView::default(),
            FormState::Succeeded => FormView {
                state: "succeeded",
                ..Default::default()
            },
            FormState::Failed {
                message,
                name,
                email,
            } => FormView {
                state: "failed",
                error: Some(message.as_str()),
                name: name.as_str(),
                email: email.as_str(),
            },
        };
        ctx.insert("form", &form);
    }
}

#[derive(Serialize)]
struct FormView<'a> {
    state: &'static str,
    error: Option<&'a str>,
    name: &'a str,
    email: &'a str,
}

impl Default for FormView<'_> {
    fn default() -> Self {
        Self {
            state: "idle",
            error: None,
            name: "",
            email: "",
        }
    }
}

// ###################################
// ->   ERROR
// ###################################
#[derive(Debug, thiserror::Error)]
pub enum DataParsingError {
    #[error("email invalid")]
    EmailInvalid,
    #[error("email too long")]
    EmailTooLong,
}
