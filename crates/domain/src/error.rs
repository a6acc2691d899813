//! Common error types used across the workspace.
//!
//! Every remote failure collapses into one of three kinds: the request never
//! produced a usable response ([`LibdashError::Transport`]), the server
//! answered `success: false` with an optional message
//! ([`LibdashError::Application`]), or the server rejected individual fields
//! ([`LibdashError::Validation`]).

use std::fmt;

/// Root error type shared by the application layer and its adapters.
#[derive(Debug, thiserror::Error)]
pub enum LibdashError {
    /// Input rejected locally or by the server on a per-field basis.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The server answered with `success: false`.
    #[error("application error")]
    Application(#[from] ApplicationError),

    /// Network, timeout, unexpected status or undecodable body.
    #[error("transport error")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl LibdashError {
    /// Human-readable message carried by the error, if the server or local
    /// validation provided one.
    ///
    /// Field errors yield the first message of the first invalid field.
    #[must_use]
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::Validation(err @ ValidationError::EmptyName) => Some(err.to_string()),
            Self::Validation(ValidationError::Fields(fields)) => {
                fields.first_message().map(str::to_string)
            }
            Self::Application(err) => err.message.clone(),
            Self::Transport(_) => None,
        }
    }
}

/// Input validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The category name is blank.
    #[error("Category name is required")]
    EmptyName,

    /// The server rejected one or more fields.
    #[error("invalid fields: {0}")]
    Fields(FieldErrors),
}

/// A `success: false` answer without field-level detail.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{}", message.as_deref().unwrap_or("request was not successful"))]
pub struct ApplicationError {
    pub message: Option<String>,
}

impl ApplicationError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

/// Messages reported for a single form field.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FieldError {
    field: String,
    messages: Vec<String>,
}

/// Per-field validation messages, in the order the server reported them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First message of the first field that has any.
    #[must_use]
    pub fn first_message(&self) -> Option<&str> {
        self.0
            .iter()
            .find_map(|field| field.messages.first())
            .map(String::as_str)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for entry in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            write!(f, "{}: {}", entry.field, entry.messages.join(", "))?;
        }
        Ok(())
    }
}

impl<K, V> FromIterator<(K, V)> for FieldErrors
where
    K: Into<String>,
    V: IntoIterator,
    V::Item: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(field, messages)| FieldError {
                    field: field.into(),
                    messages: messages.into_iter().map(Into::into).collect(),
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_first_message_of_first_invalid_field() {
        let fields: FieldErrors = [
            ("category_name", vec!["Name required", "Name too short"]),
            ("who_edited", vec!["Editor too long"]),
        ]
        .into_iter()
        .collect();

        assert_eq!(fields.first_message(), Some("Name required"));
    }

    #[test]
    fn should_skip_fields_without_messages() {
        let fields: FieldErrors = [
            ("category_name", Vec::<String>::new()),
            ("category_description", vec!["Too long".to_string()]),
        ]
        .into_iter()
        .collect();

        assert_eq!(fields.first_message(), Some("Too long"));
    }

    #[test]
    fn should_surface_field_message_as_user_message() {
        let fields: FieldErrors = [("category_name", vec!["Name required"])]
            .into_iter()
            .collect();
        let err = LibdashError::from(ValidationError::Fields(fields));

        assert_eq!(err.user_message().as_deref(), Some("Name required"));
    }

    #[test]
    fn should_surface_server_message_for_application_error() {
        let err = LibdashError::from(ApplicationError::new("Category already exists"));
        assert_eq!(
            err.user_message().as_deref(),
            Some("Category already exists")
        );
    }

    #[test]
    fn should_have_no_user_message_for_transport_error() {
        let err = LibdashError::Transport("connection refused".into());
        assert!(err.user_message().is_none());
    }

    #[test]
    fn should_display_fields_in_server_order() {
        let fields: FieldErrors = [("b", vec!["second"]), ("a", vec!["first"])]
            .into_iter()
            .collect();
        assert_eq!(fields.to_string(), "b: second; a: first");
    }

    #[test]
    fn should_display_default_application_message() {
        assert_eq!(
            ApplicationError::default().to_string(),
            "request was not successful"
        );
    }
}
