//! Response Envelope
//!
//! Every character endpoint answers with the same
//! `{status, data, message, errors}` shape. Business outcomes, including
//! "not found", are expressed here rather than through transport status
//! codes, so clients parse one structure for every result.

use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

use crate::domain::entities::{Character, NewCharacter};
use crate::domain::value_objects::{CharacterFilter, UserId};

/// Terminal outcome of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnvelopeStatus {
    /// The request ran to completion (found, not found, or created)
    Processed,
    /// The input was rejected before any store write
    ValidationFailed,
}

/// Machine-readable error kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    NotFound,
    Duplicate,
    UnknownUser,
    InvalidIdentifier,
    InvalidField,
    EmptyFilter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDescriptor {
    pub code: ErrorCode,
    pub message: String,
}

impl ErrorDescriptor {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Uniform response wrapper. `data` is rendered as `{}` when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = "T: Serialize"))]
pub struct Envelope<T> {
    pub status: EnvelopeStatus,
    #[serde(serialize_with = "empty_object_when_absent")]
    pub data: Option<T>,
    pub message: String,
    pub errors: Vec<ErrorDescriptor>,
}

fn empty_object_when_absent<S, T>(data: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    match data {
        Some(value) => value.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

impl<T> Envelope<T> {
    pub fn processed(data: T, message: impl Into<String>) -> Self {
        Self {
            status: EnvelopeStatus::Processed,
            data: Some(data),
            message: message.into(),
            errors: Vec::new(),
        }
    }

    pub fn failed(
        status: EnvelopeStatus,
        message: impl Into<String>,
        errors: Vec<ErrorDescriptor>,
    ) -> Self {
        Self {
            status,
            data: None,
            message: message.into(),
            errors,
        }
    }
}

/// What a read endpoint tried to find
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Id(String),
    Query(CharacterFilter),
}

impl std::fmt::Display for Lookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lookup::Id(id) => f.write_str(id),
            Lookup::Query(filter) => write!(f, "{filter}"),
        }
    }
}

pub type CharacterEnvelope = Envelope<Character>;

impl Envelope<Character> {
    /// Shared outcome mapping for every read endpoint
    pub fn lookup(target: &Lookup, outcome: Option<Character>) -> Self {
        match outcome {
            Some(character) => {
                let message = format!("Get character success: {}", character.id);
                Self::processed(character, message)
            }
            None => Self::failed(
                EnvelopeStatus::Processed,
                format!("Get character failed: {target}"),
                vec![ErrorDescriptor::new(
                    ErrorCode::NotFound,
                    format!("No character matches {target}"),
                )],
            ),
        }
    }

    /// Identifier that cannot possibly name a character
    pub fn invalid_identifier(raw: &str) -> Self {
        Self::failed(
            EnvelopeStatus::Processed,
            format!("Get character failed: {raw}"),
            vec![ErrorDescriptor::new(
                ErrorCode::InvalidIdentifier,
                format!("'{raw}' is not a valid character id"),
            )],
        )
    }

    pub fn empty_filter() -> Self {
        Self::failed(
            EnvelopeStatus::ValidationFailed,
            "Get character failed: empty filter",
            vec![ErrorDescriptor::new(
                ErrorCode::EmptyFilter,
                "At least one of user or name is required",
            )],
        )
    }

    pub fn created(character: Character) -> Self {
        let message = format!("Create character success: {}", character.id);
        Self::processed(character, message)
    }

    pub fn duplicate(new: &NewCharacter) -> Self {
        Self::failed(
            EnvelopeStatus::ValidationFailed,
            "Create character failed: duplicate",
            vec![ErrorDescriptor::new(
                ErrorCode::Duplicate,
                format!(
                    "User {} already has a character named '{}'",
                    new.user, new.basics.name
                ),
            )],
        )
    }

    pub fn unknown_user(user: &UserId) -> Self {
        Self::failed(
            EnvelopeStatus::ValidationFailed,
            format!("Create character failed: unknown user {user}"),
            vec![ErrorDescriptor::new(
                ErrorCode::UnknownUser,
                format!("User {user} does not exist"),
            )],
        )
    }

    pub fn invalid_fields(errors: Vec<ErrorDescriptor>) -> Self {
        Self::failed(
            EnvelopeStatus::ValidationFailed,
            "Create character failed: invalid fields",
            errors,
        )
    }
}
