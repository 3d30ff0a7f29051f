//! Character request DTOs

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use charsheet::{CharacterFilter, NewCharacter};

/// Create Character request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCharacterRequest {
    /// Character document: `basics.name` and `user` are required,
    /// any other fields are stored as given
    #[schema(value_type = Object, example = json!({"basics": {"name": "Aria"}, "user": "U1"}))]
    pub data: NewCharacter,
}

/// Query parameters for filtered lookup
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct CharacterQuery {
    /// Owning user id
    pub user: Option<String>,
    /// Exact `basics.name`
    pub name: Option<String>,
}

impl From<CharacterQuery> for CharacterFilter {
    fn from(query: CharacterQuery) -> Self {
        CharacterFilter::new(query.user, query.name)
    }
}
