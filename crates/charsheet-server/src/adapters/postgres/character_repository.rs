//! PostgreSQL implementation of CharacterRepository
//!
//! Characters are stored document-style: fixed columns for identity and
//! ownership, JSONB for `basics` and every other top-level field.

use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use charsheet::{
    Character, CharacterBasics, CharacterFilter, CharacterId, CharacterRepository, DomainError,
    NewCharacter, UserId,
};

/// PostgreSQL implementation of CharacterRepository
pub struct PgCharacterRepository {
    pool: PgPool,
}

impl PgCharacterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct CharacterRow {
    id: Uuid,
    user_id: String,
    basics: Value,
    attributes: Value,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl TryFrom<CharacterRow> for Character {
    type Error = DomainError;

    fn try_from(row: CharacterRow) -> Result<Self, Self::Error> {
        let basics: CharacterBasics = serde_json::from_value(row.basics).map_err(|e| {
            DomainError::Repository(format!("Corrupt basics for character {}: {e}", row.id))
        })?;

        let attributes = match row.attributes {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        Ok(Self {
            id: CharacterId(row.id),
            basics,
            user: UserId(row.user_id),
            created_at: row.created_at,
            attributes,
        })
    }
}

/// Unique violations on insert are the store's duplicate signal
fn insert_error(e: sqlx::Error) -> DomainError {
    match e {
        sqlx::Error::Database(db) if db.is_unique_violation() => DomainError::Conflict(
            db.constraint()
                .unwrap_or("characters_user_name_key")
                .to_string(),
        ),
        e => DomainError::Repository(e.to_string()),
    }
}

#[async_trait]
impl CharacterRepository for PgCharacterRepository {
    async fn find_by_id(&self, id: CharacterId) -> Result<Option<Character>, DomainError> {
        let row = sqlx::query_as::<_, CharacterRow>("SELECT * FROM characters WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        row.map(Character::try_from).transpose()
    }

    async fn find_one(&self, filter: &CharacterFilter) -> Result<Option<Character>, DomainError> {
        let mut query = QueryBuilder::<Postgres>::new("SELECT * FROM characters WHERE TRUE");
        if let Some(user) = &filter.user {
            query.push(" AND user_id = ").push_bind(user.as_str());
        }
        if let Some(name) = &filter.name {
            query.push(" AND basics->>'name' = ").push_bind(name.as_str());
        }
        query.push(" ORDER BY created_at DESC, id DESC LIMIT 1");

        let row = query
            .build_query_as::<CharacterRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        row.map(Character::try_from).transpose()
    }

    async fn insert(&self, character: &NewCharacter) -> Result<Character, DomainError> {
        let basics = serde_json::to_value(&character.basics)
            .map_err(|e| DomainError::Repository(format!("Failed to encode basics: {e}")))?;

        let row = sqlx::query_as::<_, CharacterRow>(
            r#"
            INSERT INTO characters (user_id, basics, attributes)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(character.user.as_str())
        .bind(basics)
        .bind(Value::Object(character.attributes.clone()))
        .fetch_one(&self.pool)
        .await
        .map_err(insert_error)?;

        row.try_into()
    }
}
