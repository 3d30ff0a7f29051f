//! In-memory port implementations for tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use serde_json::Value;
use tower::ServiceExt;

use charsheet::{
    Character, CharacterFilter, CharacterId, CharacterRepository, DomainError, DuplicateChecker,
    IdentityVerifier, NewCharacter, UserDirectory, UserId,
};

use crate::adapters::HmacTokenService;
use crate::application::{AuthService, CharacterService};
use crate::config::{MalformedIdPolicy, ServerConfig};
use crate::AppState;

pub const TEST_TOKEN: &str = "test-token";
pub const TEST_EMAIL: &str = "aria@example.com";
pub const TEST_PASSWORD: &str = "correct horse battery staple";
const TEST_SECRET: &str = "test-secret-0123456789";

/// Vec-backed character store; later inserts win `find_one`. Inserts honour
/// the same owner + normalized name uniqueness the Postgres index enforces.
#[derive(Default)]
pub struct MemoryCharacterStore {
    characters: Mutex<Vec<Character>>,
    reads: AtomicUsize,
    failure: Mutex<Option<String>>,
}

impl MemoryCharacterStore {
    pub fn len(&self) -> usize {
        self.characters.lock().unwrap().len()
    }

    pub fn read_calls(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Make every subsequent call fail like an unreachable store
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    fn check(&self) -> Result<(), DomainError> {
        match self.failure.lock().unwrap().as_ref() {
            Some(message) => Err(DomainError::Repository(message.clone())),
            None => Ok(()),
        }
    }

    fn snapshot(&self) -> Vec<Character> {
        self.characters.lock().unwrap().clone()
    }
}

fn same_owner_and_name(existing: &Character, new: &NewCharacter) -> bool {
    existing.user == new.user
        && existing.basics.name.trim().to_lowercase() == new.basics.name.trim().to_lowercase()
}

fn matches(character: &Character, filter: &CharacterFilter) -> bool {
    filter.user.as_ref().map_or(true, |u| &character.user == u)
        && filter
            .name
            .as_ref()
            .map_or(true, |n| &character.basics.name == n)
}

#[async_trait]
impl CharacterRepository for MemoryCharacterStore {
    async fn find_by_id(&self, id: CharacterId) -> Result<Option<Character>, DomainError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.snapshot().into_iter().find(|c| c.id == id))
    }

    async fn find_one(&self, filter: &CharacterFilter) -> Result<Option<Character>, DomainError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self
            .snapshot()
            .into_iter()
            .rev()
            .find(|c| matches(c, filter)))
    }

    async fn insert(&self, character: &NewCharacter) -> Result<Character, DomainError> {
        self.check()?;
        let mut characters = self.characters.lock().unwrap();
        if characters.iter().any(|c| same_owner_and_name(c, character)) {
            return Err(DomainError::Conflict("characters_user_name_key".to_string()));
        }
        let stored = Character::from_new(character.clone(), CharacterId::new(), Utc::now());
        characters.push(stored.clone());
        Ok(stored)
    }
}

/// Fixed set of users, optionally with credentials
#[derive(Default)]
pub struct StubUserDirectory {
    users: Vec<UserId>,
    credentials: HashMap<(String, String), UserId>,
    calls: AtomicUsize,
}

impl StubUserDirectory {
    pub fn with_users(ids: &[&str]) -> Self {
        Self {
            users: ids.iter().map(|id| UserId::from(*id)).collect(),
            ..Self::default()
        }
    }

    pub fn with_credentials(mut self, email: &str, password: &str, user: &str) -> Self {
        self.credentials.insert(
            (email.to_string(), password.to_string()),
            UserId::from(user),
        );
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserDirectory for StubUserDirectory {
    async fn exists(&self, user: &UserId) -> Result<bool, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.users.contains(user))
    }

    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserId>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .credentials
            .get(&(email.to_string(), password.to_string()))
            .cloned())
    }
}

/// Same owner + same name (trimmed, case-insensitive) is a duplicate
pub struct StubDuplicateChecker {
    store: Arc<MemoryCharacterStore>,
    calls: AtomicUsize,
}

impl StubDuplicateChecker {
    pub fn backed_by(store: Arc<MemoryCharacterStore>) -> Self {
        Self {
            store,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DuplicateChecker for StubDuplicateChecker {
    async fn is_duplicate(&self, character: &NewCharacter) -> Result<bool, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .store
            .snapshot()
            .iter()
            .any(|c| same_owner_and_name(c, character)))
    }
}

/// Accepts exactly one token
pub struct StaticVerifier {
    token: String,
    calls: AtomicUsize,
}

impl StaticVerifier {
    pub fn accepting(token: &str) -> Self {
        Self {
            token: token.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityVerifier for StaticVerifier {
    async fn validate(&self, token: &str) -> Result<bool, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(token == self.token)
    }
}

/// The full router wired to in-memory ports
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryCharacterStore>,
    pub users: Arc<StubUserDirectory>,
    pub duplicates: Arc<StubDuplicateChecker>,
    pub verifier: Arc<StaticVerifier>,
    pub tokens: Arc<HmacTokenService>,
}

impl TestApp {
    /// Protected routes accept exactly [`TEST_TOKEN`]
    pub fn new() -> Self {
        Self::build(MalformedIdPolicy::NotFound, false)
    }

    pub fn with_malformed_id_policy(policy: MalformedIdPolicy) -> Self {
        Self::build(policy, false)
    }

    /// Protected routes verify tokens issued by `/api/authenticate`
    pub fn with_issued_tokens() -> Self {
        Self::build(MalformedIdPolicy::NotFound, true)
    }

    fn build(malformed_id: MalformedIdPolicy, issued_tokens: bool) -> Self {
        let store = Arc::new(MemoryCharacterStore::default());
        let users = Arc::new(
            StubUserDirectory::with_users(&["U1", "U2"]).with_credentials(
                TEST_EMAIL,
                TEST_PASSWORD,
                "U1",
            ),
        );
        let duplicates = Arc::new(StubDuplicateChecker::backed_by(store.clone()));
        let verifier = Arc::new(StaticVerifier::accepting(TEST_TOKEN));
        let tokens = Arc::new(HmacTokenService::new(
            TEST_SECRET,
            chrono::Duration::seconds(60),
        ));

        let identity: Arc<dyn IdentityVerifier> = if issued_tokens {
            tokens.clone()
        } else {
            verifier.clone()
        };

        let state = AppState {
            character_service: Arc::new(CharacterService::new(
                store.clone(),
                users.clone(),
                duplicates.clone(),
            )),
            auth_service: Arc::new(AuthService::new(users.clone(), tokens.clone())),
            identity,
            config: Arc::new(ServerConfig {
                token_secret: TEST_SECRET.to_string(),
                token_ttl: chrono::Duration::seconds(60),
                malformed_id,
            }),
        };

        Self {
            router: crate::build_router(state),
            store,
            users,
            duplicates,
            verifier,
            tokens,
        }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::GET, uri, token, Body::empty()).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, token, Body::from(body.to_string()))
            .await
    }

    /// Create a character through the API, returning its `_id`
    pub async fn create(&self, name: &str, user: &str) -> String {
        let (status, body) = self
            .post(
                "/api/characters",
                Some(TEST_TOKEN),
                serde_json::json!({ "data": { "basics": { "name": name }, "user": user } }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        body["data"]["_id"].as_str().unwrap().to_string()
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Body,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = self
            .router
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, body)
    }
}
