//! Unit tests for Auth crate

/// In-memory repository shared by the test modules below
#[cfg(test)]
pub(crate) mod memory {
    use std::collections::{HashMap, HashSet};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use tokio::sync::RwLock;

    use crate::domain::entity::{credential::Credential, revoked_token::RevokedToken, user::User};
    use crate::domain::repository::{
        BlacklistRepository, CredentialRepository, IdentityResolver, UserRepository,
    };
    use crate::domain::value_object::{UserId, user_name::UserName};
    use crate::error::{AuthError, AuthResult};

    #[derive(Default)]
    struct State {
        users: HashMap<UserId, User>,
        credentials: HashMap<UserId, Credential>,
        revoked: HashSet<String>,
    }

    #[derive(Clone, Default)]
    pub struct InMemoryAuthStore {
        state: Arc<RwLock<State>>,
        broken_blacklist: Arc<AtomicBool>,
    }

    impl InMemoryAuthStore {
        /// Make every blacklist lookup fail from now on
        pub fn break_blacklist(&self) {
            self.broken_blacklist.store(true, Ordering::SeqCst);
        }

        pub async fn revoked_count(&self) -> usize {
            self.state.read().await.revoked.len()
        }
    }

    impl UserRepository for InMemoryAuthStore {
        async fn create_account(&self, user: &User, credential: &Credential) -> AuthResult<()> {
            let mut state = self.state.write().await;
            if state
                .users
                .values()
                .any(|u| u.user_name == user.user_name)
            {
                return Err(AuthError::UserNameTaken);
            }
            state.users.insert(user.user_id, user.clone());
            state.credentials.insert(credential.user_id, credential.clone());
            Ok(())
        }

        async fn find_user_by_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
            let state = self.state.read().await;
            Ok(state
                .users
                .values()
                .find(|u| &u.user_name == user_name)
                .cloned())
        }

        async fn user_name_exists(&self, user_name: &UserName) -> AuthResult<bool> {
            Ok(self.find_user_by_name(user_name).await?.is_some())
        }
    }

    impl CredentialRepository for InMemoryAuthStore {
        async fn find_credential(&self, user_id: &UserId) -> AuthResult<Option<Credential>> {
            Ok(self.state.read().await.credentials.get(user_id).cloned())
        }
    }

    impl BlacklistRepository for InMemoryAuthStore {
        async fn revoke_token(&self, revoked: &RevokedToken) -> AuthResult<()> {
            self.state
                .write()
                .await
                .revoked
                .insert(revoked.token_digest.clone());
            Ok(())
        }

        async fn is_token_revoked(&self, token_digest: &str) -> AuthResult<bool> {
            if self.broken_blacklist.load(Ordering::SeqCst) {
                return Err(AuthError::Database(sqlx::Error::PoolTimedOut));
            }
            Ok(self.state.read().await.revoked.contains(token_digest))
        }
    }

    impl IdentityResolver for InMemoryAuthStore {
        type Identity = User;

        async fn resolve_identity(&self, user_id: &UserId) -> AuthResult<Option<User>> {
            Ok(self.state.read().await.users.get(user_id).cloned())
        }
    }
}

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use super::memory::InMemoryAuthStore;
    use crate::application::*;
    use crate::domain::value_object::access_token::AccessToken;
    use crate::error::AuthError;

    fn register_input(user_name: &str, password: &str) -> RegisterInput {
        RegisterInput {
            user_name: user_name.to_string(),
            password: password.to_string(),
            first_name: "Alice".to_string(),
            last_name: "Liddell".to_string(),
            native_languages: "English".to_string(),
            learning_languages: "Spanish, French".to_string(),
        }
    }

    fn setup() -> (Arc<InMemoryAuthStore>, Arc<AuthConfig>) {
        (
            Arc::new(InMemoryAuthStore::default()),
            Arc::new(AuthConfig::development()),
        )
    }

    #[tokio::test]
    async fn test_register_normalizes_profile() {
        let (store, config) = setup();
        let user = RegisterUseCase::new(store, config)
            .execute(register_input(" alice ", "pw1"))
            .await
            .unwrap();

        assert_eq!(user.user_name.as_str(), "alice");
        assert_eq!(user.native_languages.as_str(), "english");
        assert_eq!(user.learning_languages.as_str(), "spanish, french");
    }

    #[tokio::test]
    async fn test_register_duplicate_user_name() {
        let (store, config) = setup();
        let use_case = RegisterUseCase::new(store, config);

        use_case.execute(register_input("alice", "pw1")).await.unwrap();
        let result = use_case.execute(register_input("alice", "pw2")).await;

        assert!(matches!(result, Err(AuthError::UserNameTaken)));
    }

    #[tokio::test]
    async fn test_register_validation() {
        let (store, config) = setup();
        let use_case = RegisterUseCase::new(store, config);

        let mut input = register_input("alice", "pw1");
        input.first_name = "  ".to_string();
        assert!(matches!(
            use_case.execute(input).await,
            Err(AuthError::Validation(_))
        ));

        assert!(matches!(
            use_case.execute(register_input("", "pw1")).await,
            Err(AuthError::Validation(_))
        ));
        assert!(matches!(
            use_case.execute(register_input("alice", "")).await,
            Err(AuthError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_login_issues_verifiable_token() {
        let (store, config) = setup();
        let user = RegisterUseCase::new(store.clone(), config.clone())
            .execute(register_input("alice", "pw1"))
            .await
            .unwrap();

        let output = LoginUseCase::new(store, config.clone())
            .execute(LoginInput {
                user_name: "alice".to_string(),
                password: "pw1".to_string(),
            })
            .await
            .unwrap();

        let claims = AccessToken::verify(&output.access_token, &config.token_secret).unwrap();
        assert_eq!(claims.user_id(), user.user_id);
    }

    #[tokio::test]
    async fn test_wrong_password_never_yields_token() {
        let (store, config) = setup();
        RegisterUseCase::new(store.clone(), config.clone())
            .execute(register_input("alice", "pw1"))
            .await
            .unwrap();

        let login = LoginUseCase::new(store, config);
        for (user_name, password) in [("alice", "pw2"), ("alice", ""), ("bob", "pw1"), ("", "")] {
            let result = login
                .execute(LoginInput {
                    user_name: user_name.to_string(),
                    password: password.to_string(),
                })
                .await;
            assert!(
                matches!(result, Err(AuthError::InvalidCredentials)),
                "{user_name}/{password} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let (store, _) = setup();
        let logout = LogoutUseCase::new(store.clone());

        logout.execute("some.token.value").await.unwrap();
        logout.execute("some.token.value").await.unwrap();

        assert_eq!(store.revoked_count().await, 1);
    }

    #[tokio::test]
    async fn test_logout_empty_token() {
        let (store, _) = setup();
        let result = LogoutUseCase::new(store).execute("   ").await;
        assert!(matches!(result, Err(AuthError::Validation(_))));
    }

    #[tokio::test]
    async fn test_authenticate_state_machine() {
        let (store, config) = setup();
        let user = RegisterUseCase::new(store.clone(), config.clone())
            .execute(register_input("alice", "pw1"))
            .await
            .unwrap();
        let token = AccessToken::issue(user.user_id).sign(&config.token_secret);

        let gate = AuthenticateUseCase::new(store.clone(), store.clone(), config.clone());

        assert!(matches!(
            gate.execute(None).await,
            Err(GateRejection::MissingToken)
        ));
        assert!(matches!(
            gate.execute(Some("garbage")).await,
            Err(GateRejection::InvalidToken(_))
        ));

        let authenticated = gate.execute(Some(&token)).await.unwrap();
        assert_eq!(authenticated.user_id, user.user_id);
        assert_eq!(authenticated.identity.user_name.as_str(), "alice");

        LogoutUseCase::new(store.clone()).execute(&token).await.unwrap();
        assert!(matches!(
            gate.execute(Some(&token)).await,
            Err(GateRejection::Revoked)
        ));
    }

    #[tokio::test]
    async fn test_logout_revokes_only_its_own_session() {
        let (store, config) = setup();
        RegisterUseCase::new(store.clone(), config.clone())
            .execute(register_input("alice", "pw1"))
            .await
            .unwrap();

        let login = LoginUseCase::new(store.clone(), config.clone());
        let mut tokens = Vec::new();
        for _ in 0..2 {
            let output = login
                .execute(LoginInput {
                    user_name: "alice".to_string(),
                    password: "pw1".to_string(),
                })
                .await
                .unwrap();
            tokens.push(output.access_token);
        }
        assert_ne!(tokens[0], tokens[1]);

        LogoutUseCase::new(store.clone()).execute(&tokens[0]).await.unwrap();

        let gate = AuthenticateUseCase::new(store.clone(), store, config);
        assert!(matches!(
            gate.execute(Some(&tokens[0])).await,
            Err(GateRejection::Revoked)
        ));
        assert!(gate.execute(Some(&tokens[1])).await.is_ok());
    }

    #[tokio::test]
    async fn test_authenticate_unknown_identity() {
        let (store, config) = setup();
        let token = AccessToken::issue(kernel::id::UserId::new()).sign(&config.token_secret);

        let gate = AuthenticateUseCase::new(store.clone(), store, config);
        assert!(matches!(
            gate.execute(Some(&token)).await,
            Err(GateRejection::UnknownIdentity(_))
        ));
    }

    #[tokio::test]
    async fn test_authenticate_store_failure() {
        let (store, config) = setup();
        store.break_blacklist();
        let token = AccessToken::issue(kernel::id::UserId::new()).sign(&config.token_secret);

        let gate = AuthenticateUseCase::new(store.clone(), store, config);
        assert!(matches!(
            gate.execute(Some(&token)).await,
            Err(GateRejection::Store(_))
        ));
    }
}

#[cfg(test)]
mod router_tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::routing::get;
    use axum::{Extension, Json, Router, middleware};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::memory::InMemoryAuthStore;
    use crate::application::config::AuthConfig;
    use crate::domain::entity::user::User;
    use crate::domain::value_object::access_token::AccessToken;
    use crate::presentation::dto::UserResponse;
    use crate::presentation::middleware::{AuthGate, require_auth};
    use crate::presentation::router::auth_router_generic;

    async fn whoami(Extension(user): Extension<User>) -> Json<UserResponse> {
        Json(UserResponse::from(&user))
    }

    fn app(store: InMemoryAuthStore, config: Arc<AuthConfig>) -> Router {
        let store_arc = Arc::new(store.clone());
        let gate = AuthGate::new(store_arc.clone(), store_arc, config);

        let protected = Router::new()
            .route("/whoami", get(whoami))
            .route_layer(middleware::from_fn_with_state(
                gate.clone(),
                require_auth::<InMemoryAuthStore, InMemoryAuthStore>,
            ));

        auth_router_generic(store, gate).merge(protected)
    }

    fn post_json(uri: &str, body: Value, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn get_with(uri: &str, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn alice(password: &str) -> Value {
        json!({
            "username": "alice",
            "password": password,
            "firstName": "Alice",
            "lastName": "Liddell",
            "nativeLanguages": "English",
            "learningLanguages": "Spanish"
        })
    }

    #[tokio::test]
    async fn test_register_login_logout_flow() {
        let app = app(InMemoryAuthStore::default(), Arc::new(AuthConfig::development()));

        let (status, body) = send(&app, post_json("/register", alice("pw1"), None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["username"], "alice");
        assert_eq!(body["learningLanguages"], "spanish");
        assert!(body.get("password").is_none());
        assert!(body.get("passwordHash").is_none());

        let (status, body) = send(&app, post_json("/register", alice("pw2"), None)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "409");

        let (status, body) = send(
            &app,
            post_json("/login", json!({"username": "alice", "password": "pw1"}), None),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let token = body["accessToken"].as_str().unwrap().to_string();

        let (status, body) = send(&app, get_with("/whoami", Some(&token))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["username"], "alice");

        let (status, body) = send(
            &app,
            post_json("/logout", json!({ "token": token }), Some(&token)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Successfully logged out");

        let (status, body) = send(&app, get_with("/whoami", Some(&token))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["message"], "Permission denied!");
    }

    #[tokio::test]
    async fn test_login_failure_message() {
        let app = app(InMemoryAuthStore::default(), Arc::new(AuthConfig::development()));
        send(&app, post_json("/register", alice("pw1"), None)).await;

        let (status, body) = send(
            &app,
            post_json("/login", json!({"username": "alice", "password": "pw2"}), None),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Invalid username and/or password");
        assert!(body.get("accessToken").is_none());
    }

    #[tokio::test]
    async fn test_gate_rejections_are_uniform() {
        let store = InMemoryAuthStore::default();
        let config = Arc::new(AuthConfig::development());
        let app = app(store.clone(), config.clone());

        let forged = AccessToken::issue(kernel::id::UserId::new()).sign(&[1u8; 32]);
        let unknown = AccessToken::issue(kernel::id::UserId::new()).sign(&config.token_secret);

        let mut bodies = Vec::new();
        for token in [None, Some("not-a-token"), Some(forged.as_str()), Some(unknown.as_str())] {
            let (status, body) = send(&app, get_with("/whoami", token)).await;
            assert_eq!(status, StatusCode::FORBIDDEN);
            bodies.push(body);
        }

        store.break_blacklist();
        let (status, body) = send(&app, get_with("/whoami", Some(&unknown))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        bodies.push(body);

        assert!(bodies.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[tokio::test]
    async fn test_blacklisted_token_with_valid_signature() {
        let store = InMemoryAuthStore::default();
        let config = Arc::new(AuthConfig::development());
        let app = app(store, config);

        send(&app, post_json("/register", alice("pw1"), None)).await;
        let (_, body) = send(
            &app,
            post_json("/login", json!({"username": "alice", "password": "pw1"}), None),
        )
        .await;
        let first = body["accessToken"].as_str().unwrap().to_string();

        let (status, _) = send(
            &app,
            post_json("/logout", json!({ "token": first }), Some(&first)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        // Signature still verifies, the blacklist wins
        let (status, _) = send(
            &app,
            post_json("/logout", json!({ "token": first }), Some(&first)),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_logout_empty_token_is_bad_request() {
        let app = app(InMemoryAuthStore::default(), Arc::new(AuthConfig::development()));
        send(&app, post_json("/register", alice("pw1"), None)).await;
        let (_, body) = send(
            &app,
            post_json("/login", json!({"username": "alice", "password": "pw1"}), None),
        )
        .await;
        let token = body["accessToken"].as_str().unwrap().to_string();

        let (status, _) = send(&app, post_json("/logout", json!({ "token": "" }), Some(&token))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
