use std::sync::Arc;

use auth_service::domain::auth::service::AuthService;
use auth_service::domain::identity::service::IdentityService;
use auth_service::inbound::http::router::create_router;
use auth_service::outbound::repositories::InMemoryIdentityRepository;
use chrono::Duration;
use credentials::PasswordHasher;
use credentials::TokenCodec;
use serde_json::json;

pub const TEST_SIGNING_KEY: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server on a random port,
/// backed by a fresh in-memory store.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application with the default 30 minute token lifetime.
    pub async fn spawn() -> Self {
        Self::spawn_with_token_ttl(Duration::minutes(30)).await
    }

    /// Spawn the application with an explicit token lifetime.
    ///
    /// A zero TTL yields tokens that are expired the moment they are
    /// minted, which is how the expiry path gets exercised end to end.
    pub async fn spawn_with_token_ttl(token_ttl: Duration) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let repository = Arc::new(InMemoryIdentityRepository::new());
        let password_hasher = Arc::new(PasswordHasher::new());
        let token_codec = Arc::new(TokenCodec::new(TEST_SIGNING_KEY));

        let identity_service = Arc::new(IdentityService::new(
            Arc::clone(&repository),
            Arc::clone(&password_hasher),
        ));
        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&repository),
            Arc::clone(&password_hasher),
            Arc::clone(&token_codec),
            token_ttl,
        ));

        let application = create_router(identity_service, auth_service);

        tokio::spawn(async move {
            axum::serve(listener, application)
                .await
                .expect("Server failed");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn patch(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.patch(format!("{}{}", self.address, path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Register an identity through the public endpoint.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> serde_json::Value {
        let response = self
            .post("/api/identities")
            .json(&json!({
                "username": username,
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        response.json().await.expect("Failed to parse response")
    }

    /// Log in and return the issued access token.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .post("/api/auth/login")
            .json(&json!({
                "username": username,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["access_token"]
            .as_str()
            .expect("Missing access token")
            .to_string()
    }
}
