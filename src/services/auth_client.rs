use reqwest::Client;
use crate::config::constants::timeout_duration;
use crate::errors::DashResult;
use crate::helpers::response_helper::ResponseHelper;
use crate::structs::auth_token::AuthToken;
use crate::structs::config::api_config::ApiConfig;
use crate::structs::register_request::RegisterRequest;
use crate::structs::user::User;

/// reqwest client for `/register`, `/token` and `/users`.
pub struct AuthClient {
    client: Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(config: &ApiConfig) -> DashResult<Self> {
        let client = Client::builder()
            .timeout(timeout_duration(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.normalized_base_url(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn register(&self, request: &RegisterRequest) -> DashResult<User> {
        request.validate()?;

        let response = self.client
            .post(format!("{}/register", self.base_url))
            .json(request)
            .send()
            .await?;

        ResponseHelper::json(response, "registering user", None).await
    }

    /// OAuth2 password flow: the email travels as the `username` form field.
    pub async fn login(&self, email: &str, password: &str) -> DashResult<AuthToken> {
        let form = [("username", email), ("password", password)];

        let response = self.client
            .post(format!("{}/token", self.base_url))
            .form(&form)
            .send()
            .await?;

        ResponseHelper::json(response, "signing in", None).await
    }

    pub async fn me(&self, access_token: &str) -> DashResult<User> {
        let response = self.client
            .get(format!("{}/users/me", self.base_url))
            .bearer_auth(access_token)
            .send()
            .await?;

        ResponseHelper::json(response, "loading profile", None).await
    }

    pub async fn list_users(&self, access_token: &str) -> DashResult<Vec<User>> {
        let response = self.client
            .get(format!("{}/users/", self.base_url))
            .bearer_auth(access_token)
            .send()
            .await?;

        ResponseHelper::json(response, "listing users", None).await
    }
}
