use super::{AuthUser, IdentityService, Session};
use crate::config::AuthConfig;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

/// 外部身份服务的 HTTP 客户端 (GoTrue 风格接口)
pub struct HttpIdentity {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HttpIdentity {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl IdentityService for HttpIdentity {
    async fn send_link(&self, email: &str) -> Result<(), AppError> {
        let url = format!("{}/auth/v1/otp", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("apikey", &self.api_key)
            .json(&serde_json::json!({ "email": email, "create_user": true }))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send POST request to {}: {}", url, e);
                AppError::Identity(e.to_string())
            })?;

        if !response.status().is_success() {
            return Err(AppError::Identity(format!(
                "login link rejected: {}",
                response.status()
            )));
        }
        Ok(())
    }

    async fn session(&self, token: &str) -> Result<Option<Session>, AppError> {
        Ok(self.current_user(token).await?.map(|user| Session {
            access_token: token.to_string(),
            user,
        }))
    }

    async fn current_user(&self, token: &str) -> Result<Option<AuthUser>, AppError> {
        let url = format!("{}/auth/v1/user", self.base_url);
        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send GET request to {}: {}", url, e);
                AppError::Identity(e.to_string())
            })?;

        // 令牌无效即视为未登录, 不算协作方故障
        if response.status() == StatusCode::UNAUTHORIZED || response.status() == StatusCode::FORBIDDEN {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(AppError::Identity(format!(
                "user lookup failed: {}",
                response.status()
            )));
        }

        let user = response
            .json::<AuthUser>()
            .await
            .map_err(|e| AppError::Identity(e.to_string()))?;
        Ok(Some(user))
    }
}
