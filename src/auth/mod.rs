pub mod client;

pub use client::HttpIdentity;

use crate::error::AppError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 已登录用户
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
}

/// 当前会话
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user: AuthUser,
}

/// 外部身份服务契约: 发链接 + 查会话 + 查用户, 别的都不归本系统管
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// 发送一次性登录链接; 不直接返回会话
    async fn send_link(&self, email: &str) -> Result<(), AppError>;

    /// 按访问令牌取当前会话
    async fn session(&self, token: &str) -> Result<Option<Session>, AppError>;

    /// 按访问令牌取当前用户
    async fn current_user(&self, token: &str) -> Result<Option<AuthUser>, AppError>;
}
