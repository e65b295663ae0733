use axum::http::StatusCode;
use thiserror::Error;
use uuid::Uuid;

/// 错误分类: 校验失败在本地直接返回, 协作方失败原样上抛且不重试
#[derive(Debug, Error)]
pub enum AppError {
    #[error("not signed in")]
    Unauthenticated,

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("persistence failure: {0}")]
    Persistence(#[source] sqlx::Error),

    #[error("history fetch failure: {0}")]
    Fetch(#[source] sqlx::Error),

    #[error("invoice {0} not found")]
    MissingRecord(Uuid),

    #[error("a submit is already in flight")]
    DraftBusy,

    #[error("identity service error: {0}")]
    Identity(String),

    #[error("print failed: {0}")]
    Print(#[from] std::io::Error),

    #[error("export failed: {0}")]
    Export(#[from] csv::Error),
}

impl AppError {
    /// 对应的 HTTP 状态码
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::MissingRecord(_) => StatusCode::NOT_FOUND,
            AppError::DraftBusy => StatusCode::CONFLICT,
            AppError::Identity(_) => StatusCode::BAD_GATEWAY,
            AppError::Persistence(_) | AppError::Fetch(_) | AppError::Print(_) | AppError::Export(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
