use crate::auth::{IdentityService, Session};
use crate::error::AppError;
use crate::models::{InvoiceRecord, ItemField, RenderedInvoice, SenderProfile};
use crate::service::{DraftView, InvoiceComposer, PrintService};
use axum::{
    extract::{Json, Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// 请求体: 发送登录链接
#[derive(Debug, Deserialize)]
pub struct SendLinkRequest {
    pub email: String,
}

/// 请求体: 更新单个行项目
#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub field: ItemField,
    pub value: String,
}

/// 请求体: 更新草稿头部 (客户名 / 开票方)
#[derive(Debug, Deserialize)]
pub struct UpdateDraftRequest {
    pub client_name: Option<String>,
    pub sender: Option<SenderProfile>,
}

/// 通用响应体
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

/// 草稿响应体
#[derive(Debug, Serialize)]
pub struct DraftResponse {
    pub success: bool,
    pub draft: DraftView,
}

/// 历史列表响应体
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub success: bool,
    pub invoices: Vec<InvoiceRecord>,
}

/// 渲染文档响应体
#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub success: bool,
    pub document: RenderedInvoice,
}

/// 会话响应体
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub success: bool,
    pub session: Option<Session>,
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 发送一次性登录链接
pub async fn send_link(
    State(identity): State<Arc<dyn IdentityService>>,
    Json(req): Json<SendLinkRequest>,
) -> Response {
    if req.email.trim().is_empty() {
        return error_response(AppError::Validation(
            "Please enter an email address".to_string(),
        ));
    }

    match identity.send_link(req.email.trim()).await {
        Ok(()) => ok_message("Check your email for the login link!"),
        Err(e) => error_response(e),
    }
}

/// 当前会话; UI 外壳据此决定是否跳转登录页, 核心不做跳转
pub async fn get_session(
    State(identity): State<Arc<dyn IdentityService>>,
    headers: HeaderMap,
) -> Response {
    let token = match bearer_token(&headers) {
        Ok(token) => token,
        Err(e) => return error_response(e),
    };

    match identity.session(&token).await {
        Ok(session) => (
            StatusCode::OK,
            Json(SessionResponse {
                success: true,
                session,
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// 当前草稿 (首次访问时创建)
pub async fn get_draft(
    State(composer): State<Arc<InvoiceComposer>>,
    headers: HeaderMap,
) -> Response {
    let token = match bearer_token(&headers) {
        Ok(token) => token,
        Err(e) => return error_response(e),
    };

    draft_response(&composer, &token)
}

/// 更新草稿头部
pub async fn update_draft(
    State(composer): State<Arc<InvoiceComposer>>,
    headers: HeaderMap,
    Json(req): Json<UpdateDraftRequest>,
) -> Response {
    let token = match bearer_token(&headers) {
        Ok(token) => token,
        Err(e) => return error_response(e),
    };

    let result: Result<(), AppError> = (|| {
        if let Some(client_name) = req.client_name {
            composer.set_client_name(&token, client_name)?;
        }
        if let Some(sender) = req.sender {
            composer.set_sender(&token, sender)?;
        }
        Ok(())
    })();

    match result {
        Ok(()) => draft_response(&composer, &token),
        Err(e) => error_response(e),
    }
}

/// 追加一个空白行项目
pub async fn add_item(
    State(composer): State<Arc<InvoiceComposer>>,
    headers: HeaderMap,
) -> Response {
    let token = match bearer_token(&headers) {
        Ok(token) => token,
        Err(e) => return error_response(e),
    };

    match composer.add_item(&token) {
        Ok(()) => draft_response(&composer, &token),
        Err(e) => error_response(e),
    }
}

/// 删除指定行项目 (最后一行不可删)
pub async fn remove_item(
    State(composer): State<Arc<InvoiceComposer>>,
    headers: HeaderMap,
    Path(index): Path<usize>,
) -> Response {
    let token = match bearer_token(&headers) {
        Ok(token) => token,
        Err(e) => return error_response(e),
    };

    match composer.remove_item(&token, index) {
        Ok(()) => draft_response(&composer, &token),
        Err(e) => error_response(e),
    }
}

/// 更新指定行项目
pub async fn update_item(
    State(composer): State<Arc<InvoiceComposer>>,
    headers: HeaderMap,
    Path(index): Path<usize>,
    Json(req): Json<UpdateItemRequest>,
) -> Response {
    let token = match bearer_token(&headers) {
        Ok(token) => token,
        Err(e) => return error_response(e),
    };

    match composer.update_item(&token, index, req.field, req.value) {
        Ok(()) => draft_response(&composer, &token),
        Err(e) => error_response(e),
    }
}

/// 提交当前草稿
pub async fn submit_invoice(
    State(composer): State<Arc<InvoiceComposer>>,
    headers: HeaderMap,
) -> Response {
    let token = match bearer_token(&headers) {
        Ok(token) => token,
        Err(e) => return error_response(e),
    };

    match composer.submit(&token).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(ApiResponse {
                success: true,
                message: "invoice created".to_string(),
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// 历史列表 (按创建时间倒序; 读失败时返回上一次成功的结果)
pub async fn list_invoices(
    State(composer): State<Arc<InvoiceComposer>>,
    headers: HeaderMap,
) -> Response {
    let token = match bearer_token(&headers) {
        Ok(token) => token,
        Err(e) => return error_response(e),
    };

    let invoices = composer.refresh_history(&token).await;
    (
        StatusCode::OK,
        Json(HistoryResponse {
            success: true,
            invoices,
        }),
    )
        .into_response()
}

/// 渲染一条历史记录为单页文档
pub async fn get_document(
    State(printing): State<Arc<PrintService>>,
    Path(id): Path<Uuid>,
) -> Response {
    match printing.document(id).await {
        Ok(document) => (
            StatusCode::OK,
            Json(DocumentResponse {
                success: true,
                document,
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// 渲染并打印一条历史记录
pub async fn print_invoice(
    State(printing): State<Arc<PrintService>>,
    Path(id): Path<Uuid>,
) -> Response {
    match printing.print(id).await {
        Ok(()) => ok_message("invoice sent to printer"),
        Err(e) => error_response(e),
    }
}

/// 历史列表导出为 CSV
pub async fn export_csv(State(printing): State<Arc<PrintService>>) -> Response {
    match printing.export_csv().await {
        Ok(csv) => (StatusCode::OK, [(header::CONTENT_TYPE, "text/csv")], csv).into_response(),
        Err(e) => error_response(e),
    }
}

/// 从 Authorization 头取承载令牌; 草稿会话按它索引
fn bearer_token(headers: &HeaderMap) -> Result<String, AppError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.to_string())
        .ok_or(AppError::Unauthenticated)
}

fn draft_response(composer: &InvoiceComposer, token: &str) -> Response {
    let draft = composer.draft(token);
    (StatusCode::OK, Json(DraftResponse { success: true, draft })).into_response()
}

fn ok_message(message: &str) -> Response {
    (
        StatusCode::OK,
        Json(ApiResponse {
            success: true,
            message: message.to_string(),
        }),
    )
        .into_response()
}

fn error_response(e: AppError) -> Response {
    (
        e.status(),
        Json(ApiResponse {
            success: false,
            message: e.to_string(),
        }),
    )
        .into_response()
}
