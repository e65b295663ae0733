use crate::error::AppError;
use crate::models::{InvoiceRecord, NewInvoice};
use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

/// 发票存储契约: 只需要写入和按时间倒序读取两个操作
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    /// 写入一条发票记录; created_at 由存储端生成
    async fn insert(&self, invoice: NewInvoice) -> Result<(), AppError>;

    /// 按创建时间倒序返回全部发票
    async fn list_all(&self) -> Result<Vec<InvoiceRecord>, AppError>;
}

/// Postgres 实现 (invoices 表)
pub struct PgInvoiceStore {
    pool: PgPool,
}

impl PgInvoiceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvoiceStore for PgInvoiceStore {
    async fn insert(&self, invoice: NewInvoice) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO invoices (id, client_name, amount, status, items, company_info, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&invoice.client_name)
        .bind(&invoice.amount)
        .bind(invoice.status.as_str())
        .bind(Json(&invoice.items))
        .bind(Json(&invoice.company_info))
        .bind(invoice.user_id)
        .execute(&self.pool)
        .await
        .map_err(AppError::Persistence)?;

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<InvoiceRecord>, AppError> {
        sqlx::query_as::<_, InvoiceRecord>(
            r#"
            SELECT id, client_name, amount, status, items, company_info, user_id, created_at
            FROM invoices
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Fetch)
    }
}
