use super::line_item::LineItem;
use super::sender::SenderProfile;
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// 发票状态; 本系统只在创建时写入 Pending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Paid => "Paid",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "Paid" => InvoiceStatus::Paid,
            _ => InvoiceStatus::Pending,
        }
    }
}

/// 已持久化的发票记录 (invoices 表), 创建后本系统不再变更
///
/// amount 是提交时预计算的冗余合计, 供列表展示;
/// items 才是重新生成单据时的权威数据。
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub id: Uuid,
    pub client_name: String,
    pub amount: BigDecimal,
    pub status: String,
    /// 行项目快照; 早于行项目功能的记录可能为空
    pub items: Option<Json<Vec<LineItem>>>,
    /// 开票方快照; 早于开票方功能的记录可能为空
    pub company_info: Option<Json<SenderProfile>>,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// 提交时构造的待插入记录, created_at 由存储端生成
#[derive(Debug, Clone, Serialize)]
pub struct NewInvoice {
    pub client_name: String,
    pub amount: BigDecimal,
    pub status: InvoiceStatus,
    pub items: Vec<LineItem>,
    pub company_info: SenderProfile,
    pub user_id: Uuid,
}
