//! 测试共用的协作方替身与数据构造
#![allow(dead_code)]

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::{TimeZone, Utc};
use invoice_dashboard_rust::auth::{AuthUser, IdentityService, Session};
use invoice_dashboard_rust::db::InvoiceStore;
use invoice_dashboard_rust::error::AppError;
use invoice_dashboard_rust::models::{
    InvoiceRecord, LineItem, NewInvoice, PriceInput, SenderProfile,
};
use sqlx::types::Json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

/// 身份服务替身: 固定返回配置好的用户
pub struct MockIdentity {
    pub user: Option<AuthUser>,
}

impl MockIdentity {
    pub fn signed_in() -> Self {
        Self {
            user: Some(AuthUser {
                id: Uuid::new_v4(),
                email: "dev@example.com".to_string(),
            }),
        }
    }

    pub fn signed_out() -> Self {
        Self { user: None }
    }
}

#[async_trait]
impl IdentityService for MockIdentity {
    async fn send_link(&self, _email: &str) -> Result<(), AppError> {
        Ok(())
    }

    async fn session(&self, token: &str) -> Result<Option<Session>, AppError> {
        Ok(self.user.clone().map(|user| Session {
            access_token: token.to_string(),
            user,
        }))
    }

    async fn current_user(&self, _token: &str) -> Result<Option<AuthUser>, AppError> {
        Ok(self.user.clone())
    }
}

/// 存储替身: 记录每次插入, 可随时切换为故障模式
#[derive(Default)]
pub struct MockStore {
    pub inserted: Mutex<Vec<NewInvoice>>,
    pub listing: Mutex<Vec<InvoiceRecord>>,
    pub fail_insert: AtomicBool,
    pub fail_list: AtomicBool,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listing(listing: Vec<InvoiceRecord>) -> Self {
        let store = Self::default();
        *store.listing.lock().unwrap() = listing;
        store
    }

    pub fn set_fail_insert(&self, fail: bool) {
        self.fail_insert.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl InvoiceStore for MockStore {
    async fn insert(&self, invoice: NewInvoice) -> Result<(), AppError> {
        if self.fail_insert.load(Ordering::SeqCst) {
            return Err(AppError::Persistence(sqlx::Error::PoolTimedOut));
        }
        self.inserted.lock().unwrap().push(invoice);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<InvoiceRecord>, AppError> {
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(AppError::Fetch(sqlx::Error::PoolTimedOut));
        }
        Ok(self.listing.lock().unwrap().clone())
    }
}

pub fn item(description: &str, price: i64) -> LineItem {
    LineItem {
        description: description.to_string(),
        unit_price: PriceInput::Amount(BigDecimal::from(price)),
    }
}

/// 测试记录: items / company_info 可缺省以覆盖历史数据形态
pub fn record(
    items: Option<Vec<LineItem>>,
    company_info: Option<SenderProfile>,
) -> InvoiceRecord {
    InvoiceRecord {
        id: Uuid::new_v4(),
        client_name: "Acme Corp".to_string(),
        amount: BigDecimal::from(300),
        status: "Pending".to_string(),
        items: items.map(Json),
        company_info: company_info.map(Json),
        user_id: Uuid::new_v4(),
        created_at: Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap(),
    }
}
