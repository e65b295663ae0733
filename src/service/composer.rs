use crate::auth::IdentityService;
use crate::db::InvoiceStore;
use crate::error::AppError;
use crate::models::{
    compute_total, format_amount, InvoiceDraft, InvoiceRecord, InvoiceStatus, ItemField, LineItem,
    NewInvoice, SenderProfile,
};
use dashmap::DashMap;
use serde::Serialize;
use std::sync::Arc;

/// 草稿状态机: Editing 接受全部修改, Submitting 期间拒绝一切变更
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DraftState {
    Editing,
    Submitting,
}

/// 单个会话的组合状态: 草稿 + 最近一次成功读取的历史列表
#[derive(Debug)]
struct ComposerSession {
    draft: InvoiceDraft,
    state: DraftState,
    history: Vec<InvoiceRecord>,
}

impl ComposerSession {
    fn new() -> Self {
        Self {
            draft: InvoiceDraft::new(),
            state: DraftState::Editing,
            history: Vec::new(),
        }
    }
}

/// 草稿快照, 供表单展示
#[derive(Debug, Clone, Serialize)]
pub struct DraftView {
    pub client_name: String,
    pub items: Vec<LineItem>,
    pub sender: SenderProfile,
    pub total: String,
    pub state: DraftState,
}

/// 发票组合服务: 按会话令牌管理草稿, 提交时转成持久记录
pub struct InvoiceComposer {
    identity: Arc<dyn IdentityService>,
    store: Arc<dyn InvoiceStore>,
    sessions: DashMap<String, ComposerSession>,
}

impl InvoiceComposer {
    pub fn new(identity: Arc<dyn IdentityService>, store: Arc<dyn InvoiceStore>) -> Self {
        Self {
            identity,
            store,
            sessions: DashMap::new(),
        }
    }

    /// 注意: 回调期间持有该会话的分片锁, 不得跨 await 调用
    fn with_session<R>(&self, token: &str, f: impl FnOnce(&mut ComposerSession) -> R) -> R {
        let mut session = self
            .sessions
            .entry(token.to_string())
            .or_insert_with(ComposerSession::new);
        f(&mut session)
    }

    fn edit<R>(&self, token: &str, f: impl FnOnce(&mut InvoiceDraft) -> R) -> Result<R, AppError> {
        self.with_session(token, |session| {
            if session.state == DraftState::Submitting {
                return Err(AppError::DraftBusy);
            }
            Ok(f(&mut session.draft))
        })
    }

    /// 当前草稿快照 (首次访问时创建初始草稿)
    pub fn draft(&self, token: &str) -> DraftView {
        self.with_session(token, |session| DraftView {
            client_name: session.draft.client_name.clone(),
            items: session.draft.items.clone(),
            sender: session.draft.sender.clone(),
            total: format_amount(&session.draft.total()),
            state: session.state,
        })
    }

    pub fn add_item(&self, token: &str) -> Result<(), AppError> {
        self.edit(token, |draft| draft.add_item())
    }

    pub fn remove_item(&self, token: &str, index: usize) -> Result<(), AppError> {
        self.edit(token, |draft| draft.remove_item(index))
    }

    pub fn update_item(
        &self,
        token: &str,
        index: usize,
        field: ItemField,
        value: String,
    ) -> Result<(), AppError> {
        let updated = self.edit(token, |draft| draft.update_item(index, field, value))?;
        if updated {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "line item {} does not exist",
                index
            )))
        }
    }

    pub fn set_client_name(&self, token: &str, client_name: String) -> Result<(), AppError> {
        self.edit(token, |draft| draft.set_client_name(client_name))
    }

    pub fn set_sender(&self, token: &str, sender: SenderProfile) -> Result<(), AppError> {
        self.edit(token, |draft| draft.set_sender(sender))
    }

    /// 提交草稿: 校验 → 身份 → 落库
    ///
    /// 失败时草稿原样保留, 由用户手动重试; 成功后草稿重置,
    /// 调用方随后应刷新历史列表。
    pub async fn submit(&self, token: &str) -> Result<(), AppError> {
        let draft = self.with_session(token, |session| {
            if session.state == DraftState::Submitting {
                return Err(AppError::DraftBusy);
            }
            session.state = DraftState::Submitting;
            Ok(session.draft.clone())
        })?;

        let result = self.persist(token, draft).await;

        self.with_session(token, |session| {
            if result.is_ok() {
                session.draft = InvoiceDraft::new();
            }
            session.state = DraftState::Editing;
        });

        result
    }

    async fn persist(&self, token: &str, draft: InvoiceDraft) -> Result<(), AppError> {
        // 校验在触达任何协作方之前完成
        validate_draft(&draft)?;

        let user = self
            .identity
            .current_user(token)
            .await?
            .ok_or(AppError::Unauthenticated)?;

        let amount = compute_total(&draft.items);
        self.store
            .insert(NewInvoice {
                client_name: draft.client_name,
                amount,
                status: InvoiceStatus::Pending,
                items: draft.items,
                company_info: draft.sender,
                user_id: user.id,
            })
            .await
    }

    /// 刷新历史列表; 读失败时降级为上一次成功的结果而不是清空
    pub async fn refresh_history(&self, token: &str) -> Vec<InvoiceRecord> {
        match self.store.list_all().await {
            Ok(invoices) => {
                self.with_session(token, |session| session.history = invoices.clone());
                invoices
            }
            Err(e) => {
                tracing::warn!("History refresh failed, serving previous listing: {}", e);
                self.with_session(token, |session| session.history.clone())
            }
        }
    }
}

/// 提交前校验, 不触达任何协作方
fn validate_draft(draft: &InvoiceDraft) -> Result<(), AppError> {
    if draft.client_name.trim().is_empty() {
        return Err(AppError::Validation("client name is required".to_string()));
    }
    if draft.items.iter().any(|item| item.description.trim().is_empty()) {
        return Err(AppError::Validation(
            "every line item needs a description".to_string(),
        ));
    }
    Ok(())
}
