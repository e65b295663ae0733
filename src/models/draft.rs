use super::line_item::{compute_total, LineItem, PriceInput};
use super::sender::SenderProfile;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// 行项目的可编辑字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemField {
    Description,
    Price,
}

/// 编辑中的发票草稿, 仅存在于内存, 提交成功后整体重置
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceDraft {
    pub client_name: String,
    pub items: Vec<LineItem>,
    pub sender: SenderProfile,
}

impl InvoiceDraft {
    /// 初始草稿: 一个空白行 + 初始开票方
    pub fn new() -> Self {
        Self {
            client_name: String::new(),
            items: vec![LineItem::blank()],
            sender: SenderProfile::initial(),
        }
    }

    /// 追加一个空白行, 总是成功
    pub fn add_item(&mut self) {
        self.items.push(LineItem::blank());
    }

    /// 删除指定行; 仅剩一行或下标越界时不做任何事
    pub fn remove_item(&mut self, index: usize) {
        if self.items.len() > 1 && index < self.items.len() {
            self.items.remove(index);
        }
    }

    /// 更新指定行; 单价按原文保存, 到计算时再转换
    pub fn update_item(&mut self, index: usize, field: ItemField, value: String) -> bool {
        let Some(item) = self.items.get_mut(index) else {
            return false;
        };
        match field {
            ItemField::Description => item.description = value,
            ItemField::Price => item.unit_price = PriceInput::Raw(value),
        }
        true
    }

    pub fn set_client_name(&mut self, client_name: String) {
        self.client_name = client_name;
    }

    pub fn set_sender(&mut self, sender: SenderProfile) {
        self.sender = sender;
    }

    /// 当前合计
    pub fn total(&self) -> BigDecimal {
        compute_total(&self.items)
    }
}

impl Default for InvoiceDraft {
    fn default() -> Self {
        Self::new()
    }
}
