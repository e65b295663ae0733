use super::sender::SenderProfile;
use serde::Serialize;

/// 单据表格的一行 (描述 + 两位小数金额)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentRow {
    pub description: String,
    pub amount: String,
}

impl DocumentRow {
    /// 占位行: 没有行项目的记录也要渲染出表格
    pub fn placeholder() -> Self {
        Self {
            description: "-".to_string(),
            amount: "-".to_string(),
        }
    }
}

/// 由一条发票记录派生的定版单页文档, 交给打印端后即丢弃
///
/// invoice_no 只是 id 的展示截断, 不能用于回查。
/// total 由行项目重新求和得出, 不取记录上的冗余合计。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedInvoice {
    pub invoice_no: String,
    pub issuer: SenderProfile,
    pub bill_to: String,
    pub issued_on: String,
    pub rows: Vec<DocumentRow>,
    pub total: String,
    pub footer: String,
}
