use crate::models::{
    compute_total, format_amount, DocumentRow, InvoiceRecord, LineItem, RenderedInvoice,
    SenderProfile,
};

/// 截断后的展示编号长度
const DISPLAY_ID_LEN: usize = 6;

/// 发票渲染服务: 把一条记录映射为定版单页文档
///
/// 对缺失的可选字段 (开票方、行项目) 一律降级, 从不报错;
/// 合计始终由行项目重新求和, 不信任记录上的冗余值。
pub struct InvoiceRenderer;

impl InvoiceRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, record: &InvoiceRecord) -> RenderedInvoice {
        let items: &[LineItem] = record
            .items
            .as_deref()
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        let rows = if items.is_empty() {
            vec![DocumentRow::placeholder()]
        } else {
            items
                .iter()
                .map(|item| DocumentRow {
                    description: item.description.clone(),
                    amount: format_amount(&item.unit_price.to_amount()),
                })
                .collect()
        };

        let issuer = record
            .company_info
            .as_deref()
            .cloned()
            .unwrap_or_else(SenderProfile::fallback);

        RenderedInvoice {
            invoice_no: record.id.to_string().chars().take(DISPLAY_ID_LEN).collect(),
            issuer,
            bill_to: record.client_name.clone(),
            issued_on: record.created_at.format("%m/%d/%Y").to_string(),
            rows,
            total: format_amount(&compute_total(items)),
            footer: "Thank you for your business!".to_string(),
        }
    }
}

impl Default for InvoiceRenderer {
    fn default() -> Self {
        Self::new()
    }
}
