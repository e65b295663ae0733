use crate::error::AppError;
use crate::models::InvoiceRecord;

/// 历史列表导出为 CSV 文本
///
/// 列表场景直接使用记录上的预计算合计, 不重新求和。
pub fn history_to_csv(invoices: &[InvoiceRecord]) -> Result<String, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(["id", "client_name", "amount", "status", "created_at"])?;
    for invoice in invoices {
        writer.write_record(&[
            invoice.id.to_string(),
            invoice.client_name.clone(),
            invoice.amount.to_string(),
            invoice.status.clone(),
            invoice.created_at.to_rfc3339(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Export(e.into_error().into()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
