use crate::error::AppError;
use crate::models::RenderedInvoice;
use async_trait::async_trait;
use std::path::PathBuf;

/// 210mm 页宽按等宽字体折算的列数
const PAGE_COLUMNS: usize = 80;

/// 打印/导出契约: 消费一份已完全解析的文档
#[async_trait]
pub trait PrintSink: Send + Sync {
    async fn print(&self, document: &RenderedInvoice) -> Result<(), AppError>;
}

/// 把文档排成等宽文本落盘的打印实现
pub struct TextPrinter {
    spool_dir: PathBuf,
}

impl TextPrinter {
    pub fn new(spool_dir: impl Into<PathBuf>) -> Self {
        Self {
            spool_dir: spool_dir.into(),
        }
    }
}

#[async_trait]
impl PrintSink for TextPrinter {
    async fn print(&self, document: &RenderedInvoice) -> Result<(), AppError> {
        tokio::fs::create_dir_all(&self.spool_dir).await?;

        let path = self
            .spool_dir
            .join(format!("invoice-{}.txt", document.invoice_no));
        tokio::fs::write(&path, layout(document)).await?;

        tracing::info!("Invoice document spooled to {}", path.display());
        Ok(())
    }
}

/// 单页版面; 内容超宽时任其溢出, 不做分页
fn layout(document: &RenderedInvoice) -> String {
    let rule = "-".repeat(PAGE_COLUMNS);
    let mut lines = Vec::new();

    lines.push(format!("INVOICE #{}", document.invoice_no));
    lines.push(document.issuer.name.clone());
    lines.push(document.issuer.address.clone());
    lines.push(document.issuer.city.clone());
    lines.push(String::new());
    lines.push(format!("BILL TO: {}", document.bill_to));
    lines.push(format!("Date: {}", document.issued_on));
    lines.push(rule.clone());
    lines.push(row_line("Description", "Amount"));
    for row in &document.rows {
        lines.push(row_line(&row.description, &money(&row.amount)));
    }
    lines.push(rule);
    lines.push(row_line("Total Due:", &money(&document.total)));
    lines.push(String::new());
    lines.push(document.footer.clone());
    lines.push(String::new());

    lines.join("\n")
}

/// 左右两列对齐到固定页宽
fn row_line(left: &str, right: &str) -> String {
    let width = PAGE_COLUMNS.saturating_sub(right.chars().count());
    format!("{:<width$}{}", left, right, width = width)
}

/// 占位行不加货币符号
fn money(amount: &str) -> String {
    if amount == "-" {
        amount.to_string()
    } else {
        format!("${}", amount)
    }
}
