use super::export::history_to_csv;
use super::printer::PrintSink;
use super::renderer::InvoiceRenderer;
use crate::db::InvoiceStore;
use crate::error::AppError;
use crate::models::{InvoiceRecord, RenderedInvoice};
use std::sync::Arc;
use uuid::Uuid;

/// 打印/导出流程: 从历史列表取记录, 渲染, 再交给打印端
pub struct PrintService {
    store: Arc<dyn InvoiceStore>,
    renderer: InvoiceRenderer,
    sink: Arc<dyn PrintSink>,
}

impl PrintService {
    pub fn new(store: Arc<dyn InvoiceStore>, sink: Arc<dyn PrintSink>) -> Self {
        Self {
            store,
            renderer: InvoiceRenderer::new(),
            sink,
        }
    }

    /// 渲染一条历史记录为单页文档
    pub async fn document(&self, id: Uuid) -> Result<RenderedInvoice, AppError> {
        let record = self.find_record(id).await?;
        Ok(self.renderer.render(&record))
    }

    /// 渲染并打印; render 返回即文档就绪, 打印随后触发, 不靠定时等待
    pub async fn print(&self, id: Uuid) -> Result<(), AppError> {
        let document = self.document(id).await?;
        self.sink.print(&document).await
    }

    /// 历史列表的 CSV 导出
    pub async fn export_csv(&self) -> Result<String, AppError> {
        let invoices = self.store.list_all().await?;
        history_to_csv(&invoices)
    }

    /// 存储端只提供写入和列表两个操作, 取单条记录从列表中定位
    async fn find_record(&self, id: Uuid) -> Result<InvoiceRecord, AppError> {
        let invoices = self.store.list_all().await?;
        invoices
            .into_iter()
            .find(|record| record.id == id)
            .ok_or(AppError::MissingRecord(id))
    }
}
