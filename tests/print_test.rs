mod common;

use common::{item, record, MockStore};
use invoice_dashboard_rust::error::AppError;
use invoice_dashboard_rust::service::{PrintService, TextPrinter};
use std::sync::Arc;
use uuid::Uuid;

fn spool_dir() -> std::path::PathBuf {
    std::env::temp_dir().join(format!("invoice-spool-{}", Uuid::new_v4()))
}

#[tokio::test]
async fn document_for_unknown_record_is_missing() {
    let store = Arc::new(MockStore::new());
    let printing = PrintService::new(store, Arc::new(TextPrinter::new(spool_dir())));

    let result = printing.document(Uuid::new_v4()).await;

    assert!(matches!(result, Err(AppError::MissingRecord(_))));
}

#[tokio::test]
async fn print_spools_the_rendered_document_to_a_file() {
    let invoice = record(Some(vec![item("Design", 100), item("Dev", 200)]), None);
    let id = invoice.id;
    let store = Arc::new(MockStore::with_listing(vec![invoice]));
    let dir = spool_dir();
    let printing = PrintService::new(store, Arc::new(TextPrinter::new(dir.clone())));

    printing.print(id).await.unwrap();

    let short_id: String = id.to_string().chars().take(6).collect();
    let text = std::fs::read_to_string(dir.join(format!("invoice-{}.txt", short_id))).unwrap();
    assert!(text.contains("INVOICE #"));
    assert!(text.contains("BILL TO: Acme Corp"));
    assert!(text.contains("$300.00"));
    assert!(text.contains("Thank you for your business!"));

    std::fs::remove_dir_all(dir).unwrap();
}

#[tokio::test]
async fn placeholder_rows_print_without_currency_symbol() {
    let invoice = record(Some(Vec::new()), None);
    let id = invoice.id;
    let store = Arc::new(MockStore::with_listing(vec![invoice]));
    let dir = spool_dir();
    let printing = PrintService::new(store, Arc::new(TextPrinter::new(dir.clone())));

    printing.print(id).await.unwrap();

    let short_id: String = id.to_string().chars().take(6).collect();
    let text = std::fs::read_to_string(dir.join(format!("invoice-{}.txt", short_id))).unwrap();
    assert!(!text.contains("$-"));
    assert!(text.contains("$0.00"));

    std::fs::remove_dir_all(dir).unwrap();
}

#[tokio::test]
async fn export_lists_one_csv_row_per_invoice() {
    let first = record(Some(vec![item("Design", 100)]), None);
    let second = record(None, None);
    let store = Arc::new(MockStore::with_listing(vec![first.clone(), second]));
    let printing = PrintService::new(store, Arc::new(TextPrinter::new(spool_dir())));

    let csv = printing.export_csv().await.unwrap();

    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("id,client_name,amount,status,created_at"));
    assert_eq!(csv.lines().count(), 3);
    assert!(csv.contains(&first.id.to_string()));
    assert!(csv.contains("Acme Corp"));
    assert!(csv.contains("300"));
}

#[tokio::test]
async fn export_failure_propagates() {
    let store = Arc::new(MockStore::new());
    store.set_fail_list(true);
    let printing = PrintService::new(store, Arc::new(TextPrinter::new(spool_dir())));

    let result = printing.export_csv().await;

    assert!(matches!(result, Err(AppError::Fetch(_))));
}
