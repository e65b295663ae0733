use axum::{
    routing::{delete, get, post},
    Router,
};
use invoice_dashboard_rust::{
    api, create_pool, AppConfig, HttpIdentity, IdentityService, InvoiceComposer, InvoiceStore,
    PgInvoiceStore, PrintService, TextPrinter,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志 - 使用本地时间格式 (类似Java格式)
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .init();

    // 加载配置
    let config = AppConfig::from_env();
    info!("Starting server with config: {:?}", config);

    // 创建数据库连接池
    let pool = create_pool(&config.database.url).await?;
    info!("Database pool created");

    // 组装协作方与服务
    let identity: Arc<dyn IdentityService> = Arc::new(HttpIdentity::new(&config.auth));
    let store: Arc<dyn InvoiceStore> = Arc::new(PgInvoiceStore::new(pool));
    let composer = Arc::new(InvoiceComposer::new(identity.clone(), store.clone()));
    let printing = Arc::new(PrintService::new(
        store,
        Arc::new(TextPrinter::new(&config.print.spool_dir)),
    ));

    // 构建路由
    // 身份路由
    let auth_routes = Router::new()
        .route("/api/auth/link", post(api::send_link))
        .route("/api/auth/session", get(api::get_session))
        .with_state(identity);

    // 草稿 + 提交 + 历史路由
    let composer_routes = Router::new()
        .route("/api/draft", get(api::get_draft).patch(api::update_draft))
        .route("/api/draft/items", post(api::add_item))
        .route(
            "/api/draft/items/:index",
            delete(api::remove_item).patch(api::update_item),
        )
        .route(
            "/api/invoices",
            post(api::submit_invoice).get(api::list_invoices),
        )
        .with_state(composer);

    // 渲染 / 打印 / 导出路由
    let print_routes = Router::new()
        .route("/api/invoices/export", get(api::export_csv))
        .route("/api/invoices/:id/document", get(api::get_document))
        .route("/api/invoices/:id/print", post(api::print_invoice))
        .with_state(printing);

    // 合并路由
    let app = Router::new()
        .route("/health", get(api::health_check))
        .merge(auth_routes)
        .merge(composer_routes)
        .merge(print_routes);

    // 启动服务器
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  POST   /api/auth/link            - Send login link");
    info!("  GET    /api/auth/session         - Current session");
    info!("  GET    /api/draft                - Current draft");
    info!("  POST   /api/draft/items          - Add line item");
    info!("  DELETE /api/draft/items/:index   - Remove line item");
    info!("  PATCH  /api/draft/items/:index   - Update line item");
    info!("  POST   /api/invoices             - Submit draft");
    info!("  GET    /api/invoices             - Invoice history");
    info!("  GET    /api/invoices/:id/document - Rendered document");
    info!("  POST   /api/invoices/:id/print   - Render and print");
    info!("  GET    /api/invoices/export      - History CSV export");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
