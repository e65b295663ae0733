use serde::{Deserialize, Serialize};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub print: PrintConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
}

/// 外部身份服务
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub base_url: String,
    pub api_key: String,
}

/// 打印输出目录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrintConfig {
    pub spool_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "postgres://localhost/invoice_dashboard".to_string()),
            },
            auth: AuthConfig {
                base_url: "http://127.0.0.1:9999".to_string(),
                api_key: String::new(),
            },
            print: PrintConfig {
                spool_dir: "./printouts".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: std::env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
            },
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "postgres://localhost/invoice_dashboard".to_string()),
            },
            auth: AuthConfig {
                base_url: std::env::var("AUTH_BASE_URL")
                    .unwrap_or_else(|_| "http://127.0.0.1:9999".to_string()),
                api_key: std::env::var("AUTH_API_KEY").unwrap_or_default(),
            },
            print: PrintConfig {
                spool_dir: std::env::var("PRINT_SPOOL_DIR")
                    .unwrap_or_else(|_| "./printouts".to_string()),
            },
        }
    }
}
