use serde::{Deserialize, Serialize};

/// 开票方信息, 随每条发票记录快照保存
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderProfile {
    pub name: String,
    pub address: String,
    pub city: String,
}

impl SenderProfile {
    /// 新草稿的初始开票方
    pub fn initial() -> Self {
        Self {
            name: "My Tech Startup".to_string(),
            address: "123 Code Lane".to_string(),
            city: "San Francisco, CA".to_string(),
        }
    }

    /// 渲染兜底值 - 早期记录可能没有 company_info 字段
    pub fn fallback() -> Self {
        Self {
            name: "My Company Inc.".to_string(),
            address: "123 Tech Street".to_string(),
            city: "Silicon Valley, CA".to_string(),
        }
    }
}
