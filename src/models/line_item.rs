use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 行项目单价的原始输入, 计算前一律不解析
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    /// 数字或可解析为数字的字符串
    Amount(BigDecimal),
    /// 原样保留的文本输入
    Raw(String),
    /// 字段缺失或为 null
    Missing,
}

impl Default for PriceInput {
    fn default() -> Self {
        PriceInput::Missing
    }
}

impl PriceInput {
    pub fn zero() -> Self {
        PriceInput::Amount(BigDecimal::zero())
    }

    /// 强制转换为金额: 非法或缺失输入按 0 计
    pub fn to_amount(&self) -> BigDecimal {
        match self {
            PriceInput::Amount(value) => value.clone(),
            PriceInput::Raw(text) => {
                BigDecimal::from_str(text.trim()).unwrap_or_else(|_| BigDecimal::zero())
            }
            PriceInput::Missing => BigDecimal::zero(),
        }
    }
}

/// 发票行项目 (描述 + 单价)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub description: String,
    #[serde(rename = "price", default)]
    pub unit_price: PriceInput,
}

impl LineItem {
    /// 空白行: 空描述, 单价 0
    pub fn blank() -> Self {
        Self {
            description: String::new(),
            unit_price: PriceInput::zero(),
        }
    }
}

/// 行项目求和 - 组合器与渲染器共用的唯一口径
pub fn compute_total(items: &[LineItem]) -> BigDecimal {
    items
        .iter()
        .map(|item| item.unit_price.to_amount())
        .fold(BigDecimal::zero(), |sum, amount| sum + amount)
}

/// 金额展示: 固定两位小数
pub fn format_amount(value: &BigDecimal) -> String {
    value.with_scale(2).to_string()
}
