// ==========================================
// 作物经济决策系统 - 配置层错误类型
// ==========================================
// 职责: 配置文件读取、解析、校验失败的显式原因
// ==========================================

use crate::domain::types::CostCategory;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: path={path}, {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置 JSON 解析失败: {0}")]
    Json(#[from] serde_json::Error),

    #[error("成本表 CSV 解析失败: {0}")]
    Csv(#[from] csv::Error),

    #[error("不支持的成本表格式: {0} (仅支持 .json / .csv)")]
    UnsupportedFormat(String),

    #[error("无效配置值: {key}={value} ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("默认作物不在成本表中: {0}")]
    MissingDefaultCrop(String),

    #[error("无效成本: crop={crop}, category={category}, value={value}")]
    InvalidCostRate {
        crop: String,
        category: CostCategory,
        value: f64,
    },
}

impl ConfigError {
    pub(crate) fn invalid(key: &str, value: impl ToString, reason: &str) -> Self {
        ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}
