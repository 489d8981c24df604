// ==========================================
// 作物经济决策系统 - 服务层错误类型
// ==========================================
// 职责: 推荐流程的输入校验与协作方失败原因
// 红线: 所有错误信息必须包含显式原因
// ==========================================

use crate::config::ConfigError;
use thiserror::Error;

/// 估产/估价协作方错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimateError {
    #[error("估产服务不可用: {0}")]
    Unavailable(String),

    #[error("不支持的作物: {0}")]
    UnsupportedCrop(String),
}

/// 推荐服务错误
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("没有候选作物")]
    NoCandidates,

    #[error("所有候选作物估产失败: {0}")]
    NoEstimates(String),

    #[error("报告中不存在作物: {0}")]
    CropNotInReport(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
