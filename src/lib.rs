// ==========================================
// 作物经济决策系统 - 核心库
// ==========================================
// 系统定位: 决策支持系统 (最终种植决策由农户做出)
// 主流程: 估产 → 经济评估 → 预算约束排序 → 说明生成
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 经济评估与排序
pub mod engine;

// 配置层 - 经济参数与成本表
pub mod config;

// 服务层 - 推荐编排
pub mod service;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    CostBreakdown, CostCategory, CostSource, CropEstimate, EconomicRecord, FarmProfile,
    PlantingSeason, ProfitScenarios, RankedEntry, RiskTier, SensitivityOutcome, SiteConditions,
};

// 引擎
pub use engine::{
    EconomicEvaluator, EvaluationRequest, ExplanationRenderer, RecommendationRanker,
    SensitivityAnalyzer,
};

// 配置
pub use config::{AdvisorConfig, ConfigError, ConfigManager, CostTable, EconomicsConfig};

// 服务
pub use service::{
    BaselineEstimator, CropEstimator, EstimateError, RecommendationReport, RecommendationService,
    ServiceError,
};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "crop-advisor";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
