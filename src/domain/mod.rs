// ==========================================
// 作物经济决策系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含配置加载逻辑,不含引擎逻辑
// ==========================================

pub mod cost;
pub mod economics;
pub mod farm;
pub(crate) mod float_serde;
pub mod recommendation;
pub mod types;

// 重导出核心类型
pub use cost::CostBreakdown;
pub use economics::{EconomicRecord, ProfitScenarios};
pub use farm::{CropEstimate, FarmProfile, SiteConditions};
pub use recommendation::{RankedEntry, SensitivityOutcome};
pub use types::{CostCategory, CostSource, PlantingSeason, RiskTier};
