// ==========================================
// 作物经济决策系统 - 配置层
// ==========================================
// 职责: 经济参数与成本表的加载、校验
// 存储: config.json + 可选外部成本表 (.json / .csv)
// ==========================================

pub mod config_manager;
pub mod cost_table;
pub mod economics_config;
pub mod error;

// 重导出核心配置类型
pub use config_manager::{AdvisorConfig, ConfigManager};
pub use cost_table::{CostTable, ResolvedCost, DEFAULT_CROP};
pub use economics_config::EconomicsConfig;
pub use error::ConfigError;
