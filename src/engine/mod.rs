// ==========================================
// 作物经济决策系统 - 引擎层
// ==========================================
// 职责: 经济评估、推荐排序、说明生成、敏感性分析
// 红线: 引擎均为纯函数,不做 I/O,不持有可变状态
// 顺序: evaluate → rank → explain; sensitivity 可单独调用
// ==========================================

pub mod evaluator;
pub mod explanation;
pub mod ranker;
pub mod sensitivity;

// 重导出核心引擎
pub use evaluator::{EconomicEvaluator, EvaluationRequest, UNDEFINED_MARGIN_SENTINEL};
pub use explanation::{format_thousands, ExplanationRenderer};
pub use ranker::RecommendationRanker;
pub use sensitivity::{scenario_key, SensitivityAnalyzer, ShockKind};
