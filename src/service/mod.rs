// ==========================================
// 作物经济决策系统 - 服务层
// ==========================================
// 职责: 对接估产协作方, 编排引擎层生成推荐报告
// ==========================================

pub mod error;
pub mod estimator;
pub mod recommendation_service;

pub use error::{EstimateError, ServiceError};
pub use estimator::{BaselineEstimator, CropEstimator};
pub use recommendation_service::{RecommendationReport, RecommendationService, SkippedCrop};
