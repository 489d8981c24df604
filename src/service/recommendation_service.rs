// ==========================================
// 作物经济决策系统 - 推荐服务
// ==========================================
// 职责: 编排 候选作物 → 估产 → 经济评估 → 排序 → 说明
// 输入: FarmProfile
// 输出: RecommendationReport
// 红线: 单个作物估产失败只跳过该作物, 不中断整个推荐
// ==========================================

use crate::config::{ConfigManager, CostTable, EconomicsConfig};
use crate::domain::farm::FarmProfile;
use crate::domain::recommendation::{RankedEntry, SensitivityOutcome};
use crate::domain::types::PlantingSeason;
use crate::engine::{EconomicEvaluator, ExplanationRenderer, RecommendationRanker, SensitivityAnalyzer};
use crate::service::error::ServiceError;
use crate::service::estimator::CropEstimator;
use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

// ==========================================
// 报告结构
// ==========================================

/// 被跳过的候选作物
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkippedCrop {
    pub crop: String,
    pub reason: String,
}

/// 推荐报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub report_id: String,
    pub farm_id: String,
    pub generated_at: DateTime<Utc>,
    pub planting_season: PlantingSeason,
    pub area_ha: f64,
    pub budget: f64,
    pub recommendations: Vec<RankedEntry>,
    pub explanation: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedCrop>,
}

impl RecommendationReport {
    /// 首选 (rank = 1)
    pub fn top(&self) -> Option<&RankedEntry> {
        self.recommendations.iter().find(|e| e.rank == Some(1))
    }

    /// 按作物查找 (去空白、不区分大小写)
    pub fn find(&self, crop: &str) -> Option<&RankedEntry> {
        let key = crop.trim().to_lowercase();
        self.recommendations
            .iter()
            .find(|e| e.crop().trim().to_lowercase() == key)
    }

    pub fn feasible_count(&self) -> usize {
        self.recommendations.iter().filter(|e| e.budget_feasible).count()
    }
}

// ==========================================
// RecommendationService
// ==========================================
pub struct RecommendationService<E: CropEstimator> {
    estimator: Arc<E>,
    evaluator: EconomicEvaluator,
    ranker: RecommendationRanker,
    renderer: ExplanationRenderer,
    analyzer: SensitivityAnalyzer,
    max_candidates: usize,
}

impl<E: CropEstimator> RecommendationService<E> {
    pub fn new(estimator: Arc<E>, cost_table: Arc<CostTable>, config: &EconomicsConfig) -> Self {
        Self {
            estimator,
            evaluator: EconomicEvaluator::new(cost_table, config),
            ranker: RecommendationRanker::new(),
            renderer: ExplanationRenderer::new(config),
            analyzer: SensitivityAnalyzer::new(),
            max_candidates: config.max_candidates,
        }
    }

    /// 从配置管理器构建 (加载成本表)
    pub fn from_config(estimator: Arc<E>, manager: &ConfigManager) -> Result<Self, ServiceError> {
        let cost_table = manager.load_cost_table()?;
        Ok(Self::new(estimator, Arc::new(cost_table), manager.economics()))
    }

    pub fn evaluator(&self) -> &EconomicEvaluator {
        &self.evaluator
    }

    /// 生成推荐报告
    ///
    /// # 流程
    /// 1. 校验农场输入
    /// 2. 候选作物 (偏好列表或季节默认)
    /// 3. 并发估产, 失败的作物记入 skipped
    /// 4. 经济评估 → 排序 → 说明
    ///
    /// # 错误
    /// - InvalidInput: 面积/预算/坐标不合法
    /// - NoCandidates: 候选作物为空
    /// - NoEstimates: 所有候选作物估产失败
    #[instrument(skip_all, fields(farm_id = %farm.farm_id()))]
    pub async fn recommend(&self, farm: &FarmProfile) -> Result<RecommendationReport, ServiceError> {
        validate_farm(farm)?;

        let candidates = farm.candidate_crops(self.max_candidates);
        if candidates.is_empty() {
            return Err(ServiceError::NoCandidates);
        }
        info!(
            season = %farm.planting_season,
            candidates = ?candidates,
            "开始生成推荐"
        );

        let results = join_all(
            candidates
                .iter()
                .map(|crop| self.estimator.estimate(farm, crop)),
        )
        .await;

        let mut records = Vec::with_capacity(candidates.len());
        let mut skipped = Vec::new();
        for (crop, result) in candidates.iter().zip(results) {
            match result {
                Ok(estimate) => {
                    records.push(self.evaluator.evaluate_estimate(&estimate, farm.area_ha));
                }
                Err(e) => {
                    warn!(crop = %crop, error = %e, "估产失败, 跳过该作物");
                    skipped.push(SkippedCrop {
                        crop: crop.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        if records.is_empty() {
            let crops: Vec<&str> = skipped.iter().map(|s| s.crop.as_str()).collect();
            return Err(ServiceError::NoEstimates(crops.join(", ")));
        }

        let recommendations = self.ranker.rank(&records, farm.budget);
        let explanation = self.renderer.explain(&recommendations);

        let report = RecommendationReport {
            report_id: Uuid::new_v4().to_string(),
            farm_id: farm.farm_id(),
            generated_at: Utc::now(),
            planting_season: farm.planting_season,
            area_ha: farm.area_ha,
            budget: farm.budget,
            recommendations,
            explanation,
            skipped,
        };

        info!(
            report_id = %report.report_id,
            evaluated = report.recommendations.len(),
            feasible = report.feasible_count(),
            skipped = report.skipped.len(),
            "推荐生成完成"
        );

        Ok(report)
    }

    /// 对报告中某作物做敏感性分析
    pub fn sensitivity(
        &self,
        report: &RecommendationReport,
        crop: &str,
        price_change_pct: f64,
        yield_change_pct: f64,
    ) -> Result<BTreeMap<String, SensitivityOutcome>, ServiceError> {
        let entry = report
            .find(crop)
            .ok_or_else(|| ServiceError::CropNotInReport(crop.to_string()))?;

        debug!(crop = %entry.crop(), price_change_pct, yield_change_pct, "敏感性分析");
        Ok(self
            .analyzer
            .sensitivity(&entry.record, price_change_pct, yield_change_pct))
    }
}

/// 农场输入校验
fn validate_farm(farm: &FarmProfile) -> Result<(), ServiceError> {
    if !farm.area_ha.is_finite() || farm.area_ha <= 0.0 {
        return Err(ServiceError::InvalidInput(format!(
            "面积必须为正数: {}",
            farm.area_ha
        )));
    }
    if !farm.budget.is_finite() || farm.budget < 0.0 {
        return Err(ServiceError::InvalidInput(format!(
            "预算必须为非负有限值: {}",
            farm.budget
        )));
    }
    if !(-90.0..=90.0).contains(&farm.latitude) {
        return Err(ServiceError::InvalidInput(format!(
            "纬度超出范围 [-90, 90]: {}",
            farm.latitude
        )));
    }
    if !(-180.0..=180.0).contains(&farm.longitude) {
        return Err(ServiceError::InvalidInput(format!(
            "经度超出范围 [-180, 180]: {}",
            farm.longitude
        )));
    }
    Ok(())
}
