// ==========================================
// 作物经济决策系统 - 经济评估引擎
// ==========================================
// 职责: 单作物经济评估 (收入/成本/利润/风险/情景/盈亏平衡)
// 输入: 作物 + 面积 + 外部预测的单产与价格 (+不确定性)
// 输出: EconomicRecord
// 红线: 纯函数,不做输入校验 (area > 0 由调用方保证)
//       退化算术用哨兵值: 利润率 -100 / 盈亏平衡 +inf / ROI 0
// ==========================================

use crate::config::{CostTable, EconomicsConfig};
use crate::domain::economics::{EconomicRecord, ProfitScenarios};
use crate::domain::farm::CropEstimate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// 收入为零时的利润率哨兵值
pub const UNDEFINED_MARGIN_SENTINEL: f64 = -100.0;

// ==========================================
// EvaluationRequest - 评估请求
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub crop: String,
    pub area_ha: f64,
    pub predicted_yield_kg_ha: f64,
    pub predicted_price_per_kg: f64,

    /// 单产标准差, 0 表示未提供 (使用默认 cv)
    #[serde(default)]
    pub yield_uncertainty: f64,

    /// 价格标准差, 0 表示未提供 (使用默认 cv)
    #[serde(default)]
    pub price_uncertainty: f64,

    /// 风险权重, None 使用配置默认值
    #[serde(default)]
    pub risk_weight: Option<f64>,
}

impl EvaluationRequest {
    pub fn new(crop: &str, area_ha: f64, predicted_yield_kg_ha: f64, predicted_price_per_kg: f64) -> Self {
        Self {
            crop: crop.to_string(),
            area_ha,
            predicted_yield_kg_ha,
            predicted_price_per_kg,
            yield_uncertainty: 0.0,
            price_uncertainty: 0.0,
            risk_weight: None,
        }
    }

    pub fn with_uncertainty(mut self, yield_uncertainty: f64, price_uncertainty: f64) -> Self {
        self.yield_uncertainty = yield_uncertainty;
        self.price_uncertainty = price_uncertainty;
        self
    }

    pub fn with_risk_weight(mut self, risk_weight: f64) -> Self {
        self.risk_weight = Some(risk_weight);
        self
    }

    /// 由外部估产结果构造
    pub fn from_estimate(estimate: &CropEstimate, area_ha: f64) -> Self {
        Self::new(
            &estimate.crop,
            area_ha,
            estimate.predicted_yield_kg_ha,
            estimate.predicted_price_per_kg,
        )
        .with_uncertainty(estimate.yield_uncertainty, estimate.price_uncertainty)
    }
}

// ==========================================
// EconomicEvaluator - 经济评估引擎
// ==========================================
// 成本表通过构造注入,测试可替换
#[derive(Debug, Clone)]
pub struct EconomicEvaluator {
    cost_table: Arc<CostTable>,
    default_risk_weight: f64,
    default_yield_cv: f64,
    default_price_cv: f64,
    upfront_labor_share: f64,
}

impl EconomicEvaluator {
    /// 构造函数
    ///
    /// # 参数
    /// - `cost_table`: 成本表
    /// - `config`: 经济参数 (默认风险权重/默认 cv/前期人工占比)
    pub fn new(cost_table: Arc<CostTable>, config: &EconomicsConfig) -> Self {
        Self {
            cost_table,
            default_risk_weight: config.default_risk_weight,
            default_yield_cv: config.default_yield_cv,
            default_price_cv: config.default_price_cv,
            upfront_labor_share: config.upfront_labor_share,
        }
    }

    /// 内置成本表 + 默认参数
    pub fn with_defaults() -> Self {
        Self::new(Arc::new(CostTable::builtin()), &EconomicsConfig::default())
    }

    pub fn cost_table(&self) -> &CostTable {
        &self.cost_table
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 评估单个作物 (默认不确定性与风险权重)
    pub fn evaluate(
        &self,
        crop: &str,
        area_ha: f64,
        predicted_yield_kg_ha: f64,
        predicted_price_per_kg: f64,
    ) -> EconomicRecord {
        self.evaluate_request(&EvaluationRequest::new(
            crop,
            area_ha,
            predicted_yield_kg_ha,
            predicted_price_per_kg,
        ))
    }

    /// 评估单个作物
    ///
    /// # 参数
    /// - `request`: 评估请求
    ///
    /// # 返回
    /// EconomicRecord (所有派生值为输入的确定性函数)
    pub fn evaluate_request(&self, request: &EvaluationRequest) -> EconomicRecord {
        let area_ha = request.area_ha;
        let yield_kg_ha = request.predicted_yield_kg_ha;
        let price = request.predicted_price_per_kg;
        let risk_weight = request.risk_weight.unwrap_or(self.default_risk_weight);

        // 1. 成本结构 (未知作物回退默认作物)
        let resolved = self.cost_table.resolve(&request.crop);
        if resolved.source.is_fallback() {
            tracing::warn!(
                "作物 {} 不在成本表中, 使用默认作物 {} 的成本结构",
                request.crop,
                resolved.crop
            );
        }
        let breakdown = *resolved.breakdown;

        // 2. 总成本
        let cost_per_ha = breakdown.total();
        let total_costs = cost_per_ha * area_ha;

        // 3. 收入与利润
        let total_yield_kg = yield_kg_ha * area_ha;
        let expected_revenue = total_yield_kg * price;
        let expected_profit = expected_revenue - total_costs;

        // 4. 变异系数 (不确定性为 0 视为未提供)
        let yield_cv = coefficient_of_variation(request.yield_uncertainty, yield_kg_ha, self.default_yield_cv);
        let price_cv = coefficient_of_variation(request.price_uncertainty, price, self.default_price_cv);

        // 5. 风险调整
        let risk_score = yield_cv + price_cv;
        let risk_penalty = risk_weight * risk_score * expected_revenue;
        let risk_adjusted_profit = expected_profit - risk_penalty;

        // 6. 利润率
        let profit_margin_percent = if expected_revenue > 0.0 {
            expected_profit / expected_revenue * 100.0
        } else {
            UNDEFINED_MARGIN_SENTINEL
        };

        // 7. 盈亏平衡单产
        let break_even_yield_kg_ha = if price > 0.0 {
            total_costs / (area_ha * price)
        } else {
            f64::INFINITY
        };

        // 8. 前期投入
        let upfront_costs = breakdown.upfront_per_ha(self.upfront_labor_share) * area_ha;

        // 9. ROI
        let return_on_investment = if total_costs > 0.0 {
            expected_profit / total_costs * 100.0
        } else {
            0.0
        };

        // 10. 乐观/悲观情景 (总成本不变)
        let scenarios = ProfitScenarios {
            optimistic_profit: yield_kg_ha * (1.0 + yield_cv) * area_ha * price * (1.0 + price_cv)
                - total_costs,
            pessimistic_profit: yield_kg_ha * (1.0 - yield_cv) * area_ha * price * (1.0 - price_cv)
                - total_costs,
        };

        tracing::debug!(
            crop = %request.crop,
            area_ha,
            expected_profit,
            risk_adjusted_profit,
            upfront_costs,
            "经济评估完成"
        );

        EconomicRecord {
            crop: request.crop.clone(),
            area_ha,
            predicted_yield_kg_ha: yield_kg_ha,
            predicted_price_per_kg: price,
            yield_uncertainty: request.yield_uncertainty,
            price_uncertainty: request.price_uncertainty,
            risk_weight,
            total_yield_kg,
            expected_revenue,
            total_costs,
            cost_per_ha,
            upfront_costs,
            expected_profit,
            risk_penalty,
            risk_adjusted_profit,
            profit_margin_percent,
            return_on_investment,
            break_even_yield_kg_ha,
            risk_score,
            yield_cv,
            price_cv,
            scenarios,
            cost_breakdown: breakdown,
            cost_source: resolved.source,
        }
    }

    /// 评估外部估产结果
    pub fn evaluate_estimate(&self, estimate: &CropEstimate, area_ha: f64) -> EconomicRecord {
        self.evaluate_request(&EvaluationRequest::from_estimate(estimate, area_ha))
    }
}

impl Default for EconomicEvaluator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// 变异系数: 不确定性 > 0 时为 uncertainty / expected, 否则取默认值
fn coefficient_of_variation(uncertainty: f64, expected: f64, default_cv: f64) -> f64 {
    if uncertainty > 0.0 {
        uncertainty / expected
    } else {
        default_cv
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::CostSource;
    use approx::assert_relative_eq;

    #[test]
    fn test_coefficient_of_variation() {
        assert_eq!(coefficient_of_variation(450.0, 4500.0, 0.1), 0.1);
        assert_eq!(coefficient_of_variation(900.0, 4500.0, 0.1), 0.2);
        // 0 视为未提供
        assert_eq!(coefficient_of_variation(0.0, 4500.0, 0.1), 0.1);
        assert_eq!(coefficient_of_variation(-5.0, 4500.0, 0.15), 0.15);
    }

    #[test]
    fn test_evaluate_wheat_scenario() {
        let evaluator = EconomicEvaluator::with_defaults();
        let record = evaluator.evaluate("wheat", 2.0, 4500.0, 21.5);

        assert_relative_eq!(record.total_costs, 100000.0);
        assert_relative_eq!(record.expected_revenue, 193500.0);
        assert_relative_eq!(record.expected_profit, 93500.0);
        assert_relative_eq!(record.upfront_costs, 55600.0);
        assert_relative_eq!(record.yield_cv, 0.10);
        assert_relative_eq!(record.price_cv, 0.15);
        assert_relative_eq!(record.risk_score, 0.25);
        assert_relative_eq!(record.risk_penalty, 0.3 * 0.25 * 193500.0);
        assert_relative_eq!(record.risk_adjusted_profit, 93500.0 - 14512.5);
        assert_relative_eq!(record.return_on_investment, 93.5);
        assert_relative_eq!(record.break_even_yield_kg_ha, 100000.0 / 43.0);
        assert_eq!(record.cost_source, CostSource::Exact);
    }

    #[test]
    fn test_scenarios_use_same_total_cost() {
        let evaluator = EconomicEvaluator::with_defaults();
        let record = evaluator.evaluate("wheat", 2.0, 4500.0, 21.5);

        let optimistic = 4500.0 * 1.1 * 2.0 * 21.5 * 1.15 - 100000.0;
        let pessimistic = 4500.0 * 0.9 * 2.0 * 21.5 * 0.85 - 100000.0;
        assert_relative_eq!(record.scenarios.optimistic_profit, optimistic, max_relative = 1e-12);
        assert_relative_eq!(record.scenarios.pessimistic_profit, pessimistic, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_price_sentinels() {
        let evaluator = EconomicEvaluator::with_defaults();
        let record = evaluator.evaluate("rice", 1.0, 5000.0, 0.0);

        assert_eq!(record.expected_revenue, 0.0);
        assert_eq!(record.profit_margin_percent, UNDEFINED_MARGIN_SENTINEL);
        assert!(record.break_even_yield_kg_ha.is_infinite());
        assert!(record.has_undefined_margin());
    }

    #[test]
    fn test_zero_cost_table_gives_zero_roi() {
        let mut crops = std::collections::HashMap::new();
        crops.insert("free".to_string(), crate::domain::cost::CostBreakdown::default());
        let table = CostTable::new("free", crops).unwrap();
        let evaluator = EconomicEvaluator::new(Arc::new(table), &EconomicsConfig::default());

        let record = evaluator.evaluate("free", 1.0, 1000.0, 10.0);
        assert_eq!(record.total_costs, 0.0);
        assert_eq!(record.return_on_investment, 0.0);
        assert_eq!(record.upfront_costs, 0.0);
    }

    #[test]
    fn test_explicit_risk_weight_and_uncertainty() {
        let evaluator = EconomicEvaluator::with_defaults();
        let request = EvaluationRequest::new("maize", 1.0, 6800.0, 18.8)
            .with_uncertainty(1360.0, 1.88)
            .with_risk_weight(0.5);
        let record = evaluator.evaluate_request(&request);

        assert_relative_eq!(record.yield_cv, 0.2, max_relative = 1e-12);
        assert_relative_eq!(record.price_cv, 0.1, max_relative = 1e-12);
        assert_relative_eq!(record.risk_score, 0.3, max_relative = 1e-12);
        assert_eq!(record.risk_weight, 0.5);
        assert_relative_eq!(
            record.risk_penalty,
            0.5 * 0.3 * record.expected_revenue,
            max_relative = 1e-12
        );
    }
}
