// ==========================================
// 作物经济决策系统 - 经济评估领域模型
// ==========================================
// 用途: 单作物单面积的经济评估结果,创建后只读
// 红线: expected_profit = expected_revenue - total_costs
//       risk_adjusted_profit = expected_profit - risk_penalty
// ==========================================

use crate::domain::cost::CostBreakdown;
use crate::domain::types::CostSource;
use serde::{Deserialize, Serialize};

// ==========================================
// ProfitScenarios - 乐观/悲观情景
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfitScenarios {
    #[serde(with = "crate::domain::float_serde::nan_if_null")]
    pub optimistic_profit: f64,  // 产量、价格各上浮 cv
    #[serde(with = "crate::domain::float_serde::nan_if_null")]
    pub pessimistic_profit: f64, // 产量、价格各下浮 cv
}

// ==========================================
// EconomicRecord - 经济评估记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomicRecord {
    // ===== 标识 =====
    pub crop: String,   // 作物
    pub area_ha: f64,   // 面积 (公顷, >0)

    // ===== 输入回显 =====
    pub predicted_yield_kg_ha: f64,  // 预测单产 (kg/ha)
    pub predicted_price_per_kg: f64, // 预测价格 (/kg)
    pub yield_uncertainty: f64,      // 单产标准差
    pub price_uncertainty: f64,      // 价格标准差
    pub risk_weight: f64,            // 风险权重 (0~1)

    // ===== 收入与成本 =====
    pub total_yield_kg: f64,   // 总产量
    pub expected_revenue: f64, // 预期收入
    pub total_costs: f64,      // 总成本
    pub cost_per_ha: f64,      // 每公顷总成本
    pub upfront_costs: f64,    // 前期投入

    // ===== 利润指标 =====
    pub expected_profit: f64,       // 预期利润
    #[serde(with = "crate::domain::float_serde::nan_if_null")]
    pub risk_penalty: f64,          // 风险扣减
    #[serde(with = "crate::domain::float_serde::nan_if_null")]
    pub risk_adjusted_profit: f64,  // 风险调整利润
    pub profit_margin_percent: f64, // 利润率 (%), 收入<=0 时为 -100
    pub return_on_investment: f64,  // ROI (%), 总成本<=0 时为 0
    #[serde(with = "crate::domain::float_serde::infinite_if_null")]
    pub break_even_yield_kg_ha: f64, // 盈亏平衡单产, 价格<=0 时为 +inf (JSON 中为 null)

    // ===== 风险指标 =====
    #[serde(with = "crate::domain::float_serde::infinite_if_null")]
    pub risk_score: f64, // yield_cv + price_cv
    #[serde(with = "crate::domain::float_serde::infinite_if_null")]
    pub yield_cv: f64,   // 单产变异系数
    #[serde(with = "crate::domain::float_serde::infinite_if_null")]
    pub price_cv: f64,   // 价格变异系数
    pub scenarios: ProfitScenarios,

    // ===== 成本明细 =====
    pub cost_breakdown: CostBreakdown,
    pub cost_source: CostSource, // 是否使用了默认作物成本
}

impl EconomicRecord {
    /// 每公顷风险调整利润（推荐分数）
    pub fn risk_adjusted_profit_per_ha(&self) -> f64 {
        self.risk_adjusted_profit / self.area_ha
    }

    /// 每公顷预期利润
    pub fn expected_profit_per_ha(&self) -> f64 {
        self.expected_profit / self.area_ha
    }

    /// 利润率是否为 "收入为零" 的哨兵值
    pub fn has_undefined_margin(&self) -> bool {
        self.expected_revenue <= 0.0
    }

    /// 在给定单产/价格下重新计算 (利润, 利润率)
    ///
    /// 总成本保持不变; 收入<=0 时利润率记为 0
    pub fn profit_at(&self, yield_kg_ha: f64, price_per_kg: f64) -> (f64, f64) {
        let revenue = yield_kg_ha * self.area_ha * price_per_kg;
        let profit = revenue - self.total_costs;
        let margin = if revenue > 0.0 {
            profit / revenue * 100.0
        } else {
            0.0
        };
        (profit, margin)
    }
}
