// ==========================================
// 作物经济决策系统 - 推荐排序领域模型
// ==========================================
// 用途: 排序结果 (经济评估记录 + 预算可行性 + 名次)
// 红线: 不修改原始 EconomicRecord, 排序产出独立副本
// ==========================================

use crate::domain::economics::EconomicRecord;
use serde::{Deserialize, Serialize};

// ==========================================
// RankedEntry - 排序条目
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    #[serde(flatten)]
    pub record: EconomicRecord,

    // ===== 预算可行性 =====
    pub budget_feasible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_utilization: Option<f64>, // 可行时: upfront_costs / budget
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_shortfall: Option<f64>, // 不可行时: upfront_costs - budget

    // ===== 排名 =====
    pub rank: Option<u32>, // 可行条目 1..k, 不可行为 null
    #[serde(with = "crate::domain::float_serde::nan_if_null")]
    pub recommendation_score: f64,
}

impl RankedEntry {
    /// 构造可行条目
    pub fn feasible(record: EconomicRecord, budget: f64, rank: u32) -> Self {
        let utilization = record.upfront_costs / budget;
        let score = record.risk_adjusted_profit_per_ha();
        Self {
            record,
            budget_feasible: true,
            budget_utilization: Some(utilization),
            budget_shortfall: None,
            rank: Some(rank),
            recommendation_score: score,
        }
    }

    /// 构造不可行条目（无名次,分数为 0）
    pub fn infeasible(record: EconomicRecord, budget: f64) -> Self {
        let shortfall = record.upfront_costs - budget;
        Self {
            record,
            budget_feasible: false,
            budget_utilization: None,
            budget_shortfall: Some(shortfall),
            rank: None,
            recommendation_score: 0.0,
        }
    }

    pub fn crop(&self) -> &str {
        &self.record.crop
    }
}

// ==========================================
// SensitivityOutcome - 敏感性情景结果
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityOutcome {
    pub profit: f64,
    pub margin: f64, // 收入<=0 时为 0
}
