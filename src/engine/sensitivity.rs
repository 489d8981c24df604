// ==========================================
// 作物经济决策系统 - 敏感性分析
// ==========================================
// 职责: 价格/单产冲击下的利润与利润率
// 输入: 单条 EconomicRecord + 冲击百分比
// 输出: 6 个情景 (价格 -p/0/+p, 单产 -y/0/+y)
// 红线: 总成本取记录中的 total_costs; 收入<=0 时利润率为 0
// ==========================================

use crate::domain::economics::EconomicRecord;
use crate::domain::recommendation::SensitivityOutcome;
use std::collections::BTreeMap;
use std::fmt;

/// 冲击类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShockKind {
    Price,
    Yield,
}

impl fmt::Display for ShockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShockKind::Price => write!(f, "price"),
            ShockKind::Yield => write!(f, "yield"),
        }
    }
}

/// 情景键, 如 `price_-10pct` / `yield_+0pct`
///
/// -0 与 0 为同一情景
pub fn scenario_key(kind: ShockKind, change_pct: f64) -> String {
    format!("{}_{:+}pct", kind, change_pct + 0.0)
}

// ==========================================
// SensitivityAnalyzer - 敏感性分析
// ==========================================
pub struct SensitivityAnalyzer {
    // 无状态
}

impl SensitivityAnalyzer {
    pub fn new() -> Self {
        Self {}
    }

    /// 默认 ±10% 冲击
    pub fn analyze(&self, record: &EconomicRecord) -> BTreeMap<String, SensitivityOutcome> {
        self.sensitivity(record, 10.0, 10.0)
    }

    /// 敏感性分析
    ///
    /// # 参数
    /// - `record`: 经济评估记录
    /// - `price_change_pct`: 价格冲击幅度 (%)
    /// - `yield_change_pct`: 单产冲击幅度 (%)
    ///
    /// # 返回
    /// 情景键 → {profit, margin}
    pub fn sensitivity(
        &self,
        record: &EconomicRecord,
        price_change_pct: f64,
        yield_change_pct: f64,
    ) -> BTreeMap<String, SensitivityOutcome> {
        let base_yield = record.predicted_yield_kg_ha;
        let base_price = record.predicted_price_per_kg;
        let mut scenarios = BTreeMap::new();

        for change in [-price_change_pct, 0.0, price_change_pct] {
            let price = base_price * (1.0 + change / 100.0);
            let (profit, margin) = record.profit_at(base_yield, price);
            scenarios.insert(
                scenario_key(ShockKind::Price, change),
                SensitivityOutcome { profit, margin },
            );
        }

        for change in [-yield_change_pct, 0.0, yield_change_pct] {
            let yield_kg_ha = base_yield * (1.0 + change / 100.0);
            let (profit, margin) = record.profit_at(yield_kg_ha, base_price);
            scenarios.insert(
                scenario_key(ShockKind::Yield, change),
                SensitivityOutcome { profit, margin },
            );
        }

        scenarios
    }
}

impl Default for SensitivityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_key_format() {
        assert_eq!(scenario_key(ShockKind::Price, -10.0), "price_-10pct");
        assert_eq!(scenario_key(ShockKind::Price, 0.0), "price_+0pct");
        assert_eq!(scenario_key(ShockKind::Yield, 10.0), "yield_+10pct");
        assert_eq!(scenario_key(ShockKind::Yield, 7.5), "yield_+7.5pct");
        assert_eq!(scenario_key(ShockKind::Price, -0.0), "price_+0pct");
    }
}
