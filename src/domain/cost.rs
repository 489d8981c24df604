// ==========================================
// 作物经济决策系统 - 成本结构领域模型
// ==========================================
// 单位: 货币 / 公顷
// 红线: 各类别非负,合计 = 每公顷总成本
// ==========================================

use crate::domain::types::CostCategory;
use serde::{Deserialize, Serialize};

// ==========================================
// CostBreakdown - 每公顷成本明细
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub seed: f64,       // 种子
    pub fertilizer: f64, // 化肥
    pub pesticide: f64,  // 农药
    pub labor: f64,      // 人工
    pub machinery: f64,  // 农机
    pub irrigation: f64, // 灌溉
    pub other: f64,      // 其他
}

impl CostBreakdown {
    /// 按类别取值
    pub fn get(&self, category: CostCategory) -> f64 {
        match category {
            CostCategory::Seed => self.seed,
            CostCategory::Fertilizer => self.fertilizer,
            CostCategory::Pesticide => self.pesticide,
            CostCategory::Labor => self.labor,
            CostCategory::Machinery => self.machinery,
            CostCategory::Irrigation => self.irrigation,
            CostCategory::Other => self.other,
        }
    }

    /// 按固定顺序遍历 (类别, 金额)
    pub fn iter(&self) -> impl Iterator<Item = (CostCategory, f64)> + '_ {
        CostCategory::ALL.iter().map(move |c| (*c, self.get(*c)))
    }

    /// 每公顷总成本
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, v)| v).sum()
    }

    /// 每公顷前期现金投入
    ///
    /// 种子 + 化肥 + 农药 + labor_share × 人工;
    /// 农机/灌溉/其他与剩余人工视为收获后支付
    pub fn upfront_per_ha(&self, labor_share: f64) -> f64 {
        self.seed + self.fertilizer + self.pesticide + self.labor * labor_share
    }

    /// 第一个非法类别（负数或非有限值）
    pub fn first_invalid(&self) -> Option<(CostCategory, f64)> {
        self.iter().find(|(_, v)| !v.is_finite() || *v < 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheat() -> CostBreakdown {
        CostBreakdown {
            seed: 3000.0,
            fertilizer: 12000.0,
            pesticide: 2000.0,
            labor: 18000.0,
            machinery: 8000.0,
            irrigation: 5000.0,
            other: 2000.0,
        }
    }

    #[test]
    fn test_total_is_sum_of_categories() {
        assert_eq!(wheat().total(), 50000.0);
    }

    #[test]
    fn test_upfront_per_ha() {
        assert_eq!(wheat().upfront_per_ha(0.6), 27800.0);
        assert_eq!(wheat().upfront_per_ha(1.0), 35000.0);
    }

    #[test]
    fn test_first_invalid() {
        assert_eq!(wheat().first_invalid(), None);

        let mut bad = wheat();
        bad.irrigation = -1.0;
        assert_eq!(bad.first_invalid(), Some((CostCategory::Irrigation, -1.0)));

        bad.irrigation = f64::NAN;
        assert!(bad.first_invalid().is_some());
    }
}
