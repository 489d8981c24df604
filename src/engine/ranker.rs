// ==========================================
// 作物经济决策系统 - 推荐排序引擎
// ==========================================
// 职责: 预算可行性划分 + 可行/不可行集合内排序
// 输入: EconomicRecord 列表 + 预算
// 输出: 排序后的 RankedEntry 列表 (可行在前)
// 红线: 预算是硬门槛,可行作物永远排在不可行作物之前
//       不修改调用方的记录,产出独立副本
// ==========================================

use crate::domain::economics::EconomicRecord;
use crate::domain::recommendation::RankedEntry;
use std::cmp::Ordering;

// ==========================================
// RecommendationRanker - 推荐排序引擎
// ==========================================
pub struct RecommendationRanker {
    // 无状态引擎,不需要注入依赖
}

impl RecommendationRanker {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 排序推荐
    ///
    /// 排序规则:
    /// 1) upfront_costs <= budget 为可行
    /// 2) 可行: 每公顷风险调整利润降序, 名次 1..k
    /// 3) 不可行: 每公顷预期利润降序, 无名次, 分数 0
    /// 4) 同分保持输入顺序 (稳定排序)
    /// 5) 分数为 NaN 的条目排在同一集合的有限分数之后
    ///
    /// # 参数
    /// - `records`: 经济评估记录
    /// - `budget`: 可用前期资金
    ///
    /// # 返回
    /// 可行条目 ++ 不可行条目
    pub fn rank(&self, records: &[EconomicRecord], budget: f64) -> Vec<RankedEntry> {
        let (mut feasible, mut infeasible): (Vec<&EconomicRecord>, Vec<&EconomicRecord>) =
            records.iter().partition(|r| Self::is_feasible(r, budget));

        feasible.sort_by(|a, b| {
            Self::compare_desc(a.risk_adjusted_profit_per_ha(), b.risk_adjusted_profit_per_ha())
        });
        infeasible.sort_by(|a, b| {
            Self::compare_desc(a.expected_profit_per_ha(), b.expected_profit_per_ha())
        });

        tracing::debug!(
            budget,
            feasible = feasible.len(),
            infeasible = infeasible.len(),
            "预算可行性划分完成"
        );

        let mut ranked = Vec::with_capacity(records.len());
        ranked.extend(
            feasible
                .into_iter()
                .enumerate()
                .map(|(i, r)| RankedEntry::feasible(r.clone(), budget, i as u32 + 1)),
        );
        ranked.extend(
            infeasible
                .into_iter()
                .map(|r| RankedEntry::infeasible(r.clone(), budget)),
        );
        ranked
    }

    /// 预算可行性判定
    pub fn is_feasible(record: &EconomicRecord, budget: f64) -> bool {
        record.upfront_costs <= budget
    }

    // ==========================================
    // 比较方法
    // ==========================================

    /// 降序比较; NaN 排在有限分数之后, 同分保持输入顺序
    fn compare_desc(a: f64, b: f64) -> Ordering {
        Self::sort_key(b).total_cmp(&Self::sort_key(a))
    }

    /// NaN → -inf; -0.0 → 0.0 (total_cmp 区分正负零)
    fn sort_key(score: f64) -> f64 {
        if score.is_nan() {
            f64::NEG_INFINITY
        } else {
            score + 0.0
        }
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for RecommendationRanker {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EconomicEvaluator;

    fn records() -> Vec<EconomicRecord> {
        let evaluator = EconomicEvaluator::with_defaults();
        vec![
            evaluator.evaluate("wheat", 2.0, 4500.0, 21.5),
            evaluator.evaluate("rice", 2.0, 5200.0, 19.2),
            evaluator.evaluate("maize", 2.0, 6800.0, 18.8),
        ]
    }

    #[test]
    fn test_compare_desc() {
        assert_eq!(RecommendationRanker::compare_desc(2.0, 1.0), Ordering::Less);
        assert_eq!(RecommendationRanker::compare_desc(1.0, 2.0), Ordering::Greater);
        assert_eq!(RecommendationRanker::compare_desc(3.0, 3.0), Ordering::Equal);
        assert_eq!(RecommendationRanker::compare_desc(-0.0, 0.0), Ordering::Equal);
        // NaN 排在所有有限分数之后
        assert_eq!(RecommendationRanker::compare_desc(f64::NAN, 1.0), Ordering::Greater);
        assert_eq!(RecommendationRanker::compare_desc(1.0, f64::NAN), Ordering::Less);
        assert_eq!(RecommendationRanker::compare_desc(f64::NAN, f64::NAN), Ordering::Equal);
    }

    #[test]
    fn test_rank_empty() {
        assert!(RecommendationRanker::new().rank(&[], 1000.0).is_empty());
    }

    #[test]
    fn test_rank_does_not_mutate_input() {
        let input = records();
        let before = input.clone();
        let _ = RecommendationRanker::new().rank(&input, 80000.0);
        assert_eq!(input, before);
    }

    #[test]
    fn test_rank_budget_gate() {
        // upfront: wheat 55600, rice 2*(2500+15000+3000+13200)=67400, maize 2*(4000+10000+2500+9000)=51000
        let ranked = RecommendationRanker::new().rank(&records(), 60000.0);

        assert_eq!(ranked.len(), 3);
        assert!(ranked[0].budget_feasible);
        assert!(ranked[1].budget_feasible);
        assert!(!ranked[2].budget_feasible);
        assert_eq!(ranked[2].crop(), "rice");
        assert_eq!(ranked[2].rank, None);
        assert_eq!(ranked[2].recommendation_score, 0.0);
        assert_eq!(ranked[2].budget_shortfall, Some(67400.0 - 60000.0));
        assert_eq!(ranked[2].budget_utilization, None);
    }

    #[test]
    fn test_rank_feasible_order_by_risk_adjusted_profit_per_ha() {
        let ranked = RecommendationRanker::new().rank(&records(), 100000.0);

        let ranks: Vec<Option<u32>> = ranked.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![Some(1), Some(2), Some(3)]);
        for pair in ranked.windows(2) {
            assert!(pair[0].recommendation_score >= pair[1].recommendation_score);
        }
        // maize: 6800*18.8 ≈ 127840/ha 收入, 最高
        assert_eq!(ranked[0].crop(), "maize");
    }
}
