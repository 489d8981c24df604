// ==========================================
// ExplanationRenderer 集成测试
// ==========================================
// 测试目标: 说明文本的顺序、内容、多语言
// ==========================================

mod test_helpers;

use crop_advisor::config::EconomicsConfig;
use crop_advisor::engine::{EvaluationRequest, ExplanationRenderer, RecommendationRanker};
use test_helpers::{default_evaluator, maize_record, rice_record, wheat_record};

#[test]
fn test_no_feasible_crops_single_line() {
    let ranked = RecommendationRanker::new().rank(&[wheat_record(), rice_record()], 1000.0);
    let lines = ExplanationRenderer::default().explain(&ranked);

    assert_eq!(
        lines,
        vec!["No crops are feasible within the given budget. Consider increasing budget or reducing area."]
    );
}

#[test]
fn test_empty_ranking_single_line() {
    let lines = ExplanationRenderer::default().explain(&[]);
    assert_eq!(lines.len(), 1);
}

#[test]
fn test_full_explanation() {
    let ranked = RecommendationRanker::new().rank(
        &[wheat_record(), rice_record(), maize_record()],
        100000.0,
    );
    let lines = ExplanationRenderer::default().explain(&ranked);

    assert_eq!(
        lines,
        vec![
            "🥇 TOP RECOMMENDATION: MAIZE",
            "Expected profit: ₹171,120 (Margin: 65.5%)",
            "Upfront investment: ₹51,000",
            "Risk level: MODERATE RISK",
            "Alternative options:",
            "• Wheat: ₹93,500 profit (48.3% margin)",
            "💡 You're using only 51% of your budget. Consider expanding area or investing in higher-value crops.",
        ]
    );
}

#[test]
fn test_single_feasible_high_utilization() {
    let ranked = RecommendationRanker::new().rank(&[wheat_record(), rice_record()], 60000.0);
    let lines = ExplanationRenderer::default().explain(&ranked);

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "🥇 TOP RECOMMENDATION: WHEAT");
    assert!(!lines.iter().any(|l| l.contains("Alternative")));
    assert!(!lines.iter().any(|l| l.contains("budget")));
}

#[test]
fn test_alternatives_capped_at_two() {
    let evaluator = default_evaluator();
    let records = vec![
        evaluator.evaluate("soybean", 1.0, 2800.0, 65.0),
        evaluator.evaluate("maize", 1.0, 6800.0, 19.2),
        evaluator.evaluate("wheat", 1.0, 4500.0, 21.8),
        evaluator.evaluate("rice", 1.0, 5200.0, 22.5),
    ];
    let ranked = RecommendationRanker::new().rank(&records, 40000.0);
    assert_eq!(ranked.iter().filter(|e| e.budget_feasible).count(), 4);

    let lines = ExplanationRenderer::default().explain(&ranked);
    let alternatives = lines.iter().filter(|l| l.starts_with("• ")).count();
    assert_eq!(alternatives, 2);
}

#[test]
fn test_high_risk_tier() {
    let record = default_evaluator().evaluate_request(
        &EvaluationRequest::new("wheat", 1.0, 4500.0, 21.5).with_uncertainty(1350.0, 4.3),
    );
    let ranked = RecommendationRanker::new().rank(&[record], 30000.0);
    let lines = ExplanationRenderer::default().explain(&ranked);

    assert_eq!(lines[3], "Risk level: HIGH RISK");
}

#[test]
fn test_zh_cn_locale() {
    let config = EconomicsConfig {
        locale: "zh-CN".to_string(),
        ..EconomicsConfig::default()
    };
    let ranked = RecommendationRanker::new().rank(&[wheat_record()], 60000.0);
    let lines = ExplanationRenderer::new(&config).explain(&ranked);

    assert_eq!(lines[0], "🥇 首选推荐: WHEAT");
    assert_eq!(lines[3], "风险等级: 中等风险");
}
