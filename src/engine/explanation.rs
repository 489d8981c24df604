// ==========================================
// 作物经济决策系统 - 推荐说明生成
// ==========================================
// 职责: 将排序结果转为可读的说明文本
// 输入: 排序后的 RankedEntry 列表
// 输出: 有序的独立文本行 (拼接方式由调用方决定)
// 规则: 首选作物 → 风险等级 → 备选作物 → 预算利用提示
// ==========================================

use crate::config::EconomicsConfig;
use crate::domain::recommendation::RankedEntry;
use crate::domain::types::RiskTier;
use crate::i18n::{t, t_with_args};

// ==========================================
// ExplanationRenderer - 说明生成器
// ==========================================
#[derive(Debug, Clone)]
pub struct ExplanationRenderer {
    locale: String,
    currency_symbol: String,
    low_risk_threshold: f64,
    high_risk_threshold: f64,
    budget_hint_threshold: f64,
    max_alternatives: usize,
}

impl ExplanationRenderer {
    pub fn new(config: &EconomicsConfig) -> Self {
        Self {
            locale: config.locale.clone(),
            currency_symbol: config.currency_symbol.clone(),
            low_risk_threshold: config.low_risk_threshold,
            high_risk_threshold: config.high_risk_threshold,
            budget_hint_threshold: config.budget_hint_threshold,
            max_alternatives: config.max_alternatives,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// 生成说明文本
    ///
    /// # 规则
    /// - 无可行作物: 仅返回一行 (增加预算或缩小面积)
    /// - 首选: 作物名、预期利润与利润率、前期投入
    /// - 风险等级: LOW / MODERATE / HIGH
    /// - 备选: 名次 2、3 (最多 max_alternatives 个)
    /// - 首选预算利用率 < budget_hint_threshold: 扩种建议
    pub fn explain(&self, ranked: &[RankedEntry]) -> Vec<String> {
        let feasible: Vec<&RankedEntry> = ranked.iter().filter(|e| e.budget_feasible).collect();

        let Some(top) = feasible.first() else {
            return vec![t("explain.no_feasible", &self.locale)];
        };

        let mut lines = Vec::new();
        let record = &top.record;

        // 首选作物
        lines.push(t_with_args(
            "explain.top_pick",
            &self.locale,
            &[("crop", record.crop.to_uppercase().as_str())],
        ));
        lines.push(t_with_args(
            "explain.expected_profit",
            &self.locale,
            &[
                ("profit", self.money(record.expected_profit).as_str()),
                ("margin", format!("{:.1}", record.profit_margin_percent).as_str()),
            ],
        ));
        lines.push(t_with_args(
            "explain.upfront",
            &self.locale,
            &[("upfront", self.money(record.upfront_costs).as_str())],
        ));

        // 风险等级
        let tier = self.risk_tier(record.risk_score);
        lines.push(t_with_args(
            "explain.risk_level",
            &self.locale,
            &[("tier", t(tier.message_key(), &self.locale).as_str())],
        ));

        // 备选作物
        if feasible.len() > 1 {
            lines.push(t("explain.alternatives_header", &self.locale));
            for alt in feasible.iter().skip(1).take(self.max_alternatives) {
                lines.push(t_with_args(
                    "explain.alternative",
                    &self.locale,
                    &[
                        ("crop", title_case(&alt.record.crop).as_str()),
                        ("profit", self.money(alt.record.expected_profit).as_str()),
                        ("margin", format!("{:.1}", alt.record.profit_margin_percent).as_str()),
                    ],
                ));
            }
        }

        // 预算利用提示
        if let Some(utilization) = top.budget_utilization {
            if utilization < self.budget_hint_threshold {
                lines.push(t_with_args(
                    "explain.budget_hint",
                    &self.locale,
                    &[("pct", format!("{:.0}", utilization * 100.0).as_str())],
                ));
            }
        }

        lines
    }

    /// 风险等级
    pub fn risk_tier(&self, risk_score: f64) -> RiskTier {
        RiskTier::from_score(risk_score, self.low_risk_threshold, self.high_risk_threshold)
    }

    /// 金额格式: 货币符号 + 千分位整数
    pub fn money(&self, value: f64) -> String {
        format!("{}{}", self.currency_symbol, format_thousands(value))
    }
}

impl Default for ExplanationRenderer {
    fn default() -> Self {
        Self::new(&EconomicsConfig::default())
    }
}

/// 千分位整数格式 (四舍五入到整数)
///
/// 非有限值原样输出
pub fn format_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if value < 0.0 && digits != "0" {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// 单词首字母大写 ("soybean" → "Soybean", "sweet corn" → "Sweet Corn")
fn title_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut at_word_start = true;
    for ch in name.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                result.extend(ch.to_uppercase());
            } else {
                result.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(ch);
            at_word_start = true;
        }
    }
    result
}
