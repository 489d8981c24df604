use crate::config::error::ConfigError;
use serde::{Deserialize, Serialize};

/// 经济评估参数（持久化对象）
///
/// 存储位置：config.json 的 `economics` 段；缺省字段取默认值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomicsConfig {
    /// 默认风险权重（0~1），调用方未指定时使用
    pub default_risk_weight: f64,

    /// 单产变异系数默认值（未提供单产不确定性时）
    pub default_yield_cv: f64,

    /// 价格变异系数默认值（未提供价格不确定性时）
    pub default_price_cv: f64,

    /// 前期投入中人工成本占比（0~1），其余视为收获后支付
    pub upfront_labor_share: f64,

    /// 风险分数低于该值为 LOW
    pub low_risk_threshold: f64,

    /// 风险分数不低于该值为 HIGH
    pub high_risk_threshold: f64,

    /// 首选作物预算利用率低于该值时给出扩种建议
    pub budget_hint_threshold: f64,

    /// 说明文本中最多列出的备选作物数
    pub max_alternatives: usize,

    /// 每次推荐最多评估的候选作物数
    pub max_candidates: usize,

    /// 货币符号
    pub currency_symbol: String,

    /// 说明文本语言（en / zh-CN）
    pub locale: String,
}

impl Default for EconomicsConfig {
    fn default() -> Self {
        Self {
            default_risk_weight: 0.3,
            default_yield_cv: 0.10,
            default_price_cv: 0.15,
            upfront_labor_share: 0.6,
            low_risk_threshold: 0.20,
            high_risk_threshold: 0.40,
            budget_hint_threshold: 0.70,
            max_alternatives: 2,
            max_candidates: 5,
            currency_symbol: "₹".to_string(),
            locale: "en".to_string(),
        }
    }
}

impl EconomicsConfig {
    /// 校验参数取值范围
    pub fn validate(&self) -> Result<(), ConfigError> {
        let unit_interval = [
            ("default_risk_weight", self.default_risk_weight),
            ("upfront_labor_share", self.upfront_labor_share),
            ("budget_hint_threshold", self.budget_hint_threshold),
        ];
        for (key, value) in unit_interval {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::invalid(key, value, "必须在 [0, 1] 区间"));
            }
        }

        let non_negative = [
            ("default_yield_cv", self.default_yield_cv),
            ("default_price_cv", self.default_price_cv),
            ("low_risk_threshold", self.low_risk_threshold),
        ];
        for (key, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid(key, value, "必须为非负有限值"));
            }
        }

        if !self.high_risk_threshold.is_finite() || self.high_risk_threshold <= self.low_risk_threshold {
            return Err(ConfigError::invalid(
                "high_risk_threshold",
                self.high_risk_threshold,
                "必须大于 low_risk_threshold",
            ));
        }

        if self.max_candidates == 0 {
            return Err(ConfigError::invalid("max_candidates", 0, "至少为 1"));
        }

        if !crate::i18n::is_supported_locale(&self.locale) {
            return Err(ConfigError::invalid("locale", &self.locale, "不支持的语言"));
        }

        Ok(())
    }
}
