// ==========================================
// 作物经济决策系统 - 领域类型定义
// ==========================================
// 职责: 成本类别、风险等级、种植季、成本来源
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 成本类别 (Cost Category)
// ==========================================
// 红线: 类别固定且穷尽,合计即每公顷总成本
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    Seed,       // 种子
    Fertilizer, // 化肥
    Pesticide,  // 农药
    Labor,      // 人工
    Machinery,  // 农机
    Irrigation, // 灌溉
    Other,      // 其他
}

impl CostCategory {
    /// 全部类别（固定顺序）
    pub const ALL: [CostCategory; 7] = [
        CostCategory::Seed,
        CostCategory::Fertilizer,
        CostCategory::Pesticide,
        CostCategory::Labor,
        CostCategory::Machinery,
        CostCategory::Irrigation,
        CostCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CostCategory::Seed => "seed",
            CostCategory::Fertilizer => "fertilizer",
            CostCategory::Pesticide => "pesticide",
            CostCategory::Labor => "labor",
            CostCategory::Machinery => "machinery",
            CostCategory::Irrigation => "irrigation",
            CostCategory::Other => "other",
        }
    }
}

impl fmt::Display for CostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 风险等级 (Risk Tier)
// ==========================================
// 顺序: Low < Moderate < High
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    Low,      // 低风险
    Moderate, // 中等风险
    High,     // 高风险
}

impl RiskTier {
    /// 按风险分数划分等级
    ///
    /// # 规则
    /// - score < low_threshold → LOW
    /// - low_threshold <= score < high_threshold → MODERATE
    /// - score >= high_threshold → HIGH
    pub fn from_score(score: f64, low_threshold: f64, high_threshold: f64) -> Self {
        if score < low_threshold {
            RiskTier::Low
        } else if score < high_threshold {
            RiskTier::Moderate
        } else {
            RiskTier::High
        }
    }

    /// i18n 消息键
    pub fn message_key(&self) -> &'static str {
        match self {
            RiskTier::Low => "risk_tier.low",
            RiskTier::Moderate => "risk_tier.moderate",
            RiskTier::High => "risk_tier.high",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskTier::Low => write!(f, "LOW"),
            RiskTier::Moderate => write!(f, "MODERATE"),
            RiskTier::High => write!(f, "HIGH"),
        }
    }
}

// ==========================================
// 种植季 (Planting Season)
// ==========================================
// kharif: 雨季作物 / rabi: 冬季作物 / zaid: 夏季短季
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlantingSeason {
    #[default]
    Kharif,
    Rabi,
    Zaid,
}

impl PlantingSeason {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlantingSeason::Kharif => "kharif",
            PlantingSeason::Rabi => "rabi",
            PlantingSeason::Zaid => "zaid",
        }
    }

    /// 该季节的候选作物（未指定偏好作物时使用）
    pub fn candidate_crops(&self) -> &'static [&'static str] {
        match self {
            PlantingSeason::Kharif => &["rice", "maize", "cotton", "sugarcane", "soybean"],
            PlantingSeason::Rabi => &["wheat", "barley", "peas", "mustard", "chickpea"],
            PlantingSeason::Zaid => &["maize", "fodder", "vegetables"],
        }
    }
}

impl fmt::Display for PlantingSeason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PlantingSeason {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kharif" => Ok(PlantingSeason::Kharif),
            "rabi" => Ok(PlantingSeason::Rabi),
            "zaid" => Ok(PlantingSeason::Zaid),
            other => Err(format!("未知种植季: {}", other)),
        }
    }
}

// ==========================================
// 成本来源 (Cost Source)
// ==========================================
// Fallback: 未知作物,使用默认作物的成本结构
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CostSource {
    Exact,
    Fallback { default_crop: String },
}

impl CostSource {
    pub fn is_fallback(&self) -> bool {
        matches!(self, CostSource::Fallback { .. })
    }
}
