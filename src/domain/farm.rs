// ==========================================
// 作物经济决策系统 - 农场与估产领域模型
// ==========================================
// 用途: 推荐请求的输入 (农场画像) 与外部估产结果
// 红线: 领域层不做网络请求,土壤/气象数据由调用方提供
// ==========================================

use crate::domain::types::PlantingSeason;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// SiteConditions - 地块条件
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiteConditions {
    #[serde(default = "default_organic_carbon")]
    pub organic_carbon: f64, // 有机碳
    #[serde(default = "default_growing_degree_days")]
    pub growing_degree_days: f64, // 季节积温 (base 10°C)
}

fn default_organic_carbon() -> f64 {
    10.0
}

fn default_growing_degree_days() -> f64 {
    2500.0
}

impl Default for SiteConditions {
    fn default() -> Self {
        Self {
            organic_carbon: default_organic_carbon(),
            growing_degree_days: default_growing_degree_days(),
        }
    }
}

// ==========================================
// FarmProfile - 农场画像
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmProfile {
    pub latitude: f64,
    pub longitude: f64,
    pub area_ha: f64, // 面积 (公顷)
    pub budget: f64,  // 可用前期资金

    #[serde(default)]
    pub planting_season: PlantingSeason,

    /// 偏好作物（指定时替代季节候选列表）
    #[serde(default)]
    pub preferred_crops: Option<Vec<String>>,

    #[serde(default)]
    pub site: Option<SiteConditions>,
}

impl FarmProfile {
    /// 候选作物列表
    ///
    /// # 规则
    /// - 有偏好作物: 使用偏好作物 (去空白、小写、去重)
    /// - 否则: 使用种植季默认候选
    /// - 最多 max 个
    pub fn candidate_crops(&self, max: usize) -> Vec<String> {
        let mut crops: Vec<String> = Vec::new();

        match &self.preferred_crops {
            Some(preferred) if !preferred.is_empty() => {
                for crop in preferred {
                    let normalized = crop.trim().to_lowercase();
                    if !normalized.is_empty() && !crops.contains(&normalized) {
                        crops.push(normalized);
                    }
                }
            }
            _ => {
                crops.extend(
                    self.planting_season
                        .candidate_crops()
                        .iter()
                        .map(|c| c.to_string()),
                );
            }
        }

        crops.truncate(max);
        crops
    }

    /// 地块条件（缺省时使用默认值）
    pub fn site_conditions(&self) -> SiteConditions {
        self.site.unwrap_or_default()
    }

    /// 农场 ID: 经纬度文本的 UUID v5 (OID 命名空间), 跨版本稳定
    pub fn farm_id(&self) -> String {
        let key = format!("{}_{}", self.latitude, self.longitude);
        format!("farm_{}", Uuid::new_v5(&Uuid::NAMESPACE_OID, key.as_bytes()).simple())
    }
}

// ==========================================
// CropEstimate - 外部估产/估价结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropEstimate {
    pub crop: String,
    pub predicted_yield_kg_ha: f64,
    pub predicted_price_per_kg: f64,
    #[serde(default)]
    pub yield_uncertainty: f64, // 0 表示未提供
    #[serde(default)]
    pub price_uncertainty: f64, // 0 表示未提供
}
