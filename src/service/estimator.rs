// ==========================================
// 作物经济决策系统 - 估产协作方接口
// ==========================================
// 职责: 定义单产/价格预测的读取接口 + 规则基线实现
// 红线: 模型训练、价格时间序列预测、土壤/气象抓取不在本模块
// ==========================================

use crate::domain::farm::{CropEstimate, FarmProfile};
use crate::service::error::EstimateError;
use async_trait::async_trait;
use std::collections::HashMap;

// ==========================================
// CropEstimator Trait
// ==========================================
// 实现者: BaselineEstimator (规则基线) / 外部模型服务
#[async_trait]
pub trait CropEstimator: Send + Sync {
    /// 预测某作物在该农场的单产与价格
    async fn estimate(&self, farm: &FarmProfile, crop: &str) -> Result<CropEstimate, EstimateError>;
}

// ==========================================
// BaselineEstimator - 规则基线估产
// ==========================================
// 无模型可用时使用: 基准单产 × 有机碳因子 × 积温因子
#[derive(Debug, Clone)]
pub struct BaselineEstimator {
    base_yields: HashMap<String, f64>, // kg/ha
    base_prices: HashMap<String, f64>, // /kg
    fallback_yield: f64,
    fallback_price: f64,
    min_yield: f64,
    yield_uncertainty_ratio: f64,
    price_uncertainty_ratio: f64,
}

impl BaselineEstimator {
    pub fn new() -> Self {
        let base_yields = [
            ("rice", 5200.0),
            ("wheat", 4500.0),
            ("maize", 6800.0),
            ("soybean", 2800.0),
            ("cotton", 1800.0),
        ];
        let base_prices = [
            ("rice", 22.5),
            ("wheat", 21.8),
            ("maize", 19.2),
            ("soybean", 65.0),
            ("cotton", 85.0),
        ];

        Self {
            base_yields: base_yields.iter().map(|(c, v)| (c.to_string(), *v)).collect(),
            base_prices: base_prices.iter().map(|(c, v)| (c.to_string(), *v)).collect(),
            fallback_yield: 4000.0,
            fallback_price: 25.0,
            min_yield: 1000.0,
            yield_uncertainty_ratio: 0.10,
            price_uncertainty_ratio: 0.15,
        }
    }

    /// 同步估算
    ///
    /// # 规则
    /// - 单产 = max(基准单产 × (1 + (有机碳 - 10) × 0.02) × (1 + (积温 - 2500) × 0.0001), 1000)
    /// - 价格 = 基准价格
    /// - 不确定性 = 单产 10% / 价格 15%
    pub fn estimate_for(&self, farm: &FarmProfile, crop: &str) -> CropEstimate {
        let site = farm.site_conditions();
        let key = crop.trim().to_lowercase();

        let base_yield = self.base_yields.get(&key).copied().unwrap_or(self.fallback_yield);
        let soil_factor = 1.0 + (site.organic_carbon - 10.0) * 0.02;
        let weather_factor = 1.0 + (site.growing_degree_days - 2500.0) * 0.0001;
        let predicted_yield = (base_yield * soil_factor * weather_factor).max(self.min_yield);

        let predicted_price = self.base_prices.get(&key).copied().unwrap_or(self.fallback_price);

        CropEstimate {
            crop: key,
            predicted_yield_kg_ha: predicted_yield,
            predicted_price_per_kg: predicted_price,
            yield_uncertainty: predicted_yield * self.yield_uncertainty_ratio,
            price_uncertainty: predicted_price * self.price_uncertainty_ratio,
        }
    }
}

impl Default for BaselineEstimator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CropEstimator for BaselineEstimator {
    async fn estimate(&self, farm: &FarmProfile, crop: &str) -> Result<CropEstimate, EstimateError> {
        if crop.trim().is_empty() {
            return Err(EstimateError::UnsupportedCrop(crop.to_string()));
        }
        Ok(self.estimate_for(farm, crop))
    }
}
