// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的评估器、典型作物记录、农场画像
// ==========================================

#![allow(dead_code)]

use crop_advisor::config::{CostTable, EconomicsConfig};
use crop_advisor::domain::{EconomicRecord, FarmProfile, PlantingSeason};
use crop_advisor::engine::EconomicEvaluator;
use std::sync::Arc;

/// 使用内置成本表与默认参数的评估器
pub fn default_evaluator() -> EconomicEvaluator {
    EconomicEvaluator::new(Arc::new(CostTable::builtin()), &EconomicsConfig::default())
}

/// 小麦: 2 ha, 4500 kg/ha, 21.5 /kg
///
/// 总成本 100000, 收入 193500, 利润 93500, 前期投入 55600
pub fn wheat_record() -> EconomicRecord {
    default_evaluator().evaluate("wheat", 2.0, 4500.0, 21.5)
}

/// 水稻: 3 ha, 5200 kg/ha, 22.5 /kg
///
/// 前期投入 33700 × 3 = 101100
pub fn rice_record() -> EconomicRecord {
    default_evaluator().evaluate("rice", 3.0, 5200.0, 22.5)
}

/// 玉米: 2 ha, 6800 kg/ha, 19.2 /kg
///
/// 前期投入 25500 × 2 = 51000
pub fn maize_record() -> EconomicRecord {
    default_evaluator().evaluate("maize", 2.0, 6800.0, 19.2)
}

/// 标准测试农场
pub fn farm(area_ha: f64, budget: f64) -> FarmProfile {
    FarmProfile {
        latitude: 21.1,
        longitude: 79.0,
        area_ha,
        budget,
        planting_season: PlantingSeason::Kharif,
        preferred_crops: None,
        site: None,
    }
}

/// 指定偏好作物的测试农场
pub fn farm_with_crops(area_ha: f64, budget: f64, crops: &[&str]) -> FarmProfile {
    FarmProfile {
        preferred_crops: Some(crops.iter().map(|c| c.to_string()).collect()),
        ..farm(area_ha, budget)
    }
}
