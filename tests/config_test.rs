// ==========================================
// ConfigManager 集成测试
// ==========================================
// 测试目标: 配置文件 + 外部成本表加载, 并驱动推荐服务
// ==========================================

mod test_helpers;

use crop_advisor::config::{ConfigError, ConfigManager};
use crop_advisor::domain::CostSource;
use crop_advisor::service::{BaselineEstimator, RecommendationService, ServiceError};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;
use test_helpers::farm_with_crops;

const COST_CSV: &str = "\
crop,seed,fertilizer,pesticide,labor,machinery,irrigation,other
millet,1000,2000,500,5000,1500,0,0
wheat,3000,12000,2000,18000,8000,5000,2000
";

fn write_config(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.json");
    fs::write(&path, body).expect("write config");
    path
}

#[test]
fn test_config_with_relative_csv_cost_table() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("costs.csv"), COST_CSV).expect("write csv");
    let path = write_config(
        &dir,
        r#"{
            "economics": { "default_risk_weight": 0.2, "locale": "zh-CN" },
            "cost_table_file": "costs.csv",
            "default_crop": "millet"
        }"#,
    );

    let manager = ConfigManager::from_file(&path).expect("load config");
    assert_eq!(manager.economics().default_risk_weight, 0.2);
    assert_eq!(manager.economics().locale, "zh-CN");
    assert_eq!(manager.economics().max_candidates, 5);

    let table = manager.load_cost_table().expect("load cost table");
    assert_eq!(table.default_crop(), "millet");
    assert_eq!(table.crops(), vec!["millet", "wheat"]);
    assert!(table.resolve("cotton").source.is_fallback());
}

#[tokio::test]
async fn test_service_built_from_config() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("costs.csv"), COST_CSV).expect("write csv");
    let path = write_config(
        &dir,
        r#"{ "cost_table_file": "costs.csv", "default_crop": "millet" }"#,
    );
    let manager = ConfigManager::from_file(&path).expect("load config");

    let service = RecommendationService::from_config(Arc::new(BaselineEstimator::new()), &manager)
        .expect("build service");
    let report = service
        .recommend(&farm_with_crops(1.0, 50000.0, &["millet", "rice"]))
        .await
        .expect("recommendation");

    let rice = report.find("rice").expect("rice entry");
    assert_eq!(
        rice.record.cost_source,
        CostSource::Fallback {
            default_crop: "millet".to_string()
        }
    );
    assert_eq!(rice.record.total_costs, 10000.0);
}

#[test]
fn test_invalid_economics_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(
        &dir,
        r#"{ "economics": { "low_risk_threshold": 0.5, "high_risk_threshold": 0.4 } }"#,
    );

    assert!(matches!(
        ConfigManager::from_file(&path),
        Err(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn test_missing_cost_table_surfaces_as_service_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(&dir, r#"{ "cost_table_file": "missing.json" }"#);
    let manager = ConfigManager::from_file(&path).expect("load config");

    let result = RecommendationService::from_config(Arc::new(BaselineEstimator::new()), &manager);
    assert!(matches!(result, Err(ServiceError::Config(ConfigError::Io { .. }))));
}
