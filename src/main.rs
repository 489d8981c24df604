// ==========================================
// 作物经济决策系统 - 命令行入口
// ==========================================
// 用法: crop-advisor <farm.json> [config.json]
// 输出: 推荐说明 + 首选作物敏感性 + JSON 报告
// 环境变量: RUST_LOG / CROP_ADVISOR_LOG_FORMAT=json
// ==========================================

use anyhow::{bail, Context, Result};
use crop_advisor::{logging, BaselineEstimator, ConfigManager, FarmProfile, RecommendationService};
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::var("CROP_ADVISOR_LOG_FORMAT").as_deref() == Ok("json") {
        logging::init_json();
    } else {
        logging::init();
    }

    let mut args = std::env::args().skip(1);
    let Some(farm_path) = args.next().map(PathBuf::from) else {
        bail!("用法: crop-advisor <farm.json> [config.json]");
    };
    let config_path = args.next().map(PathBuf::from);

    tracing::info!("==================================================");
    tracing::info!("{} v{}", crop_advisor::APP_NAME, crop_advisor::VERSION);
    tracing::info!("==================================================");

    let manager = match &config_path {
        Some(path) => ConfigManager::from_file(path)
            .with_context(|| format!("加载配置失败: {}", path.display()))?,
        None => ConfigManager::load_default().context("加载默认配置失败")?,
    };

    let farm_json = std::fs::read_to_string(&farm_path)
        .with_context(|| format!("读取农场文件失败: {}", farm_path.display()))?;
    let farm: FarmProfile = serde_json::from_str(&farm_json)
        .with_context(|| format!("解析农场文件失败: {}", farm_path.display()))?;

    let service = RecommendationService::from_config(Arc::new(BaselineEstimator::new()), &manager)?;
    let report = service.recommend(&farm).await?;

    for line in &report.explanation {
        println!("{}", line);
    }

    if let Some(top) = report.top() {
        println!();
        let scenarios = service.sensitivity(&report, top.crop(), 10.0, 10.0)?;
        for (key, outcome) in &scenarios {
            println!(
                "{:<14} profit={:>12.0} margin={:>6.1}%",
                key, outcome.profit, outcome.margin
            );
        }
    }

    println!();
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
