// ==========================================
// 作物经济决策系统 - 配置管理器
// ==========================================
// 职责: 配置文件加载、校验、成本表定位
// 存储: <config_dir>/crop-advisor/config.json
// ==========================================

use crate::config::cost_table::{CostTable, DEFAULT_CROP};
use crate::config::economics_config::EconomicsConfig;
use crate::config::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 配置目录名
pub const CONFIG_DIR_NAME: &str = "crop-advisor";

/// 配置文件名
pub const CONFIG_FILE_NAME: &str = "config.json";

// ==========================================
// AdvisorConfig - 配置文件结构
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// 经济评估参数
    pub economics: EconomicsConfig,

    /// 外部成本表文件（.json / .csv），相对路径按配置文件所在目录解析
    pub cost_table_file: Option<PathBuf>,

    /// CSV 成本表的默认作物（JSON 成本表自带 default_crop）
    pub default_crop: Option<String>,
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: AdvisorConfig,
    base_dir: Option<PathBuf>,
}

impl ConfigManager {
    /// 从内存配置创建（不校验文件路径）
    pub fn new(config: AdvisorConfig) -> Result<Self, ConfigError> {
        config.economics.validate()?;
        Ok(Self {
            config,
            base_dir: None,
        })
    }

    /// 从配置文件加载
    ///
    /// # 参数
    /// - path: 配置文件路径（必须存在）
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: AdvisorConfig = serde_json::from_str(&text)?;
        config.economics.validate()?;

        tracing::info!("配置已加载: {}", path.display());

        Ok(Self {
            config,
            base_dir: path.parent().map(Path::to_path_buf),
        })
    }

    /// 从默认位置加载
    ///
    /// 默认配置文件不存在时使用内置默认值
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            Some(path) => {
                tracing::info!("未找到配置文件 {}, 使用默认配置", path.display());
                Self::new(AdvisorConfig::default())
            }
            None => {
                tracing::warn!("无法确定系统配置目录, 使用默认配置");
                Self::new(AdvisorConfig::default())
            }
        }
    }

    /// 默认配置文件路径
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn economics(&self) -> &EconomicsConfig {
        &self.config.economics
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// 成本表文件的实际路径
    pub fn cost_table_path(&self) -> Option<PathBuf> {
        let file = self.config.cost_table_file.as_ref()?;
        match &self.base_dir {
            Some(base) if file.is_relative() => Some(base.join(file)),
            _ => Some(file.clone()),
        }
    }

    /// 加载成本表
    ///
    /// 未配置外部文件时返回内置成本表
    pub fn load_cost_table(&self) -> Result<CostTable, ConfigError> {
        match self.cost_table_path() {
            Some(path) => {
                let default_crop = self.config.default_crop.as_deref().unwrap_or(DEFAULT_CROP);
                CostTable::from_path(&path, default_crop)
            }
            None => Ok(CostTable::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_new_with_defaults() {
        let manager = ConfigManager::new(AdvisorConfig::default()).unwrap();
        assert_eq!(manager.economics().default_risk_weight, 0.3);
        assert!(manager.cost_table_path().is_none());
        assert_eq!(manager.load_cost_table().unwrap(), CostTable::builtin());
    }

    #[test]
    fn test_from_file_resolves_relative_cost_table() {
        let dir = TempDir::new().unwrap();

        let mut csv = fs::File::create(dir.path().join("costs.csv")).unwrap();
        writeln!(csv, "crop,seed,fertilizer,pesticide,labor,machinery,irrigation,other").unwrap();
        writeln!(csv, "millet,1000,2000,500,6000,1500,0,500").unwrap();

        let config_path = dir.path().join("config.json");
        fs::write(
            &config_path,
            r#"{"economics": {"locale": "zh-CN"}, "cost_table_file": "costs.csv", "default_crop": "millet"}"#,
        )
        .unwrap();

        let manager = ConfigManager::from_file(&config_path).unwrap();
        assert_eq!(manager.economics().locale, "zh-CN");
        assert_eq!(manager.cost_table_path(), Some(dir.path().join("costs.csv")));

        let table = manager.load_cost_table().unwrap();
        assert_eq!(table.default_crop(), "millet");
        assert_eq!(table.resolve("wheat").crop, "millet");
    }

    #[test]
    fn test_from_file_missing_is_error() {
        let dir = TempDir::new().unwrap();
        let err = ConfigManager::from_file(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_from_file_invalid_economics() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.json");
        fs::write(&config_path, r#"{"economics": {"upfront_labor_share": 2.0}}"#).unwrap();
        let err = ConfigManager::from_file(&config_path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}
