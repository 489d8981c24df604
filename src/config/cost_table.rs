// ==========================================
// 作物经济决策系统 - 成本表
// ==========================================
// 职责: 作物 → 每公顷成本明细的只读查找表
// 红线: 未知作物不报错,显式回退到默认作物并标记来源
// 来源: 内置默认表 / JSON 文件 / CSV 文件
// ==========================================

use crate::config::error::ConfigError;
use crate::domain::cost::CostBreakdown;
use crate::domain::types::CostSource;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

/// 内置表的默认作物
pub const DEFAULT_CROP: &str = "wheat";

// ==========================================
// ResolvedCost - 查找结果
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCost<'a> {
    /// 实际使用的成本表条目名
    pub crop: &'a str,
    pub breakdown: &'a CostBreakdown,
    pub source: CostSource,
}

// ==========================================
// CostTable - 成本表
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct CostTable {
    default_crop: String,
    default_breakdown: CostBreakdown,
    crops: HashMap<String, CostBreakdown>,
}

/// JSON 文件结构
#[derive(Debug, Deserialize)]
struct CostTableFile {
    #[serde(default = "default_crop_name")]
    default_crop: String,
    crops: HashMap<String, CostBreakdown>,
}

fn default_crop_name() -> String {
    DEFAULT_CROP.to_string()
}

/// CSV 行结构
#[derive(Debug, Deserialize)]
struct CostRow {
    crop: String,
    seed: f64,
    fertilizer: f64,
    pesticide: f64,
    labor: f64,
    machinery: f64,
    irrigation: f64,
    other: f64,
}

impl CostRow {
    fn into_entry(self) -> (String, CostBreakdown) {
        (
            self.crop,
            CostBreakdown {
                seed: self.seed,
                fertilizer: self.fertilizer,
                pesticide: self.pesticide,
                labor: self.labor,
                machinery: self.machinery,
                irrigation: self.irrigation,
                other: self.other,
            },
        )
    }
}

fn normalize(crop: &str) -> String {
    crop.trim().to_lowercase()
}

impl CostTable {
    /// 创建成本表并校验
    ///
    /// # 校验
    /// - 作物名去空白、转小写
    /// - 所有成本有限且非负
    /// - 默认作物必须存在
    pub fn new(
        default_crop: &str,
        crops: HashMap<String, CostBreakdown>,
    ) -> Result<Self, ConfigError> {
        let mut normalized = HashMap::with_capacity(crops.len());
        for (crop, breakdown) in crops {
            let key = normalize(&crop);
            if let Some((category, value)) = breakdown.first_invalid() {
                return Err(ConfigError::InvalidCostRate {
                    crop: key,
                    category,
                    value,
                });
            }
            normalized.insert(key, breakdown);
        }

        let default_crop = normalize(default_crop);
        let default_breakdown = match normalized.get(&default_crop) {
            Some(breakdown) => *breakdown,
            None => return Err(ConfigError::MissingDefaultCrop(default_crop)),
        };

        Ok(Self {
            default_crop,
            default_breakdown,
            crops: normalized,
        })
    }

    /// 内置成本表 (INR/ha)
    pub fn builtin() -> Self {
        let rows: [(&str, [f64; 7]); 5] = [
            ("wheat", [3000.0, 12000.0, 2000.0, 18000.0, 8000.0, 5000.0, 2000.0]),
            ("rice", [2500.0, 15000.0, 3000.0, 22000.0, 6000.0, 8000.0, 3500.0]),
            ("maize", [4000.0, 10000.0, 2500.0, 15000.0, 7000.0, 4000.0, 2500.0]),
            ("soybean", [3500.0, 8000.0, 2000.0, 12000.0, 6000.0, 3000.0, 2000.0]),
            ("cotton", [2000.0, 15000.0, 8000.0, 25000.0, 8000.0, 6000.0, 4000.0]),
        ];

        let crops: HashMap<String, CostBreakdown> = rows
            .iter()
            .map(|(crop, v)| {
                (
                    crop.to_string(),
                    CostBreakdown {
                        seed: v[0],
                        fertilizer: v[1],
                        pesticide: v[2],
                        labor: v[3],
                        machinery: v[4],
                        irrigation: v[5],
                        other: v[6],
                    },
                )
            })
            .collect();

        let default_breakdown = crops[DEFAULT_CROP];
        Self {
            default_crop: DEFAULT_CROP.to_string(),
            default_breakdown,
            crops,
        }
    }

    // ==========================================
    // 加载
    // ==========================================

    /// 从 JSON 文本加载
    ///
    /// 格式: `{"default_crop": "wheat", "crops": {"wheat": {"seed": 3000, ...}}}`
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let file: CostTableFile = serde_json::from_str(json)?;
        Self::new(&file.default_crop, file.crops)
    }

    /// 从 CSV 读取器加载
    ///
    /// 表头: crop,seed,fertilizer,pesticide,labor,machinery,irrigation,other
    pub fn from_csv_reader<R: Read>(reader: R, default_crop: &str) -> Result<Self, ConfigError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut crops = HashMap::new();
        for row in csv_reader.deserialize::<CostRow>() {
            let (crop, breakdown) = row?.into_entry();
            crops.insert(crop, breakdown);
        }

        Self::new(default_crop, crops)
    }

    /// 按扩展名从文件加载 (.json / .csv)
    ///
    /// # 参数
    /// - path: 文件路径
    /// - default_crop: CSV 文件的默认作物 (JSON 文件自带)
    pub fn from_path(path: &Path, default_crop: &str) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        let read_err = |source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        };

        let table = match extension.as_deref() {
            Some("json") => Self::from_json_str(&fs::read_to_string(path).map_err(read_err)?)?,
            Some("csv") => Self::from_csv_reader(fs::File::open(path).map_err(read_err)?, default_crop)?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        tracing::info!(
            "成本表已加载: path={}, crops={}, default_crop={}",
            path.display(),
            table.crops.len(),
            table.default_crop
        );
        Ok(table)
    }

    // ==========================================
    // 查询
    // ==========================================

    /// 查找作物成本
    ///
    /// 未知作物回退到默认作物, source = Fallback
    pub fn resolve(&self, crop: &str) -> ResolvedCost<'_> {
        let key = normalize(crop);
        if let Some((name, breakdown)) = self.crops.get_key_value(&key) {
            return ResolvedCost {
                crop: name,
                breakdown,
                source: CostSource::Exact,
            };
        }

        let (name, breakdown) = self.default_entry();
        ResolvedCost {
            crop: name,
            breakdown,
            source: CostSource::Fallback {
                default_crop: name.to_string(),
            },
        }
    }

    /// 默认作物条目
    pub fn default_entry(&self) -> (&str, &CostBreakdown) {
        (&self.default_crop, &self.default_breakdown)
    }

    pub fn default_crop(&self) -> &str {
        &self.default_crop
    }

    pub fn contains(&self, crop: &str) -> bool {
        self.crops.contains_key(&normalize(crop))
    }

    /// 所有作物名 (字典序)
    pub fn crops(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.crops.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for CostTable {
    fn default() -> Self {
        Self::builtin()
    }
}
