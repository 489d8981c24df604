// ==========================================
// 作物经济决策系统 - 非有限浮点数序列化
// ==========================================
// JSON 无法表示 inf / NaN, 序列化为 null
// 反序列化时 null 按字段语义还原
// ==========================================

use serde::{Deserialize, Deserializer, Serializer};

fn serialize_finite<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_none()
    }
}

/// null ↔ +inf (盈亏平衡单产在价格<=0 时; 变异系数在期望值为 0 时)
pub(crate) mod infinite_if_null {
    use super::*;

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_finite(value, serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

/// null ↔ NaN (变异系数为 inf 时的风险扣减、风险调整利润、情景利润)
pub(crate) mod nan_if_null {
    use super::*;

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_finite(value, serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}
