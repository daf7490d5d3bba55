//! 用户资料数据模型
//!
//! 存储用户的基本信息、目标体重与所选教练人设。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 教练人设
///
/// 每个提示词与每条预置回复都必须归属于且仅归属于一个人设；
/// 未知或缺失的人设一律回退为 [`Persona::Warm`]。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    /// 温柔型
    #[default]
    Warm,
    /// 傲娇型
    Tsundere,
    /// 严厉型
    Harsh,
    /// 鼓励型
    Encouraging,
}

impl Persona {
    /// 所有人设值，按固定顺序
    pub const ALL: [Persona; 4] = [
        Persona::Warm,
        Persona::Tsundere,
        Persona::Harsh,
        Persona::Encouraging,
    ];

    /// 从存储标签解析人设，未知标签回退为 Warm
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "warm" => Persona::Warm,
            "tsundere" => Persona::Tsundere,
            "harsh" => Persona::Harsh,
            "encouraging" => Persona::Encouraging,
            _ => Persona::Warm,
        }
    }

    /// 存储标签
    pub fn as_tag(&self) -> &'static str {
        match self {
            Persona::Warm => "warm",
            Persona::Tsundere => "tsundere",
            Persona::Harsh => "harsh",
            Persona::Encouraging => "encouraging",
        }
    }
}

/// 用户资料
///
/// 由数据存储层持有，本服务的教练流水线只读。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// 用户唯一标识
    pub id: String,

    /// 显示名称
    pub name: Option<String>,

    /// 教练人设
    pub persona: Persona,

    /// 目标体重（kg）
    pub target_weight_kg: Option<f32>,

    /// 身高（cm）
    pub height_cm: Option<f32>,

    /// 当前体重（kg）
    pub current_weight_kg: Option<f32>,

    /// 创建时间
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// 创建新用户资料
    pub fn new(name: &str, persona: Persona) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: Some(name.to_string()),
            persona,
            target_weight_kg: None,
            height_cm: None,
            current_weight_kg: None,
            created_at: Utc::now(),
        }
    }

    /// 提示词中使用的显示名称，缺失时回退为 "user"
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("user")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persona_tag_round_trip() {
        for persona in Persona::ALL {
            assert_eq!(Persona::from_tag(persona.as_tag()), persona);
        }
    }

    #[test]
    fn test_unknown_persona_tag_defaults_to_warm() {
        assert_eq!(Persona::from_tag("stoic"), Persona::Warm);
        assert_eq!(Persona::from_tag(""), Persona::Warm);
    }

    #[test]
    fn test_display_name_falls_back_to_user() {
        let mut profile = UserProfile::new("小明", Persona::Warm);
        assert_eq!(profile.display_name(), "小明");

        profile.name = None;
        assert_eq!(profile.display_name(), "user");
    }
}
