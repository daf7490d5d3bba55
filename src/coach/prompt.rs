//! 人设提示词构建
//!
//! 按用户所选人设渲染系统指令与用户消息。每个人设有一条固定的
//! 语气指令，无论每日建议还是问答都原样嵌入，保证人设一致。
//! 长度与语气约束以提示词文本的形式传给生成服务，不在本地强制。

use std::fmt::Write as _;

use crate::coach::context::DailyContext;
use crate::models::user::{Persona, UserProfile};

/// 人设语气指令，逐字嵌入每条系统指令
pub fn persona_directive(persona: Persona) -> &'static str {
    match persona {
        Persona::Warm => "你是一位温柔贴心的健康教练，语气亲切柔和，时刻站在用户一边。",
        Persona::Tsundere => {
            "你是一位傲娇的健康教练，嘴上嫌弃、语气别扭，但字里行间都是对用户的关心。"
        }
        Persona::Harsh => "你是一位严厉的健康教练，直截了当，不留情面，只讲事实和纪律。",
        Persona::Encouraging => {
            "你是一位积极鼓励的健康教练，善于发现用户的每一点进步并放大它。"
        }
    }
}

/// 提示词信封
///
/// 每次请求构建一次，外部调用结束后即丢弃。
#[derive(Debug, Clone)]
pub struct PromptEnvelope {
    /// 系统指令（人设 + 任务框架）
    pub system: String,
    /// 用户消息（上下文 + 问题）
    pub user: String,
}

/// 提示词构建器
pub struct PromptBuilder;

impl PromptBuilder {
    /// 构建每日建议提示词
    pub fn build_daily_advice(profile: &UserProfile, context: &DailyContext) -> PromptEnvelope {
        let system = format!(
            "{}\n你根据用户当天的饮食、运动和情绪记录给出健康建议。\
             请用不超过150字回复，保持人设语气，给出一条具体可执行的建议，并优先考虑安全。",
            persona_directive(profile.persona)
        );

        let mut user = Self::render_context(profile, context);
        user.push_str("请基于以上记录给出今天的建议。");

        PromptEnvelope { system, user }
    }

    /// 构建自由问答提示词
    pub fn build_question(
        profile: &UserProfile,
        context: &DailyContext,
        question: &str,
    ) -> PromptEnvelope {
        let system = format!(
            "{}\n你结合用户当天的饮食、运动和情绪记录回答用户的问题。\
             请用不超过150字回复，保持人设语气，给出一条具体可执行的建议，并优先考虑安全。",
            persona_directive(profile.persona)
        );

        let mut user = Self::render_context(profile, context);
        let _ = writeln!(user, "用户的问题：{}", question);
        user.push_str("请结合以上记录回答这个问题。");

        PromptEnvelope { system, user }
    }

    /// 渲染聚合上下文
    ///
    /// 显示名称缺失时使用字面量 "user"；目标体重缺失时整行省略；
    /// 每个空类别输出一句明确的 "没有记录"。
    fn render_context(profile: &UserProfile, context: &DailyContext) -> String {
        let mut text = String::new();

        let _ = writeln!(text, "用户：{}", profile.display_name());
        if let Some(target) = profile.target_weight_kg {
            let _ = writeln!(text, "目标体重：{} kg", target);
        }
        let _ = writeln!(text, "日期：{}", context.date);

        let _ = writeln!(text, "今日饮食：");
        if context.meals.is_empty() {
            let _ = writeln!(text, "今天没有饮食记录。");
        } else {
            for meal in &context.meals {
                match meal.calories {
                    Some(kcal) => {
                        let _ = writeln!(text, "- {}（{} kcal）", meal.description, kcal);
                    }
                    None => {
                        let _ = writeln!(text, "- {}（热量未记录）", meal.description);
                    }
                }
            }
        }

        let _ = writeln!(text, "今日运动：");
        if context.workouts.is_empty() {
            let _ = writeln!(text, "今天没有运动记录。");
        } else {
            for workout in &context.workouts {
                let duration = workout
                    .duration_min
                    .map(|m| format!("{} 分钟", m))
                    .unwrap_or_else(|| "时长未记录".to_string());
                match workout.calories_burned {
                    Some(kcal) => {
                        let _ = writeln!(
                            text,
                            "- {} {}（消耗 {} kcal）",
                            workout.activity, duration, kcal
                        );
                    }
                    None => {
                        let _ = writeln!(text, "- {} {}", workout.activity, duration);
                    }
                }
            }
        }

        let _ = writeln!(text, "今日情绪：");
        if context.moods.is_empty() {
            let _ = writeln!(text, "今天没有情绪记录。");
        } else {
            for mood in &context.moods {
                match &mood.note {
                    Some(note) => {
                        let _ = writeln!(text, "- {}：{}", mood.mood, note);
                    }
                    None => {
                        let _ = writeln!(text, "- {}", mood.mood);
                    }
                }
            }
        }

        let _ = writeln!(
            text,
            "今日摄入合计 {} kcal，消耗合计 {} kcal。",
            context.calories_in, context.calories_out
        );

        text
    }
}
