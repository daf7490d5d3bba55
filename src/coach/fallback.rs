//! 降级回复选取
//!
//! 每个人设维护一小组预置回复，外部生成失败时从所属人设的池子里
//! 均匀随机取一条。失败类型不影响选哪个池子，只进日志；
//! 选取永不失败，也永不返回空字符串。

use rand::seq::SliceRandom;
use tracing::warn;

use crate::coach::client::GenerateFailure;
use crate::models::user::Persona;

/// 温柔型预置回复
pub const WARM_POOL: [&str; 4] = [
    "今天也辛苦啦，记得多喝水，晚上早点休息哦。",
    "不着急，一步一步来，我一直都在你身边。",
    "先吃点清淡的，散散步放松一下，明天又是新的一天。",
    "照顾好自己最重要，今天给自己一点温柔吧。",
];

/// 傲娇型预置回复
pub const TSUNDERE_POOL: [&str; 4] = [
    "哼，才不是担心你，只是……水要记得喝够啦！",
    "今天的记录我看过了，勉强及格吧，别得意。",
    "别以为偷懒我看不见！晚饭清淡点，听到没有。",
    "真拿你没办法，早点睡，明天我还要检查你的记录呢。",
];

/// 严厉型预置回复
pub const HARSH_POOL: [&str; 4] = [
    "少找借口。今天摄入超了就去走三十分钟，现在。",
    "纪律决定结果。按计划吃饭，按计划训练。",
    "体重不会骗人。晚饭减一半碳水，记录补齐。",
    "想要成果就别讨价还价，今晚十一点前睡觉。",
];

/// 鼓励型预置回复
pub const ENCOURAGING_POOL: [&str; 4] = [
    "你今天的坚持我都看到了，继续保持，你比想象中更强！",
    "每一次记录都是进步，再加一杯水就更完美了！",
    "棒极了！今晚睡个好觉，明天继续冲！",
    "离目标又近了一步，为自己鼓个掌吧！",
];

/// 降级回复选取器
pub struct FallbackSelector;

impl FallbackSelector {
    /// 人设对应的预置回复池
    pub fn pool(persona: Persona) -> &'static [&'static str] {
        match persona {
            Persona::Warm => &WARM_POOL,
            Persona::Tsundere => &TSUNDERE_POOL,
            Persona::Harsh => &HARSH_POOL,
            Persona::Encouraging => &ENCOURAGING_POOL,
        }
    }

    /// 按人设选取一条降级回复
    ///
    /// 失败类型只用于日志；所有失败一律降级到同一个人设池。
    pub fn pick(persona: Persona, failure: &GenerateFailure) -> &'static str {
        warn!(
            persona = persona.as_tag(),
            failure = %failure,
            "生成服务调用失败，使用预置回复降级"
        );

        let pool = Self::pool(persona);
        pool.choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(WARM_POOL[0])
    }
}
