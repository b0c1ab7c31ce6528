//! Prompt text for chat-completion providers.

use crate::domain::roles::RoleName;
use crate::domain::state::Phase;
use crate::domain::Language;
use crate::speech::{SpeechContext, SpeechTopic};

/// Upper bound on the characters kept from a generated reply.
pub const MAX_SPEECH_CHARS: usize = 220;

/// Log lines quoted in the prompt.
const PROMPT_LOG_LINES: usize = 6;

pub fn system_prompt(language: Language) -> &'static str {
    match language {
        Language::En => {
            "You are a dramatic AI actor performing in a live Werewolf social deduction game. \
             Keep responses short, grounded in the provided context, and fully in character."
        }
        Language::ZhHant => "你是一位投入狼人殺桌遊的 AI 演員。請根據提供的資訊給出簡潔、符合角色設定的回應。",
    }
}

fn objective(role: RoleName, language: Language) -> &'static str {
    match (language, role) {
        (Language::En, RoleName::Werewolf) => {
            "You are a werewolf. Protect your pack and mislead the villagers without revealing yourself."
        }
        (Language::En, RoleName::Seer) => {
            "You are the Seer. Guide the village with subtle hints drawn from your nightly visions."
        }
        (Language::En, RoleName::Witch) => {
            "You are the Witch. Balance empathy and caution while hinting at the use of your potions."
        }
        (Language::En, RoleName::Hunter) => {
            "You are the Hunter. Calmly warn others that rash votes may trigger your final shot."
        }
        (Language::En, RoleName::Villager) => {
            "You are a Villager. Share grounded suspicions and encourage teamwork."
        }
        (Language::ZhHant, RoleName::Werewolf) => "你是狼人，請保護同伴並在不暴露自己的情況下誤導好人。",
        (Language::ZhHant, RoleName::Seer) => "你是預言家，請巧妙利用夜晚得知的資訊引導大家。",
        (Language::ZhHant, RoleName::Witch) => "你是女巫，請在不暴露自己能力的情況下提到解藥與毒藥的抉擇。",
        (Language::ZhHant, RoleName::Hunter) => "你是獵人，提醒眾人不要魯莽投票，以免觸發你的反擊。",
        (Language::ZhHant, RoleName::Villager) => "你是村民，請提出合理懷疑並鼓勵合作。",
    }
}

fn closing_clause(ctx: &SpeechContext) -> String {
    let en = ctx.language == Language::En;
    match (ctx.topic, ctx.suggested_target_name()) {
        (SpeechTopic::Vote, Some(target)) if en => format!(
            "You plan to vote for {target}. Clearly state this choice and briefly explain why."
        ),
        (SpeechTopic::Vote, Some(target)) => format!("你計畫投給 {target}，請明確表態並簡短說明理由。"),
        (SpeechTopic::Vote, None) if en => {
            "End your response with a clear statement about who you intend to vote for.".to_string()
        }
        (SpeechTopic::Vote, None) => "結尾請清楚表態你想投給誰。".to_string(),
        (SpeechTopic::Discussion, _) if en => {
            "Keep your tone conversational and immersive as if role-playing at the table.".to_string()
        }
        (SpeechTopic::Discussion, _) => "維持帶入情境的語氣，就像在桌遊現場扮演角色。".to_string(),
    }
}

/// User prompt describing the table from the speaker's point of view.
pub fn build_prompt(ctx: &SpeechContext) -> String {
    let en = ctx.language == Language::En;
    let locale = if en { "English" } else { "Traditional Chinese" };

    let alive = ctx
        .alive_players
        .iter()
        .map(|p| {
            let tag = match (p.is_human, en) {
                (true, true) => "human",
                (true, false) => "真人",
                (false, _) => "AI",
            };
            format!("{} ({tag})", p.name)
        })
        .collect::<Vec<_>>()
        .join(if en { ", " } else { "、" });

    let phase_label = match (ctx.phase, en) {
        (Phase::DayVote, true) => "daytime voting",
        (Phase::DayVote, false) => "白天投票階段",
        (_, true) => "daytime discussion",
        (_, false) => "白天討論階段",
    };

    let skip = ctx.recent_logs.len().saturating_sub(PROMPT_LOG_LINES);
    let events = ctx.recent_logs[skip..]
        .iter()
        .map(|log| match (log.phase, en) {
            (Phase::Night, true) => format!("Night: {}", log.message),
            (Phase::Night, false) => format!("夜晚：{}", log.message),
            _ => log.message.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n");
    let events = if events.is_empty() {
        let none = if en { "No significant events yet." } else { "目前沒有特別事件。" };
        none.to_string()
    } else {
        events
    };

    format!(
        "You are role-playing {name} in a social deduction game (Werewolf). Respond in {locale}.\n\
         Current phase: Day {day} - {phase_label}.\n\
         Your role card: {role} ({alignment}).\n\
         {objective}\n\
         Alive players: {alive}.\n\
         Recent public events:\n\
         {events}\n\
         {closing}\n\
         Speak in 1-2 concise sentences.",
        name = ctx.speaker.name,
        day = ctx.day,
        role = ctx.speaker.role,
        alignment = ctx.speaker.alignment,
        objective = objective(ctx.speaker.role, ctx.language),
        closing = closing_clause(ctx),
    )
}

/// Trims `text` to at most `max` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
