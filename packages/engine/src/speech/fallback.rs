//! Canned lines used when a provider cannot speak.

use crate::domain::roles::RoleName;
use crate::domain::Language;

const WEREWOLF_EN: [&str; 2] = [
    "Let's not rush to conclusions. I think the real wolf is hiding at the edge of the conversation.",
    "Tonight felt strange. Keep an eye on each other so the wolves don't get their way.",
];
const SEER_EN: [&str; 2] = [
    "I've noticed a few clues. Watch the people who keep dodging questions.",
    "Last night's instinct makes me uneasy about some of you. I'll keep watching.",
];
const WITCH_EN: [&str; 2] = [
    "My gut says someone is deliberately steering attention away. Don't trust the surface.",
    "I'm still weighing my options. Let's not turn on each other too quickly.",
];
const HUNTER_EN: [&str; 2] = [
    "Don't vote recklessly. If someone comes after me, my bullet won't miss them.",
    "Stay calm. The wolves fear nothing more than a united village.",
];
const VILLAGER_EN: [&str; 2] = [
    "Pay attention to the details when people talk. Someone here sounds guilty.",
    "I'll keep watching. I hope we can find the real werewolves.",
];

const WEREWOLF_ZH: [&str; 2] = [
    "先別急著下結論，我覺得真正的狼人正躲在話題邊緣。",
    "今晚太詭異了，大家互相盯緊一點，別讓狼人得逞。",
];
const SEER_ZH: [&str; 2] = [
    "我觀察到一些蛛絲馬跡，建議大家留意那些回答閃避的人。",
    "昨晚的直覺讓我不太放心某些玩家，稍後我會再觀察。",
];
const WITCH_ZH: [&str; 2] = [
    "女巫的直覺告訴我，有人刻意轉移視線，別太快相信表面。",
    "我還在衡量該不該使用藥水，大家別急著互相猜忌。",
];
const HUNTER_ZH: [&str; 2] = [
    "先別亂投，我會冷靜判斷，若有人攻擊我，我的子彈不會放過他。",
    "保持冷靜，真正的狼人最怕我們團結。",
];
const VILLAGER_ZH: [&str; 2] = [
    "大家說話時多注意細節，我總覺得有人心虛。",
    "我會繼續觀察，希望我們能找出真正的狼人。",
];

/// Fallback lines for a role; never empty.
pub fn lines(role: RoleName, language: Language) -> &'static [&'static str] {
    match (language, role) {
        (Language::En, RoleName::Werewolf) => &WEREWOLF_EN,
        (Language::En, RoleName::Seer) => &SEER_EN,
        (Language::En, RoleName::Witch) => &WITCH_EN,
        (Language::En, RoleName::Hunter) => &HUNTER_EN,
        (Language::En, RoleName::Villager) => &VILLAGER_EN,
        (Language::ZhHant, RoleName::Werewolf) => &WEREWOLF_ZH,
        (Language::ZhHant, RoleName::Seer) => &SEER_ZH,
        (Language::ZhHant, RoleName::Witch) => &WITCH_ZH,
        (Language::ZhHant, RoleName::Hunter) => &HUNTER_ZH,
        (Language::ZhHant, RoleName::Villager) => &VILLAGER_ZH,
    }
}
