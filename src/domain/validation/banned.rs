//! Banned hype vocabulary
//!
//! Curated lists of marketing/hype terms excluded from generated content.
//! Matching is case-insensitive substring; the lists are closed and ordered,
//! so a scan over them is deterministic.

/// English hype and marketing terms
pub const BANNED_EN_WORDS: &[&str] = &[
    "game-changer",
    "game changer",
    "revolutionary",
    "cutting-edge",
    "cutting edge",
    "innovative",
    "disruptive",
    "next-level",
    "next level",
    "amazing",
    "incredible",
    "awesome",
    "groundbreaking",
    "world-class",
    "best-in-class",
    "state-of-the-art",
    "bleeding-edge",
    "mind-blowing",
    "unbelievable",
    "unprecedented",
    "supercharge",
    "turbocharge",
    "skyrocket",
    "unleash",
    "unlock",
    "empower",
    "leverage",
    "synergy",
    "paradigm shift",
    "rocket ship",
    "10x",
    "magical",
    "insane",
    "crushing it",
    "killing it",
    "absolutely",
    "extremely",
];

/// Korean hype and marketing terms
pub const BANNED_KO_WORDS: &[&str] = &[
    "혁신적",
    "획기적",
    "놀라운",
    "압도적",
    "최고의",
    "최첨단",
    "파괴적",
    "미친",
    "대박",
    "엄청난",
    "충격적",
    "경이로운",
    "폭발적",
    "게임체인저",
    "넥스트레벨",
    "완전",
    "진짜",
    "레전드",
    "미쳤다",
    "역대급",
    "쩐다",
    "핵",
    "갓",
];

/// Emojis that convey hype or informal tone
pub const BANNED_EMOJIS: &[&str] = &[
    "🚀", "🔥", "💥", "⚡", "✨", "💪", "🎯", "💡", "🏆", "🎉", "👏", "❤️", "😍", "🤯", "💯",
    "👀", "🙌", "⭐", "🌟", "💰",
];

/// All banned terms in scan order: English, Korean, emoji
pub fn banned_terms() -> impl Iterator<Item = &'static str> {
    BANNED_EN_WORDS
        .iter()
        .chain(BANNED_KO_WORDS.iter())
        .chain(BANNED_EMOJIS.iter())
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_are_populated() {
        assert!(BANNED_EN_WORDS.len() > 30);
        assert!(BANNED_KO_WORDS.len() > 20);
        assert!(BANNED_EMOJIS.len() == 20);
    }

    #[test]
    fn test_combined_iterator_covers_all_lists() {
        let total = banned_terms().count();
        assert_eq!(
            total,
            BANNED_EN_WORDS.len() + BANNED_KO_WORDS.len() + BANNED_EMOJIS.len()
        );
    }

    #[test]
    fn test_known_entries_present() {
        assert!(BANNED_EN_WORDS.contains(&"game-changer"));
        assert!(BANNED_KO_WORDS.contains(&"혁신적"));
        assert!(BANNED_EMOJIS.contains(&"🚀"));
    }
}
