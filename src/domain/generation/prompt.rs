//! Prompt construction
//!
//! Builds the role-tagged prompts sent to the completion provider. The
//! system prompt carries the anti-hype rules and the banned vocabulary; the
//! user prompt carries the log, outcome, and evidence with verbatim-quoting
//! instructions.

use super::request::{Language, Platform, PostRequest};
use crate::domain::validation::{BANNED_EMOJIS, BANNED_EN_WORDS, BANNED_KO_WORDS};

/// System instructions for one (language, platform) combination
pub fn build_system_prompt(language: Language, platform: Platform) -> String {
    let banned_en = BANNED_EN_WORDS.join(", ");
    let banned_ko = BANNED_KO_WORDS.join(", ");
    let banned_emojis = BANNED_EMOJIS.join(" ");
    let platform_name = platform.display_name();

    match language {
        Language::Ko => {
            let format_rule = match platform {
                Platform::Linkedin => {
                    "6. LinkedIn 포맷: 전문적이지만 접근 가능한 톤. 1-3개의 짧은 문단."
                }
                Platform::X => "6. X 포맷: 간결하고 직접적. 280자 제한 또는 짧은 스레드.",
            };

            format!(
                "당신은 개발자의 기술 로그를 {platform_name} 포스트로 재구성하는 도구입니다.\n\n\
                 핵심 원칙:\n\
                 1. 과장하지 않습니다. 마케팅 톤을 사용하지 않습니다.\n\
                 2. 이모지를 사용하지 않습니다.\n\
                 3. 사용자가 제공한 정보만 사용합니다. 결과를 만들어내지 않습니다.\n\
                 4. Trust over polish: 정확성이 우선이며, 증거 없는 주장은 절대 하지 않습니다.\n\
                 5. STAR 프레임워크를 따릅니다:\n\
                 - Situation (상황): 로그에서 추출\n\
                 - Task (과제): 문맥에서 추론\n\
                 - Action (행동): 로그에서 추출\n\
                 - Result (결과): 사용자가 제공한 outcome을 그대로 사용\n\
                 증거(Evidence) 처리 규칙:\n\
                 - 증거가 제공되면 반드시 원문 그대로 인용합니다. 의역하거나 수정하지 않습니다.\n\
                 - 증거는 \"[Evidence]\"로 명확히 표시합니다.\n\
                 - 증거의 숫자, 단위, 표현을 정확히 보존합니다.\n\n\
                 {format_rule}\n\n\
                 금지된 단어: {banned_ko}, {banned_en}\n\
                 금지된 이모지: {banned_emojis}"
            )
        }
        Language::En => {
            let format_rule = match platform {
                Platform::Linkedin => {
                    "6. LinkedIn format: Professional but accessible tone. 1-3 short paragraphs."
                }
                Platform::X => {
                    "6. X format: Concise and direct. 280 character limit or short thread."
                }
            };

            format!(
                "You are a tool that restructures developer technical logs into {platform_name} posts.\n\n\
                 Core principles:\n\
                 1. No exaggeration. No marketing tone.\n\
                 2. No emojis.\n\
                 3. Use only user-provided information. Do not invent results.\n\
                 4. Trust over polish: Accuracy first. NEVER make claims without evidence.\n\
                 5. Follow the STAR framework:\n\
                 - Situation: extracted from the log\n\
                 - Task: inferred from context\n\
                 - Action: extracted from the log\n\
                 - Result: use the user-provided outcome verbatim\n\
                 Evidence handling rules:\n\
                 - When evidence is provided, quote it EXACTLY as given. Do NOT paraphrase or modify.\n\
                 - Clearly mark evidence with an \"[Evidence]\" label.\n\
                 - Preserve all numbers, units, and phrasing from the evidence verbatim.\n\n\
                 {format_rule}\n\n\
                 Banned words: {banned_en}, {banned_ko}\n\
                 Banned emojis: {banned_emojis}"
            )
        }
    }
}

/// User content for one (language, platform) combination
pub fn build_user_prompt(request: &PostRequest, language: Language, platform: Platform) -> String {
    let mut parts: Vec<String> = Vec::new();
    let has_evidence = !request.evidence().is_missing();

    parts.push(format!("Raw Log:\n{}", request.raw_log));
    parts.push(format!(
        "\nOutcome (use exactly as written):\n{}",
        request.outcome
    ));

    if let Some(before) = &request.evidence_before {
        if !before.trim().is_empty() {
            parts.push(format!(
                "\nEvidence Before (quote verbatim, do NOT paraphrase):\n{before}"
            ));
        }
    }

    if let Some(after) = &request.evidence_after {
        if !after.trim().is_empty() {
            parts.push(format!(
                "\nEvidence After (quote verbatim, do NOT paraphrase):\n{after}"
            ));
        }
    }

    if let Some(insight) = &request.human_insight {
        if !insight.trim().is_empty() {
            parts.push(format!("\nHuman Insight:\n{insight}"));
        }
    }

    let evidence_instruction = if has_evidence {
        match language {
            Language::Ko => {
                " 제공된 증거(Evidence)는 원문 그대로 \"[Evidence]\" 라벨과 함께 인용하세요. 의역하거나 수정하지 마세요."
            }
            Language::En => {
                " Quote any provided evidence EXACTLY as given, marked with \"[Evidence]\". Do NOT paraphrase or modify the evidence text."
            }
        }
    } else {
        ""
    };

    let platform_word = match platform {
        Platform::Linkedin => "LinkedIn",
        Platform::X => "X",
    };

    parts.push(match language {
        Language::Ko => format!(
            "\n위 정보를 바탕으로 {platform_word} 포스트를 작성하세요. outcome을 그대로 사용하고, 결과를 만들어내지 마세요.{evidence_instruction}"
        ),
        Language::En => format!(
            "\nBased on the above information, write a {platform_word} post. Use the outcome verbatim and do not invent results.{evidence_instruction}"
        ),
    });

    if !has_evidence {
        parts.push(match language {
            Language::Ko => "\n중요: 증거가 제공되지 않았습니다. 다음을 절대 포함하지 마세요:\n\
                 - 숫자 클레임 (예: \"50% 개선\", \"3배 향상\", \"2배 빨라짐\")\n\
                 - 성능 주장 (예: \"significantly faster\", \"much better\", \"dramatically improved\")\n\
                 - 정량적 비교 (예: \"훨씬 빠른\", \"월등히 나은\", \"크게 개선된\")\n\
                 증거 없이는 정성적 설명만 사용하세요."
                .to_string(),
            Language::En => "\nIMPORTANT: No evidence provided. Do NOT include:\n\
                 - Any numeric claims (e.g., \"50% improvement\", \"3x faster\", \"2x better\")\n\
                 - Performance claims (e.g., \"significantly faster\", \"much better\", \"dramatically improved\")\n\
                 - Quantitative comparisons (e.g., \"way faster\", \"far better\", \"greatly enhanced\")\n\
                 Without evidence, use only qualitative descriptions."
                .to_string(),
        });
    }

    if platform == Platform::X {
        parts.push(match language {
            Language::Ko => {
                "\n280자 제한을 지켜주세요. 필요하면 짧은 스레드 형식으로 작성하세요.".to_string()
            }
            Language::En => {
                "\nKeep it under 280 characters. If needed, format as a short thread.".to_string()
            }
        });
    }

    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::generation::OutputLanguage;

    fn request(evidence_before: Option<&str>) -> PostRequest {
        PostRequest {
            raw_log: "Rewrote the cache layer".to_string(),
            outcome: "Cache hit rate is stable".to_string(),
            evidence_before: evidence_before.map(|s| s.to_string()),
            evidence_after: None,
            human_insight: None,
            platform: Platform::X,
            output_language: OutputLanguage::En,
        }
    }

    #[test]
    fn test_system_prompt_embeds_banned_vocabulary() {
        let prompt = build_system_prompt(Language::En, Platform::Linkedin);

        assert!(prompt.contains("game-changer"));
        assert!(prompt.contains("혁신적"));
        assert!(prompt.contains("🚀"));
        assert!(prompt.contains("LinkedIn"));
    }

    #[test]
    fn test_system_prompt_platform_rules_differ() {
        let linkedin = build_system_prompt(Language::En, Platform::Linkedin);
        let x = build_system_prompt(Language::En, Platform::X);

        assert!(linkedin.contains("1-3 short paragraphs"));
        assert!(x.contains("280 character limit"));
    }

    #[test]
    fn test_user_prompt_includes_log_and_outcome() {
        let prompt = build_user_prompt(&request(None), Language::En, Platform::X);

        assert!(prompt.contains("Rewrote the cache layer"));
        assert!(prompt.contains("Cache hit rate is stable"));
    }

    #[test]
    fn test_user_prompt_no_evidence_warning_block() {
        let prompt = build_user_prompt(&request(None), Language::En, Platform::X);

        assert!(prompt.contains("No evidence provided"));
        assert!(!prompt.contains("Evidence Before"));
    }

    #[test]
    fn test_user_prompt_with_evidence_quotes_verbatim_instruction() {
        let prompt = build_user_prompt(
            &request(Some("Error rate: 10%")),
            Language::En,
            Platform::X,
        );

        assert!(prompt.contains("Evidence Before"));
        assert!(prompt.contains("Error rate: 10%"));
        assert!(prompt.contains("EXACTLY as given"));
        assert!(!prompt.contains("No evidence provided"));
    }

    #[test]
    fn test_x_prompt_carries_character_limit() {
        let prompt = build_user_prompt(&request(None), Language::En, Platform::X);
        assert!(prompt.contains("280 characters"));
    }
}
