//! Topic display labels.
//!
//! Known topics have curated labels. Anything else is humanized so that
//! unanticipated tags from upstream still read well.

/// Curated labels for known topic keys.
pub const TOPIC_LABELS: &[(&str, &str)] = &[
    ("platform_dynamics", "Platform Dynamics"),
    ("ai_capabilities", "AI Capabilities"),
    ("consolidation", "Consolidation"),
    ("content_moderation", "Content Moderation"),
    ("surveillance", "Surveillance"),
    ("startup_funding", "Startup Funding"),
    ("labor_displacement", "Labor Displacement"),
    ("privacy", "Privacy"),
    ("hardware", "Hardware"),
    ("cybersecurity", "Cybersecurity"),
    ("other", "Other"),
    ("infrastructure", "Infrastructure"),
    ("crypto", "Crypto"),
    ("ai_regulation", "AI Regulation"),
    ("open_source", "Open Source"),
    ("acquisitions", "Acquisitions"),
];

/// Display label for a topic key.
pub fn topic_label(topic: &str) -> String {
    TOPIC_LABELS
        .iter()
        .find(|(key, _)| *key == topic)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| humanize(topic))
}

/// Underscores become spaces and every word-initial ASCII word character is
/// upper-cased. Only `[A-Za-z0-9_]` count as word characters; the rest of
/// the string is left as-is.
pub fn humanize(topic: &str) -> String {
    let mut out = String::with_capacity(topic.len());
    let mut prev_is_word = false;

    for c in topic.chars() {
        let c = if c == '_' { ' ' } else { c };
        let is_word = c.is_ascii_alphanumeric();
        if is_word && !prev_is_word {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        prev_is_word = is_word;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn known_topic_uses_curated_label() {
        assert_eq!(topic_label("ai_capabilities"), "AI Capabilities");
        assert_eq!(topic_label("open_source"), "Open Source");
    }

    #[rstest]
    #[case("quantum_computing", "Quantum Computing")]
    #[case("ai_ethics", "Ai Ethics")]
    #[case("space", "Space")]
    #[case("web3_gaming", "Web3 Gaming")]
    #[case("e-commerce", "E-Commerce")]
    #[case("already Upper", "Already Upper")]
    #[case("mIxEd_case", "MIxEd Case")]
    #[case("3d_printing", "3d Printing")]
    #[case("__double", "  Double")]
    #[case("", "")]
    fn unknown_topic_is_humanized(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(topic_label(input), expected);
    }

    #[test]
    fn non_ascii_letters_are_not_word_characters() {
        // é breaks the word, so the following letter starts a new one.
        assert_eq!(humanize("café_éclair"), "Café éClair");
    }
}
