use std::collections::HashSet;

use crate::markup::Markup;
use crate::tiers::TierTable;

/// Piece of the text being annotated
#[derive(Debug)]
enum Segment {
    /// Text no tier word has claimed yet
    Plain(String),
    /// Highlight span that was already present, kept verbatim
    Existing(String),
    Wrapped { word: String, tier: u32 },
}

/// Split `text` around the highlight spans it already contains
fn segment(text: &str, markup: &Markup) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for m in markup.span_pattern().find_iter(text) {
        if m.start() > last {
            segments.push(Segment::Plain(text[last..m.start()].to_string()));
        }
        segments.push(Segment::Existing(m.as_str().to_string()));
        last = m.end();
    }
    if last < text.len() {
        segments.push(Segment::Plain(text[last..].to_string()));
    }

    segments
}

/// Wrap every occurrence of `word` inside plain segments; returns the number wrapped
fn wrap_word(segments: Vec<Segment>, word: &str, tier: u32, count: &mut usize) -> Vec<Segment> {
    let mut out = Vec::with_capacity(segments.len());

    for seg in segments {
        let Segment::Plain(plain) = seg else {
            out.push(seg);
            continue;
        };

        let mut last = 0;
        for (start, matched) in plain.match_indices(word) {
            if start > last {
                out.push(Segment::Plain(plain[last..start].to_string()));
            }
            out.push(Segment::Wrapped {
                word: matched.to_string(),
                tier,
            });
            last = start + matched.len();
            *count += 1;
        }
        if last < plain.len() {
            out.push(Segment::Plain(plain[last..].to_string()));
        }
    }

    out
}

/// Annotate `text` with tier spans.
///
/// Without `target_tier` existing highlights are cleared first and every tier
/// is applied, lowest id first. With a target only that tier is applied and
/// existing highlights are kept; words they already wrap are not wrapped
/// again. Words match as literal substrings, so a word also matches inside a
/// longer one. Text that has been wrapped (or was already wrapped) is never
/// matched again, which makes each occurrence belong to the first tier that
/// claims it.
pub fn apply_tiers(text: &str, tiers: &TierTable, markup: &Markup, target_tier: Option<u32>) -> String {
    let (mut segments, mut marked) = match target_tier {
        None => (segment(&markup.clear(text), markup), HashSet::new()),
        Some(_) => (segment(text, markup), markup.marked_words(text)),
    };

    let levels: Vec<(u32, &[String])> = match target_tier {
        None => tiers.tiers().collect(),
        Some(target) => tiers.words(target).map(|w| (target, w)).into_iter().collect(),
    };

    let mut wrapped = 0usize;
    for (tier, words) in levels {
        // Longer words first so a tier's compounds win over their parts
        let mut words: Vec<&String> = words.iter().collect();
        words.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

        for word in words {
            if word.is_empty() || word.contains(['<', '>']) || marked.contains(word.as_str()) {
                continue;
            }

            let before = wrapped;
            segments = wrap_word(segments, word, tier, &mut wrapped);
            if wrapped > before {
                marked.insert(word.clone());
            }
        }
    }

    tracing::debug!("Highlighted {} occurrences", wrapped);

    segments
        .into_iter()
        .map(|seg| match seg {
            Segment::Plain(s) | Segment::Existing(s) => s,
            Segment::Wrapped { word, tier } => markup.wrap(&word, tier),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hsk() -> Markup {
        Markup::new("hsk").unwrap()
    }

    fn span(word: &str, tier: u32) -> String {
        hsk().wrap(word, tier)
    }

    #[test]
    fn test_lower_tier_claims_compound_first() {
        let tiers = TierTable::from_pairs([("語學", 1), ("語", 2)]);
        let out = apply_tiers("語學", &tiers, &hsk(), None);
        assert_eq!(out, span("語學", 1));
    }

    #[test]
    fn test_every_occurrence_is_wrapped_once() {
        let tiers = TierTable::from_pairs([("我", 1), ("你", 2), ("我", 3)]);
        let out = apply_tiers("我爱你，你爱我。", &tiers, &hsk(), None);
        assert_eq!(
            out,
            format!("{}爱{}，{}爱{}。", span("我", 1), span("你", 2), span("你", 2), span("我", 1))
        );
    }

    #[test]
    fn test_word_inside_longer_word_still_matches() {
        let tiers = TierTable::from_pairs([("学", 1)]);
        let out = apply_tiers("大学生", &tiers, &hsk(), None);
        assert_eq!(out, format!("大{}生", span("学", 1)));
    }

    #[test]
    fn test_full_run_replaces_previous_highlights() {
        let tiers = TierTable::from_pairs([("中国", 1)]);
        let previous = format!("{}国", span("中", 4));
        let out = apply_tiers(&previous, &tiers, &hsk(), None);
        assert_eq!(out, span("中国", 1));
    }

    #[test]
    fn test_target_tier_keeps_existing_highlights() {
        let tiers = TierTable::from_pairs([("中国", 1), ("国", 2), ("人", 2)]);
        let first = apply_tiers("中国人", &tiers, &hsk(), Some(1));
        assert_eq!(first, format!("{}人", span("中国", 1)));

        let second = apply_tiers(&first, &tiers, &hsk(), Some(2));
        assert_eq!(second, format!("{}{}", span("中国", 1), span("人", 2)));
    }

    #[test]
    fn test_target_tier_skips_words_already_marked() {
        let tiers = TierTable::from_pairs([("人", 2)]);
        let text = format!("{}和人", span("人", 1));
        assert_eq!(apply_tiers(&text, &tiers, &hsk(), Some(2)), text);
    }

    #[test]
    fn test_missing_target_and_empty_table() {
        let tiers = TierTable::from_pairs([("人", 1)]);
        assert_eq!(apply_tiers("人", &tiers, &hsk(), Some(9)), "人");

        let marked = span("人", 1);
        assert_eq!(apply_tiers(&marked, &TierTable::new(), &hsk(), None), "人");
        assert_eq!(apply_tiers(&marked, &TierTable::new(), &hsk(), Some(1)), marked);
    }

    #[test]
    fn test_skips_words_that_would_break_markup() {
        let tiers = TierTable::from_pairs([("", 1), ("<b>", 1), ("a.c", 1)]);
        let out = apply_tiers("<b>abc a.c</b>", &tiers, &hsk(), None);
        assert_eq!(out, format!("<b>abc {}</b>", span("a.c", 1)));
    }
}
