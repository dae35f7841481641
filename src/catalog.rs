//! Pattern catalog: an ordered table of tag matchers.
//!
//! Game-localization strings carry markup the translator must never touch:
//! icon glyphs from the Unicode private use area, `[Key:Value]` variable tags,
//! brace placeholders, angle markup, and a small vocabulary of stat
//! abbreviations. Each kind is described by a [`TagPattern`], and the
//! [`PatternCatalog`] evaluates them in fixed priority order so that
//! structurally specific tags claim their characters before the generic
//! heuristics can misfire on a fragment of them.
//!
//! Overlap resolution is greedy interval scheduling: iterate patterns by
//! priority, within a pattern iterate matches left to right, accept a
//! candidate iff its span does not overlap any already-accepted span.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// A candidate tag span over a text buffer. Offsets are byte offsets into the
/// scanned string; `end` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateMatch {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl CandidateMatch {
    fn overlaps(&self, other: &CandidateMatch) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A tag matcher: produces zero or more candidate spans over a buffer.
///
/// Implementations must return spans in left-to-right order and must only
/// produce spans on `char` boundaries of the input.
pub trait TagPattern: Send + Sync {
    /// Short identifier used in diagnostics.
    fn name(&self) -> &'static str;

    /// All candidate spans of this pattern in `text`, left to right.
    fn find_spans(&self, text: &str) -> Vec<CandidateMatch>;
}

// Structural patterns. Compiled once; the literals are fixed so a failure
// here is a programming error caught by the catalog tests.
static BRACKET_VALUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[[A-Za-z][A-Za-z0-9_]*:[^\[\]]*\](?:\([^()]{1,24}\))?")
        .expect("bracket value pattern")
});
static NUMBER_BRACKET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\[[A-Za-z0-9_]+\]").expect("number bracket pattern"));
static BRACKET_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[A-Za-z0-9_]+\][0-9]+").expect("bracket number pattern"));
static BRACKET_ASSIGN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[[A-Za-z][A-Za-z0-9_]*=[^\[\]]*\]").expect("bracket assign pattern")
});
static BRACE_VALUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{[A-Za-z][A-Za-z0-9_]*:[^{}]*\}").expect("brace value pattern")
});
static BRACE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[A-Za-z_][A-Za-z0-9_]*\}").expect("brace name pattern"));
static ANGLE_MARKUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[A-Za-z][^<>]*>").expect("angle markup pattern"));
static CAPITALIZED_PAREN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\([A-Z][A-Za-z0-9 .,'%+-]{0,23}\)").expect("capitalized paren pattern")
});
static ABBREVIATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:EXP|XP|ATK|DEF|HP|MP|SP|LV|STR|VIT|INT|AGI|LUK|CRIT|km|cm|mm|kg|mg|ml)\b")
        .expect("abbreviation pattern")
});

/// A matcher backed by a compiled regular expression.
struct RegexPattern {
    name: &'static str,
    regex: &'static Regex,
}

impl TagPattern for RegexPattern {
    fn name(&self) -> &'static str {
        self.name
    }

    fn find_spans(&self, text: &str) -> Vec<CandidateMatch> {
        self.regex
            .find_iter(text)
            .map(|m| CandidateMatch {
                start: m.start(),
                end: m.end(),
                text: m.as_str().to_string(),
            })
            .collect()
    }
}

/// True for code points game fonts use for icon glyphs: the BMP private use
/// area plus planes 15 and 16.
pub(crate) fn is_private_use(c: char) -> bool {
    matches!(c, '\u{E000}'..='\u{F8FF}' | '\u{F0000}'..='\u{FFFFD}' | '\u{100000}'..='\u{10FFFD}')
}

/// Maximal runs of contiguous private-use-area code points.
///
/// A run is one atomic tag no matter how many individual icons it contains;
/// splitting it would let the translator reorder glyphs that only make sense
/// as a unit.
struct PrivateUseRuns;

impl TagPattern for PrivateUseRuns {
    fn name(&self) -> &'static str {
        "private-use-run"
    }

    fn find_spans(&self, text: &str) -> Vec<CandidateMatch> {
        let mut spans = Vec::new();
        let mut run_start: Option<usize> = None;
        for (offset, c) in text.char_indices() {
            if is_private_use(c) {
                run_start.get_or_insert(offset);
            } else if let Some(start) = run_start.take() {
                spans.push(CandidateMatch {
                    start,
                    end: offset,
                    text: text[start..offset].to_string(),
                });
            }
        }
        if let Some(start) = run_start {
            spans.push(CandidateMatch {
                start,
                end: text.len(),
                text: text[start..].to_string(),
            });
        }
        spans
    }
}

/// Interlinear annotation anchors and the replacement characters,
/// U+FFF9..=U+FFFD. Matched one marker per tag.
struct ReservedMarkers;

impl TagPattern for ReservedMarkers {
    fn name(&self) -> &'static str {
        "reserved-marker"
    }

    fn find_spans(&self, text: &str) -> Vec<CandidateMatch> {
        text.char_indices()
            .filter(|&(_, c)| matches!(c, '\u{FFF9}'..='\u{FFFD}'))
            .map(|(offset, c)| CandidateMatch {
                start: offset,
                end: offset + c.len_utf8(),
                text: c.to_string(),
            })
            .collect()
    }
}

/// The ordered matcher table. Earlier patterns claim characters first.
pub struct PatternCatalog {
    patterns: Vec<Box<dyn TagPattern>>,
}

impl PatternCatalog {
    /// Build a catalog from a custom ordered pattern table, highest priority
    /// first. Useful for per-game tag dialects.
    pub fn new(patterns: Vec<Box<dyn TagPattern>>) -> Self {
        PatternCatalog { patterns }
    }

    /// The builtin catalog covering the common game-markup dialects.
    pub fn builtin() -> Self {
        PatternCatalog::new(vec![
            Box::new(PrivateUseRuns),
            Box::new(RegexPattern {
                name: "bracket-value",
                regex: &BRACKET_VALUE_RE,
            }),
            Box::new(RegexPattern {
                name: "number-bracket",
                regex: &NUMBER_BRACKET_RE,
            }),
            Box::new(RegexPattern {
                name: "bracket-number",
                regex: &BRACKET_NUMBER_RE,
            }),
            Box::new(RegexPattern {
                name: "bracket-assign",
                regex: &BRACKET_ASSIGN_RE,
            }),
            Box::new(RegexPattern {
                name: "brace-value",
                regex: &BRACE_VALUE_RE,
            }),
            Box::new(RegexPattern {
                name: "brace-name",
                regex: &BRACE_NAME_RE,
            }),
            Box::new(ReservedMarkers),
            Box::new(RegexPattern {
                name: "angle-markup",
                regex: &ANGLE_MARKUP_RE,
            }),
            Box::new(RegexPattern {
                name: "capitalized-paren",
                regex: &CAPITALIZED_PAREN_RE,
            }),
            Box::new(RegexPattern {
                name: "abbreviation",
                regex: &ABBREVIATION_RE,
            }),
        ])
    }

    /// Scan `text` and return the accepted tag spans, sorted by start offset.
    ///
    /// Acceptance is greedy: patterns in priority order, matches left to
    /// right, a candidate accepted iff it overlaps no already-accepted span.
    /// The returned spans are pairwise non-overlapping.
    pub fn scan(&self, text: &str) -> Vec<CandidateMatch> {
        let mut accepted: Vec<CandidateMatch> = Vec::new();
        for pattern in &self.patterns {
            for candidate in pattern.find_spans(text) {
                if !accepted.iter().any(|a| a.overlaps(&candidate)) {
                    accepted.push(candidate);
                }
            }
        }
        accepted.sort_by_key(|m| m.start);
        accepted
    }
}

static BUILTIN: LazyLock<PatternCatalog> = LazyLock::new(PatternCatalog::builtin);

/// Shared instance of [`PatternCatalog::builtin`]; the free functions in this
/// crate scan with it.
pub fn builtin_catalog() -> &'static PatternCatalog {
    &BUILTIN
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(text: &str) -> Vec<CandidateMatch> {
        PatternCatalog::builtin().scan(text)
    }

    #[test]
    fn test_plain_text_has_no_matches() {
        assert!(scan("Press the button to confirm").is_empty());
        assert!(scan("").is_empty());
    }

    #[test]
    fn test_single_private_use_glyph() {
        let spans = scan("Press \u{E000} to confirm");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "\u{E000}");
        assert_eq!(spans[0].start, 6);
        assert_eq!(spans[0].end, 6 + '\u{E000}'.len_utf8());
    }

    #[test]
    fn test_private_use_run_is_atomic() {
        let spans = scan("Use \u{E000}\u{E001}\u{E002} here");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "\u{E000}\u{E001}\u{E002}");
    }

    #[test]
    fn test_private_use_run_at_string_edges() {
        let spans = scan("\u{E010}\u{E011}");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].start, 0);
        assert_eq!(spans[0].end, 6);
    }

    #[test]
    fn test_supplementary_plane_glyphs() {
        let spans = scan("icon \u{F0000}\u{100000} end");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "\u{F0000}\u{100000}");
    }

    #[test]
    fn test_separated_runs_stay_separate() {
        let spans = scan("\u{E000} and \u{E001}");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, "\u{E000}");
        assert_eq!(spans[1].text, "\u{E001}");
    }

    #[test]
    fn test_bracket_value_tags() {
        let spans = scan("[Color:Red]danger[Color:White]");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, "[Color:Red]");
        assert_eq!(spans[1].text, "[Color:White]");
    }

    #[test]
    fn test_bracket_value_with_description() {
        let spans = scan("Grants [Buff:Haste](Move faster) briefly");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "[Buff:Haste](Move faster)");
    }

    #[test]
    fn test_description_longer_than_bound_is_not_merged() {
        let long = "[Buff:Haste](This parenthetical is far too long to merge)";
        let spans = scan(long);
        assert_eq!(spans[0].text, "[Buff:Haste]");
    }

    #[test]
    fn test_number_prefixed_bracket_code() {
        let spans = scan("Deal 3[DMG] on hit");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "3[DMG]");
    }

    #[test]
    fn test_bracket_prefixed_number_code() {
        let spans = scan("Restores [HEAL]20 instantly");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "[HEAL]20");
    }

    #[test]
    fn test_bracket_assignment_tag() {
        let spans = scan("[Speed=12] movement");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "[Speed=12]");
    }

    #[test]
    fn test_brace_value_and_bare_brace() {
        let spans = scan("{Item:Sword} given to {player}");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, "{Item:Sword}");
        assert_eq!(spans[1].text, "{player}");
    }

    #[test]
    fn test_reserved_marker() {
        let spans = scan("a\u{FFF9}b\u{FFFB}c");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, "\u{FFF9}");
        assert_eq!(spans[1].text, "\u{FFFB}");
    }

    #[test]
    fn test_angle_markup() {
        let spans = scan("a <color=#ff0000>red</color> word");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, "<color=#ff0000>");
        assert_eq!(spans[1].text, "</color>");
    }

    #[test]
    fn test_capitalized_parenthetical() {
        let spans = scan("Blade of Dawn (Legendary)");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "(Legendary)");
    }

    #[test]
    fn test_lowercase_parenthetical_is_not_a_tag() {
        assert!(scan("press the switch (the red one)").is_empty());
    }

    #[test]
    fn test_abbreviation_vocabulary() {
        let spans = scan("Gain 50 EXP and 3 ATK");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, "EXP");
        assert_eq!(spans[1].text, "ATK");
    }

    #[test]
    fn test_abbreviations_are_case_sensitive_whole_words() {
        // "exp" lowercase and "EXPERT" as a larger word must not match.
        assert!(scan("an expert explains").is_empty());
    }

    #[test]
    fn test_measurement_units() {
        let spans = scan("range 30 km, weight 5 kg");
        let texts: Vec<&str> = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["km", "kg"]);
    }

    #[test]
    fn test_priority_bracket_beats_parenthetical_fragment() {
        // The parenthetical after the bracket tag belongs to the bracket
        // pattern; the standalone heuristic must not claim it again.
        let spans = scan("[Skill:Dash](Quick Step)");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "[Skill:Dash](Quick Step)");
    }

    #[test]
    fn test_priority_brace_value_beats_bare_brace() {
        let spans = scan("{Hero:Name}");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "{Hero:Name}");
    }

    #[test]
    fn test_accepted_spans_never_overlap() {
        let dense = "\u{E000}[A:B]3[C]{d}<e>(F) EXP [G=h]{I:j}[K]9\u{FFF9}";
        let spans = scan(dense);
        for pair in spans.windows(2) {
            assert!(pair[0].end <= pair[1].start, "overlap in {:?}", pair);
        }
    }

    #[test]
    fn test_spans_sorted_by_start() {
        let spans = scan("z {p} a [X:1] b \u{E000}");
        let starts: Vec<usize> = spans.iter().map(|s| s.start).collect();
        let mut sorted = starts.clone();
        sorted.sort_unstable();
        assert_eq!(starts, sorted);
    }

    #[test]
    fn test_custom_catalog_order_is_respected() {
        struct WholeText;
        impl TagPattern for WholeText {
            fn name(&self) -> &'static str {
                "whole-text"
            }
            fn find_spans(&self, text: &str) -> Vec<CandidateMatch> {
                if text.is_empty() {
                    vec![]
                } else {
                    vec![CandidateMatch {
                        start: 0,
                        end: text.len(),
                        text: text.to_string(),
                    }]
                }
            }
        }

        let catalog = PatternCatalog::new(vec![Box::new(WholeText), Box::new(PrivateUseRuns)]);
        let spans = catalog.scan("x \u{E000} y");
        // The whole-text pattern wins; the glyph run overlaps and is dropped.
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "x \u{E000} y");
    }
}
