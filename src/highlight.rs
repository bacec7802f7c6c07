// src/highlight.rs

use crate::types::commit_author::CommitAuthor;
use regex::RegexBuilder;

/// One segment of an author line, tagged for visual emphasis. Ephemeral:
/// recomputed at every draw from the author and the live query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightSpan {
    pub text: String,
    pub emphasized: bool,
}

pub fn display_text(author: &CommitAuthor) -> String {
    format!("{}<{}>", author.name, author.email)
}

/// Splits the author's display text into alternating plain/emphasized
/// segments by case-insensitive literal matching of `query`. The query is
/// escaped before matching, so `.` and `*` have no wildcard meaning.
/// Concatenating the segments always reproduces the display text.
pub fn highlight(author: &CommitAuthor, query: &str) -> Vec<HighlightSpan> {
    let text = display_text(author);
    if query.is_empty() {
        return vec![HighlightSpan {
            text,
            emphasized: false,
        }];
    }

    let pattern = RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
        .expect("escaped query is a valid pattern");

    let mut spans = Vec::new();
    let mut last = 0;
    for m in pattern.find_iter(&text) {
        if m.start() > last {
            spans.push(HighlightSpan {
                text: text[last..m.start()].to_string(),
                emphasized: false,
            });
        }
        spans.push(HighlightSpan {
            text: m.as_str().to_string(),
            emphasized: true,
        });
        last = m.end();
    }
    if last < text.len() {
        spans.push(HighlightSpan {
            text: text[last..].to_string(),
            emphasized: false,
        });
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> CommitAuthor {
        CommitAuthor {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
        }
    }

    fn join(spans: &[HighlightSpan]) -> String {
        spans.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn empty_query_is_one_plain_span() {
        let spans = highlight(&jane(), "");
        assert_eq!(
            spans,
            vec![HighlightSpan {
                text: "Jane Doe<jane@x.com>".to_string(),
                emphasized: false,
            }]
        );
    }

    #[test]
    fn splits_around_the_match() {
        let spans = highlight(&jane(), "Doe");
        let parts: Vec<(&str, bool)> = spans
            .iter()
            .map(|s| (s.text.as_str(), s.emphasized))
            .collect();
        assert_eq!(
            parts,
            vec![("Jane ", false), ("Doe", true), ("<jane@x.com>", false)]
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        let upper = highlight(&jane(), "JANE");
        let lower = highlight(&jane(), "jane");
        let emphasized = |spans: &[HighlightSpan]| {
            spans
                .iter()
                .map(|s| (s.text.to_lowercase(), s.emphasized))
                .collect::<Vec<_>>()
        };
        assert_eq!(emphasized(&upper), emphasized(&lower));
        assert!(upper.iter().any(|s| s.emphasized));
    }

    #[test]
    fn matches_every_occurrence() {
        // "jane" occurs in the name (case-insensitively) and in the email.
        let spans = highlight(&jane(), "jane");
        assert_eq!(spans.iter().filter(|s| s.emphasized).count(), 2);
    }

    #[test]
    fn concatenation_reproduces_display_text() {
        for query in ["", "a", "Doe", "e<j", "x.com", "no such match"] {
            let spans = highlight(&jane(), query);
            assert_eq!(join(&spans), "Jane Doe<jane@x.com>", "query {query:?}");
        }
    }

    #[test]
    fn unmatched_query_is_one_plain_span() {
        let spans = highlight(&jane(), "zzz");
        assert_eq!(spans.len(), 1);
        assert!(!spans[0].emphasized);
    }

    #[test]
    fn metacharacters_match_literally() {
        // "." must not act as a wildcard: only the literal dot in the
        // email matches.
        let spans = highlight(&jane(), ".");
        let emphasized: Vec<&str> = spans
            .iter()
            .filter(|s| s.emphasized)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(emphasized, vec!["."]);

        // "*" occurs nowhere, so nothing is emphasized.
        assert!(highlight(&jane(), "*").iter().all(|s| !s.emphasized));
    }
}
