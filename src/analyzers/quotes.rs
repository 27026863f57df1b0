use std::collections::VecDeque;

use lazy_static::lazy_static;
use regex::Regex;

use crate::analyzers::Analyzer;
use crate::cluster;
use crate::document::Document;
use crate::pipeline::config::QuoteConfig;
use crate::text;
use crate::types::{RemovalReason, Sentence, SentenceCategory};

lazy_static! {
    static ref ATTRIBUTION_PATTERNS: Vec<Regex> = [
        r#"(?:said|says|told|stated|announced|declared|claimed|reported|confirmed|denied|acknowledged|admitted|argued|asserted|wrote|explained|added|warned)\s+(?:that\s+)?["']"#,
        r#"["'][^"']+["'],?\s+(?:said|says|told|stated|announced|declared|claimed)"#,
        r#"according\s+to\s+[^,]+,?\s+["']"#,
        r#"["'][^"']+["'],?\s+according\s+to"#,
    ]
    .iter()
    .map(|p| Regex::new(&format!("(?i){p}")).unwrap())
    .collect();

    static ref DOUBLE_QUOTED: Regex = Regex::new(r#""([^"]+)""#).unwrap();
    static ref CURLY_QUOTED: Regex = Regex::new("\u{201c}([^\u{201c}\u{201d}]+)\u{201d}").unwrap();
    // Single quotes only count as quote marks around a substantial span.
    static ref LONG_SINGLE_QUOTED: Regex = Regex::new(r"'([^']{10,})'").unwrap();
}

static ATTRIBUTION_VERBS: &[&str] = &[
    "said", "says", "told", "stated", "announced", "declared", "claimed", "reported", "confirmed",
    "denied", "added", "wrote",
];

/// Number of recently kept sentences the circularity check looks back over.
const RECENT_WINDOW: usize = 5;

/// A quote restating at least this share of an earlier sentence's content
/// words is circular.
const CIRCULARITY_THRESHOLD: f32 = 0.7;

enum QuoteKind {
    /// Restates content already present in the recent window.
    Circular,
    /// Attributed and adds something new.
    Informative,
    Unattributed,
}

/// Classifies quoted spans against a sliding window of the five most
/// recently kept sentences. Circular quotes are always dropped;
/// unattributed quotes are dropped unless configured to keep them. The
/// window advances only with sentences that remain kept, so dropped
/// sentences never shield a later quote from the circularity check.
pub struct QuoteIsolator {
    enabled: bool,
    keep_unattributed: bool,
}

impl QuoteIsolator {
    pub fn new(config: &QuoteConfig) -> Self {
        QuoteIsolator {
            enabled: config.enabled,
            keep_unattributed: config.keep_unattributed,
        }
    }

    fn classify(&self, sentence: &Sentence, window: &VecDeque<String>) -> Option<QuoteKind> {
        let quoted = extract_quoted_span(&sentence.text)?;

        let attributed = is_attributed(&sentence.text) || sentence.has_named_source;

        if is_circular(&quoted, window) {
            return Some(QuoteKind::Circular);
        }
        if attributed {
            return Some(QuoteKind::Informative);
        }
        Some(QuoteKind::Unattributed)
    }
}

fn extract_quoted_span(text: &str) -> Option<String> {
    DOUBLE_QUOTED
        .captures(text)
        .or_else(|| CURLY_QUOTED.captures(text))
        .or_else(|| LONG_SINGLE_QUOTED.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|span| span.as_str().to_lowercase())
}

fn is_attributed(text: &str) -> bool {
    if ATTRIBUTION_PATTERNS.iter().any(|p| p.is_match(text)) {
        return true;
    }
    let lowered = text.to_lowercase();
    ATTRIBUTION_VERBS.iter().any(|verb| lowered.contains(verb))
}

fn is_circular(quoted: &str, window: &VecDeque<String>) -> bool {
    let quoted_words = text::content_word_set(quoted);
    if quoted_words.is_empty() {
        return false;
    }

    window.iter().any(|recent| {
        let recent_words = text::content_word_set(recent);
        !recent_words.is_empty()
            && cluster::containment(&quoted_words, &recent_words) >= CIRCULARITY_THRESHOLD
    })
}

impl Analyzer for QuoteIsolator {
    fn name(&self) -> &'static str {
        "quote_isolator"
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn analyze(&self, doc: &mut Document) {
        let mut window: VecDeque<String> = VecDeque::with_capacity(RECENT_WINDOW + 1);

        for sentence in &mut doc.sentences {
            if !sentence.keep {
                continue;
            }

            if let Some(kind) = self.classify(sentence, &window) {
                sentence.category = SentenceCategory::Quote;

                match kind {
                    QuoteKind::Circular => sentence.remove(RemovalReason::CircularQuote),
                    QuoteKind::Informative => {}
                    QuoteKind::Unattributed => {
                        if !self.keep_unattributed {
                            sentence.remove(RemovalReason::CircularQuote);
                        }
                    }
                }
            }

            if sentence.keep {
                window.push_back(sentence.text.to_lowercase());
                if window.len() > RECENT_WINDOW {
                    window.pop_front();
                }
            }
        }
    }
}
