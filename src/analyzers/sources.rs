use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::analyzers::Analyzer;
use crate::document::Document;
use crate::pipeline::config::{Mode, SourceConfig};
use crate::types::RemovalReason;

lazy_static! {
    /// Named-source attribution, each with the name in capture group 1.
    static ref NAMED_SOURCE_PATTERNS: Vec<Regex> = vec![
        // Direct attribution: "said John Smith"
        Regex::new(
            r"(?:said|says|told|tells|stated|announced|confirmed|denied|claimed|reported)\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)+)"
        ).unwrap(),
        // Title attribution: "CEO John Smith said"
        Regex::new(
            r"(?:CEO|CFO|CTO|COO|President|Chairman|Director|Secretary|Minister|Senator|Representative|Governor|Mayor|Chief|Professor|Dr\.|Mr\.|Mrs\.|Ms\.)\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)\s+(?:said|says|told|stated)"
        ).unwrap(),
        // "according to John Smith"
        Regex::new(r"[Aa]ccording to\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)+)").unwrap(),
        // Appositive with affiliation: "Jane Doe, an analyst at Example Corp, said"
        Regex::new(
            r"([A-Z][a-z]+(?:\s+[A-Z][a-z]+)+),\s+(?:a|an|the)?\s*(?:\w+\s+)*(?:at|of|for|with)\s+[\w\s]+,?\s+(?:said|says|told|stated)"
        ).unwrap(),
        // Organization as speaker: "the Commerce Department announced"
        Regex::new(
            r"(?:the\s+)?([A-Z][A-Za-z]+(?:\s+[A-Z][A-Za-z]+)*)\s+(?:announced|said|stated|reported|confirmed|denied)"
        ).unwrap(),
    ];

    /// Anonymous-source phrasing, matched case-insensitively.
    static ref UNNAMED_SOURCE_PATTERNS: Vec<Regex> = [
        r"sources?\s+(?:say|said|indicate|suggest|claim|report)",
        r"sources?\s+familiar\s+with",
        r"sources?\s+close\s+to",
        r"sources?\s+within",
        r"sources?\s+inside",
        r"according\s+to\s+sources?",
        r"officials?\s+(?:say|said|who\s+spoke)",
        r"experts?\s+(?:say|said|believe|think)",
        r"people\s+(?:familiar|close|briefed)",
        r"(?:a|an)\s+(?:person|official|source)\s+who",
        r"those\s+with\s+knowledge",
        r"insiders?\s+(?:say|said)",
        r"someone\s+(?:familiar|close)",
        r"(?:an?\s+)?(?:senior|administration|government|company|industry)\s+official",
        r"speaking\s+(?:on\s+)?(?:condition\s+of\s+)?(?:anonymity|background)",
        r"who\s+(?:spoke|asked|declined)\s+(?:on\s+)?(?:condition\s+of\s+)?(?:anonymity|not\s+to\s+be\s+(?:named|identified))",
        r"requested\s+anonymity",
    ]
    .iter()
    .map(|p| Regex::new(&format!("(?i){p}")).unwrap())
    .collect();

    /// Capitalized words that look like names but never are.
    static ref FALSE_POSITIVE_NAMES: HashSet<&'static str> = [
        "The", "A", "An", "This", "That", "These", "Those",
        "It", "He", "She", "They", "We", "I", "You",
        "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
        "January", "February", "March", "April", "May", "June", "July",
        "August", "September", "October", "November", "December",
    ]
    .into_iter()
    .collect();
}

/// Scans each active sentence for named-source attribution and
/// anonymous-source phrasing, annotating the attribution fields that the
/// quote isolator and claim extractor read later.
///
/// In `remove` mode a sentence resting entirely on unnamed sources is
/// dropped; a named source anywhere in the same sentence spares it.
pub struct SourceValidator {
    enabled: bool,
    mode: Mode,
}

impl SourceValidator {
    pub fn new(config: &SourceConfig) -> Self {
        SourceValidator {
            enabled: config.enabled,
            mode: config.unnamed_sources,
        }
    }

    /// All valid named sources in the text, first-match order, deduplicated.
    fn find_named_sources(text: &str) -> Vec<String> {
        let mut sources: Vec<String> = Vec::new();
        for pattern in NAMED_SOURCE_PATTERNS.iter() {
            for caps in pattern.captures_iter(text) {
                if let Some(name) = caps.get(1) {
                    let name = name.as_str().trim();
                    if is_valid_source_name(name) && !sources.iter().any(|s| s == name) {
                        sources.push(name.to_string());
                    }
                }
            }
        }
        sources
    }

    fn has_unnamed_source(text: &str) -> bool {
        UNNAMED_SOURCE_PATTERNS.iter().any(|p| p.is_match(text))
    }
}

fn is_valid_source_name(name: &str) -> bool {
    if name.len() < 2 || FALSE_POSITIVE_NAMES.contains(name) {
        return false;
    }
    name.chars().next().is_some_and(|c| c.is_uppercase())
}

impl Analyzer for SourceValidator {
    fn name(&self) -> &'static str {
        "source_validator"
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn analyze(&self, doc: &mut Document) {
        for sentence in &mut doc.sentences {
            if !sentence.keep {
                continue;
            }

            let named = Self::find_named_sources(&sentence.text);
            if let Some(primary) = named.first() {
                sentence.has_named_source = true;
                sentence.source_name = Some(primary.clone());
                doc.counters.named_sources.extend(named);
            }

            if Self::has_unnamed_source(&sentence.text) {
                sentence.has_unnamed_source = true;
                doc.counters.unnamed_source_references += 1;

                if self.mode == Mode::Remove && !sentence.has_named_source {
                    sentence.remove(RemovalReason::UnnamedSource);
                }
            }
        }
    }
}
