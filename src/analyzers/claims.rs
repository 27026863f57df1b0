use lazy_static::lazy_static;
use regex::Regex;

use crate::analyzers::Analyzer;
use crate::document::Document;
use crate::pipeline::config::ClaimConfig;
use crate::text;
use crate::types::{Claim, ClaimType, Sentence, SourceKind};

lazy_static! {
    static ref STATISTICAL_PATTERNS: Vec<Regex> = [
        // Percentages
        r"\d+(?:\.\d+)?%",
        // Dollar amounts
        r"\$\d+(?:,\d{3})*(?:\.\d+)?(?:\s*(?:million|billion|trillion))?",
        // Large plain numbers
        r"\d+(?:,\d{3})*(?:\.\d+)?\s*(?:million|billion|trillion)",
        // Percent spelled out
        r"\d+(?:\.\d+)?\s*(?:percent|percentage)",
        // Reported changes
        r"(?:increased|decreased|rose|fell|dropped|grew|declined)\s+(?:by\s+)?\d+",
        // Ranges and ratios
        r"\d+\s*(?:to|through|out of)\s*\d+",
    ]
    .iter()
    .map(|p| Regex::new(&format!("(?i){p}")).unwrap())
    .collect();

    static ref ANY_DOUBLE_QUOTED: Regex = Regex::new(r#""([^"]+)""#).unwrap();
    static ref ANY_SINGLE_QUOTED: Regex = Regex::new(r"'([^']+)'").unwrap();
}

static ATTRIBUTION_VERBS: &[&str] = &[
    "said", "says", "stated", "announced", "declared", "claimed", "reported", "confirmed",
    "denied", "acknowledged", "admitted", "argued", "asserted", "contended", "maintained", "noted",
    "observed", "pointed out", "remarked", "revealed", "suggested", "told", "wrote", "explained",
    "added", "warned",
];

/// Extracts falsifiable claims from the surviving sentences, in priority
/// order: statistical, quote, attribution, and — only when nothing else
/// matched — a generic factual claim from a declarative sentence.
///
/// Confidence folds in the speculation and emotional scores as penalties,
/// which is why this pass runs after both of those analyzers.
pub struct ClaimExtractor {
    enabled: bool,
    min_confidence: f32,
}

impl ClaimExtractor {
    pub fn new(config: &ClaimConfig) -> Self {
        ClaimExtractor {
            enabled: config.enabled,
            min_confidence: config.min_confidence,
        }
    }

    fn extract(&self, sentence: &Sentence) -> Vec<Claim> {
        let mut claims = Vec::new();

        if let Some(claim) = self.statistical_claim(sentence) {
            claims.push(claim);
        }

        let quote = self.quote_claim(sentence);
        let has_quote_claim = quote.is_some();
        if let Some(claim) = quote {
            claims.push(claim);
        }

        // An attributed quote already carries its attribution.
        if !has_quote_claim {
            if let Some(claim) = self.attribution_claim(sentence) {
                claims.push(claim);
            }
        }

        if claims.is_empty() {
            if let Some(claim) = self.factual_claim(sentence) {
                claims.push(claim);
            }
        }

        claims.retain(|c| c.confidence >= self.min_confidence);
        claims
    }

    fn statistical_claim(&self, sentence: &Sentence) -> Option<Claim> {
        if !STATISTICAL_PATTERNS.iter().any(|p| p.is_match(&sentence.text)) {
            return None;
        }

        Some(Claim {
            text: sentence.text.clone(),
            claim_type: ClaimType::Statistical,
            source: sentence.source_name.clone(),
            source_kind: if sentence.has_named_source {
                SourceKind::Quoted
            } else {
                SourceKind::Unknown
            },
            confidence: confidence(sentence, true, false),
            sentence_index: sentence.index,
        })
    }

    fn quote_claim(&self, sentence: &Sentence) -> Option<Claim> {
        let span = ANY_DOUBLE_QUOTED
            .captures(&sentence.text)
            .or_else(|| ANY_SINGLE_QUOTED.captures(&sentence.text))
            .and_then(|caps| caps.get(1))?;

        if !has_attribution(&sentence.text) {
            return None;
        }

        Some(Claim {
            text: span.as_str().to_string(),
            claim_type: ClaimType::Quote,
            source: sentence.source_name.clone(),
            source_kind: SourceKind::Quoted,
            // A verbatim quote is as strong as its attribution.
            confidence: if sentence.has_named_source { 0.9 } else { 0.5 },
            sentence_index: sentence.index,
        })
    }

    fn attribution_claim(&self, sentence: &Sentence) -> Option<Claim> {
        if !has_attribution(&sentence.text) || !sentence.has_named_source {
            return None;
        }

        Some(Claim {
            text: sentence.text.clone(),
            claim_type: ClaimType::Attribution,
            source: sentence.source_name.clone(),
            source_kind: SourceKind::Primary,
            confidence: confidence(sentence, false, true),
            sentence_index: sentence.index,
        })
    }

    fn factual_claim(&self, sentence: &Sentence) -> Option<Claim> {
        if !is_declarative(&sentence.text) {
            return None;
        }

        Some(Claim {
            text: sentence.text.clone(),
            claim_type: ClaimType::Factual,
            source: if sentence.has_named_source {
                sentence.source_name.clone()
            } else {
                None
            },
            source_kind: if sentence.has_named_source {
                SourceKind::Primary
            } else {
                SourceKind::Unknown
            },
            confidence: confidence(sentence, false, false),
            sentence_index: sentence.index,
        })
    }
}

fn has_attribution(text: &str) -> bool {
    let lowered = text.to_lowercase();
    ATTRIBUTION_VERBS.iter().any(|verb| lowered.contains(verb))
}

/// Non-interrogative and long enough to state something.
fn is_declarative(text: &str) -> bool {
    !text.trim().ends_with('?') && text::word_count(text) >= 4
}

fn confidence(sentence: &Sentence, has_numbers: bool, has_attribution_verb: bool) -> f32 {
    let mut score: f32 = 0.3;

    if sentence.has_named_source {
        score += 0.3;
    }
    if has_numbers || text::has_digit(&sentence.text) {
        score += 0.2;
    }
    if has_attribution_verb {
        score += 0.1;
    }
    if !sentence.entities.is_empty() {
        score += (sentence.entities.len() as f32 * 0.05).min(0.2);
    }
    if sentence.speculation > 0.3 {
        score -= 0.2;
    }
    if sentence.emotional > 0.3 {
        score -= 0.1;
    }

    text::round2(text::clamp01(score))
}

impl Analyzer for ClaimExtractor {
    fn name(&self) -> &'static str {
        "claim_extractor"
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn analyze(&self, doc: &mut Document) {
        let mut extracted = Vec::new();
        for sentence in doc.sentences.iter().filter(|s| s.keep) {
            extracted.extend(self.extract(sentence));
        }
        doc.claims.extend(extracted);
    }
}
