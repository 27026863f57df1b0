use digest_core::analyzers::{
    Analyzer, ClaimExtractor, EmotionalDetector, FillerDetector, NoveltyScorer, QuoteIsolator,
    RepetitionCollapser, SourceValidator, SpeculationStripper,
};
use digest_core::document::Document;
use digest_core::pipeline::{
    ClaimConfig, EmotionalConfig, FillerConfig, Mode, NoveltyConfig, QuoteConfig,
    RepetitionConfig, SourceConfig, SpeculationConfig,
};
use digest_core::types::{ClaimType, Entity, RemovalReason, SentenceCategory, SourceKind};

fn make_doc(sentences: &[&str]) -> Document {
    Document::ingest(sentences.iter().map(|s| s.to_string()).collect(), None)
}

#[test]
fn source_validator_captures_direct_attribution() {
    let mut doc = make_doc(&["The merger will save $3 billion annually, said John Smith."]);
    SourceValidator::new(&SourceConfig::default()).analyze(&mut doc);

    let sentence = &doc.sentences[0];
    assert!(sentence.has_named_source);
    assert_eq!(sentence.source_name.as_deref(), Some("John Smith"));
    assert!(doc.counters.named_sources.contains(&"John Smith".to_string()));
}

#[test]
fn source_validator_flags_unnamed_sources_without_removing_by_default() {
    let mut doc = make_doc(&["Sources familiar with the matter say layoffs are coming."]);
    SourceValidator::new(&SourceConfig::default()).analyze(&mut doc);

    let sentence = &doc.sentences[0];
    assert!(sentence.has_unnamed_source);
    assert!(sentence.keep, "flag mode annotates but never drops");
    assert_eq!(doc.counters.unnamed_source_references, 1);
}

#[test]
fn source_validator_removes_unnamed_sources_in_remove_mode() {
    let config = SourceConfig {
        enabled: true,
        unnamed_sources: Mode::Remove,
    };

    let mut doc = make_doc(&["Sources familiar with the matter say layoffs are coming."]);
    SourceValidator::new(&config).analyze(&mut doc);

    let sentence = &doc.sentences[0];
    assert!(!sentence.keep);
    assert_eq!(sentence.removal_reason, Some(RemovalReason::UnnamedSource));
}

#[test]
fn named_source_spares_a_sentence_from_unnamed_removal() {
    let config = SourceConfig {
        enabled: true,
        unnamed_sources: Mode::Remove,
    };

    let mut doc = make_doc(&[
        "According to sources, the deal is done, said Maria Lopez.",
    ]);
    SourceValidator::new(&config).analyze(&mut doc);

    let sentence = &doc.sentences[0];
    assert!(sentence.has_named_source);
    assert!(sentence.has_unnamed_source);
    assert!(sentence.keep);
}

#[test]
fn source_validator_rejects_pronouns_posing_as_names() {
    let mut doc = make_doc(&["They announced the decision on Friday."]);
    SourceValidator::new(&SourceConfig::default()).analyze(&mut doc);

    assert!(!doc.sentences[0].has_named_source);
    assert!(doc.counters.named_sources.is_empty());
}

#[test]
fn filler_detector_drops_engagement_hooks_and_transitions() {
    let mut doc = make_doc(&[
        "Here's what you need to know.",
        "Meanwhile,",
        "The council approved the housing plan on a 7-2 vote.",
    ]);
    FillerDetector::new(&FillerConfig::default()).analyze(&mut doc);

    assert_eq!(
        doc.sentences[0].removal_reason,
        Some(RemovalReason::EngagementHook)
    );
    assert_eq!(doc.sentences[0].category, SentenceCategory::EngagementHook);

    assert_eq!(
        doc.sentences[1].removal_reason,
        Some(RemovalReason::LowDensity)
    );
    assert!(doc.sentences[2].keep);
}

#[test]
fn filler_detector_drops_short_sentences_unless_they_carry_an_entity() {
    let mut doc = Document::ingest(
        vec!["It was fine.".to_string(), "Apple won.".to_string()],
        Some(vec![
            Vec::new(),
            vec![Entity::new("Apple", "ORG")],
        ]),
    );
    FillerDetector::new(&FillerConfig::default()).analyze(&mut doc);

    assert_eq!(
        doc.sentences[0].removal_reason,
        Some(RemovalReason::LowDensity)
    );
    assert!(doc.sentences[1].keep, "an entity rescues a short sentence");
}

#[test]
fn filler_detector_drops_long_sentences_with_no_content() {
    let mut doc = make_doc(&["It was what it was and so it was for all of them over there."]);
    FillerDetector::new(&FillerConfig::default()).analyze(&mut doc);

    assert_eq!(
        doc.sentences[0].removal_reason,
        Some(RemovalReason::LowDensity)
    );
}

#[test]
fn emotional_detector_scores_loaded_words_against_sentence_length() {
    let mut doc = make_doc(&[
        "In a SHOCKING development, the company reported $50 million in revenue.",
    ]);
    EmotionalDetector::new(&EmotionalConfig::default()).analyze(&mut doc);

    let sentence = &doc.sentences[0];
    // One lexicon hit over eleven words, tripled: 0.27.
    assert_eq!(sentence.emotional, 0.27);
    assert!(sentence.keep, "0.27 stays under the default 0.3 threshold");
}

#[test]
fn emotional_detector_strips_words_in_place_above_threshold() {
    let config = EmotionalConfig {
        threshold: 0.25,
        ..EmotionalConfig::default()
    };

    let mut doc = make_doc(&[
        "In a SHOCKING development, the company reported $50 million in revenue.",
    ]);
    EmotionalDetector::new(&config).analyze(&mut doc);

    let sentence = &doc.sentences[0];
    assert!(sentence.keep);
    assert_eq!(
        sentence.text,
        "In a development, the company reported $50 million in revenue."
    );
    assert_eq!(sentence.category, SentenceCategory::Emotional);
    assert_eq!(doc.counters.emotional_words_removed, 1);
}

#[test]
fn emotional_detector_drops_a_sentence_that_is_all_activation() {
    let mut doc = make_doc(&["Shocking, devastating, terrifying!"]);
    EmotionalDetector::new(&EmotionalConfig::default()).analyze(&mut doc);

    let sentence = &doc.sentences[0];
    assert_eq!(sentence.emotional, 1.0);
    assert!(!sentence.keep);
    assert_eq!(
        sentence.removal_reason,
        Some(RemovalReason::EmotionalActivation)
    );
    assert_eq!(doc.counters.emotional_words_removed, 3);
}

#[test]
fn emotional_detector_counts_shouting_as_a_bonus_signal() {
    let mut doc = make_doc(&["THIS OUTCOME WAS BAD FOR EVERYONE INVOLVED TODAY."]);
    EmotionalDetector::new(&EmotionalConfig::default()).analyze(&mut doc);

    // No lexicon hits, caps bonus only.
    assert_eq!(doc.sentences[0].emotional, 0.1);
    assert!(doc.sentences[0].keep);
}

#[test]
fn speculation_score_grows_with_marker_count() {
    let config = SpeculationConfig {
        mode: Mode::Keep,
        ..SpeculationConfig::default()
    };
    let stripper = SpeculationStripper::new(&config);

    let mut doc = make_doc(&[
        "The plan works.",
        "The plan could work.",
        "The plan could possibly work soon.",
    ]);
    stripper.analyze(&mut doc);

    let scores: Vec<f32> = doc.sentences.iter().map(|s| s.speculation).collect();
    assert_eq!(scores, vec![0.0, 0.28, 0.53]);
}

#[test]
fn speculation_score_saturates_at_one() {
    let config = SpeculationConfig {
        mode: Mode::Keep,
        ..SpeculationConfig::default()
    };

    let mut doc = make_doc(&[
        "Analysts say the merger could potentially reshape the industry and might possibly change hiring.",
    ]);
    SpeculationStripper::new(&config).analyze(&mut doc);

    assert_eq!(doc.sentences[0].speculation, 1.0);
    assert!(doc.sentences[0].keep, "keep mode never drops");
    assert_eq!(doc.sentences[0].category, SentenceCategory::Speculation);
}

#[test]
fn marker_count_overrides_a_sub_threshold_score() {
    let config = SpeculationConfig {
        enabled: true,
        mode: Mode::Remove,
        threshold: 0.9,
        max_hedges_per_sentence: 2,
    };

    // Three bare modals, no hedging adverbs or phrase patterns, so the
    // weighted score stays under the threshold while the marker count
    // exceeds the cap.
    let mut doc = make_doc(&["The deal could close and might slip, though it may not."]);
    SpeculationStripper::new(&config).analyze(&mut doc);

    let sentence = &doc.sentences[0];
    assert!(sentence.speculation < 0.9);
    assert!(!sentence.keep, "three markers exceed the per-sentence cap");
    assert_eq!(sentence.removal_reason, Some(RemovalReason::Speculation));
}

#[test]
fn quote_isolator_drops_a_quote_restating_the_recent_window() {
    let mut doc = make_doc(&[
        "Mayor Jane Collins said the flood damaged nearly 200 homes across the city.",
        "Rescue crews worked through the night to reach stranded residents.",
        "Relief shelters opened at three schools on the east side.",
        "\"The flood damaged nearly 200 homes,\" Collins told reporters.",
    ]);
    QuoteIsolator::new(&QuoteConfig::default()).analyze(&mut doc);

    let quote = &doc.sentences[3];
    assert_eq!(quote.category, SentenceCategory::Quote);
    assert!(!quote.keep);
    assert_eq!(quote.removal_reason, Some(RemovalReason::CircularQuote));

    assert!(doc.sentences[..3].iter().all(|s| s.keep));
}

#[test]
fn attributed_quote_with_new_content_is_kept() {
    let mut doc = make_doc(&[
        "\"We will rebuild the bridge by spring,\" said Governor Amy Park.",
    ]);
    QuoteIsolator::new(&QuoteConfig::default()).analyze(&mut doc);

    let sentence = &doc.sentences[0];
    assert!(sentence.keep);
    assert_eq!(sentence.category, SentenceCategory::Quote);
}

#[test]
fn unattributed_quote_is_dropped_unless_configured_otherwise() {
    let text = "\"This is a complete disaster for everyone involved.\"";

    let mut doc = make_doc(&[text]);
    QuoteIsolator::new(&QuoteConfig::default()).analyze(&mut doc);
    assert!(!doc.sentences[0].keep);
    assert_eq!(
        doc.sentences[0].removal_reason,
        Some(RemovalReason::CircularQuote)
    );

    let config = QuoteConfig {
        enabled: true,
        keep_unattributed: true,
    };
    let mut doc = make_doc(&[text]);
    QuoteIsolator::new(&config).analyze(&mut doc);
    assert!(doc.sentences[0].keep);
}

#[test]
fn claim_extractor_finds_statistical_claims() {
    let mut doc = make_doc(&["Revenue rose 15% to $2.3 billion in the fourth quarter."]);
    ClaimExtractor::new(&ClaimConfig::default()).analyze(&mut doc);

    assert_eq!(doc.claims.len(), 1);
    let claim = &doc.claims[0];
    assert_eq!(claim.claim_type, ClaimType::Statistical);
    assert_eq!(claim.source_kind, SourceKind::Unknown);
    assert_eq!(claim.confidence, 0.5);
}

#[test]
fn quote_claim_with_named_source_gets_high_confidence() {
    let mut doc = make_doc(&["\"The data is clear,\" said John Smith."]);
    SourceValidator::new(&SourceConfig::default()).analyze(&mut doc);
    ClaimExtractor::new(&ClaimConfig::default()).analyze(&mut doc);

    assert_eq!(doc.claims.len(), 1);
    let claim = &doc.claims[0];
    assert_eq!(claim.claim_type, ClaimType::Quote);
    assert_eq!(claim.text, "The data is clear,");
    assert_eq!(claim.source.as_deref(), Some("John Smith"));
    assert_eq!(claim.source_kind, SourceKind::Quoted);
    assert_eq!(claim.confidence, 0.9);
}

#[test]
fn attribution_claim_requires_a_named_source() {
    let mut doc = make_doc(&[
        "Mayor Jane Collins said the flood damaged nearly 200 homes across the city.",
    ]);
    SourceValidator::new(&SourceConfig::default()).analyze(&mut doc);
    ClaimExtractor::new(&ClaimConfig::default()).analyze(&mut doc);

    assert_eq!(doc.claims.len(), 1);
    let claim = &doc.claims[0];
    assert_eq!(claim.claim_type, ClaimType::Attribution);
    assert_eq!(claim.source_kind, SourceKind::Primary);
    assert_eq!(claim.source.as_deref(), Some("Jane Collins"));
    // 0.3 base + 0.3 named + 0.2 digits + 0.1 attribution verb.
    assert_eq!(claim.confidence, 0.9);
}

#[test]
fn declarative_sentence_falls_back_to_a_factual_claim() {
    let mut doc = make_doc(&[
        "The bridge reopened to traffic after eight months of repairs.",
        "What happens next?",
    ]);
    ClaimExtractor::new(&ClaimConfig::default()).analyze(&mut doc);

    assert_eq!(doc.claims.len(), 1);
    let claim = &doc.claims[0];
    assert_eq!(claim.claim_type, ClaimType::Factual);
    assert_eq!(claim.confidence, 0.3);
    assert_eq!(claim.sentence_index, 0);
}

#[test]
fn speculation_score_penalizes_claim_confidence() {
    let spec_config = SpeculationConfig {
        mode: Mode::Keep,
        ..SpeculationConfig::default()
    };

    let mut doc = make_doc(&["The merger could save $3 billion, analysts say."]);
    SpeculationStripper::new(&spec_config).analyze(&mut doc);
    ClaimExtractor::new(&ClaimConfig::default()).analyze(&mut doc);

    assert!(doc.sentences[0].speculation > 0.3);
    assert_eq!(doc.claims.len(), 1);
    // 0.3 base + 0.2 digits - 0.2 speculation penalty.
    assert_eq!(doc.claims[0].confidence, 0.3);
}

#[test]
fn novelty_baseline_goes_to_the_first_kept_sentence() {
    let mut doc = make_doc(&[
        "The factory opened near Detroit yesterday.",
        "Senators debated budget legislation overnight.",
    ]);
    NoveltyScorer::new(&NoveltyConfig::default()).analyze(&mut doc);

    assert_eq!(doc.sentences[0].novelty, 0.9);
    // Neutral entity share, all-new terms, one step of decay: 0.59.
    assert_eq!(doc.sentences[1].novelty, 0.59);
}

#[test]
fn repeated_terms_erode_novelty() {
    let mut doc = make_doc(&[
        "The factory opened near Detroit yesterday.",
        "Senators debated budget legislation overnight.",
        "Senators debated budget legislation overnight.",
    ]);
    NoveltyScorer::new(&NoveltyConfig::default()).analyze(&mut doc);

    assert!(doc.sentences[2].novelty < doc.sentences[1].novelty);
}

#[test]
fn already_seen_entities_lower_the_entity_share() {
    let mut doc = Document::ingest(
        vec![
            "Acme Corporation opened a factory.".to_string(),
            "Acme Corporation hired welders.".to_string(),
        ],
        Some(vec![
            vec![Entity::new("Acme Corporation", "ORG")],
            vec![Entity::new("Acme Corporation", "ORG")],
        ]),
    );
    NoveltyScorer::new(&NoveltyConfig::default()).analyze(&mut doc);

    // Entity share 0.0, term freshness 0.75, decayed: 0.3.
    assert_eq!(doc.sentences[1].novelty, 0.3);
}

#[test]
fn repetition_collapser_keeps_the_earliest_of_near_duplicates() {
    let mut doc = make_doc(&[
        "The factory opened in Detroit during March with 500 workers.",
        "The factory opened in Detroit during March with 500 employees.",
        "Senators debated the proposed budget legislation late Thursday evening.",
    ]);
    RepetitionCollapser::new(&RepetitionConfig::default()).analyze(&mut doc);

    assert!(doc.sentences[0].keep);
    assert!(!doc.sentences[1].keep);
    assert_eq!(
        doc.sentences[1].removal_reason,
        Some(RemovalReason::BackgroundRepeat)
    );
    assert!(doc.sentences[2].keep);
    assert_eq!(doc.counters.repetitions_collapsed, 1);
}

#[test]
fn repetition_collapser_ignores_sentences_below_the_length_floor() {
    let mut doc = make_doc(&["Big fire burned houses.", "Big fire burned houses."]);
    RepetitionCollapser::new(&RepetitionConfig::default()).analyze(&mut doc);

    assert!(doc.sentences.iter().all(|s| s.keep));
    assert_eq!(doc.counters.repetitions_collapsed, 0);
}
