use std::str::FromStr;

use digest_core::digest::Deduplicator;
use digest_core::pipeline::{ConfigError, ExtractionPipeline, Mode, PipelineConfig};

#[test]
fn default_configuration_is_valid() {
    assert!(PipelineConfig::default().validate().is_ok());
    assert!(ExtractionPipeline::new(PipelineConfig::default()).is_ok());
}

#[test]
fn out_of_range_threshold_is_rejected_at_construction() {
    let mut config = PipelineConfig::default();
    config.emotional.threshold = 1.5;

    let err = ExtractionPipeline::new(config).err().unwrap();
    match err {
        ConfigError::ThresholdOutOfRange { field, value } => {
            assert_eq!(field, "emotional.threshold");
            assert_eq!(value, 1.5);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn negative_similarity_threshold_is_rejected() {
    let mut config = PipelineConfig::default();
    config.repetition.similarity_threshold = -0.1;

    assert!(matches!(
        config.validate(),
        Err(ConfigError::ThresholdOutOfRange {
            field: "repetition.similarity_threshold",
            ..
        })
    ));
}

#[test]
fn zero_decay_factor_is_rejected() {
    let mut config = PipelineConfig::default();
    config.novelty.decay_factor = 0.0;

    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidDecayFactor(_))
    ));
}

#[test]
fn error_messages_name_the_offending_field() {
    let mut config = PipelineConfig::default();
    config.claims.min_confidence = 2.0;

    let message = config.validate().unwrap_err().to_string();
    assert!(message.contains("claims.min_confidence"));
    assert!(message.contains("2"));
}

#[test]
fn mode_parses_its_three_spellings() {
    assert_eq!(Mode::from_str("keep").unwrap(), Mode::Keep);
    assert_eq!(Mode::from_str("flag").unwrap(), Mode::Flag);
    assert_eq!(Mode::from_str("remove").unwrap(), Mode::Remove);

    let err = Mode::from_str("aggressive").unwrap_err();
    assert!(matches!(err, ConfigError::UnknownMode(_)));
    assert!(err.to_string().contains("unknown mode"));
}

#[test]
fn partial_json_fills_missing_sections_with_defaults() {
    let config: PipelineConfig = serde_json::from_str(
        r#"{
            "emotional": {
                "enabled": true,
                "mode": "keep",
                "threshold": 0.4,
                "track_superlatives": false
            }
        }"#,
    )
    .unwrap();

    assert_eq!(config.emotional.mode, Mode::Keep);
    assert_eq!(config.emotional.threshold, 0.4);
    assert!(!config.emotional.track_superlatives);

    // Everything not mentioned keeps its default.
    let defaults = PipelineConfig::default();
    assert_eq!(config.sources, defaults.sources);
    assert_eq!(config.speculation, defaults.speculation);
    assert_eq!(config.repetition, defaults.repetition);
}

#[test]
fn deduplicator_rejects_an_out_of_range_threshold() {
    assert!(Deduplicator::new(2.0).is_err());
    assert!(Deduplicator::new(-0.5).is_err());
    assert!(Deduplicator::new(0.85).is_ok());
}
