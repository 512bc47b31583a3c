use focusfuse_core::error::FocusError;
use focusfuse_core::pipeline::config::FocusStackConfig;
use focusfuse_core::pipeline::PipelineStage;
use focusfuse_core::pyramid::LayerId;
use focusfuse_core::quality::WindowPlacement;

#[test]
fn test_default_config_is_valid() {
    let config = FocusStackConfig::default();
    assert_eq!(config.kernel_size, 9);
    assert_eq!(config.min_pyramid_size, 32);
    assert_eq!(config.number_to_stack, 10);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_bad_values() {
    let cases = [
        FocusStackConfig { kernel_size: 1, ..Default::default() },
        FocusStackConfig { kernel_size: 8, ..Default::default() },
        FocusStackConfig { min_pyramid_size: 0, ..Default::default() },
        FocusStackConfig { number_to_stack: 0, ..Default::default() },
    ];
    for config in cases {
        assert!(
            matches!(config.validate(), Err(FocusError::Configuration(_))),
            "{config:?} should be rejected"
        );
    }
}

#[test]
fn test_config_serde_round_trip() {
    let config = FocusStackConfig {
        kernel_size: 5,
        min_pyramid_size: 16,
        number_to_stack: 6,
    };
    let json = serde_json::to_string(&config).unwrap();
    let parsed: FocusStackConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_missing_fields_use_defaults() {
    let parsed: FocusStackConfig = serde_json::from_str(r#"{"kernel_size": 7}"#).unwrap();
    assert_eq!(parsed.kernel_size, 7);
    assert_eq!(parsed.min_pyramid_size, 32);
    assert_eq!(parsed.number_to_stack, 10);
}

#[test]
fn test_stage_display() {
    assert_eq!(format!("{}", PipelineStage::Scoring), "Scoring frames");
    assert_eq!(format!("{}", PipelineStage::Fusing), "Fusing pyramids");
}

#[test]
fn test_placement_and_layer_display() {
    assert_eq!(format!("{}", WindowPlacement::ClampedEnd), "Clamped at end");
    assert_eq!(format!("{}", LayerId::Source(3)), "layer 3");
    assert_eq!(format!("{}", LayerId::Fused), "fused");
}

#[test]
fn test_error_messages_name_the_culprit() {
    let err = FocusError::Load {
        index: 4,
        frame: "z04.png".to_string(),
        reason: "truncated".to_string(),
    };
    assert_eq!(err.to_string(), "Failed to load frame 4 (z04.png): truncated");

    let err = FocusError::ShapeMismatch {
        context: "frame 2".to_string(),
        expected: (10, 20),
        got: (10, 18),
    };
    assert_eq!(err.to_string(), "Shape mismatch in frame 2: expected 20x10, got 18x10");
}
