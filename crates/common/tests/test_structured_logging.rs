use common::{LoggingConfig, OperationTimer, StructuredLogEntry};
use serde_json::Value;
use std::collections::HashMap;
use tracing::Level;

#[test]
fn test_default_logging_config() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, Level::WARN);
    assert!(!config.json_output);
    assert!(config.color_output);
}

#[test]
fn test_log_entry_without_duration_skips_field() {
    let entry = StructuredLogEntry {
        timestamp: chrono::Utc::now().to_rfc3339(),
        level: "WARN".to_string(),
        target: "infrastructure::storage".to_string(),
        message: "Stored wardrobe is unreadable".to_string(),
        fields: HashMap::new(),
        duration_ms: None,
    };

    let json = serde_json::to_string(&entry).unwrap();
    assert!(!json.contains("duration_ms"));

    let parsed: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["target"], "infrastructure::storage");
}

#[test]
fn test_operation_timer_success_path() {
    let mut timer = OperationTimer::new("classify_image");
    timer.add_field("mime_type", "image/png");
    let result: Result<u32, String> = Ok(1);
    timer.finish_with_result(&result);
}
