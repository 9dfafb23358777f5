//! Tests for request types, styles and temperature bounds.

use blogsmith_core::{
    BlogStyle, DEFAULT_TEMPERATURE, DEFAULT_WORD_COUNT, GenerationRequest, GenerationResult,
    MAX_NEW_TOKENS, Temperature,
};

#[test]
fn test_temperature_clamps_to_bounds() {
    assert_eq!(Temperature::new(0.1).value(), 0.1);
    assert_eq!(Temperature::new(2.0).value(), 2.0);
    assert_eq!(Temperature::new(0.0).value(), Temperature::MIN);
    assert_eq!(Temperature::new(-3.0).value(), Temperature::MIN);
    assert_eq!(Temperature::new(2.5).value(), Temperature::MAX);
    assert_eq!(Temperature::new(f32::NAN).value(), Temperature::MIN);
    assert_eq!(Temperature::new(0.7).value(), 0.7);
}

#[test]
fn test_temperature_deserialize_clamps() -> Result<(), Box<dyn std::error::Error>> {
    let high: Temperature = serde_json::from_str("9.5")?;
    let low: Temperature = serde_json::from_str("0.01")?;
    assert_eq!(high.value(), 2.0);
    assert_eq!(low.value(), 0.1);
    Ok(())
}

#[test]
fn test_form_defaults() {
    assert_eq!(DEFAULT_WORD_COUNT, "100");
    assert_eq!(DEFAULT_TEMPERATURE, 0.09);
    assert_eq!(BlogStyle::default(), BlogStyle::Researchers);
    // Declared default lies below the range, so the effective value is the minimum
    assert_eq!(Temperature::default().value(), 0.1);
}

#[test]
fn test_style_labels_and_order() {
    let labels: Vec<String> = BlogStyle::all().map(|s| s.to_string()).collect();
    assert_eq!(labels, vec!["Researchers", "Data Scientist", "Common People"]);
}

#[test]
fn test_style_parses_label_and_variant() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(BlogStyle::from_label("Data Scientist")?, BlogStyle::DataScientist);
    assert_eq!(BlogStyle::from_label("DataScientist")?, BlogStyle::DataScientist);
    assert_eq!(BlogStyle::from_label(" Common People ")?, BlogStyle::CommonPeople);
    assert_eq!(BlogStyle::from_label("Researchers")?, BlogStyle::Researchers);
    Ok(())
}

#[test]
fn test_style_rejects_unknown_label() {
    let err = BlogStyle::from_label("Managers").unwrap_err();
    assert!(err.to_string().contains("Managers"));
}

#[test]
fn test_builder_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let request = GenerationRequest::builder().topic("Kafka").build()?;
    assert_eq!(request.topic(), "Kafka");
    assert_eq!(request.word_count(), "100");
    assert_eq!(*request.style(), BlogStyle::Researchers);
    assert_eq!(request.temperature().value(), 0.1);
    Ok(())
}

#[test]
fn test_builder_requires_topic() {
    assert!(GenerationRequest::builder().word_count("10").build().is_err());
}

#[test]
fn test_generation_config_uses_fixed_budget() {
    let request = GenerationRequest::new("Python", "50", BlogStyle::Researchers, 0.7);
    let config = request.generation_config();
    assert_eq!(*config.max_new_tokens(), MAX_NEW_TOKENS);
    assert_eq!(*config.max_new_tokens(), 256);
    assert_eq!(config.temperature().value(), 0.7);
}

#[test]
fn test_result_is_verbatim() {
    let text = "  A post far longer than fifty words...\n\n";
    let result = GenerationResult::new(text);
    assert_eq!(result.text(), text);
    assert_eq!(result.into_text(), text);
}
