use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_to_anthropic() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[("LLM_API_KEY_ENV", "TEST_KEY"), ("TEST_KEY", "secret")])).unwrap();
    assert_eq!(cfg.provider, LlmProviderKind::Anthropic);
    assert_eq!(cfg.model, "claude-sonnet-4-5-20250929");
    assert_eq!(cfg.api_key, "secret");
    assert_eq!(cfg.openai_mode, OpenAiApiMode::ChatCompletions);
    assert_eq!(cfg.openai_base_url, DEFAULT_OPENAI_BASE_URL);
    assert_eq!(cfg.timeouts, LlmTimeouts::default());
}

#[test]
fn openai_overrides_are_applied() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[
        ("LLM_PROVIDER", "openai"),
        ("LLM_API_KEY_ENV", "OPENAI_API_KEY"),
        ("OPENAI_API_KEY", "sk-test"),
        ("LLM_OPENAI_MODE", "responses"),
        ("LLM_OPENAI_BASE_URL", "http://localhost:8080/v1/"),
        ("LLM_REQUEST_TIMEOUT_SECS", "30"),
        ("LLM_CONNECT_TIMEOUT_SECS", "not-a-number"),
    ]))
    .unwrap();
    assert_eq!(cfg.provider, LlmProviderKind::OpenAi);
    assert_eq!(cfg.model, "gpt-4o");
    assert_eq!(cfg.openai_mode, OpenAiApiMode::Responses);
    assert_eq!(cfg.openai_base_url, "http://localhost:8080/v1");
    assert_eq!(cfg.timeouts.request_secs, 30);
    assert_eq!(cfg.timeouts.connect_secs, DEFAULT_LLM_CONNECT_TIMEOUT_SECS);
}

#[test]
fn missing_key_pointer_is_reported() {
    let err = LlmConfig::from_lookup(lookup_from(&[])).unwrap_err();
    assert!(matches!(err, LlmError::MissingApiKey { var } if var == "LLM_API_KEY_ENV"));
}

#[test]
fn blank_key_counts_as_missing() {
    let err = LlmConfig::from_lookup(lookup_from(&[("LLM_API_KEY_ENV", "TEST_KEY"), ("TEST_KEY", "  ")])).unwrap_err();
    assert!(matches!(err, LlmError::MissingApiKey { var } if var == "TEST_KEY"));
}

#[test]
fn unknown_provider_is_a_parse_error() {
    let err = LlmConfig::from_lookup(lookup_from(&[("LLM_PROVIDER", "mystery")])).unwrap_err();
    assert!(matches!(err, LlmError::ConfigParse(msg) if msg.contains("mystery")));
}

#[test]
fn unknown_openai_mode_is_a_parse_error() {
    let err = LlmConfig::from_lookup(lookup_from(&[
        ("LLM_API_KEY_ENV", "K"),
        ("K", "v"),
        ("LLM_OPENAI_MODE", "streaming"),
    ]))
    .unwrap_err();
    assert!(matches!(err, LlmError::ConfigParse(_)));
}
