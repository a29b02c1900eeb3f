use serde_json::json;

use super::*;

fn prompt() -> ListPrompt<'static> {
    ListPrompt { system: "You are PrimeCFO.", user: "Revenue: 120", max_tokens: 2048, list_key: "insights" }
}

fn messages_body(text_blocks: serde_json::Value, stop_reason: &str) -> String {
    json!({
        "id": "msg_01",
        "type": "message",
        "role": "assistant",
        "content": text_blocks,
        "model": "claude-sonnet-4-5-20250929",
        "stop_reason": stop_reason,
        "usage": { "input_tokens": 812, "output_tokens": 377 }
    })
    .to_string()
}

#[test]
fn request_ends_with_open_array_prefill() {
    let body = serde_json::to_value(request_body("claude-test", &prompt())).unwrap();
    assert_eq!(body["model"], "claude-test");
    assert_eq!(body["max_tokens"], 2048);
    assert_eq!(body["system"], "You are PrimeCFO.");
    assert_eq!(body["messages"][0], json!({ "role": "user", "content": "Revenue: 120" }));
    assert_eq!(body["messages"][1], json!({ "role": "assistant", "content": "[" }));
}

#[test]
fn reply_is_continued_from_prefill() {
    let body = messages_body(json!([{ "type": "text", "text": "{\"title\":\"Runway\"}]" }]), "end_turn");
    let reply = reply_from_body(&body).unwrap();
    assert_eq!(reply.json, "[{\"title\":\"Runway\"}]");
    assert_eq!(reply.model, "claude-sonnet-4-5-20250929");
    assert!(!reply.truncated);
    assert_eq!((reply.input_tokens, reply.output_tokens), (812, 377));
}

#[test]
fn split_text_blocks_are_joined_and_others_skipped() {
    let body = messages_body(
        json!([
            { "type": "text", "text": "{\"title\":\"A\"}," },
            { "type": "thinking", "thinking": "ignored" },
            { "type": "text", "text": "{\"title\":\"B\"}]" }
        ]),
        "end_turn",
    );
    assert_eq!(reply_from_body(&body).unwrap().json, "[{\"title\":\"A\"},{\"title\":\"B\"}]");
}

#[test]
fn token_limit_stop_marks_reply_truncated() {
    let body = messages_body(json!([{ "type": "text", "text": "{\"title\":\"Cash" }]), "max_tokens");
    assert!(reply_from_body(&body).unwrap().truncated);
}

#[test]
fn envelope_without_usage_is_a_decode_error() {
    let body = json!({ "content": [], "model": "m" }).to_string();
    assert!(matches!(reply_from_body(&body), Err(LlmError::Decode(_))));
}
