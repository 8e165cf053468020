use chat_relay::services::json_extract::{
    extract_first_json_object, extract_first_json_object_from_value,
};
use chat_relay::services::markdown::{strip_markdown, strip_markdown_value};
use serde_json::{Value, json};

#[test]
fn test_model_reply_with_json_and_prose() {
    let reply = "Here is the summary you asked for:\n\n\
                 {\"name\": \"Alice\", \"topics\": [\"rust\", \"api\"]}\n\n\
                 Let me know if you need anything else.";

    let extracted = extract_first_json_object(reply).unwrap();
    let value: Value = serde_json::from_str(&extracted).unwrap();
    assert_eq!(value, json!({"name": "Alice", "topics": ["rust", "api"]}));
}

#[test]
fn test_markdown_reply_to_plain_text() {
    let reply = "## Next steps\n\n> **Note:** see the [docs](https://example.com).\n\n\
                 ```sh\ncargo run\n```\nRun `make` and *relax*.";

    assert_eq!(
        strip_markdown(reply),
        "Next steps\n\nNote: see the docs.\n\n\nRun make and relax."
    );
}

#[test]
fn test_untyped_inputs() {
    assert_eq!(extract_first_json_object_from_value(&json!(true)), None);
    assert_eq!(strip_markdown_value(&json!(3.5)), "");
}
