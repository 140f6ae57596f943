use csb::telegram::{format_chat_id, format_summary};

/// Tests for the summary formatting logic
/// These tests pin the report layout and the deep-link contract.

#[test]
fn test_format_chat_id() {
    assert_eq!(format_chat_id("-100123456789"), "123456789");
    assert_eq!(format_chat_id("123456789"), "123456789");
    assert_eq!(format_chat_id(-100_123_456_789_i64), "123456789");
    assert_eq!(format_chat_id(123456789), "123456789");
}

#[test]
fn test_format_chat_id_short_negative() {
    // Negative ids too short to carry the supergroup prefix lose only the sign
    assert_eq!(format_chat_id(-5), "5");
    assert_eq!(format_chat_id("-5"), "5");
}

#[test]
fn test_format_summary_valid_json() {
    let chat_id = "-100987654321";
    let summary_json = r#"[
        {
            "topic": "Test Topic",
            "participants": ["User1", "User2"],
            "discussion": [
                {
                    "point": "Discussion Point 1",
                    "key_message_ids": [10, 11]
                }
            ]
        }
    ]"#;

    let expected_output = "## Test Topic\n\
        Participant: User1, User2\n\
        Discussion:\n \
        - Discussion Point 1 \
        <a href=\"https://t.me/c/987654321/10\">[1]</a> \
        <a href=\"https://t.me/c/987654321/11\">[2]</a>";

    assert_eq!(format_summary(summary_json, chat_id), expected_output);
}

#[test]
fn test_format_summary_with_markdown_blocks() {
    let chat_id = "-100987654321";
    let summary_json = "```json\n\
        [\n\
          {\n\
            \"topic\": \"Test Topic\",\n\
            \"participants\": [\"User1\"],\n\
            \"discussion\": [\n\
              {\n\
                \"point\": \"Point\",\n\
                \"key_message_ids\": [5]\n\
              }\n\
            ]\n\
          }\n\
        ]\n\
        ```";

    let expected_output = "## Test Topic\n\
        Participant: User1\n\
        Discussion:\n \
        - Point <a href=\"https://t.me/c/987654321/5\">[1]</a>";

    assert_eq!(format_summary(summary_json, chat_id), expected_output);
}

#[test]
fn test_fence_stripping_is_transparent() {
    let inner = r#"[{"topic":"T","participants":["A"],"discussion":[{"point":"P","key_message_ids":[1]}]}]"#;
    let fenced = format!("```json\n{inner}\n```");

    assert_eq!(
        format_summary(inner, "-100555"),
        format_summary(&fenced, "-100555")
    );
}

#[test]
fn test_format_summary_invalid_json() {
    let result = format_summary("Not JSON", 123);
    assert!(
        result.starts_with("Error parsing summary"),
        "Unexpected result: {result}"
    );

    // Same contract with a string chat id
    let result = format_summary("Not JSON", "-100987654321");
    assert!(result.starts_with("Error parsing summary"));
}

#[test]
fn test_format_summary_wrong_shape() {
    // Valid JSON, but a present field with the wrong type
    let result = format_summary(r#"[{"topic": 42}]"#, 123);
    assert!(
        result.starts_with("Error parsing summary"),
        "Unexpected result: {result}"
    );

    // Valid JSON that is not an array at all
    let result = format_summary(r#"{"topic": "solo"}"#, 123);
    assert!(result.starts_with("Error parsing summary"));
}

#[test]
fn test_multiple_topics_joined_by_blank_line() {
    let summary_json = r#"[
        {"topic": "First", "participants": ["A"], "discussion": []},
        {"topic": "Second", "participants": ["B"], "discussion": []}
    ]"#;

    let result = format_summary(summary_json, 1);
    let expected = "## First\nParticipant: A\nDiscussion:\n\n\
        ## Second\nParticipant: B\nDiscussion:";
    assert_eq!(result, expected);
}

#[test]
fn test_citation_index_is_positional_not_id_valued() {
    let summary_json = r#"[
        {
            "topic": "T",
            "participants": [],
            "discussion": [
                {"point": "P", "key_message_ids": [9001, 3, 77]}
            ]
        }
    ]"#;

    let result = format_summary(summary_json, "42");
    assert!(result.contains("<a href=\"https://t.me/c/42/9001\">[1]</a>"));
    assert!(result.contains("<a href=\"https://t.me/c/42/3\">[2]</a>"));
    assert!(result.contains("<a href=\"https://t.me/c/42/77\">[3]</a>"));
}

#[test]
fn test_participant_line_emitted_when_list_empty() {
    let result = format_summary(r#"[{"topic": "T", "discussion": []}]"#, 1);
    assert_eq!(result, "## T\nParticipant: \nDiscussion:");
}

#[test]
fn test_format_summary_is_idempotent() {
    let summary_json = r#"[
        {
            "topic": "Repeat",
            "participants": ["X", "Y"],
            "discussion": [{"point": "Same", "key_message_ids": [1, 2]}]
        }
    ]"#;

    let first = format_summary(summary_json, -1001234567890_i64);
    let second = format_summary(summary_json, -1001234567890_i64);
    assert_eq!(first, second);
}
