use playground_rust::chat::{ChatSession, render_content};
use pretty_assertions::assert_eq;

#[test]
fn test_outbound_messages_prefix_system_turn() {
    let mut session = ChatSession::new("@cf/qwen/qwen1.5-14b-chat-awq", "You are terse");
    session.push_user("hello");
    session.push_assistant("hi there");
    session.push_user("how are you?");

    let messages = session.outbound_messages();

    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0].role, "system");
    assert_eq!(messages[0].content, "You are terse");
    assert_eq!(messages[1].role, "user");
    assert_eq!(messages[1].content, "hello");
    assert_eq!(messages[2].role, "assistant");
    assert_eq!(messages[3].content, "how are you?");
}

#[test]
fn test_outbound_messages_reflect_updated_system_message() {
    let mut session = ChatSession::new("@cf/qwen/qwen1.5-14b-chat-awq", "first");
    session.push_user("hello");
    session.set_system_message("second");

    let messages = session.outbound_messages();
    assert_eq!(messages[0].content, "second");
}

#[test]
fn test_transcript_keeps_insertion_order() {
    let mut session = ChatSession::new("@cf/meta/llama-2-7b-chat-int8", "sys");
    session.push_user("one");
    session.push_assistant("two");

    let transcript = session.transcript();
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[0].turn.content, "one");
    assert_eq!(transcript[1].turn.content, "two");
    assert!(transcript[0].at <= transcript[1].at);
}

#[test]
fn test_response_time_statistics() {
    let mut session = ChatSession::new("@cf/meta/llama-2-7b-chat-int8", "sys");

    assert_eq!(session.last_response_time(), None);
    assert_eq!(session.average_response_time(), None);

    session.record_response_time(1.0);
    session.record_response_time(2.0);
    session.record_response_time(6.0);

    assert_eq!(session.last_response_time(), Some(6.0));
    let average = session.average_response_time().unwrap();
    assert!((average - 3.0).abs() < 1e-9);
}

#[test]
fn test_set_model_switches_mid_session() {
    let mut session = ChatSession::new("@cf/qwen/qwen1.5-7b-chat-awq", "sys");
    session.push_user("hello");

    session.set_model("@hf/google/gemma-7b-it");

    assert_eq!(session.model(), "@hf/google/gemma-7b-it");
    // Switching models keeps the transcript
    assert_eq!(session.transcript().len(), 1);
}

#[test]
fn test_render_content_aligns_line_breaks() {
    assert_eq!(
        render_content("first line\nsecond line"),
        "first line\n           second line"
    );
}

#[test]
fn test_render_content_trims_trailing_whitespace() {
    assert_eq!(render_content("answer\n\n"), "answer");
    assert_eq!(render_content("plain"), "plain");
}
