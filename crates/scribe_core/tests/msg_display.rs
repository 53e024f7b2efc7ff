use pretty_assertions::assert_eq;
use scribe_core::{CopyTag, Msg, Task};

const SECRET: &str = "secret user text";

#[test]
fn display_never_contains_user_text() {
    let messages = [
        Msg::InputChanged {
            task: Task::Summarize,
            text: SECRET.to_string(),
        },
        Msg::RequestSucceeded {
            task: Task::Generate,
            request_id: 3,
            output: SECRET.to_string(),
        },
        Msg::RequestFailed {
            task: Task::Summarize,
            request_id: 4,
            server_message: Some(SECRET.to_string()),
        },
        Msg::CopyRequested {
            value: SECRET.to_string(),
            tag: CopyTag::Summary,
        },
        Msg::ServiceProbed(Ok(SECRET.to_string())),
    ];

    for msg in messages {
        let line = format!("msg {msg}");
        assert!(!line.contains(SECRET), "leaked text in {line:?}");
    }
}

#[test]
fn display_keeps_routing_details() {
    let msg = Msg::InputChanged {
        task: Task::Generate,
        text: SECRET.to_string(),
    };
    assert_eq!(msg.to_string(), "InputChanged Generate (16 chars)");

    let msg = Msg::RequestSucceeded {
        task: Task::Summarize,
        request_id: 9,
        output: "A fox.".to_string(),
    };
    assert_eq!(msg.to_string(), "RequestSucceeded Summarize request_id=9 (6 chars)");
}
