//! Prompt construction for the elaboration request.

use super::client::ChatMessage;

const SYSTEM_PROMPT: &str = "You are a creative assistant that elaborates on combinations \
of ideas. Provide a brief but creative description that explores how the combined elements \
could work together in an interesting way. Keep the response concise but engaging.";

pub fn messages(combination: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            role: "system".to_string(),
            content: SYSTEM_PROMPT.to_string(),
        },
        ChatMessage {
            role: "user".to_string(),
            content: format!("Please elaborate on this creative combination: {combination}"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_carries_the_combination_verbatim() {
        let msgs = messages("Color: Red | Size: Small");
        assert_eq!(msgs.len(), 2);
        assert_eq!(msgs[0].role, "system");
        assert_eq!(msgs[1].role, "user");
        assert!(msgs[1].content.ends_with("Color: Red | Size: Small"));
    }
}
