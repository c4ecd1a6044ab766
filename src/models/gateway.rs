use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        ChatMessage {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatCompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayModel {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_request_uses_gateway_field_names() {
        let request = ChatCompletionRequest {
            messages: vec![ChatMessage::system("sys"), ChatMessage::user("usr")],
            model: "gemini-3-flash".to_string(),
            temperature: 0.8,
            max_output_tokens: 200,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gemini-3-flash");
        assert_eq!(value["maxOutputTokens"], 200);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "usr");
    }
}
