use serde::Deserialize;

use crate::styles::DEFAULT_STYLE;

fn default_style() -> String {
    DEFAULT_STYLE.to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageRequest {
    /// The topic to expand. Validated by the handler so that a missing or
    /// blank prompt produces the stable 400 body instead of a decode error.
    pub prompt: Option<String>,
    #[serde(default = "default_style")]
    pub style: String,
    #[serde(default)]
    pub generate_image: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_and_generate_image_default() {
        let request: GenerateImageRequest =
            serde_json::from_str(r#"{"prompt": "a quiet harbor at dawn"}"#).unwrap();
        assert_eq!(request.prompt.as_deref(), Some("a quiet harbor at dawn"));
        assert_eq!(request.style, "photo");
        assert!(!request.generate_image);
    }

    #[test]
    fn wire_fields_are_camel_case() {
        let request: GenerateImageRequest =
            serde_json::from_str(r#"{"prompt": "x", "style": "3d", "generateImage": true}"#)
                .unwrap();
        assert_eq!(request.style, "3d");
        assert!(request.generate_image);
    }

    #[test]
    fn missing_prompt_still_decodes() {
        let request: GenerateImageRequest = serde_json::from_str("{}").unwrap();
        assert!(request.prompt.is_none());
    }
}
