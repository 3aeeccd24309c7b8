use crate::models::completion::{CompletionRequest, Message};
use crate::models::quote::DAILY_CATEGORY;

const SYSTEM_INSTRUCTION: &str =
    "You are a wise quote generator. Always respond with valid JSON only.";
const DAILY_SYSTEM_INSTRUCTION: &str =
    "You are a wise quote generator creating daily inspiration. Always respond with valid JSON only.";

const MAX_TOKENS: u32 = 150;
const TEMPERATURE: f32 = 0.8;
const DAILY_TEMPERATURE: f32 = 0.9;

/// Instructions and sampling parameters for a single quote completion.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Prompt {
    /// Category and style are interpolated as-is.
    pub fn for_request(category: &str, style: &str) -> Self {
        let user = format!(
            "Generate a {style} {category} quote.\n\
             \n\
             Please respond in this exact JSON format:\n\
             {}\n\
             \n\
             Make it inspiring and meaningful.",
            reply_shape(category)
        );

        Self {
            system: SYSTEM_INSTRUCTION.to_string(),
            user,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        }
    }

    pub fn daily() -> Self {
        let user = format!(
            "Generate a unique inspirational quote for today.\n\
             \n\
             Please respond in this exact JSON format:\n\
             {}\n\
             \n\
             Make it particularly meaningful and uplifting for someone starting their day.",
            reply_shape(DAILY_CATEGORY)
        );

        Self {
            system: DAILY_SYSTEM_INSTRUCTION.to_string(),
            user,
            max_tokens: MAX_TOKENS,
            temperature: DAILY_TEMPERATURE,
        }
    }

    pub fn into_completion(self, model: &str) -> CompletionRequest {
        CompletionRequest {
            model: model.to_string(),
            messages: vec![Message::system(self.system), Message::user(self.user)],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}

fn reply_shape(category: &str) -> String {
    format!(
        "{{\n    \"quote\": \"The actual quote text here\",\n    \
         \"author\": \"Author Name (can be 'Anonymous' if original)\",\n    \
         \"category\": \"{category}\"\n}}"
    )
}
