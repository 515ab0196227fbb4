use serde::{Deserialize, Serialize};

use crate::validation::{Validate, ValidationErrors, Violations};

pub const MESSAGE_REQUIRED: &str = "Message cannot be empty";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageRequestDraft {
	pub message: Option<String>,
	pub conversation_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageRequest {
	pub message: String,
	pub conversation_id: Option<String>,
}

impl Validate for ChatMessageRequestDraft {
	type Valid = ChatMessageRequest;

	fn validate(self) -> Result<ChatMessageRequest, ValidationErrors> {
		let mut violations = Violations::new();
		match violations.not_blank("message", self.message, MESSAGE_REQUIRED) {
			Some(message) => Ok(ChatMessageRequest {
				message,
				conversation_id: self.conversation_id,
			}),
			None => Err(violations.into_errors()),
		}
	}
}
