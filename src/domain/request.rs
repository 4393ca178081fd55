use crate::domain::validation::ValidationError;
use crate::domain::value::{MessageText, RawPhoneNumber, SenderName};

#[derive(Debug, Clone)]
pub struct SendMessage {
    recipients: Vec<RawPhoneNumber>,
    message: MessageText,
    sender: SenderName,
}

impl SendMessage {
    pub fn new(
        recipients: Vec<RawPhoneNumber>,
        message: MessageText,
        sender: SenderName,
    ) -> Result<Self, ValidationError> {
        if recipients.is_empty() {
            return Err(ValidationError::Empty {
                field: RawPhoneNumber::FIELD,
            });
        }
        Ok(Self {
            recipients,
            message,
            sender,
        })
    }

    pub fn recipients(&self) -> &[RawPhoneNumber] {
        &self.recipients
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn sender(&self) -> &SenderName {
        &self.sender
    }
}
