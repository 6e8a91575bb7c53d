use super::SubscriberCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{errors::DomainError, subscriber::SubscriberEmail},
};

pub const ALREADY_SUBSCRIBED_MESSAGE: &str = "This email is already subscribed.";
pub const SUBSCRIBE_FAILED_MESSAGE: &str = "Could not add subscriber.";

pub struct SubscribeCommand {
    pub email: String,
}

impl SubscriberCommandService {
    /// Unlike the article commands, every failure here is reported back
    /// with text that can be shown as-is.
    pub fn subscribe(&self, command: SubscribeCommand) -> ApplicationResult<()> {
        let email = SubscriberEmail::parse(command.email)?;

        match self.repo.add(email) {
            Ok(()) => {
                tracing::info!("subscriber added");
                Ok(())
            }
            Err(DomainError::Conflict(_)) => {
                Err(ApplicationError::conflict(ALREADY_SUBSCRIBED_MESSAGE))
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to add subscriber");
                Err(ApplicationError::infrastructure(SUBSCRIBE_FAILED_MESSAGE))
            }
        }
    }
}
