mod service;
mod subscribe;

pub use service::SubscriberCommandService;
pub use subscribe::{
    ALREADY_SUBSCRIBED_MESSAGE, SUBSCRIBE_FAILED_MESSAGE, SubscribeCommand,
};
