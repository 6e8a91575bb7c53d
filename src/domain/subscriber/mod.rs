pub mod repository;
pub mod value_objects;

pub use repository::SubscriberRepository;
pub use value_objects::SubscriberEmail;
