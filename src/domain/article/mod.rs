pub mod entity;
pub mod ordering;
pub mod repository;
pub mod seed;
pub mod services;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle};
pub use repository::ArticleRepository;
pub use services::ArticleIdService;
pub use value_objects::{ArticleContent, ArticleId, ArticleTitle};
