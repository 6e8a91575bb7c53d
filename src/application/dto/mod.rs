pub mod articles;
pub mod identity;
pub mod serde_time;

pub use articles::{ArticleDto, ArticleSummaryDto, ArticleViewDto};
pub use identity::{AuthStateDto, IdentityDto, SessionDto};
