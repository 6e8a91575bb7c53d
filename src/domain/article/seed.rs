use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleTitle};
use crate::domain::errors::DomainResult;
use chrono::{DateTime, TimeZone, Utc};

const WELCOME_CONTENT: &str = "This is the first post on my new blog. I'll be writing about \
React, TypeScript, and modern web development. All data for this blog is stored in a simple \
key-value store, so there is no database to run. You can log in as an admin to create, edit, \
and delete posts.";

const HOOKS_CONTENT: &str = "React Hooks have revolutionized how we write components. In this \
article, we will explore `useState`, `useEffect`, and `useContext` with practical examples to \
help you master them. We will also touch on custom hooks to encapsulate reusable logic.";

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn seeded(
    id: &str,
    title: &str,
    content: &str,
    created_at: DateTime<Utc>,
    is_featured: bool,
) -> DomainResult<Article> {
    Ok(Article {
        id: ArticleId::new(id)?,
        title: ArticleTitle::new(title)?,
        content: ArticleContent::new(content),
        is_featured,
        created_at,
        updated_at: created_at,
    })
}

/// Articles written into an empty store on first start.
pub fn seed_articles() -> DomainResult<Vec<Article>> {
    Ok(vec![
        seeded(
            "welcome-to-my-blog",
            "Welcome to My Tech Blog!",
            WELCOME_CONTENT,
            at(2023, 10, 26, 10, 0),
            false,
        )?,
        seeded(
            "understanding-react-hooks",
            "A Deep Dive into React Hooks",
            HOOKS_CONTENT,
            at(2023, 11, 5, 14, 30),
            true,
        )?,
    ])
}
