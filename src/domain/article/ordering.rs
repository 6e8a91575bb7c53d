use crate::domain::article::entity::Article;
use std::cmp::Ordering;

/// Featured articles first, then newest first.
pub fn listing_order(a: &Article, b: &Article) -> Ordering {
    b.is_featured
        .cmp(&a.is_featured)
        .then_with(|| b.created_at.cmp(&a.created_at))
}

pub fn sort_for_listing(articles: &mut [Article]) {
    articles.sort_by(listing_order);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::{ArticleContent, ArticleId, ArticleTitle};
    use chrono::{TimeZone, Utc};

    fn article(id: &str, featured: bool, day: u32) -> Article {
        let at = Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap();
        Article {
            id: ArticleId::new(id).unwrap(),
            title: ArticleTitle::new(id).unwrap(),
            content: ArticleContent::default(),
            is_featured: featured,
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn featured_precede_newer_plain_articles() {
        let mut articles = vec![
            article("old-plain", false, 1),
            article("new-plain", false, 20),
            article("old-featured", true, 2),
            article("new-featured", true, 10),
        ];
        sort_for_listing(&mut articles);

        let ids: Vec<_> = articles.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(
            ids,
            ["new-featured", "old-featured", "new-plain", "old-plain"]
        );
    }
}
