use crate::application::ports::util::SlugGenerator;
use slug::slugify;

/// Longest slug kept before the timestamp is appended to form an id.
const MAX_SLUG_LEN: usize = 80;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let slug = slugify(input);
        if slug.len() <= MAX_SLUG_LEN {
            return slug;
        }
        // slugify output is ASCII, so byte slicing is safe.
        let cut = &slug[..MAX_SLUG_LEN];
        cut.rsplit_once('-')
            .map_or(cut, |(head, _)| head)
            .to_string()
    }
}
