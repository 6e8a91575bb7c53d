// src/application/ports/util.rs

/// Turns free text into a lowercase, hyphen-separated, URL-safe fragment.
/// May return an empty string when nothing usable is left.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
