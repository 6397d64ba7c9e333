// src/application/ports/util.rs
/// Turns free text into a URL-safe, lowercase, hyphen-separated token.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
