use crate::application::ports::util::SlugGenerator;
use slug::slugify;

/// Slugs via the `slug` crate: ASCII transliteration, lowercase, and every run
/// of non-alphanumeric characters collapsed to a single `-` with none at the ends.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}
