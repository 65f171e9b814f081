use crate::application::ports::util::SlugGenerator;

/// Lower-cases the input and collapses whitespace runs to single hyphens.
/// Every non-whitespace character is kept as written, so titles in any
/// script produce a usable slug.
#[derive(Default, Clone)]
pub struct WhitespaceSlugGenerator;

impl SlugGenerator for WhitespaceSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        input
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
            .trim_matches('-')
            .to_string()
    }
}
