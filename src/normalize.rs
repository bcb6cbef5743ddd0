//! Input normalization for free-text vehicle descriptions

use std::sync::LazyLock;

use regex::Regex;

static SHARED: LazyLock<Normalizer> = LazyLock::new(Normalizer::new);

/// Strips noise from raw input before matching
///
/// Lower-cases, drops everything except ASCII letters, digits and spaces,
/// then collapses whitespace runs to a single space.
pub struct Normalizer {
    noise: Regex,
}

impl Normalizer {
    pub fn new() -> Self {
        // Literal pattern, cannot fail
        let noise = Regex::new(r"[^a-zA-Z0-9 ]").expect("Invalid regex pattern");
        Self { noise }
    }

    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let stripped = self.noise.replace_all(&lowered, "");
        stripped.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalization through a process-wide `Normalizer`
pub fn normalize_text(text: &str) -> String {
    SHARED.normalize(text)
}
