//! SKU generation
//!
//! `TEE-SHIRT-RED-SMALL-4821`: normalized name fragments followed by a random
//! 4-digit suffix. A multi-word fragment contributes one token per word, and
//! at most [`MAX_SKU_TOKENS`] tokens precede the suffix. Uniqueness is not
//! checked here; the backend owns that.

use rand::Rng;

/// At most this many dash-separated tokens are kept before the suffix
pub const MAX_SKU_TOKENS: usize = 10;

/// Used when every fragment normalizes to nothing
const FALLBACK_TOKEN: &str = "SKU";

/// Upper-case ASCII alphanumeric words of one fragment
fn words(part: &str) -> impl Iterator<Item = String> + '_ {
    part.split(|c: char| c.is_whitespace() || c == '-')
        .map(|word| {
            word.chars()
                .filter(char::is_ascii_alphanumeric)
                .collect::<String>()
                .to_ascii_uppercase()
        })
        .filter(|word| !word.is_empty())
}

/// Normalize one fragment: upper-case ASCII alphanumerics, words joined by `-`
pub fn normalize_part(part: &str) -> String {
    words(part).collect::<Vec<_>>().join("-")
}

/// Generate a SKU with a thread-local random suffix
pub fn generate<S: AsRef<str>>(parts: &[S]) -> String {
    generate_with(&mut rand::thread_rng(), parts)
}

/// Generate a SKU drawing the suffix from `rng`
pub fn generate_with<R: Rng + ?Sized, S: AsRef<str>>(rng: &mut R, parts: &[S]) -> String {
    let mut tokens: Vec<String> = parts
        .iter()
        .flat_map(|p| words(p.as_ref()))
        .take(MAX_SKU_TOKENS)
        .collect();
    if tokens.is_empty() {
        tokens.push(FALLBACK_TOKEN.to_string());
    }

    let suffix: u16 = rng.gen_range(1000..=9999);
    tokens.push(suffix.to_string());
    tokens.join("-")
}
