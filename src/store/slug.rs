use crate::error::{Error, Result};

/// Canonicalizes a free-form code into a URL-safe slug: lowercase ASCII
/// letters and digits, single hyphens between words, nothing else.
///
/// Whitespace, hyphens, and underscores separate words; all other characters
/// are dropped. An input with no usable characters produces an empty string,
/// which callers must reject before persistence.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut word_break = false;

    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            if word_break && !slug.is_empty() {
                slug.push('-');
            }
            word_break = false;
            slug.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() || c == '-' || c == '_' {
            word_break = true;
        }
    }

    slug
}

/// Slugifies a code destined for a primary key, rejecting inputs that
/// normalize to nothing.
pub fn canonical_code(input: &str) -> Result<String> {
    let slug = slugify(input);
    if slug.is_empty() {
        return Err(Error::InvalidCode(format!(
            "'{input}' contains no letters or digits"
        )));
    }
    Ok(slug)
}
