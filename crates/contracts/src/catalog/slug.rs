use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Builds the URL segment of a product from its display name.
///
/// Lower-cases, decomposes (NFD) and drops combining marks, turns every run
/// of whitespace into a single `-` and keeps only `[a-z0-9_-]`.
///
/// ```
/// use contracts::catalog::slugify;
/// assert_eq!(slugify("Tapioca de Queijo"), "tapioca-de-queijo");
/// assert_eq!(slugify("Açaí na Tigela"), "acai-na-tigela");
/// ```
pub fn slugify(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut in_whitespace = false;

    for c in lowered.nfd() {
        if is_combining_mark(c) {
            continue;
        }
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
                in_whitespace = true;
            }
            continue;
        }
        in_whitespace = false;
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            slug.push(c);
        }
    }

    slug
}
