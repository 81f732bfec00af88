//! Path string normalization and joining
//!
//! Install locations are assembled from configuration fragments that may mix
//! separator styles, so the engine keeps a small string-level toolkit instead
//! of going through `PathBuf` for these operations.

use std::path::MAIN_SEPARATOR;

/// Canonicalize the separators of a path string.
///
/// Replaces both `/` and `\` with the platform separator, collapses runs of
/// consecutive separators into one and strips a trailing separator. A bare
/// root separator is preserved. Idempotent.
pub fn normalize(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut prev_sep = false;

    for ch in path.chars() {
        if ch == '/' || ch == '\\' {
            if !prev_sep {
                out.push(MAIN_SEPARATOR);
            }
            prev_sep = true;
        } else {
            out.push(ch);
            prev_sep = false;
        }
    }

    if out.len() > 1 && out.ends_with(MAIN_SEPARATOR) {
        out.pop();
    }

    out
}

/// Join path segments with exactly one separator between them.
///
/// Empty segments are dropped. Each surviving segment is normalized and
/// trimmed of leading and trailing separators. The result is absolute
/// (prefixed with one separator) when the first non-dropped segment began
/// with a separator, relative otherwise; joining nothing yields an empty
/// string.
pub fn join<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parts: Vec<String> = Vec::new();
    let mut first_seen = false;
    let mut absolute = false;

    for segment in segments {
        let segment = segment.as_ref();
        if segment.is_empty() {
            continue;
        }

        if !first_seen {
            first_seen = true;
            absolute = segment.starts_with(['/', '\\']);
        }

        let trimmed = normalize(segment)
            .trim_matches(MAIN_SEPARATOR)
            .to_string();
        if !trimmed.is_empty() {
            parts.push(trimmed);
        }
    }

    let sep = MAIN_SEPARATOR.to_string();
    let body = parts.join(&sep);
    if absolute { format!("{sep}{body}") } else { body }
}

/// Final segment of a slash-separated package name (`vendor/app` -> `app`).
pub fn last_segment(name: &str) -> &str {
    match name.rfind('/') {
        Some(idx) => &name[idx + 1..],
        None => name,
    }
}
