//! Slug generation.
//!
//! Slugs are the unique lookup keys for classes, sections, subjects and
//! schools. Uniqueness is not handled here; callers check storage.

use crate::errors::AppError;

/// Lowercases `title`, collapses each run of whitespace into a single `-`,
/// and drops every character outside `[A-Za-z0-9_-]`.
///
/// Returns a bad-request error for an empty title.
pub fn generate_slug(title: &str) -> Result<String, AppError> {
    if title.is_empty() {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "Invalid title provided to generate slug"
        )));
    }

    let mut slug = String::with_capacity(title.len());
    let mut in_whitespace = false;

    for c in title.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;

        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            slug.push(c);
        }
    }

    Ok(slug)
}
