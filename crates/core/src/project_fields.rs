//! Validation rules for author-supplied project fields.

/// Maximum title length in characters.
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum description length in characters.
pub const MAX_DESCRIPTION_LEN: usize = 2000;

/// Maximum length of a single tag in characters.
pub const MAX_TAG_LEN: usize = 50;

/// Category assigned when the author leaves it blank.
pub const DEFAULT_CATEGORY: &str = "other";

/// Message returned when a required create field is blank.
pub const MISSING_REQUIRED_FIELDS: &str = "Please fill in all required fields";

/// Check that every required create field is non-blank.
pub fn validate_required(
    title: &str,
    description: &str,
    department: &str,
    year: &str,
) -> Result<(), String> {
    if [title, description, department, year]
        .iter()
        .any(|v| v.trim().is_empty())
    {
        return Err(MISSING_REQUIRED_FIELDS.to_string());
    }
    Ok(())
}

/// Check that none of the required fields is being cleared by an update.
/// `None` means the field is left unchanged.
pub fn validate_no_blank_updates(fields: &[Option<&str>]) -> Result<(), String> {
    if fields.iter().flatten().any(|v| v.trim().is_empty()) {
        return Err(MISSING_REQUIRED_FIELDS.to_string());
    }
    Ok(())
}

/// Check length caps on the fields that have them. `None` means the field
/// is not being set.
pub fn validate_lengths(
    title: Option<&str>,
    description: Option<&str>,
    tags: Option<&[String]>,
) -> Result<(), String> {
    if let Some(title) = title {
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(format!("Title cannot exceed {MAX_TITLE_LEN} characters"));
        }
    }
    if let Some(description) = description {
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(format!(
                "Description cannot exceed {MAX_DESCRIPTION_LEN} characters"
            ));
        }
    }
    if let Some(tags) = tags {
        if let Some(tag) = tags.iter().find(|t| t.chars().count() > MAX_TAG_LEN) {
            return Err(format!(
                "Tag '{tag}' cannot exceed {MAX_TAG_LEN} characters"
            ));
        }
    }
    Ok(())
}

/// Return the category, or [`DEFAULT_CATEGORY`] when blank.
pub fn category_or_default(category: &str) -> String {
    if category.trim().is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        category.to_string()
    }
}
