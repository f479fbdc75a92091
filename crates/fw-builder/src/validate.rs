//! Validation of character-creation content.
//!
//! Checks pick limits, id uniqueness, and that incompatibilities and
//! selection requirements point at options that exist. The engine itself
//! tolerates all of these; authors want to hear about them anyway.

use std::collections::HashSet;

use fw_core::{CategoryConfig, CharacterCreationData, SelectionRequirement};

/// A warning or error found during content validation.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Where the issue was found, e.g. `race` or `race/orc`.
    pub location: String,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl ValidationIssue {
    fn error(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
            is_error: true,
        }
    }

    fn warning(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
            is_error: false,
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.location, self.message)
    }
}

/// Validate creation data, returning every issue found.
pub fn validate_creation_data(data: &CharacterCreationData) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let mut seen = HashSet::new();
    for category in &data.categories {
        if !seen.insert(category.id.as_str()) {
            issues.push(ValidationIssue::error(
                &category.id,
                "duplicate category id",
            ));
        }
        validate_category(category, data, &mut issues);
    }

    issues
}

fn validate_category(
    category: &CategoryConfig,
    data: &CharacterCreationData,
    issues: &mut Vec<ValidationIssue>,
) {
    if category.max_picks < 1 {
        issues.push(ValidationIssue::error(&category.id, "maxPicks must be at least 1"));
    }
    if category.max_picks < category.min_picks {
        issues.push(ValidationIssue::error(
            &category.id,
            format!(
                "maxPicks ({}) is less than minPicks ({})",
                category.max_picks, category.min_picks
            ),
        ));
    }

    // Appearance is filled by its own selector
    if category.options.is_empty() && !category.is_appearance() {
        issues.push(ValidationIssue::warning(
            &category.id,
            "category has no options and will always be locked",
        ));
    }

    let mut ids = HashSet::new();
    for option in &category.options {
        let location = format!("{}/{}", category.id, option.id);
        if !ids.insert(option.id.as_str()) {
            issues.push(ValidationIssue::error(&location, "duplicate option id"));
        }

        for other in &option.incompatible_with {
            if category.option(other).is_none() {
                issues.push(ValidationIssue::error(
                    &location,
                    format!("incompatibleWith names unknown option '{other}'"),
                ));
            } else if other == &option.id {
                issues.push(ValidationIssue::warning(
                    &location,
                    "option is incompatible with itself",
                ));
            }
        }

        for req in &option.requires {
            if req.check_count() == 0 {
                issues.push(ValidationIssue::warning(&location, "empty requirement"));
            } else if req.check_count() > 1 {
                issues.push(ValidationIssue::warning(
                    &location,
                    "requirement combines several checks; all of them must hold",
                ));
            }
            for sel in [&req.selection, &req.not_selection].into_iter().flatten() {
                if let Some(message) = unresolved_selection(sel, data) {
                    issues.push(ValidationIssue::error(&location, message));
                }
            }
        }
    }
}

fn unresolved_selection(sel: &SelectionRequirement, data: &CharacterCreationData) -> Option<String> {
    match data.find_category(&sel.category) {
        None => Some(format!(
            "requirement names unknown category '{}'",
            sel.category
        )),
        Some(category) if category.option(&sel.option_id).is_none() => Some(format!(
            "requirement names unknown option '{}/{}'",
            sel.category, sel.option_id
        )),
        Some(_) => None,
    }
}
