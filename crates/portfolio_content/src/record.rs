use serde::{Deserialize, Serialize};

/// A labeled external link attached to a project record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLink {
    /// Text shown for the link.
    pub label: String,
    /// Link destination.
    pub href: String,
}

/// One displayable project record.
///
/// `slug`, `title`, `stack` and `body` are always present; the remaining
/// fields default to empty when a document omits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier within the catalog (`lowercase-with-dashes`).
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Technology-stack tags.
    pub stack: Vec<String>,
    /// Freeform tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Category heading the browser groups under.
    #[serde(default)]
    pub category: Option<String>,
    /// Cover image reference.
    #[serde(default)]
    pub cover: Option<String>,
    /// Additional media references.
    #[serde(default)]
    pub gallery: Vec<String>,
    /// Labeled external links.
    #[serde(default)]
    pub links: Vec<ProjectLink>,
    /// Markdown-formatted body.
    #[serde(default)]
    pub body: String,
}

/// Returns whether `raw` conforms to the catalog slug policy: non-empty,
/// at most 64 bytes, lowercase alphanumeric segments separated by single
/// dashes.
pub fn is_valid_project_slug(raw: &str) -> bool {
    if raw.is_empty() || raw.len() > 64 {
        return false;
    }
    if raw.starts_with('-') || raw.ends_with('-') || raw.contains("--") {
        return false;
    }
    raw.bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_accepts_lowercase_dashed_segments() {
        assert!(is_valid_project_slug("handar"));
        assert!(is_valid_project_slug("3d-mesh-morphing"));
        assert!(is_valid_project_slug("bastion-23"));
    }

    #[test]
    fn slug_rejects_empty_uppercase_and_stray_dashes() {
        assert!(!is_valid_project_slug(""));
        assert!(!is_valid_project_slug("HandAR"));
        assert!(!is_valid_project_slug("-leading"));
        assert!(!is_valid_project_slug("trailing-"));
        assert!(!is_valid_project_slug("double--dash"));
        assert!(!is_valid_project_slug("spaced slug"));
    }
}
