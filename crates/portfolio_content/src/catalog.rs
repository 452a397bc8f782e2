//! Embedded project corpus and front matter parsing.

use serde::Deserialize;
use thiserror::Error;

use crate::record::{is_valid_project_slug, Project, ProjectLink};

/// Reasons a project document is rejected by the parser.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The document does not start with a `---` fenced front matter block.
    #[error("missing front matter block")]
    MissingFrontMatter,
    /// The front matter block is not valid YAML for a project header.
    #[error("invalid front matter: {0}")]
    InvalidFrontMatter(#[from] serde_yaml::Error),
    /// The `slug` field violates the catalog slug policy.
    #[error("invalid slug `{0}`")]
    InvalidSlug(String),
}

#[derive(Debug, Deserialize)]
struct ProjectFrontMatter {
    slug: String,
    title: String,
    #[serde(default)]
    stack: Vec<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    cover: Option<String>,
    #[serde(default)]
    gallery: Vec<String>,
    #[serde(default)]
    links: Vec<ProjectLink>,
}

struct EmbeddedDocument {
    name: &'static str,
    source: &'static str,
}

const PROJECT_DOCUMENTS: [EmbeddedDocument; 6] = [
    EmbeddedDocument {
        name: "handar.md",
        source: include_str!("../content/projects/handar.md"),
    },
    EmbeddedDocument {
        name: "galileoar.md",
        source: include_str!("../content/projects/galileoar.md"),
    },
    EmbeddedDocument {
        name: "minecraft-texture-synthesis.md",
        source: include_str!("../content/projects/minecraft-texture-synthesis.md"),
    },
    EmbeddedDocument {
        name: "3d-mesh-morphing.md",
        source: include_str!("../content/projects/3d-mesh-morphing.md"),
    },
    EmbeddedDocument {
        name: "bastion-23.md",
        source: include_str!("../content/projects/bastion-23.md"),
    },
    EmbeddedDocument {
        name: "the-evil-with-inn.md",
        source: include_str!("../content/projects/the-evil-with-inn.md"),
    },
];

fn split_front_matter(source: &str) -> Result<(&str, &str), ContentError> {
    let rest = source
        .strip_prefix("---\n")
        .ok_or(ContentError::MissingFrontMatter)?;
    let close = rest.find("\n---").ok_or(ContentError::MissingFrontMatter)?;
    let header = &rest[..close];
    let after = &rest[close + 4..];
    if !after.is_empty() && !after.starts_with('\n') {
        return Err(ContentError::MissingFrontMatter);
    }
    Ok((header, after.trim_start_matches('\n')))
}

/// Parses one markdown document with YAML front matter into a [`Project`].
pub fn parse_project(source: &str) -> Result<Project, ContentError> {
    let (header, body) = split_front_matter(source)?;
    let front: ProjectFrontMatter = serde_yaml::from_str(header)?;
    if !is_valid_project_slug(&front.slug) {
        return Err(ContentError::InvalidSlug(front.slug));
    }
    Ok(Project {
        slug: front.slug,
        title: front.title,
        stack: front.stack,
        tags: front.tags,
        category: front.category,
        cover: front.cover,
        gallery: front.gallery,
        links: front.links,
        body: body.to_string(),
    })
}

/// Parses the embedded corpus in document order, skipping documents that
/// fail to parse and reporting each skip through `on_skip`.
pub fn load_projects_reporting(mut on_skip: impl FnMut(&str, ContentError)) -> Vec<Project> {
    let mut projects = Vec::with_capacity(PROJECT_DOCUMENTS.len());
    for document in &PROJECT_DOCUMENTS {
        match parse_project(document.source) {
            Ok(project) => projects.push(project),
            Err(err) => on_skip(document.name, err),
        }
    }
    projects
}

/// Parses the embedded corpus in document order, silently skipping documents
/// that fail to parse. Never fails; an unreadable corpus yields an empty
/// collection.
pub fn load_projects() -> Vec<Project> {
    load_projects_reporting(|_, _| {})
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SAMPLE: &str = "---\n\
slug: sample-project\n\
title: Sample Project\n\
stack:\n  - Rust\n  - WebGL\n\
tags:\n  - Graphics\n\
category: Research Projects\n\
cover: /images/projects/sample/cover.jpg\n\
links:\n  - label: GitHub\n    href: https://example.com\n\
---\n\
\n\
## Overview\n\nBody text.\n";

    #[test]
    fn parses_full_document() {
        let project = parse_project(SAMPLE).expect("sample parses");
        assert_eq!(project.slug, "sample-project");
        assert_eq!(project.title, "Sample Project");
        assert_eq!(project.stack, vec!["Rust".to_string(), "WebGL".to_string()]);
        assert_eq!(project.tags, vec!["Graphics".to_string()]);
        assert_eq!(project.category.as_deref(), Some("Research Projects"));
        assert_eq!(
            project.cover.as_deref(),
            Some("/images/projects/sample/cover.jpg")
        );
        assert_eq!(project.links.len(), 1);
        assert_eq!(project.links[0].label, "GitHub");
        assert_eq!(project.body, "## Overview\n\nBody text.\n");
    }

    #[test]
    fn optional_fields_default_to_empty() {
        let source = "---\nslug: bare\ntitle: Bare\n---\nBody.\n";
        let project = parse_project(source).expect("bare parses");
        assert_eq!(project.stack, Vec::<String>::new());
        assert_eq!(project.tags, Vec::<String>::new());
        assert_eq!(project.category, None);
        assert_eq!(project.cover, None);
        assert_eq!(project.gallery, Vec::<String>::new());
        assert!(project.links.is_empty());
        assert_eq!(project.body, "Body.\n");
    }

    #[test]
    fn document_without_front_matter_is_rejected() {
        let err = parse_project("## Just a body\n").expect_err("no front matter");
        assert!(matches!(err, ContentError::MissingFrontMatter));
    }

    #[test]
    fn unterminated_front_matter_is_rejected() {
        let err = parse_project("---\nslug: x\ntitle: X\n").expect_err("no close fence");
        assert!(matches!(err, ContentError::MissingFrontMatter));
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        let source = "---\nslug: [unclosed\n---\nBody.\n";
        let err = parse_project(source).expect_err("bad yaml");
        assert!(matches!(err, ContentError::InvalidFrontMatter(_)));
    }

    #[test]
    fn invalid_slug_is_rejected() {
        let source = "---\nslug: Not A Slug\ntitle: X\n---\nBody.\n";
        let err = parse_project(source).expect_err("bad slug");
        assert!(matches!(err, ContentError::InvalidSlug(_)));
    }

    #[test]
    fn embedded_corpus_parses_completely_in_order() {
        let mut skipped = Vec::new();
        let projects = load_projects_reporting(|name, _| skipped.push(name.to_string()));

        assert_eq!(skipped, Vec::<String>::new());
        let slugs: Vec<&str> = projects.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(
            slugs,
            vec![
                "handar",
                "galileoar",
                "minecraft-texture-synthesis",
                "3d-mesh-morphing",
                "bastion-23",
                "the-evil-with-inn",
            ]
        );
    }

    #[test]
    fn every_embedded_record_has_title_stack_and_body() {
        for project in load_projects() {
            assert!(!project.title.is_empty(), "{} has a title", project.slug);
            assert!(!project.stack.is_empty(), "{} has a stack", project.slug);
            assert!(!project.body.is_empty(), "{} has a body", project.slug);
            assert!(project.category.is_some(), "{} has a category", project.slug);
        }
    }
}
