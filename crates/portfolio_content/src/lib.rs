//! Portfolio content provider: typed project records parsed from the embedded
//! markdown corpus.
//!
//! The desktop consumes this crate through [`load_projects`], which always
//! returns a (possibly empty) collection. Parse failures never escape the
//! provider; callers that want to log skipped documents use
//! [`load_projects_reporting`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod catalog;
mod record;

pub use catalog::{load_projects, load_projects_reporting, parse_project, ContentError};
pub use record::{is_valid_project_slug, Project, ProjectLink};
