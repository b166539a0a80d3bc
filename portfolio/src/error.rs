//! Errors raised while loading page content.
//!
//! Rendering itself cannot fail; everything that can go wrong happens once,
//! when the TOML content document is parsed and checked.

use thiserror::Error;

/// Why a content document was rejected.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The document is not valid TOML or does not match the content shape.
    #[error("failed to parse site content: {0}")]
    Parse(#[from] toml::de::Error),

    /// The project list is empty.
    #[error("site content lists no projects")]
    NoProjects,

    /// Two projects share an id, so display order would be ambiguous.
    #[error("duplicate project id {0}")]
    DuplicateProjectId(u32),

    /// A nav link points at something other than a section on this page.
    #[error("nav link `{label}` points at `{anchor}`, expected one of #home, #projects, #about")]
    UnknownAnchor {
        /// Link label as written in the document
        label: String,
        /// Offending anchor
        anchor: String,
    },

    /// An image reference is not a root-relative path.
    #[error("{field} must be a root-relative path (got `{path}`)")]
    InvalidAssetPath {
        /// Where the path was found, e.g. `projects[2].image_src`
        field: String,
        /// Offending path
        path: String,
    },

    /// The about section has no skill tags.
    #[error("about section lists no skills")]
    NoSkills,
}
