//! Page content: project records and the rest of the copy.
//!
//! The content lives in `content/site.toml`, is embedded at compile time and
//! parsed once. After [`SiteContent::from_toml_str`] returns, nothing mutates
//! it; components receive owned clones.
//!
//! # Example
//!
//! ```rust
//! use portfolio::content::SiteContent;
//!
//! let content = SiteContent::embedded().expect("embedded content is valid");
//! assert_eq!(content.projects.len(), 3);
//! assert_eq!(content.projects[0].title, "AI Customer Service");
//! ```

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::ContentError;
use crate::icons::{ICON_CODE, ICON_LIGHTBULB, ICON_USERS};

/// Embedded content document.
pub const SITE_TOML: &str = include_str!("../content/site.toml");

/// Section ids that nav links may point at, in page order.
pub const SECTION_IDS: [&str; 3] = ["home", "projects", "about"];

/// Glyph shown in a project's hover overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectIcon {
    /// Angle brackets with a slash
    Code,
    /// Two people
    Users,
    /// Light bulb
    Lightbulb,
}

impl ProjectIcon {
    /// SVG path data for the glyph.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            ProjectIcon::Code => ICON_CODE,
            ProjectIcon::Users => ICON_USERS,
            ProjectIcon::Lightbulb => ICON_LIGHTBULB,
        }
    }
}

/// Gradient token tinting a project's hover overlay.
///
/// Each accent is a top-to-bottom gradient between two shades at 80% alpha;
/// the gradients themselves live in the stylesheet under `.accent-*`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    /// Blue 500 to blue 600
    Blue,
    /// Pink 500 to pink 600
    Pink,
    /// Indigo 500 to indigo 600
    Indigo,
}

impl Accent {
    /// Stylesheet class carrying the gradient.
    pub fn css_class(self) -> &'static str {
        match self {
            Accent::Blue => "accent-blue",
            Accent::Pink => "accent-pink",
            Accent::Indigo => "accent-indigo",
        }
    }
}

/// One portfolio item.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Project {
    /// Unique, stable key
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Root-relative path of the card image
    pub image_src: String,
    pub icon: ProjectIcon,
    pub accent: Accent,
}

/// Logo shown at the left of the nav bar.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Brand {
    pub logo_src: String,
    pub logo_alt: String,
}

/// Same-page navigation link.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NavLink {
    pub label: String,
    /// `#<section id>`
    pub anchor: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HeroContent {
    /// Plain part of the heading
    pub greeting: String,
    /// Gradient part of the heading
    pub role: String,
    pub bio: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AboutContent {
    pub heading: String,
    pub body: String,
    pub skills: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FooterContent {
    pub copyright: String,
}

/// Everything the page displays.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SiteContent {
    /// Document title
    pub title: String,
    pub brand: Brand,
    pub nav: Vec<NavLink>,
    pub hero: HeroContent,
    /// Display order is list order
    pub projects: Vec<Project>,
    pub about: AboutContent,
    pub footer: FooterContent,
}

impl SiteContent {
    /// Parse and validate the content compiled into the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_toml_str(SITE_TOML)
    }

    /// Parse a TOML content document and check it.
    pub fn from_toml_str(source: &str) -> Result<Self, ContentError> {
        let content: SiteContent = toml::from_str(source)?;
        content.validate()?;
        tracing::debug!(
            projects = content.projects.len(),
            nav = content.nav.len(),
            "site content loaded"
        );
        Ok(content)
    }

    /// Every image the page references, logo first, then project images in
    /// display order.
    pub fn asset_paths(&self) -> Vec<&str> {
        std::iter::once(self.brand.logo_src.as_str())
            .chain(self.projects.iter().map(|p| p.image_src.as_str()))
            .collect()
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.projects.is_empty() {
            return Err(ContentError::NoProjects);
        }

        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id) {
                return Err(ContentError::DuplicateProjectId(project.id));
            }
        }

        for link in &self.nav {
            let known = link
                .anchor
                .strip_prefix('#')
                .is_some_and(|id| SECTION_IDS.contains(&id));
            if !known {
                return Err(ContentError::UnknownAnchor {
                    label: link.label.clone(),
                    anchor: link.anchor.clone(),
                });
            }
        }

        check_asset("brand.logo_src", &self.brand.logo_src)?;
        for (idx, project) in self.projects.iter().enumerate() {
            check_asset(&format!("projects[{idx}].image_src"), &project.image_src)?;
        }

        if self.about.skills.is_empty() {
            return Err(ContentError::NoSkills);
        }

        Ok(())
    }
}

fn check_asset(field: &str, path: &str) -> Result<(), ContentError> {
    if path.starts_with('/') && path.len() > 1 {
        Ok(())
    } else {
        Err(ContentError::InvalidAssetPath {
            field: field.to_string(),
            path: path.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn with_projects(projects: &str) -> String {
        format!(
            r##"
title = "Test"

{projects}

[brand]
logo_src = "/logo.png"
logo_alt = "Logo"

[[nav]]
label = "Home"
anchor = "#home"

[hero]
greeting = "Hi"
role = "Tester"
bio = "Bio"

[about]
heading = "About"
body = "Body"
skills = ["Testing"]

[footer]
copyright = "(c) test"
"##
        )
    }

    const ONE_PROJECT: &str = r#"
[[projects]]
id = 1
title = "One"
description = "First"
image_src = "/one.jpg"
icon = "code"
accent = "blue"
"#;

    #[test]
    fn embedded_content_keeps_project_order() {
        let content = SiteContent::embedded().expect("embedded content parses");
        let titles: Vec<&str> = content.projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "AI Customer Service",
                "Female Friendly Iterations",
                "Microsoft Cortana"
            ]
        );
        let ids: Vec<u32> = content.projects.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn embedded_content_matches_fixed_records() {
        let content = SiteContent::embedded().expect("embedded content parses");
        let cortana = &content.projects[2];
        assert_eq!(
            cortana.description,
            "Voice UX, A/B Testing, Cross-platform Experience Design"
        );
        assert_eq!(cortana.image_src, "/cortana.jpg");
        assert_eq!(cortana.icon, ProjectIcon::Lightbulb);
        assert_eq!(cortana.accent, Accent::Indigo);

        let anchors: Vec<&str> = content.nav.iter().map(|l| l.anchor.as_str()).collect();
        assert_eq!(anchors, vec!["#home", "#projects", "#about"]);
        assert_eq!(content.about.skills.len(), 4);
    }

    #[test]
    fn asset_paths_lists_logo_then_projects() {
        let content = SiteContent::embedded().expect("embedded content parses");
        assert_eq!(
            content.asset_paths(),
            vec![
                "/mu-logo.png",
                "/customer-service.jpg",
                "/female-friendly.jpg",
                "/cortana.jpg"
            ]
        );
    }

    #[test]
    fn minimal_document_parses() {
        let content = SiteContent::from_toml_str(&with_projects(ONE_PROJECT)).unwrap();
        assert_eq!(content.projects.len(), 1);
        assert_eq!(content.projects[0].accent.css_class(), "accent-blue");
    }

    #[test]
    fn rejects_empty_project_list() {
        let err = SiteContent::from_toml_str(&with_projects("projects = []")).unwrap_err();
        assert!(matches!(err, ContentError::NoProjects), "{err}");
    }

    #[test]
    fn rejects_duplicate_ids() {
        let doubled = format!("{ONE_PROJECT}{ONE_PROJECT}");
        let err = SiteContent::from_toml_str(&with_projects(&doubled)).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateProjectId(1)), "{err}");
    }

    #[test]
    fn rejects_anchor_outside_page() {
        let source = with_projects(ONE_PROJECT).replace("#home", "#contact");
        let err = SiteContent::from_toml_str(&source).unwrap_err();
        match err {
            ContentError::UnknownAnchor { label, anchor } => {
                assert_eq!(label, "Home");
                assert_eq!(anchor, "#contact");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_relative_image_path() {
        let source = with_projects(&ONE_PROJECT.replace("/one.jpg", "one.jpg"));
        let err = SiteContent::from_toml_str(&source).unwrap_err();
        match err {
            ContentError::InvalidAssetPath { field, path } => {
                assert_eq!(field, "projects[0].image_src");
                assert_eq!(path, "one.jpg");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_missing_skills() {
        let source = with_projects(ONE_PROJECT).replace(r#"["Testing"]"#, "[]");
        let err = SiteContent::from_toml_str(&source).unwrap_err();
        assert!(matches!(err, ContentError::NoSkills), "{err}");
    }

    #[test]
    fn rejects_unknown_icon() {
        let source = with_projects(&ONE_PROJECT.replace("\"code\"", "\"rocket\""));
        let err = SiteContent::from_toml_str(&source).unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)), "{err}");
    }

    #[test]
    fn content_types_only_deserialize() {
        let derives = include_str!("content.rs")
            .lines()
            .filter(|line| line.trim_start().starts_with("#[derive("));
        for line in derives {
            assert!(line.contains("Deserialize"), "{line}");
            assert!(!line.contains("Serialize)") && !line.contains("Serialize,"), "{line}");
        }
    }
}
