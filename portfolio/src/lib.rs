//! # portfolio
//!
//! Single-page portfolio for Muchiao Design, built with
//! [Leptos](https://leptos.dev/).
//!
//! The page is a nav bar, a hero banner, a fixed list of project cards, an
//! about section and a footer. The only runtime state is the mobile menu
//! flag; everything else is content parsed once from an embedded TOML
//! document.
//!
//! ## Builds
//!
//! - **`csr`** - the `portfolio` binary mounts [`components::App`] in the
//!   browser (built by Trunk from `index.html`).
//! - **`ssr`** (default) - [`render_page`] renders the same tree to a static
//!   HTML document; `portfolio-export` writes it to disk.
//!
//! ## Architecture
//!
//! - [`content`] - project records and page copy, with validation
//! - [`menu`] - mobile menu state and the export's toggle script
//! - [`motion`] - declarative enter animations
//! - [`components`] - Leptos UI components
//! - [`icons`], [`styles`] - inline SVG glyphs and the stylesheet
//! - [`reveal`] - scroll-triggered reveal of in-view animations

pub mod components;
pub mod content;
pub mod error;
pub mod icons;
pub mod menu;
pub mod motion;
pub mod reveal;
pub mod styles;

pub use content::SiteContent;
pub use error::ContentError;

#[cfg(feature = "ssr")]
use components::PortfolioDocument;
#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;

/// Render the complete page as a static HTML document.
///
/// ```rust
/// use portfolio::{render_page, SiteContent};
///
/// let content = SiteContent::embedded().unwrap();
/// let html = render_page(&content);
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// ```
#[cfg(feature = "ssr")]
pub fn render_page(content: &SiteContent) -> String {
    let doc = view! { <PortfolioDocument content=content.clone() /> };
    let html = doc.to_html();
    tracing::debug!(bytes = html.len(), "page rendered");

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn content() -> SiteContent {
        SiteContent::embedded().expect("embedded content parses")
    }

    #[test]
    fn renders_full_document() {
        let html = render_page(&content());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<title>"));
        assert!(html.contains("Muchiao Design"));
        assert!(html.contains("© 2025 Muchiao Design All rights reserved."));
    }

    #[test]
    fn rendering_is_idempotent() {
        let content = content();
        assert_eq!(render_page(&content), render_page(&content));
    }

    #[test]
    fn every_nav_anchor_has_a_target() {
        let html = render_page(&content());
        for id in content::SECTION_IDS {
            assert!(html.contains(&format!(r##"href="#{id}""##)), "no link to #{id}");
            assert!(html.contains(&format!(r#"id="{id}""#)), "no section #{id}");
        }
    }

    /// The tag that contains `marker`, from its `<` to its `>`.
    fn tag_with<'a>(html: &'a str, marker: &str) -> &'a str {
        let at = html
            .find(marker)
            .unwrap_or_else(|| panic!("`{marker}` not rendered"));
        let start = html[..at].rfind('<').expect("tag start");
        let end = at + html[at..].find('>').expect("tag end");
        &html[start..=end]
    }

    #[test]
    fn menu_toggle_is_the_only_control() {
        let html = render_page(&content());
        assert_eq!(html.matches("<button").count(), 1);
        assert!(html.contains(r#"data-role="menu-toggle""#));
    }

    #[test]
    fn exported_menu_starts_closed_and_is_wired() {
        let html = render_page(&content());

        let toggle = tag_with(&html, r#"data-role="menu-toggle""#);
        assert!(toggle.contains(r#"aria-expanded="false""#));
        assert!(toggle.contains(r#"aria-label="Open menu""#));
        assert!(tag_with(&html, r#"data-role="mobile-menu""#).contains(" hidden"));
        assert!(!tag_with(&html, r#"data-glyph="open""#).contains(" hidden"));
        assert!(tag_with(&html, r#"data-glyph="close""#).contains(" hidden"));

        assert!(html.contains(menu::MENU_SCRIPT.trim()));
        assert!(html.contains("[data-role=menu-toggle]"));
        assert!(html.contains("addEventListener('click'"));
    }

    #[test]
    fn embeds_reveal_script_and_fallback() {
        let html = render_page(&content());
        assert!(html.contains(reveal::REVEAL_SCRIPT.trim()));
        assert!(html.contains("<noscript>"));
    }
}
