//! Inline SVG icons.
//!
//! Glyphs are from [Lucide](https://lucide.dev/) (outline style, 24x24 grid,
//! 2px stroke). Each icon is a list of path data strings drawn with
//! `currentColor`, so the surrounding text color tints it.

use leptos::prelude::*;

/// Renders an inline outline icon from a set of path data strings.
///
/// ```rust,ignore
/// view! { <Icon paths=ICON_MENU size="24" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data, one entry per `<path>` element
    paths: &'static [&'static str],
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {paths.iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}

// =============================================================================
// Lucide icons - https://lucide.dev/
// =============================================================================

/// Hamburger (menu closed)
pub const ICON_MENU: &[&str] = &["M4 6h16", "M4 12h16", "M4 18h16"];

/// Cross (menu open)
pub const ICON_X: &[&str] = &["M18 6 6 18", "m6 6 12 12"];

/// Code2
pub const ICON_CODE: &[&str] = &["m18 16 4-4-4-4", "m6 8-4 4 4 4", "m14.5 4-5 16"];

/// Users
pub const ICON_USERS: &[&str] = &[
    "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
    "M5 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
    "M22 21v-2a4 4 0 0 0-3-3.87",
    "M16 3.13a4 4 0 0 1 0 7.75",
];

/// Lightbulb
pub const ICON_LIGHTBULB: &[&str] = &[
    "M15 14c.2-1 .7-1.7 1.5-2.5 1-.9 1.5-2.2 1.5-3.5A6 6 0 0 0 6 8c0 1 .2 2.2 1.5 3.5.7.7 1.3 1.5 1.5 2.5",
    "M9 18h6",
    "M10 22h4",
];
