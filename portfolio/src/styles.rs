//! Stylesheet for the portfolio page.
//!
//! One constant, injected as a `<style>` element by [`crate::components::App`]
//! so the browser build and the static export share it.
//!
//! # Breakpoints
//!
//! - `md` = 768px: below it the inline nav links are hidden and the menu
//!   toggle is shown; above it the reverse.
//! - `lg` = 1024px: larger hero heading.
//!
//! # Motion
//!
//! Animated elements carry the `motion` class plus custom properties written
//! by [`crate::motion::Motion::style`]. `motion-mount` plays the keyframes at
//! once; `motion-in-view` holds the initial pose until the `visible` class is
//! added.

/// Complete CSS for the page - light theme, brand gradient accents.
pub const SITE_CSS: &str = r#"
:root {
    --bg: #ffffff;
    --bg-soft: #f9fafb;
    --text: #000000;
    --text-strong: #111827;
    --text-body: #4b5563;
    --text-muted: #6b7280;
    --border: #f3f4f6;
    --brand-gradient: linear-gradient(to right, #4b6bfb, #7b5efb, #a158f6);
    --nav-height: 72px;
    --container-max: 72rem;
    --font-sans: ui-sans-serif, system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    background: var(--bg);
    color: var(--text);
    min-height: 100vh;
}

img {
    display: block;
    max-width: 100%;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    width: 100%;
}

/* Nav */
.nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    height: var(--nav-height);
    background: rgba(255, 255, 255, 0.8);
    backdrop-filter: blur(4px);
    border-bottom: 1px solid var(--border);
    z-index: 50;
}

.nav-inner {
    height: 100%;
    padding: 0 24px;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-logo img {
    height: 32px;
}

.nav-links {
    display: none;
    align-items: center;
    gap: 32px;
}

.nav-link {
    position: relative;
    padding: 8px 16px;
    color: var(--text-body);
    text-decoration: none;
    transition: color 0.3s;
}

.nav-link:hover {
    color: var(--text);
}

.nav-link-underline {
    position: absolute;
    bottom: 0;
    left: 0;
    width: 0;
    height: 2px;
    background: var(--brand-gradient);
    transition: width 0.3s;
}

.nav-link:hover .nav-link-underline {
    width: 100%;
}

.menu-toggle {
    display: inline-flex;
    padding: 8px;
    border: 0;
    background: transparent;
    color: var(--text-body);
    cursor: pointer;
    transition: color 0.3s;
}

.menu-toggle:hover {
    color: var(--text);
}

.menu-glyph {
    display: inline-flex;
}

.menu-glyph[hidden],
.mobile-menu[hidden] {
    display: none;
}

.mobile-menu {
    position: absolute;
    top: var(--nav-height);
    left: 0;
    right: 0;
    background: rgba(255, 255, 255, 0.8);
    backdrop-filter: blur(4px);
    border-bottom: 1px solid var(--border);
}

.mobile-menu-links {
    display: flex;
    flex-direction: column;
    align-items: center;
    padding: 16px 0;
}

/* Hero */
.page {
    padding-top: var(--nav-height);
}

.hero {
    min-height: calc(70vh - var(--nav-height));
    display: flex;
    align-items: center;
    padding: 0 24px;
}

.hero-title {
    font-size: 2.25rem;
    font-weight: 700;
    margin: 0 0 24px;
}

.hero-role {
    color: transparent;
    background: var(--brand-gradient);
    -webkit-background-clip: text;
    background-clip: text;
}

.hero-bio {
    font-size: 1.125rem;
    color: var(--text-body);
    max-width: 42rem;
    margin: 0;
}

/* Projects */
.projects {
    padding: 48px 24px;
}

.project-list {
    display: flex;
    flex-direction: column;
    gap: 48px;
}

.project-media {
    position: relative;
    overflow: hidden;
    border-radius: 8px;
    margin-bottom: 16px;
}

.project-image {
    width: 100%;
    aspect-ratio: 16 / 6;
    object-fit: cover;
    transition: transform 0.5s;
}

.project-card:hover .project-image {
    transform: scale(1.05);
}

.project-overlay {
    position: absolute;
    inset: 0;
    display: flex;
    flex-direction: column;
    justify-content: flex-end;
    padding: 24px;
    color: #ffffff;
    opacity: 0;
    transition: opacity 0.3s;
}

.project-card:hover .project-overlay {
    opacity: 1;
}

.project-overlay-heading {
    display: flex;
    align-items: center;
    gap: 12px;
    margin-bottom: 8px;
}

.project-overlay-title {
    font-size: 1.25rem;
    font-weight: 700;
    margin: 0;
}

.project-overlay-description {
    color: rgba(255, 255, 255, 0.9);
    margin: 0;
}

.project-title {
    font-size: 1.125rem;
    font-weight: 600;
    color: var(--text-strong);
    margin: 0 0 8px;
}

.project-description {
    font-size: 0.875rem;
    color: var(--text-body);
    line-height: 1.625;
    margin: 0;
}

.accent-blue {
    background: linear-gradient(to bottom, rgba(59, 130, 246, 0.8), rgba(37, 99, 235, 0.8));
}

.accent-pink {
    background: linear-gradient(to bottom, rgba(236, 72, 153, 0.8), rgba(219, 39, 119, 0.8));
}

.accent-indigo {
    background: linear-gradient(to bottom, rgba(99, 102, 241, 0.8), rgba(79, 70, 229, 0.8));
}

/* About */
.about {
    background: var(--bg-soft);
    padding: 80px 24px;
}

.about-inner {
    max-width: 56rem;
    margin: 0 auto;
    text-align: center;
}

.about-heading {
    font-size: 1.875rem;
    font-weight: 700;
    margin: 0 0 24px;
}

.about-body {
    font-size: 1.125rem;
    color: var(--text-body);
    line-height: 1.625;
    margin: 0 0 32px;
}

.skill-tags {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 16px;
}

.skill-tag {
    padding: 8px 16px;
    background: var(--bg);
    border-radius: 9999px;
    font-size: 0.875rem;
    color: var(--text-body);
}

/* Footer */
.footer {
    padding: 32px 0;
    text-align: center;
    color: var(--text-muted);
    font-size: 0.875rem;
    border-top: 1px solid var(--border);
}

/* Motion */
@keyframes motion-enter {
    from {
        opacity: var(--motion-from-opacity);
        transform: translateY(var(--motion-from-y));
    }
    to {
        opacity: var(--motion-to-opacity);
        transform: translateY(var(--motion-to-y));
    }
}

.motion-mount,
.motion-in-view.visible {
    animation: motion-enter var(--motion-duration) ease-out var(--motion-delay) both;
}

.motion-in-view {
    opacity: var(--motion-from-opacity);
    transform: translateY(var(--motion-from-y));
}

@media (prefers-reduced-motion: reduce) {
    .motion-mount,
    .motion-in-view,
    .motion-in-view.visible {
        animation: none;
        opacity: 1;
        transform: none;
    }
}

/* md */
@media (min-width: 768px) {
    .nav-links {
        display: flex;
    }

    .menu-toggle,
    .mobile-menu {
        display: none;
    }

    .hero-title {
        font-size: 3.75rem;
    }

    .hero-bio {
        font-size: 1.25rem;
    }

    .project-overlay-title {
        font-size: 1.5rem;
    }

    .project-title {
        font-size: 1.25rem;
    }

    .project-description {
        font-size: 1rem;
    }

    .about-heading {
        font-size: 2.25rem;
    }
}

/* lg */
@media (min-width: 1024px) {
    .hero-title {
        font-size: 4.5rem;
    }
}
"#;

/// Shown in place of the observer when scripts are disabled.
pub const NO_SCRIPT_CSS: &str = ".motion-in-view { opacity: 1; transform: none; }";
