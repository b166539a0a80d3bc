use super::{About, Footer, Hero, Nav, ProjectList};
use crate::content::SiteContent;
use crate::styles::SITE_CSS;
use leptos::prelude::*;

/// The whole page.
#[component]
pub fn App(content: SiteContent) -> impl IntoView {
    #[cfg(feature = "csr")]
    Effect::new(move || crate::reveal::observe_in_view());

    let SiteContent {
        brand,
        nav,
        hero,
        projects,
        about,
        footer,
        ..
    } = content;

    view! {
        <style>{SITE_CSS}</style>
        <Nav brand=brand links=nav />
        <main class="page">
            <Hero hero=hero />
            <ProjectList projects=projects />
            <About about=about />
        </main>
        <Footer footer=footer />
    }
}
