//! Root document for the static export - the complete HTML page.

use super::App;
use crate::content::SiteContent;
use crate::menu::MENU_SCRIPT;
use crate::reveal::REVEAL_SCRIPT;
use crate::styles::NO_SCRIPT_CSS;
use leptos::prelude::*;

#[component]
pub fn PortfolioDocument(content: SiteContent) -> impl IntoView {
    let title = content.title.clone();
    let favicon = content.brand.logo_src.clone();
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <title>{title}</title>
                <link rel="icon" type="image/png" href=favicon />
                <noscript>
                    <style>{NO_SCRIPT_CSS}</style>
                </noscript>
            </head>
            <body>
                <App content=content />
                <script>{MENU_SCRIPT}</script>
                <script>{REVEAL_SCRIPT}</script>
            </body>
        </html>
    }
}
