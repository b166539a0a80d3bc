use crate::content::FooterContent;
use leptos::prelude::*;

#[component]
pub fn Footer(footer: FooterContent) -> impl IntoView {
    view! {
        <footer class="footer">
            <p class="footer-copyright">{footer.copyright}</p>
        </footer>
    }
}
