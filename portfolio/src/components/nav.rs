use crate::content::{Brand, NavLink};
use crate::icons::{ICON_MENU, ICON_X, Icon};
use crate::menu::MenuState;
use crate::motion::Motion;
use leptos::prelude::*;

/// Fixed header: logo, inline links on wide screens, menu toggle on narrow
/// ones. Owns the menu state.
#[component]
pub fn Nav(brand: Brand, links: Vec<NavLink>) -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());
    view! { <NavBar brand=brand links=links menu=menu /> }
}

/// [`Nav`] with the menu signal supplied by the caller.
///
/// Closed parts stay in the markup with `hidden` set, so the prerendered page
/// has everything the inline menu script toggles.
#[component]
pub fn NavBar(brand: Brand, links: Vec<NavLink>, menu: RwSignal<MenuState>) -> impl IntoView {
    let logo = Motion::fade_in();
    let panel_links = links.clone();

    view! {
        <nav class="nav">
            <div class="container nav-inner">
                <div class=logo.class_with("nav-logo") style=logo.style()>
                    <img src=brand.logo_src alt=brand.logo_alt />
                </div>

                <div class="nav-links">
                    {links.into_iter().map(|link| view! { <NavLinkItem link=link /> }).collect_view()}
                </div>

                <button
                    class="menu-toggle"
                    data-role="menu-toggle"
                    aria-label=move || menu.get().toggle_label()
                    aria-expanded=move || menu.get().is_open().to_string()
                    on:click=move |_| menu.update(|state| state.toggle())
                >
                    <span class="menu-glyph" data-glyph="open" hidden=move || menu.get().is_open()>
                        <Icon paths=ICON_MENU />
                    </span>
                    <span class="menu-glyph" data-glyph="close" hidden=move || !menu.get().is_open()>
                        <Icon paths=ICON_X />
                    </span>
                </button>
            </div>

            <MobileMenu links=panel_links hidden=Signal::derive(move || !menu.get().is_open()) />
        </nav>
    }
}

/// Anchor with the gradient hover underline.
#[component]
pub fn NavLinkItem(link: NavLink) -> impl IntoView {
    view! {
        <a href=link.anchor class="nav-link">
            {link.label}
            <span class="nav-link-underline"></span>
        </a>
    }
}

/// Dropdown panel repeating the nav links below the bar. Its drop-in plays
/// each time `hidden` clears.
#[component]
pub fn MobileMenu(
    links: Vec<NavLink>,
    #[prop(into, default = Signal::stored(false))] hidden: Signal<bool>,
) -> impl IntoView {
    let motion = Motion::drop_in();
    view! {
        <div
            class=motion.class_with("mobile-menu")
            style=motion.style()
            data-role="mobile-menu"
            hidden=move || hidden.get()
        >
            <div class="mobile-menu-links">
                {links.into_iter().map(|link| view! { <NavLinkItem link=link /> }).collect_view()}
            </div>
        </div>
    }
}
