//! Mobile menu state.
//!
//! The nav bar owns one [`MenuState`] inside a signal. It starts closed and
//! only [`MenuState::toggle`] changes it.
//!
//! The panel and both toggle glyphs are always in the markup; the closed
//! ones carry `hidden`. The static export has no wasm, so [`MENU_SCRIPT`]
//! flips the same attributes there.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Closed becomes open, open becomes closed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn toggle_label(self) -> &'static str {
        if self.open { "Close menu" } else { "Open menu" }
    }
}

/// Toggle wiring for the static export. Each click flips `aria-expanded` and
/// `aria-label` on the button, and `hidden` on the panel and the two glyphs.
pub const MENU_SCRIPT: &str = r#"
(function () {
    function wire() {
        document.querySelectorAll('[data-role=menu-toggle]').forEach(function (button) {
            var nav = button.closest('nav');
            if (!nav) {
                return;
            }
            button.addEventListener('click', function () {
                var open = button.getAttribute('aria-expanded') !== 'true';
                button.setAttribute('aria-expanded', open ? 'true' : 'false');
                button.setAttribute('aria-label', open ? 'Close menu' : 'Open menu');
                nav.querySelectorAll('[data-role=mobile-menu], [data-glyph=close]').forEach(function (el) {
                    el.hidden = !open;
                });
                nav.querySelectorAll('[data-glyph=open]').forEach(function (el) {
                    el.hidden = open;
                });
            });
        });
    }
    if (document.readyState === 'loading') {
        document.addEventListener('DOMContentLoaded', wire);
    } else {
        wire();
    }
})();
"#;
