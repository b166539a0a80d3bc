//! Scroll-triggered reveal for `motion-in-view` elements.
//!
//! Each element is observed until it first intersects the viewport, then it
//! gets the `visible` class (which starts its keyframes) and is dropped from
//! the observer, so the animation plays once.

/// Fraction of the element that must be visible.
pub const THRESHOLD: f64 = 0.1;

/// Shrinks the bottom of the viewport so elements reveal slightly after they
/// peek in.
pub const ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Same observer for the static export, where no wasm runs.
pub const REVEAL_SCRIPT: &str = r#"
(function () {
    function reveal() {
        var observer = new IntersectionObserver(function (entries, obs) {
            entries.forEach(function (entry) {
                if (entry.isIntersecting) {
                    entry.target.classList.add('visible');
                    obs.unobserve(entry.target);
                }
            });
        }, { threshold: 0.1, rootMargin: '0px 0px -50px 0px' });
        document.querySelectorAll('.motion-in-view').forEach(function (el) {
            observer.observe(el);
        });
    }
    if (document.readyState === 'loading') {
        document.addEventListener('DOMContentLoaded', reveal);
    } else {
        reveal();
    }
})();
"#;

#[cfg(feature = "csr")]
pub use browser::observe_in_view;

#[cfg(feature = "csr")]
mod browser {
    use super::{ROOT_MARGIN, THRESHOLD};
    use crate::motion::{IN_VIEW_CLASS, VISIBLE_CLASS};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    /// Adds `class` to `target`. A rejected token goes to `console.warn`.
    fn add_class(target: &Element, class: &str) -> bool {
        match target.class_list().add_1(class) {
            Ok(()) => true,
            Err(err) => {
                web_sys::console::warn_1(&err);
                false
            }
        }
    }

    /// Start observing every in-view element currently in the document.
    pub fn observe_in_view() {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        let target = entry.target();
                        add_class(&target, VISIBLE_CLASS);
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(THRESHOLD));
        options.set_root_margin(ROOT_MARGIN);

        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(err) => {
                web_sys::console::warn_1(&err);
                return;
            }
        };
        // The observer outlives this call; keep its callback alive with it.
        callback.forget();

        let Ok(nodes) = document.query_selector_all(&format!(".{IN_VIEW_CLASS}")) else {
            return;
        };
        for idx in 0..nodes.length() {
            if let Some(element) = nodes.item(idx).and_then(|n| n.dyn_into::<Element>().ok()) {
                observer.observe(&element);
            }
        }
    }

}
