// Muchiao Design portfolio - browser entry point (Leptos 0.8, csr)

use leptos::prelude::*;
use portfolio::SiteContent;
use portfolio::components::App;
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();

    match SiteContent::embedded() {
        Ok(content) => {
            leptos::mount::mount_to_body(move || view! { <App content=content.clone() /> });
        }
        Err(err) => {
            web_sys::console::error_1(&JsValue::from_str(&format!(
                "[portfolio] site content rejected: {err}"
            )));
        }
    }
}
