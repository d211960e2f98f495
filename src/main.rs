//! vanilla-sidebar demo
//!
//! Build for the browser with `dx serve --features web`.

// WASM entry point (browser)
#[cfg(all(feature = "web", target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] vanilla-sidebar demo initialized".into());
    dioxus::launch(vanilla_sidebar::app::App);
}

#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
fn main() {
    eprintln!("The sidebar demo runs in the browser: build for wasm32 with `--features web`.");
}
