use dioxus::prelude::*;

/// Top bar holding the sidebar trigger; its height matches the sidebar `top`
#[component]
pub fn Navbar(trigger_id: String, title: String) -> Element {
    rsx! {
        nav { class: "c-navbar",
            button {
                id: "{trigger_id}",
                class: "c-navbar__toggle",
                r#type: "button",
                "aria-label": "Toggle navigation",
                "☰"
            }
            div { class: "c-navbar__title", "{title}" }
        }
    }
}
