use dioxus::prelude::*;

/// Off-canvas navigation; every link closes the panel
#[component]
pub fn GlobalSidebar(id: String, quitter_class: String, links: Vec<(String, String)>) -> Element {
    rsx! {
        aside { id: "{id}", class: "c-sidebar",
            div { class: "c-sidebar__header",
                h2 { "Navigation" }
                button {
                    class: "c-sidebar__close {quitter_class}",
                    r#type: "button",
                    "aria-label": "Close navigation",
                    "✕"
                }
            }
            nav { class: "c-sidebar__nav",
                ul {
                    for (href, label) in links {
                        li { key: "{href}",
                            a { class: "{quitter_class}", href: "{href}", "{label}" }
                        }
                    }
                }
            }
        }
    }
}
