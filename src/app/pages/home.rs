use dioxus::prelude::*;
use dioxus::document;

use crate::app::layouts::{GlobalSidebar, Navbar};
use crate::domain::models::{Alignment, SidebarConfig};
use crate::shared::hooks::use_sidebar;

const SIDEBAR_ID: &str = "sidebar";
const TRIGGER_ID: &str = "sidebar-toggle";
const QUITTER_CLASS: &str = "quit-sidebar";

fn sidebar_config() -> SidebarConfig {
    SidebarConfig::new(format!("#{}", TRIGGER_ID))
        .with_selector(format!("#{}", SIDEBAR_ID))
        .with_quitter(format!(".{}", QUITTER_CLASS))
        .with_align(Alignment::Left)
}

fn demo_links() -> Vec<(String, String)> {
    [("#intro", "Introduction"), ("#options", "Options"), ("#events", "Events")]
        .into_iter()
        .map(|(href, label)| (href.to_string(), label.to_string()))
        .collect()
}

#[component]
pub fn App() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let sidebar = use_sidebar(sidebar_config());
    let error = sidebar.error;

    use_effect(|| {
        tracing::info!("Sidebar demo initialized");
    });

    rsx! {
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }
        div { class: "c-layout",
            Navbar { trigger_id: TRIGGER_ID.to_string(), title: "vanilla-sidebar".to_string() }
            GlobalSidebar {
                id: SIDEBAR_ID.to_string(),
                quitter_class: QUITTER_CLASS.to_string(),
                links: demo_links(),
            }
            main { class: "c-layout__main",
                if let Some(message) = error() {
                    p { class: "c-alert", "{message}" }
                }
                section { id: "intro",
                    h1 { "Off-canvas sidebar" }
                    p {
                        "Use the menu button to slide the panel in. "
                        "Click the backdrop or any link to close it."
                    }
                }
                section { id: "options",
                    h2 { "Options" }
                    p {
                        "Resize the window below 356px to see the panel shrink "
                        "and keep a strip of backdrop visible."
                    }
                }
                section { id: "events",
                    h2 { "Events" }
                    p { "The panel carries data-status=\"open\" or \"closed\" for styling." }
                }
            }
        }
    }
}
