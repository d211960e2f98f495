use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::models::SidebarConfig;
use crate::infrastructure::web::VanillaSidebar;

/// Mounted sidebar shared between the hook's effect, drop handler and callers
type SidebarSlot = Rc<RefCell<Option<VanillaSidebar>>>;

#[derive(Clone)]
pub struct UseSidebarReturn {
    slot: SidebarSlot,
    /// Mount failure, e.g. a selector that matched nothing
    pub error: Signal<Option<String>>,
}

impl UseSidebarReturn {
    pub fn open(&self) {
        if let Some(sidebar) = self.slot.borrow().as_ref() {
            sidebar.open();
        }
    }

    pub fn close(&self) {
        if let Some(sidebar) = self.slot.borrow().as_ref() {
            sidebar.close();
        }
    }

    pub fn toggle(&self) {
        if let Some(sidebar) = self.slot.borrow().as_ref() {
            sidebar.toggle();
        }
    }

    pub fn is_open(&self) -> bool {
        self.slot
            .borrow()
            .as_ref()
            .is_some_and(|sidebar| sidebar.is_open())
    }

    pub fn is_mounted(&self) -> bool {
        self.slot.borrow().is_some()
    }
}

/// Bind a sidebar to the component's rendered markup.
///
/// The elements named in `config` must be rendered by the calling component;
/// binding happens after mount (browser only) and is undone when the
/// component is dropped.
pub fn use_sidebar(config: SidebarConfig) -> UseSidebarReturn {
    let slot: SidebarSlot = use_hook(|| Rc::new(RefCell::new(None)));
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<String>);

    let effect_slot = slot.clone();
    use_effect(move || {
        if effect_slot.borrow().is_some() {
            return;
        }

        #[cfg(target_arch = "wasm32")]
        {
            match VanillaSidebar::mount(config.clone()) {
                Ok(sidebar) => {
                    *effect_slot.borrow_mut() = Some(sidebar);
                }
                Err(e) => {
                    tracing::error!("Failed to mount sidebar {}: {}", config.selector, e);
                    error.set(Some(e.to_string()));
                }
            }
        }

        // Server-side rendering has no DOM to bind
        #[cfg(not(target_arch = "wasm32"))]
        let _ = (&config, &mut error);
    });

    let drop_slot = slot.clone();
    use_drop(move || {
        if let Some(mut sidebar) = drop_slot.borrow_mut().take() {
            sidebar.dispose();
        }
    });

    UseSidebarReturn { slot, error }
}
