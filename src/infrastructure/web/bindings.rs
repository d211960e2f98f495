//! JavaScript entry point
//!
//! ```js
//! import init, { VanillaSidebar } from "./vanilla_sidebar.js";
//! await init();
//! const sidebar = new VanillaSidebar({ triggerer: "#menu", align: "right" });
//! sidebar.toggle();
//! ```

use wasm_bindgen::prelude::*;

use super::host::WebHost;
use crate::domain::models::SidebarConfig;
use crate::domain::services::{SidebarController, Subscription};
use crate::shared::errors::{Result, SidebarError};

#[wasm_bindgen]
pub struct VanillaSidebar {
    controller: SidebarController<WebHost>,
    subscription: Option<Subscription<WebHost>>,
}

impl VanillaSidebar {
    /// Mount on the current document
    pub fn mount(config: SidebarConfig) -> Result<Self> {
        let host = WebHost::new()?;
        let (controller, subscription) = SidebarController::mount(host, config)?;
        Ok(Self {
            controller,
            subscription: Some(subscription),
        })
    }

    pub fn controller(&self) -> &SidebarController<WebHost> {
        &self.controller
    }
}

#[wasm_bindgen]
impl VanillaSidebar {
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> std::result::Result<VanillaSidebar, JsValue> {
        let config: SidebarConfig =
            serde_wasm_bindgen::from_value(options).map_err(SidebarError::from)?;
        Ok(Self::mount(config)?)
    }

    pub fn open(&self) {
        self.controller.open();
    }

    pub fn close(&self) {
        self.controller.close();
    }

    pub fn toggle(&self) {
        self.controller.toggle();
    }

    #[wasm_bindgen(js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.controller.is_open()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> String {
        self.controller.status().as_str().to_string()
    }

    #[wasm_bindgen(js_name = refreshLayout)]
    pub fn refresh_layout(&self) {
        self.controller.refresh_layout();
    }

    /// Remove every listener and the mask; later calls still move the panel
    pub fn dispose(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.dispose();
        }
    }
}
