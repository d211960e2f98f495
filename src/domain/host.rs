//! Seams between the sidebar controller and the document it drives
//!
//! `WebHost` implements these over `web-sys`; `MemoryHost` implements them
//! in memory for native tests.

use std::rc::Rc;

use crate::domain::models::{Position, StyleProperty};
use crate::shared::errors::Result;

/// Element whose inline style and data attributes the controller writes
pub trait StyleTarget {
    fn set_style(&self, property: StyleProperty, value: &str);

    /// Current inline value, `None` when unset
    fn style(&self, property: StyleProperty) -> Option<String>;

    /// Write `data-<key>`
    fn set_data(&self, key: &str, value: &str);

    fn data(&self, key: &str) -> Option<String>;

    /// Laid-out width in pixels (`offsetWidth`)
    fn rendered_width(&self) -> i32;

    fn set_position(&self, position: Position, top: &str) {
        self.set_style(StyleProperty::Position, position.as_str());
        self.set_style(StyleProperty::Top, top);
        self.set_style(StyleProperty::Bottom, "0");
    }

    fn set_offset(&self, property: StyleProperty, px: i32) {
        self.set_style(property, &format!("{}px", px));
    }

    fn set_transition(&self, transition: &str) {
        self.set_style(StyleProperty::Transition, transition);
    }
}

/// Event handler registered with a host
pub type Handler = Rc<dyn Fn()>;

/// Document and event source the controller binds to
pub trait Host {
    /// Styled element: the panel and the mask
    type Element: StyleTarget + Clone + 'static;
    /// Anything that can be clicked: the trigger and the quitters
    type Target: Clone + 'static;
    /// Handle returned on registration, consumed by `remove_listener`
    type Listener;

    fn viewport_width(&self) -> i32;

    /// First element matching `selector`; it must accept inline styles
    fn query_selector(&self, selector: &str) -> Result<Option<Self::Element>>;

    /// First click target matching `selector`, of any element type
    fn query_target(&self, selector: &str) -> Result<Option<Self::Target>>;

    fn query_targets_all(&self, selector: &str) -> Result<Vec<Self::Target>>;

    fn as_target(&self, element: &Self::Element) -> Self::Target;

    /// Detached element used as the backdrop
    fn create_mask(&self) -> Result<Self::Element>;

    fn append_to_body(&self, element: &Self::Element) -> Result<()>;

    fn remove_element(&self, element: &Self::Element);

    fn on_click(&self, target: &Self::Target, handler: Handler) -> Result<Self::Listener>;

    fn on_resize(&self, handler: Handler) -> Result<Self::Listener>;

    fn remove_listener(&self, listener: Self::Listener);
}
