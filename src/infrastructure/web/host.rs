//! `Host` over the browser DOM

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, EventTarget, HtmlElement, Window};

use crate::domain::host::{Handler, Host, StyleTarget};
use crate::domain::models::StyleProperty;
use crate::shared::errors::{Result, SidebarError};
use crate::shared::logging;

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// DOM element the sidebar styles
#[derive(Clone, Debug, PartialEq)]
pub struct WebElement(pub HtmlElement);

impl StyleTarget for WebElement {
    fn set_style(&self, property: StyleProperty, value: &str) {
        if let Err(e) = HtmlElement::style(&self.0).set_property(property.css_name(), value) {
            logging::log_dom_write_failed(property.css_name(), &describe(&e));
        }
    }

    fn style(&self, property: StyleProperty) -> Option<String> {
        HtmlElement::style(&self.0)
            .get_property_value(property.css_name())
            .ok()
            .filter(|v| !v.is_empty())
    }

    fn set_data(&self, key: &str, value: &str) {
        if let Err(e) = self.0.dataset().set(key, value) {
            logging::log_dom_write_failed(&format!("data-{}", key), &describe(&e));
        }
    }

    fn data(&self, key: &str) -> Option<String> {
        self.0.dataset().get(key)
    }

    fn rendered_width(&self) -> i32 {
        self.0.offset_width()
    }
}

/// Registered DOM listener; the closure must outlive its registration
pub struct WebListener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn Fn()>,
}

#[derive(Clone)]
pub struct WebHost {
    window: Window,
    document: Document,
}

impl WebHost {
    pub fn new() -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| SidebarError::Dom("no global `window`".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| SidebarError::Dom("window has no document".to_string()))?;
        Ok(Self { window, document })
    }

    fn listen(
        &self,
        target: EventTarget,
        event: &'static str,
        handler: Handler,
    ) -> Result<WebListener> {
        let closure: Closure<dyn Fn()> = Closure::new(move || handler());
        let callback = closure.as_ref().unchecked_ref::<js_sys::Function>();
        target
            .add_event_listener_with_callback(event, callback)
            .map_err(|e| {
                SidebarError::Dom(format!("addEventListener({}) failed: {}", event, describe(&e)))
            })?;
        Ok(WebListener {
            target,
            event,
            closure,
        })
    }
}

fn invalid_selector(selector: &str, err: &JsValue) -> SidebarError {
    SidebarError::InvalidSelector {
        selector: selector.to_string(),
        reason: describe(err),
    }
}

/// Panels and masks need `style` and `offsetWidth`, which only HTML elements have
fn to_html(element: web_sys::Element, selector: &str) -> Result<HtmlElement> {
    element.dyn_into::<HtmlElement>().map_err(|_| {
        SidebarError::Dom(format!("`{}` matches a non-HTML element", selector))
    })
}

impl Host for WebHost {
    type Element = WebElement;
    type Target = web_sys::Element;
    type Listener = WebListener;

    fn viewport_width(&self) -> i32 {
        self.window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .map(|w| w as i32)
            .unwrap_or(0)
    }

    fn query_selector(&self, selector: &str) -> Result<Option<WebElement>> {
        self.query_target(selector)?
            .map(|el| to_html(el, selector).map(WebElement))
            .transpose()
    }

    fn query_target(&self, selector: &str) -> Result<Option<web_sys::Element>> {
        self.document
            .query_selector(selector)
            .map_err(|e| invalid_selector(selector, &e))
    }

    fn query_targets_all(&self, selector: &str) -> Result<Vec<web_sys::Element>> {
        let nodes = self
            .document
            .query_selector_all(selector)
            .map_err(|e| invalid_selector(selector, &e))?;
        // Text and comment nodes cannot match a selector, so every item is an Element
        Ok((0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .collect())
    }

    fn as_target(&self, element: &WebElement) -> web_sys::Element {
        element.0.clone().unchecked_into()
    }

    fn create_mask(&self) -> Result<WebElement> {
        let element = self
            .document
            .create_element("div")
            .map_err(|e| SidebarError::Dom(describe(&e)))?;
        to_html(element, "div").map(WebElement)
    }

    fn append_to_body(&self, element: &WebElement) -> Result<()> {
        let body = self
            .document
            .body()
            .ok_or_else(|| SidebarError::Dom("document has no body".to_string()))?;
        body.append_child(&element.0)
            .map_err(|e| SidebarError::Dom(describe(&e)))?;
        Ok(())
    }

    fn remove_element(&self, element: &WebElement) {
        element.0.remove();
    }

    fn on_click(&self, target: &web_sys::Element, handler: Handler) -> Result<WebListener> {
        self.listen(target.clone().unchecked_into(), "click", handler)
    }

    fn on_resize(&self, handler: Handler) -> Result<WebListener> {
        self.listen(self.window.clone().unchecked_into(), "resize", handler)
    }

    fn remove_listener(&self, listener: WebListener) {
        let WebListener { target, event, closure } = listener;
        let callback = closure.as_ref().unchecked_ref::<js_sys::Function>();
        if let Err(e) = target.remove_event_listener_with_callback(event, callback) {
            logging::log_dom_write_failed(event, &describe(&e));
        }
    }
}
