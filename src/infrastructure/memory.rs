//! In-memory document implementing [`Host`]
//!
//! Elements are registered with the selector tokens they answer to, and
//! events are dispatched explicitly with [`MemoryHost::click`] and
//! [`MemoryHost::resize`]. Used by the native test suite and for driving a
//! sidebar without a browser.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::domain::host::{Handler, Host, StyleTarget};
use crate::domain::models::StyleProperty;
use crate::domain::services::layout::parse_leading_int;
use crate::shared::errors::{Result, SidebarError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

struct MemoryNode {
    selectors: Vec<String>,
    /// False for nodes without inline style support, like SVG in a browser
    styleable: bool,
    styles: RefCell<HashMap<StyleProperty, String>>,
    data: RefCell<HashMap<String, String>>,
    viewport: Rc<Cell<i32>>,
}

/// Element handle; clones refer to the same node
#[derive(Clone)]
pub struct MemoryElement {
    node: Rc<MemoryNode>,
}

impl MemoryElement {
    fn new(selectors: &[&str], styleable: bool, viewport: Rc<Cell<i32>>) -> Self {
        Self {
            node: Rc::new(MemoryNode {
                selectors: selectors.iter().map(|s| s.to_string()).collect(),
                styleable,
                styles: RefCell::new(HashMap::new()),
                data: RefCell::new(HashMap::new()),
                viewport,
            }),
        }
    }

    fn matches(&self, selector: &str) -> bool {
        self.node.selectors.iter().any(|s| s == selector)
    }

    pub fn is_styleable(&self) -> bool {
        self.node.styleable
    }
}

impl PartialEq for MemoryElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }
}

impl std::fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryElement")
            .field("selectors", &self.node.selectors)
            .field("styleable", &self.node.styleable)
            .field("data", &self.node.data.borrow())
            .finish()
    }
}

impl StyleTarget for MemoryElement {
    fn set_style(&self, property: StyleProperty, value: &str) {
        self.node.styles.borrow_mut().insert(property, value.to_string());
    }

    fn style(&self, property: StyleProperty) -> Option<String> {
        self.node.styles.borrow().get(&property).cloned()
    }

    fn set_data(&self, key: &str, value: &str) {
        self.node.data.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn data(&self, key: &str) -> Option<String> {
        self.node.data.borrow().get(key).cloned()
    }

    /// Resolves inline `width` (px or %) against the viewport, capped by `max-width`
    fn rendered_width(&self) -> i32 {
        let viewport = self.node.viewport.get();
        let width = match self.style(StyleProperty::Width) {
            Some(value) if value.trim_end().ends_with('%') => {
                parse_leading_int(&value).map_or(viewport, |pct| viewport * pct / 100)
            }
            Some(value) => parse_leading_int(&value).unwrap_or(viewport),
            None => viewport,
        };
        let max_width = self
            .style(StyleProperty::MaxWidth)
            .and_then(|value| parse_leading_int(&value))
            .unwrap_or(i32::MAX);
        width.min(max_width).max(0)
    }
}

enum EventSource {
    Click(MemoryElement),
    Resize,
}

struct Registration {
    id: ListenerId,
    source: EventSource,
    handler: Handler,
}

#[derive(Default)]
struct MemoryDocument {
    elements: Vec<MemoryElement>,
    body: Vec<MemoryElement>,
    listeners: Vec<Registration>,
    next_listener: u64,
}

/// Shared handle to an in-memory document
#[derive(Clone)]
pub struct MemoryHost {
    document: Rc<RefCell<MemoryDocument>>,
    viewport: Rc<Cell<i32>>,
}

impl MemoryHost {
    pub fn new(viewport_width: i32) -> Self {
        Self {
            document: Rc::new(RefCell::new(MemoryDocument::default())),
            viewport: Rc::new(Cell::new(viewport_width)),
        }
    }

    /// Add an element answering to each of `selectors` (e.g. `#sidebar`, `.nav`)
    pub fn insert(&self, selectors: &[&str]) -> MemoryElement {
        self.add(selectors, true)
    }

    /// Add a clickable element that cannot carry inline styles (an `<svg>` icon)
    pub fn insert_svg(&self, selectors: &[&str]) -> MemoryElement {
        self.add(selectors, false)
    }

    fn add(&self, selectors: &[&str], styleable: bool) -> MemoryElement {
        let element = MemoryElement::new(selectors, styleable, self.viewport.clone());
        self.document.borrow_mut().elements.push(element.clone());
        element
    }

    /// Fire click handlers bound to `element`; returns how many ran
    pub fn click(&self, element: &MemoryElement) -> usize {
        let handlers: Vec<Handler> = self
            .document
            .borrow()
            .listeners
            .iter()
            .filter(|r| matches!(&r.source, EventSource::Click(target) if target == element))
            .map(|r| r.handler.clone())
            .collect();
        for handler in &handlers {
            handler();
        }
        handlers.len()
    }

    /// Change the viewport width and fire resize handlers
    pub fn resize(&self, viewport_width: i32) -> usize {
        self.viewport.set(viewport_width);
        let handlers: Vec<Handler> = self
            .document
            .borrow()
            .listeners
            .iter()
            .filter(|r| matches!(r.source, EventSource::Resize))
            .map(|r| r.handler.clone())
            .collect();
        for handler in &handlers {
            handler();
        }
        handlers.len()
    }

    pub fn body_children(&self) -> Vec<MemoryElement> {
        self.document.borrow().body.clone()
    }

    pub fn listener_count(&self) -> usize {
        self.document.borrow().listeners.len()
    }

    fn register(&self, source: EventSource, handler: Handler) -> ListenerId {
        let mut document = self.document.borrow_mut();
        let id = ListenerId(document.next_listener);
        document.next_listener += 1;
        document.listeners.push(Registration { id, source, handler });
        id
    }
}

fn check_selector(selector: &str) -> Result<&str> {
    let trimmed = selector.trim();
    if trimmed.is_empty() {
        return Err(SidebarError::InvalidSelector {
            selector: selector.to_string(),
            reason: "empty selector".to_string(),
        });
    }
    Ok(trimmed)
}

impl Host for MemoryHost {
    type Element = MemoryElement;
    type Target = MemoryElement;
    type Listener = ListenerId;

    fn viewport_width(&self) -> i32 {
        self.viewport.get()
    }

    fn query_selector(&self, selector: &str) -> Result<Option<MemoryElement>> {
        match self.query_target(selector)? {
            Some(element) if !element.is_styleable() => Err(SidebarError::Dom(format!(
                "`{}` matches a non-HTML element",
                selector
            ))),
            found => Ok(found),
        }
    }

    fn query_target(&self, selector: &str) -> Result<Option<MemoryElement>> {
        let selector = check_selector(selector)?;
        Ok(self
            .document
            .borrow()
            .elements
            .iter()
            .find(|e| e.matches(selector))
            .cloned())
    }

    fn query_targets_all(&self, selector: &str) -> Result<Vec<MemoryElement>> {
        let selector = check_selector(selector)?;
        Ok(self
            .document
            .borrow()
            .elements
            .iter()
            .filter(|e| e.matches(selector))
            .cloned()
            .collect())
    }

    fn as_target(&self, element: &MemoryElement) -> MemoryElement {
        element.clone()
    }

    fn create_mask(&self) -> Result<MemoryElement> {
        Ok(MemoryElement::new(&[], true, self.viewport.clone()))
    }

    fn append_to_body(&self, element: &MemoryElement) -> Result<()> {
        self.document.borrow_mut().body.push(element.clone());
        Ok(())
    }

    fn remove_element(&self, element: &MemoryElement) {
        self.document.borrow_mut().body.retain(|e| e != element);
    }

    fn on_click(&self, target: &MemoryElement, handler: Handler) -> Result<ListenerId> {
        Ok(self.register(EventSource::Click(target.clone()), handler))
    }

    fn on_resize(&self, handler: Handler) -> Result<ListenerId> {
        Ok(self.register(EventSource::Resize, handler))
    }

    fn remove_listener(&self, listener: ListenerId) {
        self.document.borrow_mut().listeners.retain(|r| r.id != listener);
    }
}
