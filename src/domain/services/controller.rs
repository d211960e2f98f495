//! Sidebar controller: binds a panel, its trigger, quitters and backdrop mask
//!
//! `status` lives in the controller and is mirrored into `data-status` on the
//! panel. Every listener registered at mount is owned by the returned
//! [`Subscription`]; handlers hold only a weak reference to the controller.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use crate::domain::host::{Handler, Host, StyleTarget};
use crate::domain::models::{
    OffsetProperties, Position, SidebarConfig, SidebarStatus, StyleProperty,
};
use crate::domain::services::layout::{closed_offset, sidebar_width};
use crate::shared::constants::{
    ANIMATION_DURATION, MASK_ATTRIBUTE, MASK_BACKGROUND, STATUS_ATTRIBUTE,
};
use crate::shared::errors::{ElementRole, Result, SidebarError};
use crate::shared::logging;

struct Inner<H: Host> {
    host: H,
    config: SidebarConfig,
    properties: OffsetProperties,
    max_width: i32,
    sidebar: H::Element,
    mask: Option<H::Element>,
    status: Cell<SidebarStatus>,
}

impl<H: Host> Inner<H> {
    fn open(&self) {
        self.sidebar.set_offset(self.properties.offset, 0);
        self.apply_status(SidebarStatus::Open);
        if let Some(mask) = &self.mask {
            mask.set_style(StyleProperty::Opacity, "1");
            mask.set_style(StyleProperty::Visibility, "visible");
        }
    }

    fn close(&self) {
        let width = self.sidebar.rendered_width();
        self.sidebar.set_offset(self.properties.offset, closed_offset(width));
        self.apply_status(SidebarStatus::Closed);
        if let Some(mask) = &self.mask {
            mask.set_style(StyleProperty::Opacity, "0");
            mask.set_style(StyleProperty::Visibility, "hidden");
        }
    }

    fn toggle(&self) {
        match self.status.get().toggled() {
            SidebarStatus::Open => self.open(),
            SidebarStatus::Closed => self.close(),
        }
    }

    /// Shared by open and close; sets rather than flips, so repeats are no-ops
    fn apply_status(&self, status: SidebarStatus) {
        let previous = self.status.replace(status);
        self.sidebar.set_data(STATUS_ATTRIBUTE, status.as_str());
        if self.config.sync_mask_status {
            if let Some(mask) = &self.mask {
                mask.set_data(MASK_ATTRIBUTE, status.as_str());
            }
        }
        if previous != status {
            logging::log_status_change(&self.config.selector, previous, status);
        }
    }

    fn refresh_layout(&self) {
        let viewport = self.host.viewport_width();
        let width = sidebar_width(viewport, self.max_width, self.config.gap);
        let css = width.css_value();
        self.sidebar.set_style(StyleProperty::Width, &css);

        // A closed panel must stay fully off-canvas at its new width
        if !self.status.get().is_open() {
            let rendered = width.rendered_px(viewport, self.max_width);
            self.sidebar.set_offset(self.properties.offset, closed_offset(rendered));
        }
        logging::log_resize(&self.config.selector, viewport, &css);
    }
}

/// Handle to a mounted sidebar; clones drive the same panel
pub struct SidebarController<H: Host> {
    inner: Rc<Inner<H>>,
}

impl<H: Host> Clone for SidebarController<H> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

fn not_found(role: ElementRole, selector: &str) -> SidebarError {
    SidebarError::ElementNotFound {
        role,
        selector: selector.to_string(),
    }
}

fn handler<H: Host + 'static>(inner: &Rc<Inner<H>>, action: fn(&Inner<H>)) -> Handler {
    let weak: Weak<Inner<H>> = Rc::downgrade(inner);
    Rc::new(move || {
        if let Some(inner) = weak.upgrade() {
            action(&inner);
        }
    })
}

fn style_mask<E: StyleTarget>(mask: &E, config: &SidebarConfig, status: SidebarStatus) {
    mask.set_data(MASK_ATTRIBUTE, status.as_str());
    mask.set_style(StyleProperty::Visibility, "hidden");
    mask.set_style(StyleProperty::Background, MASK_BACKGROUND);
    // One below the panel; `i32::MIN` has nothing below it
    let z_index = config.z_index.saturating_sub(1);
    mask.set_style(StyleProperty::ZIndex, &z_index.to_string());
    mask.set_position(Position::Absolute, &config.top);
    mask.set_style(StyleProperty::Right, "0");
    mask.set_style(StyleProperty::Left, "0");
    mask.set_transition(&format!(
        "visibility 0s, opacity {} {}",
        ANIMATION_DURATION, config.easing
    ));
    mask.set_style(StyleProperty::Opacity, "0");
}

impl<H: Host + 'static> SidebarController<H> {
    /// Resolve the elements, apply the initial styles and bind all listeners.
    ///
    /// Fails if the sidebar or trigger selector matches nothing; an empty
    /// quitter set is accepted. Dropping the returned [`Subscription`]
    /// unbinds everything.
    pub fn mount(host: H, config: SidebarConfig) -> Result<(Self, Subscription<H>)> {
        let selector = config.selector.clone();
        Self::try_mount(host, config)
            .inspect_err(|e| logging::log_mount_error(&selector, &e.to_string()))
    }

    fn try_mount(host: H, config: SidebarConfig) -> Result<(Self, Subscription<H>)> {
        config.validate()?;
        let max_width = config.max_width_px()?;

        // Only the panel is styled; trigger and quitters just need to be clickable
        let sidebar = host
            .query_selector(&config.selector)?
            .ok_or_else(|| not_found(ElementRole::Sidebar, &config.selector))?;
        let trigger = host
            .query_target(&config.triggerer)?
            .ok_or_else(|| not_found(ElementRole::Trigger, &config.triggerer))?;
        let quitters = host.query_targets_all(&config.quitter)?;
        if quitters.is_empty() {
            logging::log_no_quitters(&config.selector, &config.quitter);
        }

        let status = SidebarStatus::from_opened(config.opened);
        let properties = config.align.properties();

        sidebar.set_data(STATUS_ATTRIBUTE, status.as_str());
        sidebar.set_style(StyleProperty::ZIndex, &config.z_index.to_string());
        sidebar.set_transition(&format!(
            "{} {} {}",
            properties.offset.css_name(),
            ANIMATION_DURATION,
            config.easing
        ));
        sidebar.set_position(Position::Fixed, &config.top);
        sidebar.set_style(properties.opposite, "auto");
        sidebar.set_style(StyleProperty::Width, "100%");
        sidebar.set_style(StyleProperty::MaxWidth, &config.width);

        let width = sidebar_width(host.viewport_width(), max_width, config.gap);
        if width.is_constrained() {
            sidebar.set_style(StyleProperty::Width, &width.css_value());
        }

        if status.is_open() {
            sidebar.set_offset(properties.offset, 0);
        } else {
            sidebar.set_offset(properties.offset, closed_offset(sidebar.rendered_width()));
        }

        let mask = if config.mask {
            let mask = host.create_mask()?;
            style_mask(&mask, &config, status);
            Some(mask)
        } else {
            None
        };

        let inner = Rc::new(Inner {
            host,
            config,
            properties,
            max_width,
            sidebar,
            mask,
            status: Cell::new(status),
        });

        // From here on, an early return drops the subscription and unbinds
        let mut subscription = Subscription {
            inner: inner.clone(),
            listeners: Vec::new(),
            mask_attached: false,
        };

        let host = &inner.host;
        subscription
            .listeners
            .push(host.on_resize(handler(&inner, Inner::refresh_layout))?);
        subscription
            .listeners
            .push(host.on_click(&trigger, handler(&inner, Inner::toggle))?);

        if let Some(mask) = &inner.mask {
            host.append_to_body(mask)?;
            subscription.mask_attached = true;
            subscription
                .listeners
                .push(host.on_click(&host.as_target(mask), handler(&inner, Inner::close))?);
        }

        for quitter in &quitters {
            subscription
                .listeners
                .push(host.on_click(quitter, handler(&inner, Inner::close))?);
        }

        logging::log_mount(
            &inner.config.selector,
            inner.config.align,
            status,
            quitters.len(),
            inner.mask.is_some(),
        );

        Ok((Self { inner }, subscription))
    }
}

impl<H: Host> SidebarController<H> {
    /// Slide the panel in and show the mask
    pub fn open(&self) {
        self.inner.open();
    }

    /// Slide the panel fully off-canvas and hide the mask
    pub fn close(&self) {
        self.inner.close();
    }

    pub fn toggle(&self) {
        self.inner.toggle();
    }

    pub fn status(&self) -> SidebarStatus {
        self.inner.status.get()
    }

    pub fn is_open(&self) -> bool {
        self.status().is_open()
    }

    /// Recompute the responsive width for the current viewport
    pub fn refresh_layout(&self) {
        self.inner.refresh_layout();
    }

    pub fn config(&self) -> &SidebarConfig {
        &self.inner.config
    }

    pub fn sidebar(&self) -> &H::Element {
        &self.inner.sidebar
    }

    /// Backdrop element, `None` when masking is disabled
    pub fn mask(&self) -> Option<&H::Element> {
        self.inner.mask.as_ref()
    }
}

/// Listeners bound by [`SidebarController::mount`]
///
/// Dropping or disposing removes every listener and detaches the mask.
/// Call [`Subscription::forget`] to keep the sidebar bound for the page lifetime.
#[must_use = "dropping a Subscription unbinds the sidebar"]
pub struct Subscription<H: Host> {
    inner: Rc<Inner<H>>,
    listeners: Vec<H::Listener>,
    mask_attached: bool,
}

impl<H: Host> Subscription<H> {
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn dispose(self) {
        drop(self);
    }

    /// Leave every listener bound; nothing will ever remove them
    pub fn forget(self) {
        std::mem::forget(self);
    }

    fn release(&mut self) {
        if self.listeners.is_empty() && !self.mask_attached {
            return;
        }

        let host = &self.inner.host;
        let count = self.listeners.len();
        for listener in self.listeners.drain(..) {
            host.remove_listener(listener);
        }
        if self.mask_attached {
            if let Some(mask) = &self.inner.mask {
                host.remove_element(mask);
            }
            self.mask_attached = false;
        }
        logging::log_dispose(&self.inner.config.selector, count);
    }
}

impl<H: Host> Drop for Subscription<H> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Alignment;
    use crate::infrastructure::memory::{MemoryElement, MemoryHost};

    struct Page {
        host: MemoryHost,
        sidebar: MemoryElement,
        trigger: MemoryElement,
        quitters: Vec<MemoryElement>,
    }

    fn page(viewport: i32) -> Page {
        let host = MemoryHost::new(viewport);
        let sidebar = host.insert(&["#sidebar"]);
        let trigger = host.insert(&["#menu"]);
        let quitters = vec![host.insert(&[".quit-sidebar"]), host.insert(&[".quit-sidebar"])];
        Page {
            host,
            sidebar,
            trigger,
            quitters,
        }
    }

    type Mounted = (SidebarController<MemoryHost>, Subscription<MemoryHost>);

    fn mount(page: &Page, config: SidebarConfig) -> Mounted {
        SidebarController::mount(page.host.clone(), config).unwrap()
    }

    fn left(el: &MemoryElement) -> Option<String> {
        el.style(StyleProperty::Left)
    }

    #[test]
    fn test_initial_status_matches_opened_flag() {
        let p = page(1000);
        let (sidebar, _sub) = mount(&p, SidebarConfig::new("#menu"));
        assert_eq!(sidebar.status(), SidebarStatus::Closed);
        assert_eq!(p.sidebar.data("status").as_deref(), Some("closed"));
        assert_eq!(left(&p.sidebar).as_deref(), Some("-300px"));

        let p = page(1000);
        let (sidebar, _sub) = mount(&p, SidebarConfig::new("#menu").with_opened(true));
        assert!(sidebar.is_open());
        assert_eq!(p.sidebar.data("status").as_deref(), Some("open"));
        assert_eq!(left(&p.sidebar).as_deref(), Some("0px"));
    }

    #[test]
    fn test_mount_applies_fixed_panel_styles() {
        let p = page(1000);
        let (_sidebar, _sub) = mount(&p, SidebarConfig::new("#menu"));

        let style = |prop| p.sidebar.style(prop);
        assert_eq!(style(StyleProperty::Position).as_deref(), Some("fixed"));
        assert_eq!(style(StyleProperty::Top).as_deref(), Some("56px"));
        assert_eq!(style(StyleProperty::Bottom).as_deref(), Some("0"));
        assert_eq!(style(StyleProperty::Width).as_deref(), Some("100%"));
        assert_eq!(style(StyleProperty::MaxWidth).as_deref(), Some("300px"));
        assert_eq!(style(StyleProperty::ZIndex).as_deref(), Some("3000"));
        assert_eq!(style(StyleProperty::Transition).as_deref(), Some("left 500ms ease-in-out"));
        assert_eq!(style(StyleProperty::Right).as_deref(), Some("auto"));
    }

    #[test]
    fn test_right_alignment_animates_right_edge() {
        let p = page(1000);
        let (sidebar, _sub) = mount(&p, SidebarConfig::new("#menu").with_align(Alignment::Right));
        assert_eq!(p.sidebar.style(StyleProperty::Right).as_deref(), Some("-300px"));
        assert_eq!(p.sidebar.style(StyleProperty::Left).as_deref(), Some("auto"));
        assert_eq!(
            p.sidebar.style(StyleProperty::Transition).as_deref(),
            Some("right 500ms ease-in-out")
        );

        sidebar.open();
        assert_eq!(p.sidebar.style(StyleProperty::Right).as_deref(), Some("0px"));
        assert_eq!(p.sidebar.style(StyleProperty::Left).as_deref(), Some("auto"));
    }

    #[test]
    fn test_open_close_round_trip_restores_offset() {
        let p = page(1000);
        let (sidebar, _sub) = mount(&p, SidebarConfig::new("#menu"));
        let before = left(&p.sidebar);

        sidebar.open();
        assert_eq!(left(&p.sidebar).as_deref(), Some("0px"));
        sidebar.close();
        assert_eq!(left(&p.sidebar), before);
    }

    #[test]
    fn test_open_and_close_are_idempotent() {
        let p = page(1000);
        let (sidebar, _sub) = mount(&p, SidebarConfig::new("#menu"));

        sidebar.open();
        sidebar.open();
        assert!(sidebar.is_open());
        assert_eq!(p.sidebar.data("status").as_deref(), Some("open"));
        assert_eq!(left(&p.sidebar).as_deref(), Some("0px"));

        sidebar.close();
        sidebar.close();
        assert!(!sidebar.is_open());
        assert_eq!(p.sidebar.data("status").as_deref(), Some("closed"));
        assert_eq!(left(&p.sidebar).as_deref(), Some("-300px"));
    }

    #[test]
    fn test_trigger_click_alternates() {
        let p = page(1000);
        let (sidebar, _sub) = mount(&p, SidebarConfig::new("#menu"));

        assert_eq!(p.host.click(&p.trigger), 1);
        assert_eq!(sidebar.status(), SidebarStatus::Open);
        p.host.click(&p.trigger);
        assert_eq!(sidebar.status(), SidebarStatus::Closed);
        p.host.click(&p.trigger);
        assert_eq!(sidebar.status(), SidebarStatus::Open);
    }

    #[test]
    fn test_narrow_viewport_leaves_gap() {
        let p = page(300);
        let (_sidebar, _sub) = mount(&p, SidebarConfig::new("#menu"));
        assert_eq!(p.sidebar.style(StyleProperty::Width).as_deref(), Some("244px"));
        assert_eq!(p.sidebar.rendered_width(), 244);
        assert_eq!(left(&p.sidebar).as_deref(), Some("-244px"));
    }

    #[test]
    fn test_wide_viewport_keeps_configured_width() {
        let p = page(1000);
        let (_sidebar, _sub) = mount(&p, SidebarConfig::new("#menu"));
        assert_eq!(p.sidebar.rendered_width(), 300);
    }

    #[test]
    fn test_resize_while_closed_stays_off_canvas() {
        let p = page(1000);
        let (_sidebar, _sub) = mount(&p, SidebarConfig::new("#menu"));

        assert_eq!(p.host.resize(300), 1);
        assert_eq!(p.sidebar.style(StyleProperty::Width).as_deref(), Some("244px"));
        assert_eq!(left(&p.sidebar).as_deref(), Some("-244px"));

        p.host.resize(1000);
        assert_eq!(p.sidebar.style(StyleProperty::Width).as_deref(), Some("100%"));
        assert_eq!(left(&p.sidebar).as_deref(), Some("-300px"));
    }

    #[test]
    fn test_resize_while_open_keeps_panel_in_view() {
        let p = page(1000);
        let (sidebar, _sub) = mount(&p, SidebarConfig::new("#menu"));
        sidebar.open();

        p.host.resize(320);
        assert_eq!(p.sidebar.style(StyleProperty::Width).as_deref(), Some("264px"));
        assert_eq!(left(&p.sidebar).as_deref(), Some("0px"));

        sidebar.close();
        assert_eq!(left(&p.sidebar).as_deref(), Some("-264px"));
    }

    #[test]
    fn test_mask_follows_open_and_close() {
        let p = page(1000);
        let (sidebar, _sub) = mount(&p, SidebarConfig::new("#menu"));
        let mask = sidebar.mask().cloned().unwrap();

        assert_eq!(p.host.body_children(), vec![mask.clone()]);
        assert_eq!(mask.style(StyleProperty::ZIndex).as_deref(), Some("2999"));
        assert_eq!(mask.style(StyleProperty::Position).as_deref(), Some("absolute"));
        assert_eq!(mask.style(StyleProperty::Background).as_deref(), Some("rgba(0, 0, 0, 0.8)"));
        assert_eq!(
            mask.style(StyleProperty::Transition).as_deref(),
            Some("visibility 0s, opacity 500ms ease-in-out")
        );
        assert_eq!(mask.style(StyleProperty::Opacity).as_deref(), Some("0"));
        assert_eq!(mask.style(StyleProperty::Visibility).as_deref(), Some("hidden"));

        sidebar.open();
        assert_eq!(mask.style(StyleProperty::Opacity).as_deref(), Some("1"));
        assert_eq!(mask.style(StyleProperty::Visibility).as_deref(), Some("visible"));

        sidebar.close();
        assert_eq!(mask.style(StyleProperty::Opacity).as_deref(), Some("0"));
        assert_eq!(mask.style(StyleProperty::Visibility).as_deref(), Some("hidden"));
    }

    #[test]
    fn test_mask_attribute_set_once_unless_synced() {
        let p = page(1000);
        let (sidebar, _sub) = mount(&p, SidebarConfig::new("#menu"));
        let mask = sidebar.mask().cloned().unwrap();
        sidebar.open();
        assert_eq!(mask.data("mask").as_deref(), Some("closed"));

        let p = page(1000);
        let (sidebar, _sub) = mount(&p, SidebarConfig::new("#menu").with_sync_mask_status(true));
        let mask = sidebar.mask().cloned().unwrap();
        sidebar.open();
        assert_eq!(mask.data("mask").as_deref(), Some("open"));
        sidebar.close();
        assert_eq!(mask.data("mask").as_deref(), Some("closed"));
    }

    #[test]
    fn test_mask_click_closes() {
        let p = page(1000);
        let (sidebar, _sub) = mount(&p, SidebarConfig::new("#menu"));
        let mask = sidebar.mask().cloned().unwrap();

        sidebar.open();
        assert_eq!(p.host.click(&mask), 1);
        assert!(!sidebar.is_open());
    }

    #[test]
    fn test_mask_disabled_appends_nothing() {
        let p = page(1000);
        let (sidebar, sub) = mount(&p, SidebarConfig::new("#menu").with_mask(false));
        assert!(p.host.body_children().is_empty());
        assert!(sidebar.mask().is_none());
        // resize + trigger + two quitters
        assert_eq!(sub.listener_count(), 4);

        sidebar.open();
        assert!(sidebar.is_open());
    }

    #[test]
    fn test_each_quitter_closes_once() {
        let p = page(1000);
        let (sidebar, _sub) = mount(&p, SidebarConfig::new("#menu"));

        for quitter in &p.quitters {
            sidebar.open();
            assert_eq!(p.host.click(quitter), 1);
            assert!(!sidebar.is_open());
        }
    }

    #[test]
    fn test_missing_quitters_is_valid() {
        let host = MemoryHost::new(1000);
        host.insert(&["#sidebar"]);
        host.insert(&["#menu"]);
        let (_sidebar, sub) = SidebarController::mount(host, SidebarConfig::new("#menu")).unwrap();
        // resize + trigger + mask
        assert_eq!(sub.listener_count(), 3);
    }

    #[test]
    fn test_missing_required_elements_fail_fast() {
        let host = MemoryHost::new(1000);
        host.insert(&["#menu"]);
        let err = SidebarController::mount(host.clone(), SidebarConfig::new("#menu"))
            .err()
            .unwrap();
        assert!(matches!(
            err,
            SidebarError::ElementNotFound { role: ElementRole::Sidebar, .. }
        ));

        let host = MemoryHost::new(1000);
        host.insert(&["#sidebar"]);
        let err = SidebarController::mount(host.clone(), SidebarConfig::new("#menu"))
            .err()
            .unwrap();
        assert!(matches!(
            err,
            SidebarError::ElementNotFound { role: ElementRole::Trigger, .. }
        ));
        assert_eq!(host.listener_count(), 0);
        assert!(host.body_children().is_empty());
    }

    #[test]
    fn test_invalid_width_is_rejected() {
        let p = page(1000);
        let config = SidebarConfig::new("#menu").with_width("auto");
        let result = SidebarController::mount(p.host.clone(), config);
        assert!(matches!(result, Err(SidebarError::InvalidWidth(_))));
    }

    #[test]
    fn test_lowest_z_index_keeps_mask_at_floor() {
        let p = page(1000);
        let (sidebar, _sub) = mount(&p, SidebarConfig::new("#menu").with_z_index(i32::MIN));
        let mask = sidebar.mask().cloned().unwrap();

        let floor = i32::MIN.to_string();
        assert_eq!(p.sidebar.style(StyleProperty::ZIndex), Some(floor.clone()));
        assert_eq!(mask.style(StyleProperty::ZIndex), Some(floor));
    }

    #[test]
    fn test_svg_trigger_and_quitters_are_bound() {
        let host = MemoryHost::new(1000);
        let panel = host.insert(&["#sidebar"]);
        let icon = host.insert_svg(&["#menu-icon"]);
        let close_icon = host.insert_svg(&[".quit-sidebar"]);

        let (sidebar, sub) =
            SidebarController::mount(host.clone(), SidebarConfig::new("#menu-icon")).unwrap();
        // resize + trigger + mask + quitter
        assert_eq!(sub.listener_count(), 4);

        assert_eq!(host.click(&icon), 1);
        assert!(sidebar.is_open());
        assert_eq!(panel.data("status").as_deref(), Some("open"));

        assert_eq!(host.click(&close_icon), 1);
        assert!(!sidebar.is_open());
    }

    #[test]
    fn test_svg_sidebar_is_rejected() {
        let host = MemoryHost::new(1000);
        host.insert_svg(&["#sidebar"]);
        host.insert(&["#menu"]);

        let result = SidebarController::mount(host.clone(), SidebarConfig::new("#menu"));
        assert!(matches!(result, Err(SidebarError::Dom(_))));
        assert_eq!(host.listener_count(), 0);
    }

    #[test]
    fn test_dispose_unbinds_everything() {
        let p = page(1000);
        let (sidebar, sub) = mount(&p, SidebarConfig::new("#menu"));
        assert_eq!(p.host.listener_count(), 5);

        sub.dispose();
        assert_eq!(p.host.listener_count(), 0);
        assert!(p.host.body_children().is_empty());

        assert_eq!(p.host.click(&p.trigger), 0);
        assert_eq!(p.host.resize(300), 0);
        assert!(!sidebar.is_open());
    }

    #[test]
    fn test_forget_keeps_listeners() {
        let p = page(1000);
        let (sidebar, sub) = mount(&p, SidebarConfig::new("#menu"));
        sub.forget();
        drop(sidebar);

        assert_eq!(p.host.listener_count(), 5);
        p.host.click(&p.trigger);
        assert_eq!(p.sidebar.data("status").as_deref(), Some("open"));
    }

    #[test]
    fn test_instances_are_independent() {
        let host = MemoryHost::new(1000);
        let left_panel = host.insert(&["#nav"]);
        let left_trigger = host.insert(&["#nav-toggle"]);
        let right_panel = host.insert(&["#details"]);
        let right_trigger = host.insert(&["#details-toggle"]);

        let (nav, _nav_sub) = SidebarController::mount(
            host.clone(),
            SidebarConfig::new("#nav-toggle").with_selector("#nav"),
        )
        .unwrap();
        let (details, _details_sub) = SidebarController::mount(
            host.clone(),
            SidebarConfig::new("#details-toggle")
                .with_selector("#details")
                .with_align(Alignment::Right)
                .with_width("400px"),
        )
        .unwrap();

        host.click(&left_trigger);
        assert!(nav.is_open());
        assert!(!details.is_open());
        assert_eq!(right_panel.style(StyleProperty::Right).as_deref(), Some("-400px"));

        host.click(&right_trigger);
        assert!(details.is_open());
        assert_eq!(left_panel.data("status").as_deref(), Some("open"));
        assert_eq!(host.body_children().len(), 2);
    }
}
