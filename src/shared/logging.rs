//! Structured logging for sidebar controllers
//!
//! Every event carries an `operation` field and the sidebar `selector`, so
//! several sidebars on one page can be told apart. The library never installs
//! a subscriber; that is left to the embedding application.

use crate::domain::models::{Alignment, SidebarStatus};

/// Operations that emit log events
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Mount,
    StatusChange,
    Resize,
    Dispose,
    Dom,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Mount => "mount",
            LogOperation::StatusChange => "status_change",
            LogOperation::Resize => "resize",
            LogOperation::Dispose => "dispose",
            LogOperation::Dom => "dom",
        }
    }
}

/// Log a sidebar mount
pub fn log_mount(
    selector: &str,
    align: Alignment,
    status: SidebarStatus,
    quitter_count: usize,
    mask: bool,
) {
    tracing::info!(
        operation = LogOperation::Mount.as_str(),
        selector = selector,
        align = align.as_str(),
        status = status.as_str(),
        quitter_count = quitter_count,
        mask = mask,
        "Sidebar mounted"
    );
}

/// Log an empty quitter match (valid, but usually a typo)
pub fn log_no_quitters(selector: &str, quitter: &str) {
    tracing::debug!(
        operation = LogOperation::Mount.as_str(),
        selector = selector,
        quitter = quitter,
        "No quitter elements matched"
    );
}

/// Log a mount failure
pub fn log_mount_error(selector: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::Mount.as_str(),
        selector = selector,
        error = error,
        "Failed to mount sidebar"
    );
}

/// Log an open/close transition
pub fn log_status_change(selector: &str, from: SidebarStatus, to: SidebarStatus) {
    tracing::debug!(
        operation = LogOperation::StatusChange.as_str(),
        selector = selector,
        from = from.as_str(),
        to = to.as_str(),
        "Sidebar status changed"
    );
}

/// Log a layout recomputation after a viewport resize
pub fn log_resize(selector: &str, viewport_width: i32, width: &str) {
    tracing::trace!(
        operation = LogOperation::Resize.as_str(),
        selector = selector,
        viewport_width = viewport_width,
        width = width,
        "Sidebar width recomputed"
    );
}

/// Log listener teardown
pub fn log_dispose(selector: &str, listener_count: usize) {
    tracing::info!(
        operation = LogOperation::Dispose.as_str(),
        selector = selector,
        listener_count = listener_count,
        "Sidebar disposed"
    );
}

/// Log a rejected style or attribute write
pub fn log_dom_write_failed(property: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::Dom.as_str(),
        property = property,
        error = error,
        "DOM write failed"
    );
}
