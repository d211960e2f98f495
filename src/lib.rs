//! Off-canvas sidebar panel for the browser
//!
//! The controller is generic over a [`domain::host::Host`]: `WebHost` binds it
//! to the live DOM through `web-sys`, `MemoryHost` drives it natively.

pub mod domain;
pub mod shared;
pub mod infrastructure;

// Dioxus demo app
pub mod app;

pub use domain::host::{Host, StyleTarget};
pub use domain::models::{Alignment, SidebarConfig, SidebarStatus};
pub use domain::services::{SidebarController, Subscription};
pub use infrastructure::{MemoryHost, VanillaSidebar, WebHost};
pub use shared::errors::{Result, SidebarError};
