// Sidebar domain models
// Pure Rust, no DOM dependencies

pub mod alignment;
pub mod config;
pub mod status;
pub mod style;

pub use alignment::{Alignment, OffsetProperties};
pub use config::SidebarConfig;
pub use status::SidebarStatus;
pub use style::{Position, StyleProperty};
