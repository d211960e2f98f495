pub mod controller;
pub mod layout;

pub use controller::{SidebarController, Subscription};
pub use layout::{closed_offset, parse_leading_int, sidebar_width, SidebarWidth};
