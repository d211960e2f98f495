// Browser bindings (web-sys)
pub mod bindings;
pub mod host;

pub use bindings::VanillaSidebar;
pub use host::{WebElement, WebHost, WebListener};
