// Host implementations
pub mod memory;
pub mod web;

pub use memory::{MemoryElement, MemoryHost};
pub use web::{VanillaSidebar, WebHost};
