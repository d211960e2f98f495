pub mod layouts;
pub mod pages;

// Re-export the demo App
pub use pages::home::App;
