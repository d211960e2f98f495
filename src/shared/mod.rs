pub mod errors;
pub mod constants;
pub mod logging;

// Dioxus integration
pub mod hooks;
