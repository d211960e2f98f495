// Defaults applied when an option is omitted from the sidebar configuration

pub const DEFAULT_SELECTOR: &str = "#sidebar";
pub const DEFAULT_QUITTER: &str = ".quit-sidebar";
pub const DEFAULT_TOP: &str = "56px";
pub const DEFAULT_WIDTH: &str = "300px";
pub const DEFAULT_GAP: i32 = 56;
pub const DEFAULT_EASING: &str = "ease-in-out";
pub const DEFAULT_Z_INDEX: i32 = 3000;

/// Slide and fade duration, not configurable
pub const ANIMATION_DURATION: &str = "500ms";

pub const MASK_BACKGROUND: &str = "rgba(0, 0, 0, 0.8)";

// DOM hooks exposed to host-page CSS
pub const STATUS_ATTRIBUTE: &str = "status";
pub const MASK_ATTRIBUTE: &str = "mask";
