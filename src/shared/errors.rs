use thiserror::Error;

/// Which bound element a selector was expected to resolve to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRole {
    Sidebar,
    Trigger,
}

impl ElementRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementRole::Sidebar => "sidebar",
            ElementRole::Trigger => "trigger",
        }
    }
}

impl std::fmt::Display for ElementRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum SidebarError {
    #[error("No {role} element matches selector `{selector}`")]
    ElementNotFound { role: ElementRole, selector: String },

    #[error("Invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Invalid width `{0}`: expected a leading pixel value such as `300px`")]
    InvalidWidth(String),

    #[error("Invalid gap: {0}")]
    InvalidGap(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<serde_json::Error> for SidebarError {
    fn from(err: serde_json::Error) -> Self {
        SidebarError::InvalidConfig(err.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for SidebarError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        SidebarError::InvalidConfig(err.to_string())
    }
}

impl From<SidebarError> for wasm_bindgen::JsValue {
    fn from(err: SidebarError) -> Self {
        wasm_bindgen::JsError::new(&err.to_string()).into()
    }
}

pub type Result<T> = std::result::Result<T, SidebarError>;
