use serde::{Deserialize, Serialize};

/// Open/closed state, mirrored into `data-status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarStatus {
    Open,
    #[default]
    Closed,
}

impl SidebarStatus {
    pub fn from_opened(opened: bool) -> Self {
        if opened {
            SidebarStatus::Open
        } else {
            SidebarStatus::Closed
        }
    }

    /// Attribute value written to `data-status` / `data-mask`
    pub fn as_str(&self) -> &'static str {
        match self {
            SidebarStatus::Open => "open",
            SidebarStatus::Closed => "closed",
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, SidebarStatus::Open)
    }

    pub fn toggled(&self) -> Self {
        match self {
            SidebarStatus::Open => SidebarStatus::Closed,
            SidebarStatus::Closed => SidebarStatus::Open,
        }
    }
}

impl std::fmt::Display for SidebarStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
