use serde::{Deserialize, Serialize};

use super::style::StyleProperty;
use crate::shared::errors::SidebarError;

/// Edge the sidebar slides in from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Right,
}

/// Offset properties for one alignment, resolved once at mount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetProperties {
    /// Animated property: `0px` when open, minus the panel width when closed
    pub offset: StyleProperty,
    /// The other horizontal edge, released to `auto`
    pub opposite: StyleProperty,
}

impl Alignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Right => "right",
        }
    }

    pub const fn properties(self) -> OffsetProperties {
        match self {
            Alignment::Left => OffsetProperties {
                offset: StyleProperty::Left,
                opposite: StyleProperty::Right,
            },
            Alignment::Right => OffsetProperties {
                offset: StyleProperty::Right,
                opposite: StyleProperty::Left,
            },
        }
    }
}

impl std::fmt::Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Alignment {
    type Err = SidebarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" => Ok(Alignment::Left),
            "right" => Ok(Alignment::Right),
            _ => Err(SidebarError::InvalidConfig(format!("Unknown alignment: {}", s))),
        }
    }
}
