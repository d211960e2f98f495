use serde::{Deserialize, Deserializer, Serialize};

use super::alignment::Alignment;
use crate::domain::services::layout::parse_leading_int;
use crate::shared::constants::{
    DEFAULT_EASING, DEFAULT_GAP, DEFAULT_QUITTER, DEFAULT_SELECTOR, DEFAULT_TOP, DEFAULT_WIDTH,
    DEFAULT_Z_INDEX,
};
use crate::shared::errors::{Result, SidebarError};

/// Sidebar options, accepted with the same camelCase keys as the JS widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarConfig {
    /// Sidebar root selector
    #[serde(default = "default_selector")]
    pub selector: String,
    /// Opener element selector
    pub triggerer: String,
    /// Closer elements selector
    #[serde(default = "default_quitter")]
    pub quitter: String,
    /// Whether the backdrop is created and shown
    #[serde(default = "default_true")]
    pub mask: bool,
    #[serde(default)]
    pub align: Alignment,
    /// Vertical offset of panel and mask
    #[serde(default = "default_top")]
    pub top: String,
    /// Maximum panel width
    #[serde(default = "default_width")]
    pub width: String,
    /// Minimum backdrop strip kept visible, in pixels
    #[serde(default = "default_gap", deserialize_with = "deserialize_pixels")]
    pub gap: i32,
    #[serde(default)]
    pub opened: bool,
    #[serde(default = "default_easing")]
    pub easing: String,
    /// Panel stacking order; the mask sits one below
    #[serde(default = "default_z_index")]
    pub z_index: i32,
    /// Also update `data-mask` on open/close (off: set once at mount)
    #[serde(default)]
    pub sync_mask_status: bool,
}

fn default_selector() -> String {
    DEFAULT_SELECTOR.to_string()
}

fn default_quitter() -> String {
    DEFAULT_QUITTER.to_string()
}

fn default_true() -> bool {
    true
}

fn default_top() -> String {
    DEFAULT_TOP.to_string()
}

fn default_width() -> String {
    DEFAULT_WIDTH.to_string()
}

fn default_gap() -> i32 {
    DEFAULT_GAP
}

fn default_easing() -> String {
    DEFAULT_EASING.to_string()
}

fn default_z_index() -> i32 {
    DEFAULT_Z_INDEX
}

/// Accepts `56`, `56.0` or `"56px"`
fn deserialize_pixels<'de, D>(deserializer: D) -> std::result::Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PixelValue {
        Number(f64),
        Text(String),
    }

    match PixelValue::deserialize(deserializer)? {
        PixelValue::Number(n) => Ok(n.trunc() as i32),
        PixelValue::Text(s) => parse_leading_int(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("gap `{}` is not a pixel value", s))),
    }
}

impl SidebarConfig {
    pub fn new(triggerer: impl Into<String>) -> Self {
        Self {
            selector: default_selector(),
            triggerer: triggerer.into(),
            quitter: default_quitter(),
            mask: true,
            align: Alignment::default(),
            top: default_top(),
            width: default_width(),
            gap: DEFAULT_GAP,
            opened: false,
            easing: default_easing(),
            z_index: DEFAULT_Z_INDEX,
            sync_mask_status: false,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: SidebarConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    pub fn with_quitter(mut self, quitter: impl Into<String>) -> Self {
        self.quitter = quitter.into();
        self
    }

    pub fn with_mask(mut self, mask: bool) -> Self {
        self.mask = mask;
        self
    }

    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    pub fn with_top(mut self, top: impl Into<String>) -> Self {
        self.top = top.into();
        self
    }

    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = width.into();
        self
    }

    pub fn with_gap(mut self, gap: i32) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_opened(mut self, opened: bool) -> Self {
        self.opened = opened;
        self
    }

    pub fn with_easing(mut self, easing: impl Into<String>) -> Self {
        self.easing = easing.into();
        self
    }

    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    pub fn with_sync_mask_status(mut self, sync: bool) -> Self {
        self.sync_mask_status = sync;
        self
    }

    /// Leading integer of `width`; units other than px are read as px
    pub fn max_width_px(&self) -> Result<i32> {
        parse_leading_int(&self.width)
            .ok_or_else(|| SidebarError::InvalidWidth(self.width.clone()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.selector.trim().is_empty() {
            return Err(SidebarError::InvalidConfig("selector must not be empty".to_string()));
        }
        if self.triggerer.trim().is_empty() {
            return Err(SidebarError::InvalidConfig("triggerer must not be empty".to_string()));
        }
        if self.max_width_px()? < 0 {
            return Err(SidebarError::InvalidWidth(self.width.clone()));
        }
        if self.gap < 0 {
            return Err(SidebarError::InvalidGap(format!("{} is negative", self.gap)));
        }
        Ok(())
    }
}
