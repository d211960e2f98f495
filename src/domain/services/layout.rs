//! Pixel arithmetic for the responsive panel width
//!
//! When the viewport is not wider than `max_width + gap`, the panel shrinks
//! to `viewport - gap` so a strip of backdrop stays clickable.

/// Leading integer of a CSS length, read the way `Number.parseInt` does.
/// Values outside `i32` saturate at its bounds.
pub fn parse_leading_int(value: &str) -> Option<i32> {
    let trimmed = value.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value = digits[..end].bytes().fold(0i32, |acc, digit| {
        let digit = i32::from(digit - b'0');
        if negative {
            acc.saturating_mul(10).saturating_sub(digit)
        } else {
            acc.saturating_mul(10).saturating_add(digit)
        }
    });
    Some(value)
}

/// Inline `width` of the panel for a given viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarWidth {
    /// `100%`, capped by `max-width`
    Full,
    /// Explicit pixel width leaving `gap` pixels of backdrop
    Constrained(i32),
}

impl SidebarWidth {
    pub fn css_value(&self) -> String {
        match self {
            SidebarWidth::Full => "100%".to_string(),
            SidebarWidth::Constrained(px) => format!("{}px", px),
        }
    }

    /// Width the panel renders at
    pub fn rendered_px(&self, viewport_width: i32, max_width: i32) -> i32 {
        match self {
            SidebarWidth::Full => viewport_width.min(max_width).max(0),
            SidebarWidth::Constrained(px) => (*px).min(max_width).max(0),
        }
    }

    pub fn is_constrained(&self) -> bool {
        matches!(self, SidebarWidth::Constrained(_))
    }
}

pub fn sidebar_width(viewport_width: i32, max_width: i32, gap: i32) -> SidebarWidth {
    if viewport_width <= max_width.saturating_add(gap) {
        SidebarWidth::Constrained(viewport_width.saturating_sub(gap).max(0))
    } else {
        SidebarWidth::Full
    }
}

/// Offset that keeps a panel of `width` pixels fully off-canvas
pub fn closed_offset(width: i32) -> i32 {
    -width
}
