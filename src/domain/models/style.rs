/// Inline style properties the sidebar writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    Position,
    Top,
    Right,
    Bottom,
    Left,
    Width,
    MaxWidth,
    ZIndex,
    Transition,
    Opacity,
    Visibility,
    Background,
}

impl StyleProperty {
    /// CSS property name as passed to `CSSStyleDeclaration.setProperty`
    pub fn css_name(&self) -> &'static str {
        match self {
            StyleProperty::Position => "position",
            StyleProperty::Top => "top",
            StyleProperty::Right => "right",
            StyleProperty::Bottom => "bottom",
            StyleProperty::Left => "left",
            StyleProperty::Width => "width",
            StyleProperty::MaxWidth => "max-width",
            StyleProperty::ZIndex => "z-index",
            StyleProperty::Transition => "transition",
            StyleProperty::Opacity => "opacity",
            StyleProperty::Visibility => "visibility",
            StyleProperty::Background => "background",
        }
    }
}

impl std::fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.css_name())
    }
}

/// CSS `position` values used by the panel and the mask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Fixed,
    Absolute,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Fixed => "fixed",
            Position::Absolute => "absolute",
        }
    }
}
