use super::constants::MOBILE_BREAKPOINT_PX;

/// Which variant of the room view to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    Desktop,
    Mobile,
}

impl LayoutMode {
    /// Unknown or non-finite widths fall back to desktop.
    #[inline]
    pub fn from_viewport_width(width_px: f64) -> Self {
        if width_px.is_finite() && width_px < MOBILE_BREAKPOINT_PX {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }

    #[inline]
    pub fn shows_click_hint(self) -> bool {
        self == LayoutMode::Desktop
    }

    #[inline]
    pub fn shows_mobile_notice(self) -> bool {
        self == LayoutMode::Mobile
    }

    // Desktop uses an invisible hotspot over the painted switch
    #[inline]
    pub fn switch_label(self) -> Option<&'static str> {
        match self {
            LayoutMode::Desktop => None,
            LayoutMode::Mobile => Some("ON/OFF"),
        }
    }

    #[inline]
    pub fn css_class(self) -> &'static str {
        match self {
            LayoutMode::Desktop => "layout-desktop",
            LayoutMode::Mobile => "layout-mobile",
        }
    }
}
