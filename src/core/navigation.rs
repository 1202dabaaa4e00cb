//! Layout decisions for the header navigation: submenu taps and where the
//! city dropdown lives.

use crate::constants::MENU_BREAKPOINT_PX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropdownPlacement {
    /// Inside the mobile drawer, as its first child.
    MobileMenu,
    Header,
}

#[inline]
pub fn is_mobile_width(viewport_width: f64) -> bool {
    viewport_width < MENU_BREAKPOINT_PX
}

/// Submenu triggers act as toggles on small screens and touch devices; on
/// desktop they keep their default link behavior.
#[inline]
pub fn submenu_intercepts_click(viewport_width: f64, touch_capable: bool) -> bool {
    is_mobile_width(viewport_width) || touch_capable
}

#[inline]
pub fn dropdown_placement(viewport_width: f64) -> DropdownPlacement {
    if is_mobile_width(viewport_width) {
        DropdownPlacement::MobileMenu
    } else {
        DropdownPlacement::Header
    }
}
