// Markup contract and tuning constants shared by the marquee engine and the
// page collaborators. Kept free of imports so host tests can include it.

// Marquee attributes read from the container
pub const ATTR_MARQUEE: &str = "data-fls-marquee";
pub const ATTR_MARQUEE_SPACE: &str = "data-fls-marquee-space";
pub const ATTR_MARQUEE_SPEED: &str = "data-fls-marquee-speed";
pub const ATTR_MARQUEE_PAUSE: &str = "data-fls-marquee-pause-mouse-enter";
pub const ATTR_MARQUEE_DIRECTION: &str = "data-fls-marquee-direction";
pub const ATTR_MARQUEE_START: &str = "data-fls-marquee-start";

// Markers written by the layout builder
pub const ATTR_MARQUEE_INNER: &str = "data-fls-marquee-inner";
pub const ATTR_MARQUEE_ITEM: &str = "data-fls-marquee-item";
pub const ATTR_MARQUEE_CLONE: &str = "data-fls-marquee-clone";

// Marquee defaults
pub const DEFAULT_SPEED: f64 = 100.0;
pub const SPEED_ATTR_DIVISOR: f64 = 10.0; // attribute value is ten times the px/s speed
pub const DEFAULT_SPACE_BETWEEN: f64 = 30.0; // px
pub const ANIMATION_NAME_PREFIX: &str = "marquee-animation";

// Resize handling
pub const RESIZE_DEBOUNCE_MS: i32 = 50;

// Scroll lock
pub const ATTR_SCROLL_LOCK: &str = "data-fls-scrolllock";
pub const ATTR_LOCK_PADDING: &str = "data-fls-lp";
pub const UNLOCK_DELAY_MS: u64 = 300;
pub const TOGGLE_DELAY_MS: u64 = 300;

// Menu
pub const ATTR_MENU: &str = "data-fls-menu";
pub const ATTR_MENU_OPEN: &str = "data-fls-menu-open";
pub const MENU_BREAKPOINT_PX: f64 = 1200.0; // below this width the mobile layout is active
pub const CLASS_SUBMENU_OPEN: &str = "drop";

// Dropdown
pub const DROPDOWN_SELECTOR: &str = "#city";
pub const DROPDOWN_HEADER_SELECTOR: &str = ".header__content";
pub const DROPDOWN_MOBILE_SELECTOR: &str = ".mobile-menu .menu__content";
pub const CLASS_DROPDOWN_SHOW: &str = "show";
pub const CLASS_ARROW_ROTATE: &str = "rotate";
