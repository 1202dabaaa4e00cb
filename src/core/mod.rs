pub mod animation;
pub mod config;
pub mod duplicate;
pub mod layout;
pub mod marquee;
pub mod navigation;
pub mod renderer;
pub mod resize;
pub mod scroll_lock;

pub use animation::{animation_name, describe, AnimationDescriptor};
pub use config::{
    parse_float_prefix, resolve_spacing, sanitize_speed, Axis, ConfigError, Direction,
    MarqueeConfig,
};
pub use duplicate::{fill_track, plan_duplicates, track_base_styles, DuplicationPlan, FillError};
pub use layout::{build_track, BuiltLayout};
pub use marquee::{relayout, LifecycleState, MarqueeInstance, PassOutcome, SharedMarquee, SkipReason};
pub use navigation::{dropdown_placement, submenu_intercepts_click, DropdownPlacement};
pub use renderer::{Handler, HostEvent, ListenerScope, Renderer};
pub use resize::{Debouncer, MarqueeRegistry, WidthWatcher};
pub use scroll_lock::{LockTransition, ScrollLock};
