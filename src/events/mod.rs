pub mod dropdown;
pub mod menu;
pub mod resize;

pub use dropdown::wire_dropdown;
pub use menu::{wire_menu_toggle, wire_submenus, SharedLock};
pub use resize::{wire_marquee_resize, SharedRegistry};
