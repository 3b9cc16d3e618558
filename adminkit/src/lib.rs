//! Admin panel page helpers: collapsible menu sections and status banners.
//!
//! Every helper works against any [`pagedom::Dom`] host and takes the element
//! ids it touches from a [`PanelConfig`], so nothing reaches for globals.

pub mod banner;
pub mod config;
pub mod menu;
pub mod panel;

pub use banner::{
    BannerRole, BannerState, banner_state, clear_banners, set_banner, set_error, set_info,
    set_warning,
};
pub use config::{ConfigError, PanelConfig};
pub use menu::{MenuState, Toggled, init_menus, menu_state, toggle_menu};
pub use panel::AdminPanel;
