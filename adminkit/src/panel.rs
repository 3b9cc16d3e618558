use pagedom::{Dom, DomError};

use crate::banner::{self, BannerRole, BannerState};
use crate::config::{ConfigError, PanelConfig};
use crate::menu::{self, MenuState, Toggled};

/// A document host bundled with the config its helpers read.
///
/// # Example
///
/// ```ignore
/// let mut panel = AdminPanel::new(Page::new(root), PanelConfig::default())?;
/// panel.init_menus()?;
/// panel.toggle_menu("users-title", false)?;
/// panel.set_error("<b>Save failed</b>", true)?;
/// ```
#[derive(Debug)]
pub struct AdminPanel<D: Dom> {
    dom: D,
    config: PanelConfig,
}

impl<D: Dom> AdminPanel<D> {
    /// Bundle `dom` with `config`, rejecting configs that fail
    /// [`PanelConfig::validate`].
    pub fn new(dom: D, config: PanelConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { dom, config })
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn into_inner(self) -> D {
        self.dom
    }

    // Menu

    pub fn init_menus(&mut self) -> Result<Vec<(String, MenuState)>, DomError> {
        menu::init_menus(&mut self.dom, &self.config)
    }

    pub fn menu_state(&self, section: &str) -> Result<MenuState, DomError> {
        menu::menu_state(&self.dom, &self.config, section)
    }

    pub fn toggle_menu(&mut self, section: &str, skip_animation: bool) -> Result<Toggled, DomError> {
        menu::toggle_menu(&mut self.dom, &self.config, section, skip_animation)
    }

    // Banners

    pub fn set_banner(&mut self, role: BannerRole, message: &str, focus: bool) -> Result<(), DomError> {
        banner::set_banner(&mut self.dom, &self.config, role, message, focus)
    }

    pub fn set_info(&mut self, message: &str, focus: bool) -> Result<(), DomError> {
        self.set_banner(BannerRole::Info, message, focus)
    }

    pub fn set_warning(&mut self, message: &str, focus: bool) -> Result<(), DomError> {
        self.set_banner(BannerRole::Warning, message, focus)
    }

    pub fn set_error(&mut self, message: &str, focus: bool) -> Result<(), DomError> {
        self.set_banner(BannerRole::Error, message, focus)
    }

    pub fn clear_banners(&mut self) -> Result<(), DomError> {
        banner::clear_banners(&mut self.dom, &self.config)
    }

    pub fn banner_state(&self, role: BannerRole) -> Result<BannerState, DomError> {
        banner::banner_state(&self.dom, &self.config, role)
    }
}
