//! Collapsible menu sections.
//!
//! A section is a title element carrying exactly one of two marker classes.
//! The element right after the title is its panel, shown while expanded.

use log::debug;
use pagedom::{Dom, DomError, SlideHandle};

use crate::config::PanelConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Expanded,
    Collapsed,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Expanded => MenuState::Collapsed,
            MenuState::Collapsed => MenuState::Expanded,
        }
    }
}

/// Result of a toggle.
#[derive(Debug)]
pub struct Toggled {
    pub state: MenuState,
    /// Id of the panel that was shown or hidden.
    pub panel: String,
    /// Completion of the slide; `None` when the toggle skipped animation.
    pub slide: Option<SlideHandle>,
}

/// Current state of a section. A title without the expanded marker counts as
/// collapsed.
pub fn menu_state<D: Dom + ?Sized>(
    dom: &D,
    config: &PanelConfig,
    section: &str,
) -> Result<MenuState, DomError> {
    if dom.has_class(section, &config.expanded_class)? {
        Ok(MenuState::Expanded)
    } else {
        Ok(MenuState::Collapsed)
    }
}

/// Flip a section between expanded and collapsed.
///
/// The panel is shown or hidden instantly with `skip_animation`, otherwise it
/// slides. Fails before touching anything if the section or its panel is
/// missing. `config` is expected to pass [`PanelConfig::validate`]; with a
/// shared marker class the section cannot hold exactly one marker.
pub fn toggle_menu<D: Dom + ?Sized>(
    dom: &mut D,
    config: &PanelConfig,
    section: &str,
    skip_animation: bool,
) -> Result<Toggled, DomError> {
    let panel = dom.next_sibling(section)?;
    let state = menu_state(&*dom, config, section)?.toggled();
    debug!("menu {section} -> {state:?} (animated: {})", !skip_animation);

    let slide = match state {
        MenuState::Collapsed => {
            dom.remove_class(section, &config.expanded_class)?;
            dom.add_class(section, &config.collapsed_class)?;
            if skip_animation {
                dom.hide(&panel)?;
                None
            } else {
                Some(dom.slide_up(&panel, config.slide())?)
            }
        }
        MenuState::Expanded => {
            dom.remove_class(section, &config.collapsed_class)?;
            dom.add_class(section, &config.expanded_class)?;
            if skip_animation {
                dom.show(&panel)?;
                None
            } else {
                Some(dom.slide_down(&panel, config.slide())?)
            }
        }
    };

    Ok(Toggled { state, panel, slide })
}

/// Page-load pass over every menu title under the menu bar.
///
/// Each title ends up with exactly one marker: titles with the expanded marker
/// stay expanded, all others become collapsed. Panels are synced instantly.
/// Returns the sections in document order with their state. Every title's
/// panel is resolved first, so a missing panel fails before anything changes.
pub fn init_menus<D: Dom + ?Sized>(
    dom: &mut D,
    config: &PanelConfig,
) -> Result<Vec<(String, MenuState)>, DomError> {
    let titles = dom.select_class(&config.menu_bar_id, &config.menu_title_class)?;
    let pairs = titles
        .into_iter()
        .map(|title| {
            let panel = dom.next_sibling(&title)?;
            Ok((title, panel))
        })
        .collect::<Result<Vec<_>, DomError>>()?;
    let mut sections = Vec::with_capacity(pairs.len());

    for (title, panel) in pairs {
        let state = menu_state(&*dom, config, &title)?;
        match state {
            MenuState::Expanded => {
                dom.remove_class(&title, &config.collapsed_class)?;
                dom.show(&panel)?;
            }
            MenuState::Collapsed => {
                dom.add_class(&title, &config.collapsed_class)?;
                dom.hide(&panel)?;
            }
        }
        sections.push((title, state));
    }

    debug!("initialised {} menu section(s)", sections.len());
    Ok(sections)
}
