//! Inline status banners.
//!
//! A page has one banner per [`BannerRole`]. Setting a message writes it into
//! the banner as raw markup and shows it; an empty message hides the banner and
//! leaves its last content in place.

use std::fmt;

use log::debug;
use pagedom::{Dom, DomError};

use crate::config::PanelConfig;

/// Severity of a status banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BannerRole {
    Info,
    Warning,
    Error,
}

impl BannerRole {
    pub const ALL: [BannerRole; 3] = [BannerRole::Info, BannerRole::Warning, BannerRole::Error];

    pub fn name(self) -> &'static str {
        match self {
            BannerRole::Info => "info",
            BannerRole::Warning => "warning",
            BannerRole::Error => "error",
        }
    }
}

impl fmt::Display for BannerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a banner currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerState {
    pub visible: bool,
    /// Last markup written, kept while hidden.
    pub content: String,
}

/// Show `message` in the banner for `role`, or hide the banner if it is empty.
///
/// `message` is inserted verbatim; escape untrusted text before calling.
/// With `focus`, the page fragment is cleared and then pointed at the banner,
/// so the host scrolls to and focuses it even when the fragment already named
/// the banner.
pub fn set_banner<D: Dom + ?Sized>(
    dom: &mut D,
    config: &PanelConfig,
    role: BannerRole,
    message: &str,
    focus: bool,
) -> Result<(), DomError> {
    let target = config.banner_id(role);

    if message.is_empty() {
        debug!("hiding {role} banner #{target}");
        return dom.hide(target);
    }

    debug!("showing {role} banner #{target}");
    dom.set_html(target, message)?;
    dom.show(target)?;

    if focus {
        dom.set_fragment("");
        dom.set_fragment(target);
    }
    Ok(())
}

pub fn set_info<D: Dom + ?Sized>(
    dom: &mut D,
    config: &PanelConfig,
    message: &str,
    focus: bool,
) -> Result<(), DomError> {
    set_banner(dom, config, BannerRole::Info, message, focus)
}

pub fn set_warning<D: Dom + ?Sized>(
    dom: &mut D,
    config: &PanelConfig,
    message: &str,
    focus: bool,
) -> Result<(), DomError> {
    set_banner(dom, config, BannerRole::Warning, message, focus)
}

pub fn set_error<D: Dom + ?Sized>(
    dom: &mut D,
    config: &PanelConfig,
    message: &str,
    focus: bool,
) -> Result<(), DomError> {
    set_banner(dom, config, BannerRole::Error, message, focus)
}

/// Hide all three banners.
pub fn clear_banners<D: Dom + ?Sized>(dom: &mut D, config: &PanelConfig) -> Result<(), DomError> {
    for role in BannerRole::ALL {
        set_banner(dom, config, role, "", false)?;
    }
    Ok(())
}

pub fn banner_state<D: Dom + ?Sized>(
    dom: &D,
    config: &PanelConfig,
    role: BannerRole,
) -> Result<BannerState, DomError> {
    let target = config.banner_id(role);
    Ok(BannerState {
        visible: dom.is_shown(target)?,
        content: dom.html(target)?,
    })
}
