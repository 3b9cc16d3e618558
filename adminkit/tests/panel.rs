use std::fs;
use std::time::Duration;

use adminkit::{AdminPanel, BannerRole, ConfigError, MenuState, PanelConfig};
use pagedom::{Dom, Easing, Element, Page};

fn root(config: &PanelConfig) -> Element {
    Element::col()
        .id("page")
        .child(
            Element::col()
                .id(config.menu_bar_id.as_str())
                .child(
                    Element::html("Reports")
                        .id("reports")
                        .class(config.menu_title_class.as_str()),
                )
                .child(Element::col().id("reports-items")),
        )
        .child(Element::html("").id(config.banner_id(BannerRole::Info)).hidden())
        .child(Element::html("").id(config.banner_id(BannerRole::Warning)).hidden())
        .child(Element::html("").id(config.banner_id(BannerRole::Error)).hidden())
}

#[test]
fn test_panel_drives_menus_and_banners() {
    let config = PanelConfig::default();
    let mut panel = AdminPanel::new(Page::new(root(&config)), config).unwrap();

    panel.init_menus().unwrap();
    assert_eq!(panel.menu_state("reports").unwrap(), MenuState::Collapsed);
    assert!(!panel.dom().is_shown("reports-items").unwrap());

    let toggled = panel.toggle_menu("reports", true).unwrap();
    assert_eq!(toggled.state, MenuState::Expanded);
    assert!(panel.dom().is_shown("reports-items").unwrap());

    panel.set_warning("careful", true).unwrap();
    let warning = panel.banner_state(BannerRole::Warning).unwrap();
    assert!(warning.visible);
    assert_eq!(panel.dom().fragment(), "warning_msg");

    panel.clear_banners().unwrap();
    assert!(!panel.banner_state(BannerRole::Warning).unwrap().visible);
}

#[test]
fn test_panel_uses_custom_classes_and_timing() {
    let config = PanelConfig::default()
        .menu_classes("open", "shut")
        .menu_bar("nav", "nav-title")
        .slide_duration(Duration::from_millis(50))
        .easing(Easing::Linear);
    let mut panel = AdminPanel::new(Page::new(root(&config)), config).unwrap();

    panel.init_menus().unwrap();
    assert!(panel.dom().has_class("reports", "shut").unwrap());

    panel.toggle_menu("reports", false).unwrap();
    assert!(panel.dom().has_class("reports", "open").unwrap());
    assert!(panel.dom().animations().is_animating("reports-items"));

    panel.dom_mut().advance(Duration::from_millis(50));
    assert!(!panel.dom().animations().has_active_transitions());

    let page = panel.into_inner();
    assert!(page.is_shown("reports-items").unwrap());
}

#[test]
fn test_panel_rejects_shared_marker_class() {
    let config = PanelConfig::default().menu_classes("x", "x");
    let err = AdminPanel::new(Page::new(root(&config)), config).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_panel_rejects_empty_menu_bar() {
    let config = PanelConfig::default().menu_bar("", "app-menu-title");
    let err = AdminPanel::new(Page::new(Element::col().id("page")), config).unwrap_err();
    assert_eq!(err.to_string(), "invalid config: menu bar id is empty");
}

#[test]
fn test_load_config_file() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let path = dir.path().join("panel.json");
    fs::write(&path, r#"{"info_id": "notice", "slide_millis": 120}"#).unwrap();

    let config = PanelConfig::load(&path).unwrap();
    assert_eq!(config.banner_id(BannerRole::Info), "notice");
    assert_eq!(config.slide().duration, Duration::from_millis(120));
    assert_eq!(config.expanded_class, "app-menu-show");
}

#[test]
fn test_load_missing_config_file() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let err = PanelConfig::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
