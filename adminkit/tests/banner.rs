use adminkit::{
    BannerRole, BannerState, PanelConfig, banner_state, clear_banners, set_banner, set_error,
    set_info, set_warning,
};
use pagedom::{Dom, DomError, Element, Page, SlideHandle, TransitionConfig};

fn page() -> Page {
    Page::new(
        Element::col()
            .id("page")
            .child(Element::html("").id("info_msg").hidden())
            .child(Element::html("previous warning").id("warning_msg").hidden())
            .child(Element::html("").id("error_msg").hidden()),
    )
}

fn state(page: &Page, role: BannerRole) -> BannerState {
    banner_state(page, &PanelConfig::default(), role).unwrap()
}

/// Forwards to a page and records every fragment write.
struct RecordingDom {
    page: Page,
    fragments: Vec<String>,
}

impl Dom for RecordingDom {
    fn has_class(&self, id: &str, class: &str) -> Result<bool, DomError> {
        self.page.has_class(id, class)
    }
    fn add_class(&mut self, id: &str, class: &str) -> Result<(), DomError> {
        self.page.add_class(id, class)
    }
    fn remove_class(&mut self, id: &str, class: &str) -> Result<(), DomError> {
        self.page.remove_class(id, class)
    }
    fn next_sibling(&self, id: &str) -> Result<String, DomError> {
        self.page.next_sibling(id)
    }
    fn select_class(&self, ancestor: &str, class: &str) -> Result<Vec<String>, DomError> {
        self.page.select_class(ancestor, class)
    }
    fn is_shown(&self, id: &str) -> Result<bool, DomError> {
        self.page.is_shown(id)
    }
    fn show(&mut self, id: &str) -> Result<(), DomError> {
        self.page.show(id)
    }
    fn hide(&mut self, id: &str) -> Result<(), DomError> {
        self.page.hide(id)
    }
    fn slide_down(&mut self, id: &str, config: TransitionConfig) -> Result<SlideHandle, DomError> {
        self.page.slide_down(id, config)
    }
    fn slide_up(&mut self, id: &str, config: TransitionConfig) -> Result<SlideHandle, DomError> {
        self.page.slide_up(id, config)
    }
    fn html(&self, id: &str) -> Result<String, DomError> {
        self.page.html(id)
    }
    fn set_html(&mut self, id: &str, markup: &str) -> Result<(), DomError> {
        self.page.set_html(id, markup)
    }
    fn fragment(&self) -> String {
        self.page.fragment()
    }
    fn set_fragment(&mut self, value: &str) {
        self.fragments.push(value.to_string());
        self.page.set_fragment(value);
    }
}

// ============================================================================
// Show / Hide
// ============================================================================

#[test]
fn test_message_is_stored_verbatim_and_shown() {
    let mut page = page();
    set_banner(&mut page, &PanelConfig::default(), BannerRole::Info, "<b>x</b>", false).unwrap();
    assert_eq!(
        state(&page, BannerRole::Info),
        BannerState {
            visible: true,
            content: "<b>x</b>".into()
        }
    );
    // No focus requested, so no navigation.
    assert_eq!(page.location().navigations(), 0);
}

#[test]
fn test_empty_message_hides_and_keeps_content() {
    let mut page = page();
    let config = PanelConfig::default();
    set_warning(&mut page, &config, "disk almost full", false).unwrap();
    set_warning(&mut page, &config, "", false).unwrap();

    let after_first = state(&page, BannerRole::Warning);
    assert!(!after_first.visible);
    assert_eq!(after_first.content, "disk almost full");

    set_warning(&mut page, &config, "", true).unwrap();
    assert_eq!(state(&page, BannerRole::Warning), after_first);
    // Hiding never navigates, even with focus requested.
    assert_eq!(page.location().navigations(), 0);
}

#[test]
fn test_hiding_never_shown_banner_keeps_initial_content() {
    let mut page = page();
    set_warning(&mut page, &PanelConfig::default(), "", false).unwrap();
    assert_eq!(state(&page, BannerRole::Warning).content, "previous warning");
}

#[test]
fn test_banners_are_independent() {
    let mut page = page();
    let config = PanelConfig::default();
    set_error(&mut page, &config, "boom", false).unwrap();
    let warning = state(&page, BannerRole::Warning);

    set_info(&mut page, &config, "hello", false).unwrap();

    assert_eq!(state(&page, BannerRole::Warning), warning);
    assert_eq!(
        state(&page, BannerRole::Error),
        BannerState {
            visible: true,
            content: "boom".into()
        }
    );
}

#[test]
fn test_clear_banners_hides_all() {
    let mut page = page();
    let config = PanelConfig::default();
    for role in BannerRole::ALL {
        set_banner(&mut page, &config, role, role.name(), false).unwrap();
    }
    clear_banners(&mut page, &config).unwrap();

    for role in BannerRole::ALL {
        let banner = state(&page, role);
        assert!(!banner.visible, "{role} still visible");
        assert_eq!(banner.content, role.name());
    }
}

// ============================================================================
// Focus
// ============================================================================

#[test]
fn test_focus_moves_fragment_to_banner() {
    let mut page = page();
    set_error(&mut page, &PanelConfig::default(), "boom", true).unwrap();
    assert_eq!(page.fragment(), "error_msg");
    assert_eq!(page.focus_state().focused(), Some("error_msg"));
    assert_eq!(page.focus_state().scrolled_to(), Some("error_msg"));
}

#[test]
fn test_focus_refires_when_fragment_already_at_banner() {
    let mut page = page();
    let config = PanelConfig::default();
    page.set_fragment("error_msg");
    let scrolls = page.focus_state().scrolls();

    set_error(&mut page, &config, "boom", true).unwrap();
    set_error(&mut page, &config, "boom again", true).unwrap();

    assert_eq!(page.fragment(), "error_msg");
    assert_eq!(page.focus_state().scrolls(), scrolls + 2);
}

#[test]
fn test_focus_clears_then_sets_fragment() {
    let mut dom = RecordingDom {
        page: page(),
        fragments: Vec::new(),
    };
    set_info(&mut dom, &PanelConfig::default(), "hi", true).unwrap();
    assert_eq!(dom.fragments, vec!["".to_string(), "info_msg".to_string()]);
}

#[test]
fn test_focus_follows_configured_id() {
    let config = PanelConfig::default().banner(BannerRole::Info, "notice");
    let mut page = Page::new(Element::col().child(Element::html("").id("notice").hidden()));
    set_info(&mut page, &config, "hi", true).unwrap();
    assert_eq!(page.fragment(), "notice");
    assert!(page.is_shown("notice").unwrap());
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_missing_banner_element() {
    let mut page = Page::new(Element::col().id("empty"));
    let err = set_info(&mut page, &PanelConfig::default(), "hi", false).unwrap_err();
    assert_eq!(err, DomError::NotFound("info_msg".into()));
}

#[test]
fn test_role_names() {
    assert_eq!(BannerRole::Info.to_string(), "info");
    assert_eq!(BannerRole::Warning.to_string(), "warning");
    assert_eq!(BannerRole::Error.to_string(), "error");
}
