//! The document host: an element tree plus the page state around it.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use log::{debug, trace};

use crate::animation::{AnimationState, SlideHandle};
use crate::element::{
    collect_element_ids, find_element, find_element_mut, next_sibling_id, select_class, Display,
    Element,
};
use crate::error::DomError;
use crate::focus::FocusState;
use crate::location::Location;
use crate::render;
use crate::transitions::{SlideDirection, TransitionConfig};

/// Document manipulation primitives.
///
/// Elements are addressed by id. Every query fails with
/// [`DomError::NotFound`] when the id is not in the document.
pub trait Dom {
    fn has_class(&self, id: &str, class: &str) -> Result<bool, DomError>;
    fn add_class(&mut self, id: &str, class: &str) -> Result<(), DomError>;
    fn remove_class(&mut self, id: &str, class: &str) -> Result<(), DomError>;

    /// ID of the element directly after `id` under the same parent.
    fn next_sibling(&self, id: &str) -> Result<String, DomError>;
    /// Descendants of `ancestor` carrying `class`, in document order.
    fn select_class(&self, ancestor: &str, class: &str) -> Result<Vec<String>, DomError>;

    fn is_shown(&self, id: &str) -> Result<bool, DomError>;
    /// Show instantly, interrupting any slide.
    fn show(&mut self, id: &str) -> Result<(), DomError>;
    /// Hide instantly, interrupting any slide.
    fn hide(&mut self, id: &str) -> Result<(), DomError>;
    /// Reveal with a downward slide. The element is shown from the first frame.
    fn slide_down(&mut self, id: &str, config: TransitionConfig) -> Result<SlideHandle, DomError>;
    /// Collapse with an upward slide. The element is hidden once the slide ends.
    fn slide_up(&mut self, id: &str, config: TransitionConfig) -> Result<SlideHandle, DomError>;

    /// Markup content, empty if the element holds none.
    fn html(&self, id: &str) -> Result<String, DomError>;
    fn set_html(&mut self, id: &str, markup: &str) -> Result<(), DomError>;

    fn fragment(&self) -> String;
    fn set_fragment(&mut self, value: &str);
}

/// An in-memory page.
///
/// Time is explicit: slides progress only when the clock is moved with
/// [`Page::advance`] or when [`Page::tick_at`] is given a later instant.
#[derive(Debug)]
pub struct Page {
    root: Element,
    animations: AnimationState,
    location: Location,
    focus: FocusState,
    now: Instant,
}

impl Page {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            animations: AnimationState::new(),
            location: Location::new(),
            focus: FocusState::new(),
            now: Instant::now(),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Replace the document. Slides and focus on elements that disappeared are dropped.
    pub fn set_root(&mut self, root: Element) {
        self.root = root;
        let ids: HashSet<String> = collect_element_ids(&self.root).into_iter().collect();
        self.animations.cleanup(&ids);
        self.focus.retain(&ids);
    }

    pub fn element(&self, id: &str) -> Result<&Element, DomError> {
        find_element(&self.root, id).ok_or_else(|| DomError::NotFound(id.to_string()))
    }

    fn element_mut(&mut self, id: &str) -> Result<&mut Element, DomError> {
        find_element_mut(&mut self.root, id).ok_or_else(|| DomError::NotFound(id.to_string()))
    }

    pub fn animations(&self) -> &AnimationState {
        &self.animations
    }

    pub fn animations_mut(&mut self) -> &mut AnimationState {
        &mut self.animations
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn focus_state(&self) -> &FocusState {
        &self.focus
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    /// Move the clock forward and finish any slides that elapsed.
    pub fn advance(&mut self, by: Duration) -> Vec<(String, SlideDirection)> {
        let at = self.now + by;
        self.tick_at(at)
    }

    /// Set the clock to `now` (never backwards) and finish elapsed slides.
    /// Elements whose upward slide finished are hidden.
    pub fn tick_at(&mut self, now: Instant) -> Vec<(String, SlideDirection)> {
        if now > self.now {
            self.now = now;
        }
        let finished = self.animations.tick(self.now);
        for (id, direction) in &finished {
            if *direction == SlideDirection::Up {
                if let Some(element) = find_element_mut(&mut self.root, id) {
                    element.display = Display::Hidden;
                }
            }
        }
        if !finished.is_empty() {
            trace!("{} slide(s) finished", finished.len());
        }
        finished
    }

    /// Plain-text outline of the shown part of the page.
    pub fn outline(&self) -> String {
        render::outline(&self.root, &self.animations, self.now)
    }

    fn slide(
        &mut self,
        id: &str,
        direction: SlideDirection,
        config: TransitionConfig,
    ) -> Result<SlideHandle, DomError> {
        let now = self.now;
        let element = find_element_mut(&mut self.root, id)
            .ok_or_else(|| DomError::NotFound(id.to_string()))?;
        let visible = if element.is_shown() { 1.0 } else { 0.0 };
        let handle = self.animations.start(id, direction, visible, config, now);

        match direction {
            SlideDirection::Down => element.display = Display::Shown,
            SlideDirection::Up if !self.animations.is_animating(id) => {
                element.display = Display::Hidden
            }
            SlideDirection::Up => {}
        }
        debug!("slide {direction:?} on {id} ({:?})", config.duration);
        Ok(handle)
    }
}

impl Dom for Page {
    fn has_class(&self, id: &str, class: &str) -> Result<bool, DomError> {
        Ok(self.element(id)?.has_class(class))
    }

    fn add_class(&mut self, id: &str, class: &str) -> Result<(), DomError> {
        self.element_mut(id)?.add_class(class);
        Ok(())
    }

    fn remove_class(&mut self, id: &str, class: &str) -> Result<(), DomError> {
        self.element_mut(id)?.remove_class(class);
        Ok(())
    }

    fn next_sibling(&self, id: &str) -> Result<String, DomError> {
        self.element(id)?;
        next_sibling_id(&self.root, id).ok_or_else(|| DomError::NoSibling(id.to_string()))
    }

    fn select_class(&self, ancestor: &str, class: &str) -> Result<Vec<String>, DomError> {
        Ok(select_class(self.element(ancestor)?, class))
    }

    fn is_shown(&self, id: &str) -> Result<bool, DomError> {
        Ok(self.element(id)?.is_shown())
    }

    fn show(&mut self, id: &str) -> Result<(), DomError> {
        self.element_mut(id)?.display = Display::Shown;
        self.animations.cancel(id);
        debug!("show {id}");
        Ok(())
    }

    fn hide(&mut self, id: &str) -> Result<(), DomError> {
        self.element_mut(id)?.display = Display::Hidden;
        self.animations.cancel(id);
        debug!("hide {id}");
        Ok(())
    }

    fn slide_down(&mut self, id: &str, config: TransitionConfig) -> Result<SlideHandle, DomError> {
        self.slide(id, SlideDirection::Down, config)
    }

    fn slide_up(&mut self, id: &str, config: TransitionConfig) -> Result<SlideHandle, DomError> {
        self.slide(id, SlideDirection::Up, config)
    }

    fn html(&self, id: &str) -> Result<String, DomError> {
        Ok(self
            .element(id)?
            .content
            .html()
            .map(str::to_string)
            .unwrap_or_default())
    }

    fn set_html(&mut self, id: &str, markup: &str) -> Result<(), DomError> {
        self.element_mut(id)?.set_html(markup);
        debug!("set html on {id} ({} bytes)", markup.len());
        Ok(())
    }

    fn fragment(&self) -> String {
        self.location.fragment().to_string()
    }

    fn set_fragment(&mut self, value: &str) {
        if !self.location.set_fragment(value) {
            return;
        }
        let target = self.location.fragment().to_string();
        debug!("navigated to #{target}");
        if find_element(&self.root, &target).is_some() {
            self.focus.scroll_to(&target);
            self.focus.focus(&target);
        }
    }
}
