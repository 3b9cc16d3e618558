use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Whether an element takes part in the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Display {
    #[default]
    Shown,
    Hidden,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,
    /// Class list in insertion order, without duplicates.
    pub classes: Vec<String>,

    pub content: Content,
    pub display: Display,

    /// Rows the element occupies when fully shown. Slides interpolate towards it.
    pub height: u16,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            classes: Vec::new(),
            content: Content::None,
            display: Display::Shown,
            height: 1,
        }
    }
}

impl Element {
    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            ..Default::default()
        }
    }

    /// Create an element holding raw markup.
    pub fn html(markup: impl Into<String>) -> Self {
        Self {
            id: generate_id("html"),
            content: Content::Html(markup.into()),
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class: String = class.into();
        self.add_class(&class);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.display = Display::Hidden;
        self
    }

    pub fn height(mut self, height: u16) -> Self {
        self.height = height;
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    // Class list

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Returns true if the class was not already present.
    pub fn add_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            return false;
        }
        self.classes.push(class.to_string());
        true
    }

    /// Returns true if the class was present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }

    pub fn is_shown(&self) -> bool {
        self.display == Display::Shown
    }

    /// Replace the element's content with markup. Children are dropped.
    pub fn set_html(&mut self, markup: impl Into<String>) {
        self.content = Content::Html(markup.into());
    }
}
