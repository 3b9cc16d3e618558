use std::fmt::Write;
use std::time::Instant;

use crate::animation::AnimationState;
use crate::element::{Content, Element};

/// Render the shown part of a tree as an indented outline.
///
/// One line per element: `#id.class.class "markup"`, with the visible height
/// appended while the element is sliding, e.g. `[slide 2/4]`. Hidden elements
/// and everything under them are skipped.
pub fn outline(root: &Element, animations: &AnimationState, now: Instant) -> String {
    let mut out = String::new();
    write_element(&mut out, root, animations, now, 0);
    out
}

fn write_element(
    out: &mut String,
    element: &Element,
    animations: &AnimationState,
    now: Instant,
    depth: usize,
) {
    if !element.is_shown() {
        return;
    }

    let _ = write!(out, "{:indent$}#{}", "", element.id, indent = depth * 2);
    for class in &element.classes {
        let _ = write!(out, ".{class}");
    }
    if let Content::Html(markup) = &element.content {
        let _ = write!(out, " {markup:?}");
    }
    if let Some(rows) = animations.visible_rows(&element.id, element.height, now) {
        let _ = write!(out, " [slide {rows}/{}]", element.height);
    }
    out.push('\n');

    for child in element.content.children() {
        write_element(out, child, animations, now, depth + 1);
    }
}
