mod content;
mod node;

pub use content::Content;
pub use node::{Display, Element};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.content.children() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// ID of the element directly following `id` under the same parent.
pub fn next_sibling_id(root: &Element, id: &str) -> Option<String> {
    let children = root.content.children();
    if let Some(pos) = children.iter().position(|c| c.id == id) {
        return children.get(pos + 1).map(|c| c.id.clone());
    }

    children.iter().find_map(|child| next_sibling_id(child, id))
}

/// IDs of all descendants of `ancestor` carrying `class`, in document order.
/// The ancestor itself is not included.
pub fn select_class(ancestor: &Element, class: &str) -> Vec<String> {
    let mut ids = Vec::new();
    for child in ancestor.content.children() {
        collect_with_class(child, class, &mut ids);
    }
    ids
}

fn collect_with_class(element: &Element, class: &str, ids: &mut Vec<String>) {
    if element.has_class(class) {
        ids.push(element.id.clone());
    }
    for child in element.content.children() {
        collect_with_class(child, class, ids);
    }
}

/// Collect every element ID in the tree.
pub fn collect_element_ids(root: &Element) -> Vec<String> {
    let mut ids = vec![root.id.clone()];
    for child in root.content.children() {
        ids.extend(collect_element_ids(child));
    }
    ids
}
