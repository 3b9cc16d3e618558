#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    None,
    /// Raw markup. Stored and reported verbatim, never parsed or escaped.
    Html(String),
    Children(Vec<super::Element>),
}

impl Content {
    pub fn html(&self) -> Option<&str> {
        match self {
            Self::Html(markup) => Some(markup),
            _ => None,
        }
    }

    pub fn children(&self) -> &[super::Element] {
        match self {
            Self::Children(children) => children,
            _ => &[],
        }
    }
}
