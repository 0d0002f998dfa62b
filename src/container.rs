//! The host side of rendering: named containers that accept appended markup.

use crate::error::PageError;

/// A mutable target that accepts appended text or markup
pub(crate) trait Container {
    fn append(&mut self, markup: &str);
    fn content(&self) -> &str;
}

/// Looks containers up by identifier
pub(crate) trait Host {
    fn lookup(&mut self, id: &str) -> Result<&mut dyn Container, PageError>;
}

/// Page element that captures everything appended to it
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub(crate) struct Element {
    pub id: String,
    content: String,
}

impl Element {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: String::new(),
        }
    }
}

impl Container for Element {
    fn append(&mut self, markup: &str) {
        tracing::debug!("#{} <- {:?}", self.id, markup);
        self.content.push_str(markup);
    }

    fn content(&self) -> &str {
        &self.content
    }
}

/// In-memory document, elements kept in insertion order
#[derive(Default, Debug)]
pub(crate) struct Page {
    elements: Vec<Element>,
}

impl Page {
    pub fn with_targets<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            elements: ids.into_iter().map(Element::new).collect(),
        }
    }

    pub fn to_html(&self) -> String {
        self.elements
            .iter()
            .map(|element| format!("<div id=\"{}\">{}</div>", element.id, element.content()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Host for Page {
    fn lookup(&mut self, id: &str) -> Result<&mut dyn Container, PageError> {
        match self.elements.iter_mut().find(|element| element.id == id) {
            Some(element) => Ok(element),
            None => Err(PageError::MissingContainer(id.to_string())),
        }
    }
}
