use std::fmt;

use thiserror::Error;

/// Opaque reference to an element, valid only for the backend that issued it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementHandle(String);

impl ElementHandle {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locator<'a> {
    Id(&'a str),
    ClassName(&'a str),
    TagName(&'a str),
}

impl fmt::Display for Locator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Id(id) => write!(f, "id={id}"),
            Locator::ClassName(class) => write!(f, "class={class}"),
            Locator::TagName(tag) => write!(f, "tag={tag}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    /// The element is not on the page (not rendered yet, or already gone).
    #[error("no such element: {0}")]
    NoSuchElement(String),
    #[error("script failed: {message}")]
    Script { message: String },
    #[error("webdriver error {error}: {message}")]
    Protocol { error: String, message: String },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl DriverError {
    pub fn is_lookup_miss(&self) -> bool {
        matches!(self, DriverError::NoSuchElement(_))
    }
}
