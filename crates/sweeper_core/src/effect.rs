use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Activate the listing's dismiss control.
    Hide { id: String },
    /// Drop the listing's element from the page.
    Remove { id: String, reason: RemovalReason },
}

/// Which check asked for a removal, with the text that matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalReason {
    Disabled,
    Location(String),
    Company(String),
    Title(String),
}

impl fmt::Display for RemovalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemovalReason::Disabled => write!(f, "disabled element"),
            RemovalReason::Location(text) => write!(f, "location {text}"),
            RemovalReason::Company(text) => write!(f, "company {text}"),
            RemovalReason::Title(text) => write!(f, "title {text}"),
        }
    }
}
