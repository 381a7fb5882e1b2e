/// What one scan could read from a listing element.
///
/// A `None` text means the field's element could not be found this tick;
/// the matching check is skipped for this listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingView {
    pub id: String,
    pub disabled: bool,
    pub location: Option<String>,
    pub description: Option<String>,
    pub title: Option<String>,
}

impl ListingView {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_location(mut self, text: impl Into<String>) -> Self {
        self.location = Some(text.into());
        self
    }

    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn with_title(mut self, text: impl Into<String>) -> Self {
        self.title = Some(text.into());
        self
    }
}
