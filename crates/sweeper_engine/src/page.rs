use async_trait::async_trait;
use serde_json::Value;

use crate::{DriverError, ElementHandle, Locator};

/// The slice of a browser automation backend the filter loop relies on.
///
/// Calls are made one at a time from the loop; a backend does not need to
/// support concurrent use.
#[async_trait]
pub trait Page: Send + Sync {
    async fn find_elements(&self, locator: Locator<'_>) -> Result<Vec<ElementHandle>, DriverError>;

    async fn find_element(&self, locator: Locator<'_>) -> Result<ElementHandle, DriverError>;

    async fn find_child(
        &self,
        parent: &ElementHandle,
        locator: Locator<'_>,
    ) -> Result<ElementHandle, DriverError>;

    /// Returns `None` when the element has no such attribute.
    async fn attribute(
        &self,
        element: &ElementHandle,
        name: &str,
    ) -> Result<Option<String>, DriverError>;

    async fn text(&self, element: &ElementHandle) -> Result<String, DriverError>;

    async fn click(&self, element: &ElementHandle) -> Result<(), DriverError>;

    async fn execute_script(&self, script: &str, args: Vec<Value>) -> Result<Value, DriverError>;
}

/// Class and tag markers used to pick listings and their fields off the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSelectors {
    pub listing: String,
    pub disabled_marker: String,
    pub location: String,
    pub description: String,
    pub title: String,
    pub dismiss: String,
    pub dismiss_action_tag: String,
}

impl Default for PageSelectors {
    fn default() -> Self {
        Self {
            listing: "jobs-search-results__list-item".to_string(),
            disabled_marker: "job-card-list--is-dismissed".to_string(),
            location: "job-card-container__metadata-item".to_string(),
            description: "job-card-container__primary-description".to_string(),
            title: "job-card-list__title".to_string(),
            dismiss: "job-card-list__dismiss".to_string(),
            dismiss_action_tag: "button".to_string(),
        }
    }
}
