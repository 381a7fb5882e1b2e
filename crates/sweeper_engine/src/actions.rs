use serde_json::Value;

use crate::{DriverError, Locator, Page, PageSelectors};

/// Page-side removal. Throws when the id is no longer in the document.
pub const REMOVE_SCRIPT: &str = "return document.getElementById(arguments[0]).remove();";

/// Clicks the dismiss control of the listing with `id`.
pub async fn hide<P>(page: &P, selectors: &PageSelectors, id: &str) -> Result<(), DriverError>
where
    P: Page + ?Sized,
{
    let listing = page.find_element(Locator::Id(id)).await?;
    let dismiss = page
        .find_child(&listing, Locator::ClassName(&selectors.dismiss))
        .await?;
    let action = page
        .find_child(&dismiss, Locator::TagName(&selectors.dismiss_action_tag))
        .await?;
    page.click(&action).await
}

/// Removes the listing with `id` from the document.
///
/// Safe to repeat: once the element is gone the script fails and the
/// error is returned, nothing else happens.
pub async fn remove<P>(page: &P, id: &str) -> Result<(), DriverError>
where
    P: Page + ?Sized,
{
    page.execute_script(REMOVE_SCRIPT, vec![Value::String(id.to_owned())])
        .await
        .map(|_| ())
}
