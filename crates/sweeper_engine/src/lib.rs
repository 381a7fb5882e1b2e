//! Sweeper engine: page access, control input and the filter loop.
mod actions;
mod control;
mod filter_loop;
mod page;
mod types;
mod webdriver;

pub use actions::{hide, remove, REMOVE_SCRIPT};
pub use control::spawn_control_reader;
pub use filter_loop::{FilterLoop, LoopSummary, DEFAULT_SCAN_INTERVAL};
pub use page::{Page, PageSelectors};
pub use types::{DriverError, ElementHandle, Locator};
pub use webdriver::{WebDriverPage, WebDriverSettings};
