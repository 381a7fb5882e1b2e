use std::time::Duration;

use sweeper_core::{update, Effect, ListingView, LoopState, Msg, RuleSet};
use sweeper_logging::{set_scan_tick, sweep_debug, sweep_info, sweep_warn};
use tokio::sync::mpsc;

use crate::{actions, ElementHandle, Locator, Page, PageSelectors};

pub const DEFAULT_SCAN_INTERVAL: Duration = Duration::from_millis(200);

/// Counters reported when the loop terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoopSummary {
    pub ticks: u64,
    pub removals: u64,
    pub failed_removals: u64,
}

/// Single-owner event loop over control lines and periodic scans.
///
/// The rule set lives inside the loop and is only reached through
/// [`update`], so control lines and scans never interleave on it.
pub struct FilterLoop<P> {
    page: P,
    selectors: PageSelectors,
    scan_interval: Duration,
    state: LoopState,
    summary: LoopSummary,
}

impl<P: Page> FilterLoop<P> {
    pub fn new(page: P, rules: RuleSet) -> Self {
        Self {
            page,
            selectors: PageSelectors::default(),
            scan_interval: DEFAULT_SCAN_INTERVAL,
            state: LoopState::new(rules),
            summary: LoopSummary::default(),
        }
    }

    pub fn with_selectors(mut self, selectors: PageSelectors) -> Self {
        self.selectors = selectors;
        self
    }

    pub fn with_scan_interval(mut self, interval: Duration) -> Self {
        self.scan_interval = interval;
        self
    }

    /// Runs until a quit line arrives or the control channel closes.
    ///
    /// The channel is polled before the timer on every iteration, so a line
    /// that is already queued always wins over a scan that is due. The
    /// timer restarts each iteration. A scan that has started runs to the
    /// end before the next line is looked at.
    pub async fn run(mut self, mut control_rx: mpsc::Receiver<String>) -> LoopSummary {
        sweep_info!(
            "Filter loop started, scanning every {:?}",
            self.scan_interval
        );
        while !self.state.is_terminated() {
            tokio::select! {
                biased;
                line = control_rx.recv() => {
                    let msg = match line {
                        Some(line) => {
                            sweep_debug!("Control line {:?}", line);
                            Msg::ControlLine(line)
                        }
                        None => Msg::InputClosed,
                    };
                    let effects = self.dispatch(msg);
                    self.execute(effects).await;
                }
                () = tokio::time::sleep(self.scan_interval) => self.scan().await,
            }
        }
        sweep_info!(
            "Filter loop stopped after {} scans, {} removed, {} failed removals",
            self.summary.ticks,
            self.summary.removals,
            self.summary.failed_removals
        );
        self.summary
    }

    fn dispatch(&mut self, msg: Msg) -> Vec<Effect> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        effects
    }

    async fn scan(&mut self) {
        self.summary.ticks += 1;
        set_scan_tick(self.summary.ticks);

        let listings = match self
            .page
            .find_elements(Locator::ClassName(&self.selectors.listing))
            .await
        {
            Ok(listings) => listings,
            Err(err) => {
                sweep_debug!("Listing lookup failed, treating as empty: {}", err);
                return;
            }
        };

        for element in listings {
            let Some(listing) = self.read_listing(&element).await else {
                continue;
            };
            let effects = self.dispatch(Msg::ListingScanned(listing));
            self.execute(effects).await;
        }
    }

    /// Returns `None` for listings without an id; those are still rendering.
    async fn read_listing(&self, element: &ElementHandle) -> Option<ListingView> {
        let id = self
            .page
            .attribute(element, "id")
            .await
            .ok()
            .flatten()
            .filter(|id| !id.is_empty())?;

        let disabled = self.state.rules().remove_disabled()
            && self
                .page
                .find_child(element, Locator::ClassName(&self.selectors.disabled_marker))
                .await
                .is_ok();

        Some(ListingView {
            id,
            disabled,
            location: self.field_text(element, &self.selectors.location).await,
            description: self.field_text(element, &self.selectors.description).await,
            title: self.field_text(element, &self.selectors.title).await,
        })
    }

    async fn field_text(&self, listing: &ElementHandle, class: &str) -> Option<String> {
        let field = self
            .page
            .find_child(listing, Locator::ClassName(class))
            .await
            .ok()?;
        self.page.text(&field).await.ok()
    }

    async fn execute(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Hide { id } => {
                    if let Err(err) = actions::hide(&self.page, &self.selectors, &id).await {
                        sweep_debug!("Hide {} failed: {}", id, err);
                    }
                }
                Effect::Remove { id, reason } => {
                    sweep_info!("Removing {}", reason);
                    match actions::remove(&self.page, &id).await {
                        Ok(()) => self.summary.removals += 1,
                        Err(err) => {
                            self.summary.failed_removals += 1;
                            sweep_warn!("Failed to remove {}: {}", id, err);
                        }
                    }
                }
            }
        }
    }
}
