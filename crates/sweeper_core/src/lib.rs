//! Sweeper core: pure rule store and filter state machine.
mod control;
mod effect;
mod listing;
mod msg;
mod rules;
mod state;
mod update;

pub use control::ControlCommand;
pub use effect::{Effect, RemovalReason};
pub use listing::ListingView;
pub use msg::Msg;
pub use rules::RuleSet;
pub use state::{LoopPhase, LoopState};
pub use update::update;
