use crate::{ControlCommand, Effect, ListingView, LoopState, Msg, RemovalReason, RuleSet};

/// Pure update function: applies a message to state and returns any effects.
///
/// Control lines and channel closure only touch the state. Scanned
/// listings never touch it and only produce effects.
pub fn update(mut state: LoopState, msg: Msg) -> (LoopState, Vec<Effect>) {
    if state.is_terminated() {
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::ControlLine(line) => {
            apply_control(&mut state, &line);
            Vec::new()
        }
        Msg::InputClosed => {
            state.terminate();
            Vec::new()
        }
        Msg::ListingScanned(listing) => plan_listing(state.rules(), listing),
    };

    (state, effects)
}

fn apply_control(state: &mut LoopState, line: &str) {
    match ControlCommand::parse(line) {
        Some(ControlCommand::Quit) => state.terminate(),
        Some(ControlCommand::AddLocation(pattern)) => state.rules_mut().append_location(pattern),
        Some(ControlCommand::AddCompany(pattern)) => state.rules_mut().append_company(pattern),
        Some(ControlCommand::AddTitle(pattern)) => state.rules_mut().append_title(pattern),
        Some(ControlCommand::Unrecognized(_)) | None => {}
    }
}

// The four checks are independent: a listing already scheduled for removal
// is still run through the remaining ones.
fn plan_listing(rules: &RuleSet, listing: ListingView) -> Vec<Effect> {
    let ListingView {
        id,
        disabled,
        location,
        description,
        title,
    } = listing;
    let mut effects = Vec::new();

    if rules.remove_disabled() && disabled {
        effects.push(Effect::Remove {
            id: id.clone(),
            reason: RemovalReason::Disabled,
        });
    }

    if let Some(location) = location.filter(|text| rules.matches_location(text)) {
        push_hide_and_remove(&mut effects, &id, RemovalReason::Location(location));
    }

    // Descriptions are tested against the location patterns, not the
    // company patterns. Kept as the tool has always behaved.
    if let Some(company) = description.filter(|text| rules.matches_location(text)) {
        push_hide_and_remove(&mut effects, &id, RemovalReason::Company(company));
    }

    if let Some(title) = title.filter(|text| rules.matches_title(text)) {
        push_hide_and_remove(&mut effects, &id, RemovalReason::Title(title));
    }

    effects
}

fn push_hide_and_remove(effects: &mut Vec<Effect>, id: &str, reason: RemovalReason) {
    effects.push(Effect::Hide { id: id.to_owned() });
    effects.push(Effect::Remove {
        id: id.to_owned(),
        reason,
    });
}
