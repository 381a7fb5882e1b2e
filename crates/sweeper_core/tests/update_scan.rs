use std::sync::Once;

use pretty_assertions::assert_eq;
use sweeper_core::{update, Effect, ListingView, LoopState, Msg, RemovalReason, RuleSet};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(sweeper_logging::initialize_for_tests);
}

fn rules(companies: &[&str], titles: &[&str], locations: &[&str], remove_disabled: bool) -> RuleSet {
    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
    RuleSet::new(
        owned(companies),
        owned(titles),
        owned(locations),
        remove_disabled,
    )
}

fn scan(rules: RuleSet, listing: ListingView) -> Vec<Effect> {
    let state = LoopState::new(rules);
    let (next, effects) = update(state.clone(), Msg::ListingScanned(listing));
    assert_eq!(next, state, "scanning must not touch the rules");
    effects
}

fn hide(id: &str) -> Effect {
    Effect::Hide { id: id.to_string() }
}

fn remove(id: &str, reason: RemovalReason) -> Effect {
    Effect::Remove {
        id: id.to_string(),
        reason,
    }
}

#[test]
fn matching_location_hides_then_removes_once() {
    init_logging();
    let listing = ListingView::new("job-1").with_location("Remote, EU");

    let effects = scan(rules(&[], &[], &["Remote", "EU"], false), listing);

    assert_eq!(
        effects,
        vec![
            hide("job-1"),
            remove("job-1", RemovalReason::Location("Remote, EU".into())),
        ]
    );
}

#[test]
fn matching_title_hides_then_removes() {
    init_logging();
    let listing = ListingView::new("job-2")
        .with_location("Berlin")
        .with_title("Junior Developer");

    let effects = scan(rules(&[], &["Junior"], &["Paris"], false), listing);

    assert_eq!(
        effects,
        vec![
            hide("job-2"),
            remove("job-2", RemovalReason::Title("Junior Developer".into())),
        ]
    );
}

#[test]
fn company_check_uses_location_patterns() {
    init_logging();
    let listing = ListingView::new("job-3").with_description("Remote Inc");

    let effects = scan(rules(&[], &[], &["Remote"], false), listing);

    assert_eq!(
        effects,
        vec![
            hide("job-3"),
            remove("job-3", RemovalReason::Company("Remote Inc".into())),
        ]
    );
}

#[test]
fn company_patterns_alone_do_not_remove() {
    init_logging();
    let listing = ListingView::new("job-4").with_description("Acme Corp");

    let effects = scan(rules(&["Acme"], &[], &[], false), listing);

    assert!(effects.is_empty());
}

#[test]
fn disabled_listing_removed_once_when_flag_set() {
    init_logging();
    let listing = ListingView::new("job-5")
        .with_disabled(true)
        .with_location("Berlin")
        .with_description("Acme")
        .with_title("Engineer");

    let effects = scan(rules(&[], &["Manager"], &["Paris"], true), listing);

    assert_eq!(effects, vec![remove("job-5", RemovalReason::Disabled)]);
}

#[test]
fn disabled_listing_kept_when_flag_unset() {
    init_logging();
    let listing = ListingView::new("job-6").with_disabled(true);

    assert!(scan(rules(&[], &[], &[], false), listing).is_empty());
}

#[test]
fn checks_run_independently_of_each_other() {
    init_logging();
    let listing = ListingView::new("job-7")
        .with_disabled(true)
        .with_location("Remote")
        .with_description("Remote First Ltd")
        .with_title("Intern");

    let effects = scan(rules(&[], &["Intern"], &["Remote"], true), listing);

    assert_eq!(
        effects,
        vec![
            remove("job-7", RemovalReason::Disabled),
            hide("job-7"),
            remove("job-7", RemovalReason::Location("Remote".into())),
            hide("job-7"),
            remove("job-7", RemovalReason::Company("Remote First Ltd".into())),
            hide("job-7"),
            remove("job-7", RemovalReason::Title("Intern".into())),
        ]
    );
}

#[test]
fn missing_fields_skip_their_checks() {
    init_logging();
    let listing = ListingView::new("job-8").with_title("Intern");

    let effects = scan(rules(&[], &["Intern"], &[""], false), listing);

    assert_eq!(
        effects,
        vec![
            hide("job-8"),
            remove("job-8", RemovalReason::Title("Intern".into())),
        ]
    );
}

#[test]
fn rules_added_by_control_line_apply_to_next_scan() {
    init_logging();
    let state = LoopState::new(RuleSet::default());
    let listing = ListingView::new("job-9").with_location("Remote");

    let (state, effects) = update(state, Msg::ListingScanned(listing.clone()));
    assert!(effects.is_empty());

    let (state, _) = update(state, Msg::ControlLine("lRemote".to_string()));
    let (_, effects) = update(state, Msg::ListingScanned(listing));
    assert_eq!(effects.len(), 2);
}
