use sweeper_core::{update, LoopState, Msg, RuleSet};

#[test]
fn unknown_prefix_is_noop() {
    let state = LoopState::new(RuleSet::default());
    let (next, effects) = update(state.clone(), Msg::ControlLine("xAcme".to_string()));

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
