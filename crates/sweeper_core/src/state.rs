use crate::RuleSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopPhase {
    #[default]
    Running,
    Terminated,
}

/// Everything the filter loop owns between iterations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoopState {
    phase: LoopPhase,
    rules: RuleSet,
}

impl LoopState {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            phase: LoopPhase::Running,
            rules,
        }
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    pub fn is_terminated(&self) -> bool {
        self.phase == LoopPhase::Terminated
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub(crate) fn rules_mut(&mut self) -> &mut RuleSet {
        &mut self.rules
    }

    pub(crate) fn terminate(&mut self) {
        self.phase = LoopPhase::Terminated;
    }
}
