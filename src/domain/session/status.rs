//! Lifecycle states of one journaling cycle.

use crate::domain::foundation::StateMachine;

/// Status of the journaling session.
///
/// `Idle` is both the start and the end of a cycle: a save or a failed
/// analysis always returns here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    /// No analysis in flight or under review; text is editable.
    Idle,
    /// One analysis request is outstanding. No second request may start.
    Analyzing,
    /// Candidates and plan are visible; selection is allowed.
    Reviewing,
    /// An emotion is selected; saving is enabled.
    Selected,
}

impl StateMachine for SessionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SessionStatus::*;
        matches!(
            (self, target),
            (Idle, Analyzing)
                | (Analyzing, Reviewing)
                | (Analyzing, Idle)
                | (Reviewing, Selected)
                | (Reviewing, Idle)
                | (Reviewing, Analyzing)
                | (Selected, Selected)
                | (Selected, Reviewing)
                | (Selected, Idle)
                | (Selected, Analyzing)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SessionStatus::*;
        match self {
            Idle => vec![Analyzing],
            Analyzing => vec![Reviewing, Idle],
            Reviewing => vec![Selected, Idle, Analyzing],
            Selected => vec![Selected, Reviewing, Idle, Analyzing],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_only_starts_an_analysis() {
        assert_eq!(
            SessionStatus::Idle.valid_transitions(),
            vec![SessionStatus::Analyzing]
        );
    }

    #[test]
    fn analyzing_is_single_flight() {
        assert!(!SessionStatus::Analyzing.can_transition_to(&SessionStatus::Analyzing));
        assert!(SessionStatus::Analyzing
            .transition_to(SessionStatus::Analyzing)
            .is_err());
    }

    #[test]
    fn analysis_completes_or_fails_exactly_into_one_state() {
        assert!(SessionStatus::Analyzing.can_transition_to(&SessionStatus::Reviewing));
        assert!(SessionStatus::Analyzing.can_transition_to(&SessionStatus::Idle));
        assert!(!SessionStatus::Analyzing.can_transition_to(&SessionStatus::Selected));
    }

    #[test]
    fn selection_can_move_between_candidates() {
        assert!(SessionStatus::Selected.can_transition_to(&SessionStatus::Selected));
        assert!(SessionStatus::Selected.can_transition_to(&SessionStatus::Reviewing));
    }

    #[test]
    fn no_state_is_terminal() {
        for status in [
            SessionStatus::Idle,
            SessionStatus::Analyzing,
            SessionStatus::Reviewing,
            SessionStatus::Selected,
        ] {
            assert!(!status.is_terminal());
        }
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for status in [
            SessionStatus::Idle,
            SessionStatus::Analyzing,
            SessionStatus::Reviewing,
            SessionStatus::Selected,
        ] {
            for valid_target in status.valid_transitions() {
                assert!(
                    status.can_transition_to(&valid_target),
                    "can_transition_to should return true for {:?} -> {:?}",
                    status,
                    valid_target
                );
            }
        }
    }
}
