// file: src/controller/state.rs
// description: submit lifecycle phases and allowed transitions

use crate::error::{Result, SearchError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Requesting,
    Rendering,
    Error,
}

impl Phase {
    pub fn can_transition_to(self, next: Phase) -> bool {
        use Phase::*;

        matches!(
            (self, next),
            (Idle, Validating)
                | (Error, Validating)
                // a new submit while a request is still in flight
                | (Requesting, Validating)
                | (Validating, Requesting)
                | (Validating, Error)
                | (Requesting, Rendering)
                | (Requesting, Error)
                // latest request resolves after a later submit failed validation
                | (Error, Rendering)
                | (Rendering, Idle)
        )
    }

    pub fn transition(self, next: Phase) -> Result<Phase> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(SearchError::InvalidTransition {
                from: self,
                to: next,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let phase = Phase::Idle
            .transition(Phase::Validating)
            .and_then(|p| p.transition(Phase::Requesting))
            .and_then(|p| p.transition(Phase::Rendering))
            .and_then(|p| p.transition(Phase::Idle))
            .unwrap();
        assert_eq!(phase, Phase::Idle);
    }

    #[test]
    fn test_error_paths() {
        assert!(Phase::Validating.can_transition_to(Phase::Error));
        assert!(Phase::Requesting.can_transition_to(Phase::Error));
        assert!(Phase::Error.can_transition_to(Phase::Validating));
        assert!(Phase::Error.can_transition_to(Phase::Rendering));
    }

    #[test]
    fn test_rejected_transitions() {
        assert!(!Phase::Idle.can_transition_to(Phase::Requesting));
        assert!(!Phase::Idle.can_transition_to(Phase::Rendering));
        assert!(!Phase::Rendering.can_transition_to(Phase::Validating));
        assert!(!Phase::Validating.can_transition_to(Phase::Validating));

        let err = Phase::Idle.transition(Phase::Rendering).unwrap_err();
        assert!(matches!(
            err,
            SearchError::InvalidTransition {
                from: Phase::Idle,
                to: Phase::Rendering
            }
        ));
    }
}
