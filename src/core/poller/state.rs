#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    Starting,
    Running,
    Stopped,
}

/// What the loop last told the user, per message class. In-memory only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoopState {
    pub last_message: String,
    pub last_error: String,
}

impl LoopState {
    pub fn is_new_message(&self, message: &str) -> bool {
        self.last_message != message
    }

    pub fn is_new_error(&self, report: &str) -> bool {
        self.last_error != report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_treats_everything_as_new() {
        let state = LoopState::default();
        assert!(state.is_new_message("a"));
        assert!(state.is_new_error("b"));
    }

    #[test]
    fn classes_are_tracked_separately() {
        let state = LoopState {
            last_message: "same".to_string(),
            last_error: String::new(),
        };
        assert!(!state.is_new_message("same"));
        assert!(state.is_new_error("same"));
    }
}
