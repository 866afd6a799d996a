//! Session phase: loading, exploring, finished

use serde::{Deserialize, Serialize};

/// Coarse lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// Loading screen is up; the world does not simulate yet
    #[default]
    Ready,
    /// The user is exploring
    Playing,
    /// The session has been closed
    Ended,
}

impl GamePhase {
    pub fn start(&mut self) {
        *self = GamePhase::Playing;
    }

    pub fn restart(&mut self) {
        *self = GamePhase::Ready;
    }

    pub fn end(&mut self) {
        *self = GamePhase::Ended;
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, GamePhase::Playing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_transitions() {
        let mut phase = GamePhase::default();
        assert_eq!(phase, GamePhase::Ready);
        phase.start();
        assert!(phase.is_playing());
        phase.end();
        assert_eq!(phase, GamePhase::Ended);
        phase.restart();
        assert_eq!(phase, GamePhase::Ready);
    }
}
