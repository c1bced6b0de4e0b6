/// A move request the engine refused. Always recoverable: the game simply
/// stays as it was and the caller may try a different column.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("column {0} is out of range (expected 0..=6)")]
    ColumnOutOfRange(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,
}

/// Errors from a position string handed to [`GameEngine::replay`].
///
/// [`GameEngine::replay`]: crate::game::GameEngine::replay
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    #[error("invalid move digit {0:?} (expected '1'..='7')")]
    BadDigit(char),

    #[error("move {index} in the position string is illegal: {source}")]
    IllegalMove {
        index: usize,
        #[source]
        source: IllegalMove,
    },
}

/// Failures at the evaluation boundary: the external solver was unreachable
/// or its response made no sense. These never touch game state; callers show
/// a message and carry on.
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error("evaluation request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("evaluation service returned HTTP {0}")]
    Status(u16),

    #[error("malformed evaluation response: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_move_display() {
        assert_eq!(
            IllegalMove::ColumnOutOfRange(9).to_string(),
            "column 9 is out of range (expected 0..=6)"
        );
        assert_eq!(IllegalMove::ColumnFull(3).to_string(), "column 3 is full");
        assert_eq!(IllegalMove::GameOver.to_string(), "the game is already over");
    }

    #[test]
    fn test_replay_error_display() {
        let err = ReplayError::IllegalMove {
            index: 12,
            source: IllegalMove::ColumnFull(0),
        };
        assert_eq!(
            err.to_string(),
            "move 12 in the position string is illegal: column 0 is full"
        );
        assert_eq!(
            ReplayError::BadDigit('x').to_string(),
            "invalid move digit 'x' (expected '1'..='7')"
        );
    }

    #[test]
    fn test_eval_error_display() {
        assert_eq!(
            EvalError::Status(503).to_string(),
            "evaluation service returned HTTP 503"
        );
        assert_eq!(
            EvalError::Malformed("empty body".into()).to_string(),
            "malformed evaluation response: empty body"
        );
    }
}
