//! Run classification and execution tracing.
//!
//! A trace is the ordered record of the transitions one run took, used
//! for debugging and visualization. Traces are plain immutable values
//! produced fresh per call; they have no relationship to other runs and
//! are owned solely by the caller.

use serde::{Deserialize, Serialize};

/// Classification of one run: the input was either accepted or rejected.
///
/// Serializes as `"accepted"` / `"rejected"`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunResult {
    Accepted,
    Rejected,
}

impl RunResult {
    /// True iff the run was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// One transition taken during a run: `from` consumed `symbol` and
/// moved to `to`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ExecutionStep {
    /// The state the automaton was in before the symbol.
    pub from: String,
    /// The symbol consumed.
    pub symbol: char,
    /// The state the automaton moved to.
    pub to: String,
}

/// Record of a single execution.
///
/// `input` and `start_state` always echo the values given/configured,
/// regardless of outcome. If the run hit an out-of-alphabet symbol,
/// `final_state` is the state held before that symbol and the failing
/// symbol contributes no step.
///
/// # Example
///
/// ```rust
/// use acceptor::core::{Dfa, RunResult};
/// use acceptor::dfa;
///
/// // Binary strings ending in '0'.
/// let dfa = Dfa::new(dfa! {
///     states: [q0, q1],
///     alphabet: ['0', '1'],
///     start: q0,
///     accepting: [q1],
///     transitions: {
///         q0: { '0' => q1, '1' => q0 },
///         q1: { '0' => q1, '1' => q0 },
///     }
/// })
/// .unwrap();
///
/// let trace = dfa.run_with_trace("10");
/// assert_eq!(trace.steps.len(), 2);
/// assert_eq!(trace.final_state, "q1");
/// assert_eq!(trace.result, RunResult::Accepted);
/// assert_eq!(trace.path(), vec!["q0", "q0", "q1"]);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ExecutionTrace {
    /// The input string the run was given.
    pub input: String,
    /// The automaton's start state.
    pub start_state: String,
    /// One step per symbol successfully consumed, in order.
    pub steps: Vec<ExecutionStep>,
    /// The state the run ended in.
    pub final_state: String,
    /// Whether the input was accepted.
    pub result: RunResult,
}

impl ExecutionTrace {
    /// The ordered sequence of states the run visited: the start state,
    /// then the target of each step.
    pub fn path(&self) -> Vec<&str> {
        let mut path = Vec::with_capacity(self.steps.len() + 1);
        path.push(self.start_state.as_str());
        for step in &self.steps {
            path.push(step.to.as_str());
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_trace() -> ExecutionTrace {
        ExecutionTrace {
            input: "10".to_string(),
            start_state: "q0".to_string(),
            steps: vec![
                ExecutionStep {
                    from: "q0".to_string(),
                    symbol: '1',
                    to: "q0".to_string(),
                },
                ExecutionStep {
                    from: "q0".to_string(),
                    symbol: '0',
                    to: "q1".to_string(),
                },
            ],
            final_state: "q1".to_string(),
            result: RunResult::Accepted,
        }
    }

    #[test]
    fn is_accepted_matches_variant() {
        assert!(RunResult::Accepted.is_accepted());
        assert!(!RunResult::Rejected.is_accepted());
    }

    #[test]
    fn result_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RunResult::Accepted).unwrap(),
            "\"accepted\""
        );
        assert_eq!(
            serde_json::to_string(&RunResult::Rejected).unwrap(),
            "\"rejected\""
        );
    }

    #[test]
    fn path_starts_at_start_state() {
        let trace = sample_trace();
        assert_eq!(trace.path(), vec!["q0", "q0", "q1"]);
    }

    #[test]
    fn path_of_empty_trace_is_just_the_start_state() {
        let trace = ExecutionTrace {
            input: String::new(),
            start_state: "q0".to_string(),
            steps: vec![],
            final_state: "q0".to_string(),
            result: RunResult::Rejected,
        };

        assert_eq!(trace.path(), vec!["q0"]);
    }

    #[test]
    fn trace_serializes_correctly() {
        let trace = sample_trace();

        let json = serde_json::to_string(&trace).unwrap();
        let deserialized: ExecutionTrace = serde_json::from_str(&json).unwrap();

        assert_eq!(trace, deserialized);
    }
}
