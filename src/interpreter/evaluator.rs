/// Core dispatch logic and result types.
///
/// Contains the stateless evaluator, the `Outcome` of a successful dispatch,
/// and routing by token count.
pub mod core;

/// Two-token commands: `negate` and `halve`.
pub mod unary;

/// Three-token commands: `+`, `-` and `/`.
pub mod binary;

pub use self::core::{CommandEvaluator, EvalResult, Outcome};
