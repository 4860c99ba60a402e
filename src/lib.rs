//! # tokcalc
//!
//! tokcalc is a small integer command calculator. A line of input is split on
//! spaces and interpreted by its token count: `quit`, a unary command such as
//! `negate 5` or `halve 7`, or a binary operation such as `9 / 3`. Every
//! outcome, including every error, is rendered as a display string.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides the error type for evaluation.
///
/// This module defines every failure that can be raised while evaluating a
/// command. Errors are values, returned through `Result`, and are rendered to
/// text only at the runner boundary.
///
/// # Responsibilities
/// - Defines the closed set of failure kinds.
/// - Carries the exact messages shown for calculator exceptions.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates evaluation of a single command line.
///
/// This module ties together tokenizing, command recognition, arity
/// dispatch, arithmetic, and rendering.
///
/// # Responsibilities
/// - Coordinates the lexer, evaluator, and runner.
/// - Provides entry points for evaluating token sequences or raw input.
pub mod interpreter;

pub use interpreter::{lexer::tokenize, runner::run};
