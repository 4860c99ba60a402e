/// Calculator errors.
///
/// Defines every failure that can occur while classifying or evaluating a
/// tokenized command: malformed integer operands, unknown commands, division
/// by zero, unsupported token counts, and integer overflow.
pub mod calc_error;

pub use calc_error::CalcError;
