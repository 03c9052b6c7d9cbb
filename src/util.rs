/// Numeric helpers shared by the evaluator.
///
/// Literal leaves store their value as text; this module converts that text
/// to `f64` and formats computed values back into literal text.
pub mod num;
/// A last-in, first-out container.
///
/// Backs the operand and operator stacks used by the shunting-yard parser.
pub mod stack;
