/// The evaluation loop.
///
/// Reduces a tree one subtree at a time and reports every intermediate tree.
pub mod core;
/// Function semantics: the unary and binary function tables.
pub mod function;
/// Operator semantics.
pub mod operator;
/// A single reduction: choosing the next reducible subtree and computing
/// the literal that replaces it.
pub mod step;

pub use self::core::{evaluate, reduce_step};
