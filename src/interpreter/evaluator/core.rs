use crate::{
    ast::ExpressionTree,
    error::RuntimeError,
    interpreter::evaluator::step::{reduce_node, reduction_target},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Reduces a tree to a single literal, one step at a time.
///
/// After every step `on_step` receives the whole updated tree, which makes
/// the calculation observable. A tree that is already a single literal is
/// returned untouched and `on_step` is never called.
///
/// Every step replaces one operator or function node by a literal, so the
/// loop ends after as many steps as the tree has internal nodes.
///
/// # Parameters
/// - `tree`: The tree to reduce.
/// - `on_step`: Called with the tree after each step.
///
/// # Returns
/// The finished tree: a single literal leaf.
///
/// # Errors
/// Returns a `RuntimeError` if the tree is malformed. Trees built by the
/// parser are always well formed.
///
/// # Example
/// ```
/// use stepcalc::interpreter::{evaluator::evaluate, lexer::tokenize, parser::parse};
///
/// let tree = parse(tokenize("3 * (5 - 2)").unwrap()).unwrap();
///
/// let mut steps = Vec::new();
/// let tree = evaluate(tree, |tree| steps.push(tree.to_string())).unwrap();
///
/// assert_eq!(steps, ["(3 * 3)", "9"]);
/// assert_eq!(tree.to_string(), "9");
/// ```
pub fn evaluate<F>(mut tree: ExpressionTree, mut on_step: F) -> EvalResult<ExpressionTree>
    where F: FnMut(&ExpressionTree)
{
    while !tree.is_finished() {
        reduce_step(&mut tree)?;
        on_step(&tree);
    }

    Ok(tree)
}

/// Performs one reduction step in place.
///
/// Finds the next reducible subtree, computes its value and puts a literal
/// leaf holding the formatted value where the subtree was. When the root
/// itself is reduced the leaf becomes the new root. The replaced subtree is
/// dropped.
///
/// Does nothing on a finished tree.
///
/// # Errors
/// Returns a `RuntimeError` if the chosen subtree is malformed.
pub fn reduce_step(tree: &mut ExpressionTree) -> EvalResult<()> {
    if tree.is_finished() {
        return Ok(());
    }

    let path = reduction_target(tree.root());
    let target = tree.node_at_mut(&path).ok_or_else(|| RuntimeError::MalformedTree {
        details: "reduction target vanished".to_string(),
    })?;

    let reduced = reduce_node(target)?;
    log::debug!("{target} = {reduced}");
    *target = reduced;

    Ok(())
}
