use crate::{
    ast::{Node, Side},
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::apply_function, operator::apply_operator},
        token::Token,
    },
    util::num::{format_number, parse_literal},
};

/// Finds the next subtree to reduce and returns the path to it from `root`.
///
/// Starting at the root, descend into the right child as long as it is an
/// operator or function (i.e. has a right child of its own); otherwise
/// descend into the left child under the same condition; otherwise stop.
/// The node where the descent stops has only literal children.
///
/// # Example
/// ```
/// use stepcalc::{
///     ast::Side,
///     interpreter::{evaluator::step::reduction_target, lexer::tokenize, parser::parse},
/// };
///
/// // (2 * 3) + (4 * 5): the right product goes first
/// let tree = parse(tokenize("2 * 3 + 4 * 5").unwrap()).unwrap();
/// assert_eq!(reduction_target(tree.root()), [Side::Right]);
///
/// // (8 / 4) / 2: only the left side is pending
/// let tree = parse(tokenize("8 / 4 / 2").unwrap()).unwrap();
/// assert_eq!(reduction_target(tree.root()), [Side::Left]);
/// ```
#[must_use]
pub fn reduction_target(root: &Node) -> Vec<Side> {
    let mut path = Vec::new();
    let mut node = root;

    loop {
        if let Some(right) = node.right()
           && right.right().is_some()
        {
            path.push(Side::Right);
            node = right;
        } else if let Some(left) = node.left()
                  && left.right().is_some()
        {
            path.push(Side::Left);
            node = left;
        } else {
            break;
        }
    }

    path
}

/// Computes the value of a node whose operands are literals and returns the
/// literal leaf replacing it.
///
/// A missing left operand, as in unary nodes, counts as `0`.
///
/// # Errors
/// - `MalformedTree` if the node has no right operand, an operand is not a
///   literal leaf, or the node is not an operator or function.
/// - `InvalidLiteral` if an operand's text is not a number.
///
/// # Example
/// ```
/// use stepcalc::{
///     ast::Node,
///     interpreter::{evaluator::step::reduce_node, token::{Function, Token}},
/// };
///
/// let node = Node::binary(Token::Function(Function::Max),
///                         Node::leaf(Token::Literal("3".into())),
///                         Node::leaf(Token::Literal("5".into())));
///
/// assert_eq!(reduce_node(&node).unwrap(), Node::leaf(Token::Literal("5".into())));
/// ```
pub fn reduce_node(node: &Node) -> EvalResult<Node> {
    let right = node.right().ok_or_else(|| RuntimeError::MalformedTree {
        details: format!("'{}' has no right operand", node.token()),
    })?;
    let right = operand_value(right)?;
    let left = node.left().map(operand_value).transpose()?.unwrap_or(0.0);

    let value = match node.token() {
        Token::Function(function) => apply_function(*function, left, right),
        Token::Operator(op) => apply_operator(*op, left, right),
        token => {
            return Err(RuntimeError::MalformedTree { details: format!("'{token}' cannot be applied") });
        },
    };

    Ok(Node::leaf(Token::Literal(format_number(value))))
}

fn operand_value(node: &Node) -> EvalResult<f64> {
    match node.token() {
        Token::Literal(text) if node.is_leaf() => parse_literal(text),
        _ => Err(RuntimeError::MalformedTree { details: format!("operand '{node}' is not a literal") }),
    }
}
