/// The evaluator module reduces expression trees step by step.
///
/// The evaluator repeatedly picks the deepest pending operator or function
/// whose operands are all literals, computes it and replaces it by a
/// literal, until the whole tree is a single number. Each intermediate tree
/// is reported to the caller.
///
/// # Responsibilities
/// - Locates the next reducible subtree.
/// - Applies operator and function semantics.
/// - Formats intermediate results as literal text.
pub mod evaluator;
/// The lexer module tokenizes expressions for further parsing.
///
/// The lexer reads the raw text and produces the sequence of tokens: numeric
/// literals, function names, operators, parentheses and argument
/// separators. It is driven by an explicit, table-based finite automaton.
///
/// # Responsibilities
/// - Converts the input text into tokens with their source columns.
/// - Tells unary from binary minus.
/// - Reports unexpected characters and unknown function names.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser runs the shunting-yard algorithm with an operand stack and an
/// operator stack, assembling subtrees as operators are popped instead of
/// producing postfix output.
///
/// # Responsibilities
/// - Honors precedence, associativity and parentheses.
/// - Groups function arguments.
/// - Reports unmatched parentheses and missing or surplus operands.
pub mod parser;
/// The token module defines the units shared by lexer, parser and tree.
///
/// It also holds the static operator and function tables.
pub mod token;
