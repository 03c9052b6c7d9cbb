use crate::{
    ast::{ExpressionTree, Node},
    error::ParseError,
    interpreter::{lexer::TokenSequence, token::Token},
    util::stack::Stack,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Builds an expression tree from a token sequence.
///
/// This is a shunting-yard parser that produces the tree directly: instead of
/// emitting operators in postfix order, every operator popped off the
/// operator stack immediately takes its operands from the operand stack and
/// becomes a subtree.
///
/// - A literal becomes a leaf on the operand stack.
/// - A function or `(` is pushed onto the operator stack.
/// - A `,` reduces everything down to the enclosing `(`.
/// - An infix operator first reduces the operators on the stack that bind at
///   least as tightly (strictly tighter for the right-associative `^`).
///   A prefix minus is pushed right away.
/// - A `)` reduces down to its `(`, drops it, and reduces the function in
///   front of it, if any.
///
/// Once the tokens run out the operator stack is drained and exactly one
/// tree must be left.
///
/// # Parameters
/// - `tokens`: The lexer output; it is consumed.
///
/// # Returns
/// The expression tree.
///
/// # Errors
/// - `UnmatchedParenthesis` if a parenthesis has no partner.
/// - `InvalidExpression` if an operator lacks an operand, operands are left
///   without an operator, or there are no tokens at all.
///
/// # Example
/// ```
/// use stepcalc::interpreter::{lexer::tokenize, parser::parse};
///
/// let tree = parse(tokenize("2 ^ 3 ^ 2 - 8 / 4 / 2").unwrap()).unwrap();
/// assert_eq!(tree.to_string(), "((2 ^ (3 ^ 2)) - ((8 / 4) / 2))");
///
/// assert!(parse(tokenize("(1 + 2").unwrap()).is_err());
/// assert!(parse(tokenize("1 2").unwrap()).is_err());
/// ```
pub fn parse(tokens: TokenSequence) -> ParseResult<ExpressionTree> {
    let mut yard = ShuntingYard::new();
    let mut column = 1;

    for (token, token_column) in tokens {
        column = token_column;
        yard.feed(token, column)?;
    }

    yard.finish(column)
}

/// The two stacks of the shunting-yard algorithm.
///
/// Lives for the parse of a single expression.
pub(in crate::interpreter::parser) struct ShuntingYard {
    /// Finished subtrees waiting to become operands.
    pub(in crate::interpreter::parser) operands:  Stack<Node>,
    /// Operators, functions and open parentheses, with their columns.
    pub(in crate::interpreter::parser) operators: Stack<(Token, usize)>,
}

impl ShuntingYard {
    const fn new() -> Self {
        Self { operands:  Stack::new(),
               operators: Stack::new(), }
    }

    /// Processes one token.
    fn feed(&mut self, token: Token, column: usize) -> ParseResult<()> {
        match token {
            Token::Literal(_) => self.operands.push(Node::leaf(token)),
            Token::Function(_) | Token::LParen => self.operators.push((token, column)),
            Token::ArgSeparator => self.reduce_to_lparen()?,
            Token::Operator(op) => {
                // a prefix operator has no left operand that could complete
                // anything waiting on the stack
                if !op.is_unary() {
                    while let Some((Token::Operator(top), _)) = self.operators.peek()
                          && op.yields_to(*top)
                    {
                        self.reduce()?;
                    }
                }
                self.operators.push((token, column));
            },
            Token::RParen => {
                self.reduce_to_lparen()?;
                match self.operators.pop() {
                    Some((Token::LParen, _)) => {},
                    _ => return Err(ParseError::UnmatchedParenthesis { column }),
                }
                if let Some((Token::Function(_), _)) = self.operators.peek() {
                    self.reduce()?;
                }
            },
        }

        Ok(())
    }

    /// Drains the operator stack and returns the single remaining tree.
    ///
    /// `column` is the column of the last token, used for errors that only
    /// show at the end.
    fn finish(mut self, column: usize) -> ParseResult<ExpressionTree> {
        while !self.operators.is_empty() {
            self.reduce()?;
        }

        let Some(root) = self.operands.pop() else {
            return Err(ParseError::InvalidExpression { details: "empty expression".to_string(),
                                                       column });
        };

        if !self.operands.is_empty() {
            return Err(ParseError::InvalidExpression {
                details: format!("{} operands are not joined by an operator",
                                 self.operands.len() + 1),
                column,
            });
        }

        Ok(ExpressionTree::new(root))
    }
}
