use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, ShuntingYard},
        token::Token,
    },
};

impl ShuntingYard {
    /// Pops the top of the operator stack and turns it into a subtree.
    ///
    /// The right operand is popped first. Unary operators and unary
    /// functions take only that one; everything else also pops a left
    /// operand.
    ///
    /// # Errors
    /// - `UnmatchedParenthesis` if the top is a `(`: only the final drain
    ///   reaches one.
    /// - `InvalidExpression` if the operator stack is empty or an operand is
    ///   missing.
    pub(in crate::interpreter::parser) fn reduce(&mut self) -> ParseResult<()> {
        let Some((root, column)) = self.operators.pop() else {
            return Err(ParseError::InvalidExpression { details: "no operator to apply".to_string(),
                                                       column:  0, });
        };

        if matches!(root, Token::LParen) {
            return Err(ParseError::UnmatchedParenthesis { column });
        }

        let right = self.operands.pop().ok_or_else(|| missing_operand(&root, column))?;

        let node = if root.is_unary() {
            Node::unary(root, right)
        } else {
            let left = self.operands.pop().ok_or_else(|| missing_operand(&root, column))?;
            Node::binary(root, left, right)
        };

        log::trace!("reduced {node}");
        self.operands.push(node);

        Ok(())
    }

    /// Reduces until a `(` is on top of the operator stack, leaving it there,
    /// or until the stack is empty.
    pub(in crate::interpreter::parser) fn reduce_to_lparen(&mut self) -> ParseResult<()> {
        while let Some((top, _)) = self.operators.peek()
              && !matches!(top, Token::LParen)
        {
            self.reduce()?;
        }

        Ok(())
    }
}

fn missing_operand(root: &Token, column: usize) -> ParseError {
    ParseError::InvalidExpression { details: format!("'{root}' is missing an operand"),
                                    column }
}
