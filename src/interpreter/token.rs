/// The token type flowing from the lexer through the parser into the tree.
pub mod core;
/// The fixed function table: names, identities and arities.
pub mod function;
/// The fixed operator table: symbols, precedences and associativities.
pub mod operator;

pub use self::{
    core::{Token, TokenKind},
    function::{Arity, Function},
    operator::{Associativity, Operator},
};
