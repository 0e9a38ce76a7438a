//! Parentheses Rule
//!
//! Generated trees never carry explicit parentheses; the printer adds them
//! wherever Java precedence would otherwise change the meaning.

use crate::ast::{Expr, CAST, PRIMARY};

/// Position of a sub-expression inside its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParenPosition {
    /// Method or field receiver: `x.method()`.
    Receiver,

    /// Operand of a cast: `(T) x`.
    CastOperand,

    /// Left operand of a binary operator with the given precedence.
    BinaryLeft(u8),

    /// Right operand of a binary operator with the given precedence.
    ///
    /// Java binary operators are left-associative, so an equal-precedence
    /// right operand needs parentheses.
    BinaryRight(u8),

    /// Call argument or initializer; delimited already.
    Argument,
}

/// Check if `expr` needs parentheses at `position`.
pub fn needs_parens(expr: &Expr, position: ParenPosition) -> bool {
    let precedence = expr.precedence();
    match position {
        ParenPosition::Receiver => precedence > PRIMARY,
        ParenPosition::CastOperand => precedence > CAST,
        ParenPosition::BinaryLeft(parent) => precedence > parent,
        ParenPosition::BinaryRight(parent) => precedence > PRIMARY && precedence >= parent,
        ParenPosition::Argument => false,
    }
}
