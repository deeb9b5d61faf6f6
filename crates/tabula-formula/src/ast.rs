//! Formula expression tree and operator table

use crate::value::{Model, Value};
use std::fmt;

/// Formula operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Space between two references (`A1:C3 B2:B9`)
    Intersection,
    /// Prefix `-`
    UnaryNegation,
    /// Postfix `%`
    Percent,
    Exponentiation,
    Multiplication,
    Division,
    Addition,
    Subtraction,
    /// `&`
    Concatenation,
    Equality,
    GreaterThan,
    LessThan,
    GreaterOrEqual,
    LessOrEqual,
    Inequality,
}

/// Operator associativity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

impl Operator {
    /// Binding strength; higher binds tighter
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Intersection => 8,
            Operator::UnaryNegation => 7,
            Operator::Percent => 6,
            Operator::Exponentiation => 5,
            Operator::Multiplication | Operator::Division => 4,
            Operator::Addition | Operator::Subtraction => 3,
            Operator::Concatenation => 2,
            Operator::Equality
            | Operator::GreaterThan
            | Operator::LessThan
            | Operator::GreaterOrEqual
            | Operator::LessOrEqual
            | Operator::Inequality => 1,
        }
    }

    /// Number of operands consumed
    pub fn arity(self) -> usize {
        match self {
            Operator::UnaryNegation | Operator::Percent => 1,
            _ => 2,
        }
    }

    pub fn associativity(self) -> Associativity {
        match self {
            Operator::UnaryNegation => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    /// Prefix operators have no left operand
    pub fn is_prefix(self) -> bool {
        self == Operator::UnaryNegation
    }

    /// Postfix operators apply to the operand before them
    pub fn is_postfix(self) -> bool {
        self == Operator::Percent
    }

    /// Comparison operators yield logicals
    pub fn is_comparison(self) -> bool {
        self.precedence() == 1
    }

    /// Formula text of the operator
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Intersection => " ",
            Operator::UnaryNegation | Operator::Subtraction => "-",
            Operator::Percent => "%",
            Operator::Exponentiation => "^",
            Operator::Multiplication => "*",
            Operator::Division => "/",
            Operator::Addition => "+",
            Operator::Concatenation => "&",
            Operator::Equality => "=",
            Operator::GreaterThan => ">",
            Operator::LessThan => "<",
            Operator::GreaterOrEqual => ">=",
            Operator::LessOrEqual => "<=",
            Operator::Inequality => "<>",
        }
    }

    /// Look up an operator by its formula text.
    ///
    /// `-` maps to `Subtraction`; the parser reclassifies it when it appears in
    /// prefix position.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let op = match symbol {
            "%" => Operator::Percent,
            "^" => Operator::Exponentiation,
            "*" => Operator::Multiplication,
            "/" => Operator::Division,
            "+" => Operator::Addition,
            "-" => Operator::Subtraction,
            "&" => Operator::Concatenation,
            "=" => Operator::Equality,
            ">" => Operator::GreaterThan,
            "<" => Operator::LessThan,
            ">=" => Operator::GreaterOrEqual,
            "<=" => Operator::LessOrEqual,
            "<>" => Operator::Inequality,
            _ => return None,
        };
        Some(op)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Formula expression tree
///
/// Each node owns its children. Operator nodes always hold exactly
/// `op.arity()` operands.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr<M: Model> {
    /// Function call; the name is lower-cased
    Function { name: String, args: Vec<Expr<M>> },
    /// Value materialized at parse time
    Literal(Value<M>),
    Operator { op: Operator, operands: Vec<Expr<M>> },
}

impl<M: Model> Expr<M> {
    /// Number of nodes in the tree
    pub fn node_count(&self) -> usize {
        match self {
            Expr::Literal(_) => 1,
            Expr::Function { args: children, .. } | Expr::Operator { operands: children, .. } => {
                1 + children.iter().map(Expr::node_count).sum::<usize>()
            }
        }
    }
}
