//! Formula tokens

use crate::ast::Operator;
use crate::error::ParseError;

/// Lexical class of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,
    /// Cell, column, row or area reference
    Range,
    Text,
    Logical,
    /// Error literal such as `#REF!`
    Error,
    /// Function name; always followed by an `Open` token
    Function,
    Operator,
    Open,
    Close,
    /// Argument separator `,`
    Separator,
    /// Text the tokenizer could not classify
    Unknown,
}

impl TokenKind {
    /// Tokens that become literal operands
    pub fn is_operand(self) -> bool {
        matches!(
            self,
            TokenKind::Number
                | TokenKind::Range
                | TokenKind::Text
                | TokenKind::Logical
                | TokenKind::Error
                | TokenKind::Unknown
        )
    }
}

/// A formula token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Source text; absolute markers are dropped from references and
    /// quotes are stripped from text
    pub text: String,
    pub kind: TokenKind,
    /// Set for `Operator` tokens
    pub operator: Option<Operator>,
    /// Character offset of the first character
    pub position: usize,
}

impl Token {
    pub fn new<S: Into<String>>(kind: TokenKind, text: S, position: usize) -> Self {
        Self {
            text: text.into(),
            kind,
            operator: None,
            position,
        }
    }

    pub fn operator(op: Operator, position: usize) -> Self {
        Self {
            text: op.symbol().to_string(),
            kind: TokenKind::Operator,
            operator: Some(op),
            position,
        }
    }
}

/// Tokenizer output: the tokens read plus any lexical faults
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    pub tokens: Vec<Token>,
    pub errors: Vec<ParseError>,
}

impl Tokens {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token kinds in order
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }
}
