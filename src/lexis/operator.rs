//! Operator categorization tables.
//!
//! Answers whether an operator symbol is recognized as a unary or binary
//! operator, and recognizes the identifier-shaped words that act as
//! operators in call position.

/// Returns `true` when `op` is a recognized unary operator symbol.
pub fn is_unary(op: &str) -> bool {
    matches!(op, "@" | "+" | "-" | "!" | "^" | "~~~" | "&" | "not")
}

/// Returns `true` when `op` is a recognized binary operator symbol.
pub fn is_binary(op: &str) -> bool {
    matches!(
        op,
        "="
            | "=="
            | "!="
            | "==="
            | "!=="
            | "=~"
            | "<"
            | ">"
            | "<="
            | ">="
            | "&&"
            | "&&&"
            | "||"
            | "|||"
            | "|"
            | "|>"
            | "<<<"
            | ">>>"
            | "<<~"
            | "~>>"
            | "<~"
            | "~>"
            | "<~>"
            | "<|>"
            | "^^^"
            | "::"
            | "<-"
            | "\\\\"
            | ".."
            | "++"
            | "--"
            | "+++"
            | "---"
            | "<>"
            | "+"
            | "-"
            | "*"
            | "/"
            | "**"
            | "when"
            | "and"
            | "or"
            | "in"
    )
}

/// Identifier-shaped words that tokenize as operators in call position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextualOperator {
    /// `when`
    When,
    /// `not`
    Not,
    /// `and`
    And,
    /// `or`
    Or,
}

impl TextualOperator {
    /// Parses a word into a textual operator when exact-match compatible.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "when" => Some(Self::When),
            "not" => Some(Self::Not),
            "and" => Some(Self::And),
            "or" => Some(Self::Or),
            _ => None,
        }
    }

    /// Returns the source spelling of the operator.
    pub fn name(self) -> &'static str {
        match self {
            Self::When => "when",
            Self::Not => "not",
            Self::And => "and",
            Self::Or => "or",
        }
    }
}
