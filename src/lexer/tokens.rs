use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    /// Keyword table: consulted only after an identifier-shaped match.
    ///
    /// The spelling-to-category pairs are carried over verbatim from the
    /// original rule set, scrambled pairs included (`if` scans as `Then`,
    /// `false` as `Print`, `return` as `If`). Spellings not listed here
    /// fall back to `Identifier`.
    pub static ref KEYWORD_LOOKUP: HashMap<&'static str, TokenCategory> = {
        let mut map = HashMap::new();
        map.insert("break", TokenCategory::Begin);
        map.insert("else", TokenCategory::Call);
        map.insert("return", TokenCategory::If);
        map.insert("case", TokenCategory::Const);
        map.insert("false", TokenCategory::Print);
        map.insert("switch", TokenCategory::Do);
        map.insert("continue", TokenCategory::End);
        map.insert("for", TokenCategory::Odd);
        map.insert("true", TokenCategory::Procedure);
        map.insert("default", TokenCategory::Read);
        map.insert("if", TokenCategory::Then);
        map.insert("do", TokenCategory::Repeat);
        map.insert("in", TokenCategory::Until);
        map.insert("var", TokenCategory::While);
        map
    };

    /// Category table: rule name to category, for every rule that emits a
    /// fixed category with no further disambiguation.
    ///
    /// Identifier, string, skip, newline and catch-all rules are handled
    /// by their own handlers and have no entry here. The `}` rule reuses
    /// the `rparen` name, so both `)` and `}` resolve to `ParenClose`
    /// through the single entry; `bang` and `tilde` both resolve to
    /// `Modulus`. Both quirks are inherited from the original rule set.
    pub static ref CATEGORY_LOOKUP: HashMap<&'static str, TokenCategory> = {
        let mut map = HashMap::new();
        map.insert("assign", TokenCategory::Assign);
        map.insert("equal", TokenCategory::Equal);
        map.insert("not_equal", TokenCategory::NotEqual);
        map.insert("greater", TokenCategory::Greater);
        map.insert("greater_equal", TokenCategory::GreaterEqual);
        map.insert("less", TokenCategory::Less);
        map.insert("less_equal", TokenCategory::LessEqual);
        map.insert("bit_or", TokenCategory::BitOr);
        map.insert("bit_xor", TokenCategory::BitXor);
        map.insert("bit_and", TokenCategory::BitAnd);
        map.insert("shift_left", TokenCategory::ShiftLeft);
        map.insert("shift_right", TokenCategory::ShiftRight);
        map.insert("unsigned_shift_right", TokenCategory::UnsignedShiftRight);
        map.insert("power", TokenCategory::Power);
        map.insert("star", TokenCategory::Multiply);
        map.insert("minus", TokenCategory::Minus);
        map.insert("plus", TokenCategory::Plus);
        map.insert("slash", TokenCategory::Divide);
        map.insert("percent", TokenCategory::Modulus);
        map.insert("bang", TokenCategory::Modulus);
        map.insert("tilde", TokenCategory::Modulus);
        map.insert("binary", TokenCategory::BinaryInteger);
        map.insert("octal", TokenCategory::OctalInteger);
        map.insert("hex", TokenCategory::HexInteger);
        map.insert("false", TokenCategory::False);
        map.insert("decimal", TokenCategory::Integer);
        map.insert("lparen", TokenCategory::ParenOpen);
        map.insert("rparen", TokenCategory::ParenClose);
        map.insert("lbracket", TokenCategory::BracketOpen);
        map.insert("colon", TokenCategory::Colon);
        map.insert("semicolon", TokenCategory::Semicolon);
        map.insert("comma", TokenCategory::Comma);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenCategory {
    EOF,
    Illegal,
    Identifier,
    String,

    Integer,
    BinaryInteger,
    OctalInteger,
    HexInteger,
    False, // #f

    Assign,    // =
    Equal,     // ==
    NotEqual,  // !=
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    BitOr,
    BitXor,
    BitAnd,
    ShiftLeft,
    ShiftRight,
    UnsignedShiftRight,

    Power,
    Multiply,
    Minus,
    Plus,
    Divide,
    Modulus,

    ParenOpen,
    ParenClose,
    BracketOpen,
    // No rule currently produces BracketClose: `}` shares the `rparen`
    // rule name and therefore scans as ParenClose.
    BracketClose,
    Colon,
    Semicolon,
    Comma,

    // Reserved
    Begin,
    Call,
    Const,
    Do,
    End,
    If,
    Odd,
    Print,
    Procedure,
    Read,
    Repeat,
    Then,
    Until,
    While,
}

impl Display for TokenCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub category: TokenCategory,
    /// The exact matched substring; `None` only for EOF.
    pub lexeme: Option<String>,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token {{\ncategory: {},\nlexeme: {}}}",
            self.category,
            self.lexeme.as_deref().unwrap_or("")
        )
    }
}

impl Token {
    fn is_one_of_many(&self, categories: Vec<TokenCategory>) -> bool {
        for category in categories {
            if category == self.category {
                return true;
            }
        }

        false
    }

    pub fn debug(&self) {
        if self.is_one_of_many(vec![
            TokenCategory::String,
            TokenCategory::Identifier,
            TokenCategory::Integer,
            TokenCategory::BinaryInteger,
            TokenCategory::OctalInteger,
            TokenCategory::HexInteger,
            TokenCategory::Illegal,
        ]) {
            println!("{} ({})", self.category, self.lexeme.as_deref().unwrap_or(""));
        } else {
            println!("{} ()", self.category);
        }
    }
}
