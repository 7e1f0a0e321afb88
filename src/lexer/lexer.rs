use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, MK_RULE, MK_TOKEN};

use super::tokens::{Token, TokenCategory, CATEGORY_LOOKUP, KEYWORD_LOOKUP};

pub type RuleHandler = fn(&mut Tokenizer, &Rule, String, Position) -> Option<Token>;

/// A named pattern plus its handler. Position in `RULES` is the match
/// priority.
pub struct Rule {
    pub name: &'static str,
    pub regex: Regex,
    pub handler: RuleHandler,
}

lazy_static! {
    /// The ordered rule table, shared read-only across all Tokenizer
    /// instances.
    ///
    /// Order is the disambiguation priority: at a given cursor position
    /// the first rule that matches wins, even when a later rule would
    /// match a longer lexeme. This shadows several rules (`==`, `>=`,
    /// `<=`, `<<`, `>>`, `>>>`, and the duplicate `<`); they are kept in
    /// place to reproduce the original table exactly. The catch-all rule
    /// must stay last: it matches any single character, so every byte of
    /// input is classified and the scan can never get stuck.
    static ref RULES: Vec<Rule> = vec![
        MK_RULE!("assign", "=", default_handler),
        MK_RULE!("block_comment", r"(?s)/\*.*?\*/", skip_handler),
        MK_RULE!("line_comment", r"//[^\n]*", skip_handler),
        MK_RULE!("equal", "==", default_handler),
        MK_RULE!("not_equal", "!=", default_handler),
        MK_RULE!("greater", ">", default_handler),
        MK_RULE!("greater_equal", ">=", default_handler),
        MK_RULE!("less", "<", default_handler),
        MK_RULE!("less_equal", "<=", default_handler),
        MK_RULE!("bit_or", r"\|", default_handler),
        MK_RULE!("bit_xor", r"\^", default_handler),
        MK_RULE!("bit_and", "&", default_handler),
        MK_RULE!("shift_left", "<<", default_handler),
        MK_RULE!("shift_right", ">>", default_handler),
        MK_RULE!("unsigned_shift_right", ">>>", default_handler),
        MK_RULE!("power", r"\*\*", default_handler),
        MK_RULE!("star", r"\*", default_handler),
        MK_RULE!("minus", "-", default_handler),
        MK_RULE!("plus", r"\+", default_handler),
        MK_RULE!("slash", "/", default_handler),
        MK_RULE!("percent", "%", default_handler),
        MK_RULE!("bang", "!", default_handler),
        MK_RULE!("tilde", "~", default_handler),
        MK_RULE!("binary", "0[bB](0|1)+", default_handler),
        MK_RULE!("octal", "0[oO][0-7]+", default_handler),
        MK_RULE!("hex", "0[xX][0-9a-fA-F]+", default_handler),
        MK_RULE!("false", "#f", default_handler),
        MK_RULE!("decimal", r"\d+", default_handler),
        MK_RULE!("less", "<", default_handler),
        MK_RULE!("newline", "\n", newline_handler),
        MK_RULE!("lparen", r"\(", default_handler),
        MK_RULE!("rparen", r"\)", default_handler),
        MK_RULE!("lbracket", r"\{", default_handler),
        // `}` reuses the rparen name, so it resolves to ParenClose.
        MK_RULE!("rparen", r"\}", default_handler),
        MK_RULE!("colon", ":", default_handler),
        MK_RULE!("semicolon", ";", default_handler),
        MK_RULE!("comma", ",", default_handler),
        MK_RULE!("string_double", r#""(\\.|[^"\\])*""#, string_handler),
        MK_RULE!("string_single", r"'(\\.|[^'\\])*'", string_handler),
        MK_RULE!("identifier", "[a-zA-Z]+", symbol_handler),
        MK_RULE!("whitespace", r"\s", skip_handler),
        MK_RULE!("any", r"(?s).", illegal_handler),
    ];
}

/// Single-pass scanner over one source text.
///
/// Produces tokens lazily through `Iterator`; the stream always ends with
/// exactly one EOF token, after which the iterator yields `None`.
/// Re-scanning requires a fresh Tokenizer over the same text.
pub struct Tokenizer {
    source: String,
    pos: usize,
    row: u32,
    column_start: usize,
    reached_eof: bool,
}

impl Tokenizer {
    pub fn new(source: String) -> Tokenizer {
        Tokenizer {
            source,
            pos: 0,
            row: 1,
            column_start: 0,
            reached_eof: false,
        }
    }

    fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    fn position_at(&self, offset: usize) -> Position {
        Position {
            line: self.row,
            column: (offset - self.column_start) as u32 + 1,
        }
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn next_token(&mut self) -> Option<Token> {
        loop {
            if self.at_eof() {
                if self.reached_eof {
                    return None;
                }

                self.reached_eof = true;
                let position = self.position_at(self.source.len());
                return Some(MK_TOKEN!(TokenCategory::EOF, None, position));
            }

            let mut matched: Option<(&Rule, String)> = None;

            for rule in RULES.iter() {
                let match_here = rule.regex.find(self.remainder());

                if let Some(found) = match_here {
                    if found.start() == 0 {
                        matched = Some((rule, found.as_str().to_string()));
                        break;
                    }
                }
            }

            match matched {
                Some((rule, lexeme)) => {
                    let position = self.position_at(self.pos);
                    self.pos += lexeme.len();

                    if let Some(token) = (rule.handler)(self, rule, lexeme, position) {
                        return Some(token);
                    }
                    // Skipped match (whitespace, comment, newline); keep
                    // scanning.
                }
                None => {
                    // Unreachable while the catch-all rule stays last,
                    // but classify one character as illegal rather than
                    // loop forever if the table is ever edited.
                    let position = self.position_at(self.pos);
                    let character = self.remainder().chars().next()?;
                    self.pos += character.len_utf8();
                    return Some(MK_TOKEN!(
                        TokenCategory::Illegal,
                        Some(character.to_string()),
                        position
                    ));
                }
            }
        }
    }
}

impl Iterator for Tokenizer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

fn default_handler(
    _tokenizer: &mut Tokenizer,
    rule: &Rule,
    lexeme: String,
    position: Position,
) -> Option<Token> {
    Some(MK_TOKEN!(CATEGORY_LOOKUP[rule.name], Some(lexeme), position))
}

fn symbol_handler(
    _tokenizer: &mut Tokenizer,
    _rule: &Rule,
    lexeme: String,
    position: Position,
) -> Option<Token> {
    if let Some(category) = KEYWORD_LOOKUP.get(lexeme.as_str()) {
        Some(MK_TOKEN!(*category, Some(lexeme), position))
    } else {
        Some(MK_TOKEN!(TokenCategory::Identifier, Some(lexeme), position))
    }
}

fn string_handler(
    _tokenizer: &mut Tokenizer,
    _rule: &Rule,
    lexeme: String,
    position: Position,
) -> Option<Token> {
    // The lexeme keeps its quotes and escapes; unescaping is left to the
    // consumer.
    Some(MK_TOKEN!(TokenCategory::String, Some(lexeme), position))
}

fn skip_handler(
    _tokenizer: &mut Tokenizer,
    _rule: &Rule,
    _lexeme: String,
    _position: Position,
) -> Option<Token> {
    None
}

fn newline_handler(
    tokenizer: &mut Tokenizer,
    _rule: &Rule,
    _lexeme: String,
    _position: Position,
) -> Option<Token> {
    // The cursor has already advanced past the newline, so the next
    // line starts exactly at the current position.
    tokenizer.row += 1;
    tokenizer.column_start = tokenizer.pos;
    None
}

fn illegal_handler(
    _tokenizer: &mut Tokenizer,
    _rule: &Rule,
    lexeme: String,
    position: Position,
) -> Option<Token> {
    Some(MK_TOKEN!(TokenCategory::Illegal, Some(lexeme), position))
}

/// Scans `source` to completion and collects the token stream.
pub fn tokenize(source: String) -> Vec<Token> {
    Tokenizer::new(source).collect()
}
