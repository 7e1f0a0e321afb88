//! Utility macros for the lexer.
//!
//! This module defines helper macros used throughout the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_RULE!` - Creates a rule table entry
//!
//! These macros reduce boilerplate in the tokenizer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$category` - The TokenCategory
/// * `$lexeme` - The matched text, as an `Option<String>` (`None` for EOF)
/// * `$position` - The 1-based line/column source position
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenCategory::Integer, Some("42".to_string()), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($category:expr, $lexeme:expr, $position:expr) => {
        Token {
            category: $category,
            lexeme: $lexeme,
            position: $position,
        }
    };
}

/// Creates an entry for the ordered rule table.
///
/// Compiles the pattern eagerly; the pattern literals are fixed at build
/// time, so a failure to compile is unreachable in a working build.
///
/// # Arguments
///
/// * `$name` - The rule name, used for category table lookup
/// * `$pattern` - The regex pattern source
/// * `$handler` - The handler invoked when this rule wins
///
/// # Example
///
/// ```ignore
/// MK_RULE!("plus", "\\+", default_handler)
/// ```
#[macro_export]
macro_rules! MK_RULE {
    ($name:literal, $pattern:literal, $handler:expr) => {
        Rule {
            name: $name,
            regex: Regex::new($pattern).unwrap(),
            handler: $handler,
        }
    };
}
