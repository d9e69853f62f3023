//! Tokenizer for interactive command lines.
//!
//! A line splits into whitespace-separated tokens with shell-style single
//! and double quoting, so a value containing spaces can be quoted. The
//! first token names the command. Each later token containing an unquoted
//! `=` becomes a `key=value` pair, split at the first such `=`; all other
//! tokens are positional. Values stay raw strings; numeric coercion is
//! the handlers' business.

use std::collections::BTreeMap;
use thiserror::Error;

/// Error returned for a line that cannot be tokenized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A quote opened with no matching closing quote.
    #[error("unbalanced {quote} quote")]
    UnbalancedQuote {
        /// The offending quote character.
        quote: char,
    },
}

/// A parsed command line: name, positionals, and keyword arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// The command name, lowercased for case-insensitive lookup.
    pub name: String,
    /// Positional arguments, in order.
    pub args: Vec<String>,
    /// `key=value` arguments. Keys keep the casing the user typed.
    pub kwargs: BTreeMap<String, String>,
}

// One raw token plus the position of its first unquoted `=`, if any.
// `started` distinguishes an empty quoted token ("") from no token.
#[derive(Debug, Default)]
struct Token {
    text: String,
    eq: Option<usize>,
    started: bool,
}

/// Parse a raw input line.
///
/// Returns `Ok(None)` for an empty or whitespace-only line: no command,
/// the loop just reads again.
///
/// # Example
///
/// ```
/// use magazyn::parser::parse_line;
///
/// let line = parse_line(r#"add name="Brown Sugar" quantity=5"#).unwrap().unwrap();
/// assert_eq!(line.name, "add");
/// assert!(line.args.is_empty());
/// assert_eq!(line.kwargs["name"], "Brown Sugar");
/// assert_eq!(line.kwargs["quantity"], "5");
/// ```
pub fn parse_line(line: &str) -> Result<Option<CommandLine>, ParseError> {
    let mut tokens = tokenize(line)?.into_iter();
    let Some(first) = tokens.next() else {
        return Ok(None);
    };
    let name = first.text.to_lowercase();

    let mut args = Vec::new();
    let mut kwargs = BTreeMap::new();
    for token in tokens {
        if let Some(at) = token.eq {
            let value = token.text[at + 1..].to_string();
            let mut key = token.text;
            key.truncate(at);
            kwargs.insert(key, value);
        } else {
            args.push(token.text);
        }
    }
    Ok(Some(CommandLine { name, args, kwargs }))
}

fn tokenize(line: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut current = Token::default();
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.text.push(c),
            None => match c {
                '\'' | '"' => {
                    quote = Some(c);
                    current.started = true;
                }
                '=' => {
                    if current.eq.is_none() {
                        current.eq = Some(current.text.len());
                    }
                    current.text.push('=');
                    current.started = true;
                }
                c if c.is_whitespace() => flush(&mut tokens, &mut current),
                _ => {
                    current.text.push(c);
                    current.started = true;
                }
            },
        }
    }
    if let Some(quote) = quote {
        return Err(ParseError::UnbalancedQuote { quote });
    }
    flush(&mut tokens, &mut current);
    Ok(tokens)
}

fn flush(tokens: &mut Vec<Token>, current: &mut Token) {
    if current.started {
        tokens.push(std::mem::take(current));
    }
}
