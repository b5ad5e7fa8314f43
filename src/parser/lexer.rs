//! Lexer for command lines
//!
//! Splits a line into words the way a POSIX shell does for simple commands:
//! - unquoted whitespace separates words
//! - '...' is taken literally
//! - "..." allows backslash escapes of `\`, `"`, `$` and backquote
//! - a backslash outside quotes escapes the next character
//!
//! Adjacent quoted and unquoted pieces join into one word, so `a"b c"d`
//! is the single word `ab cd`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    #[error("unterminated quote {quote} at column {column}")]
    UnterminatedQuote { quote: char, column: usize },

    #[error("no character to escape at end of line")]
    TrailingEscape,
}

pub struct Lexer {
    input: Vec<char>,
    pos: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            pos: 0,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(mut self) -> Result<Vec<String>, LexerError> {
        let mut words = Vec::new();
        loop {
            self.skip_whitespace();
            if self.current().is_none() {
                break;
            }
            words.push(self.read_word()?);
        }
        Ok(words)
    }

    fn current(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.current();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current(), Some(c) if c.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn read_word(&mut self) -> Result<String, LexerError> {
        let mut word = String::new();
        while let Some(c) = self.current() {
            match c {
                c if c.is_whitespace() => break,
                '\'' => self.read_single_quoted(&mut word)?,
                '"' => self.read_double_quoted(&mut word)?,
                '\\' => {
                    self.advance();
                    word.push(self.advance().ok_or(LexerError::TrailingEscape)?);
                }
                _ => {
                    word.push(c);
                    self.advance();
                }
            }
        }
        Ok(word)
    }

    fn read_single_quoted(&mut self, word: &mut String) -> Result<(), LexerError> {
        let column = self.pos + 1;
        self.advance();
        loop {
            match self.advance() {
                Some('\'') => return Ok(()),
                Some(c) => word.push(c),
                None => return Err(LexerError::UnterminatedQuote { quote: '\'', column }),
            }
        }
    }

    fn read_double_quoted(&mut self, word: &mut String) -> Result<(), LexerError> {
        let column = self.pos + 1;
        self.advance();
        loop {
            match self.advance() {
                Some('"') => return Ok(()),
                Some('\\') => match self.advance() {
                    Some(next @ ('\\' | '"' | '$' | '`')) => word.push(next),
                    Some(next) => {
                        word.push('\\');
                        word.push(next);
                    }
                    None => return Err(LexerError::UnterminatedQuote { quote: '"', column }),
                },
                Some(c) => word.push(c),
                None => return Err(LexerError::UnterminatedQuote { quote: '"', column }),
            }
        }
    }
}

/// Split a command line into words.
pub fn tokenize(line: &str) -> Result<Vec<String>, LexerError> {
    Lexer::new(line).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_command() {
        assert_eq!(tokenize("ls  /a/b ").unwrap(), vec!["ls", "/a/b"]);
        assert_eq!(tokenize("   ").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_double_quotes() {
        assert_eq!(
            tokenize("touch \"my file.txt\"").unwrap(),
            vec!["touch", "my file.txt"]
        );
        assert_eq!(tokenize(r#"x "a\"b\\c\n""#).unwrap(), vec!["x", "a\"b\\c\\n"]);
    }

    #[test]
    fn test_single_quotes() {
        assert_eq!(tokenize(r"cd 'a b\c'").unwrap(), vec!["cd", r"a b\c"]);
        assert_eq!(tokenize("x ''").unwrap(), vec!["x", ""]);
    }

    #[test]
    fn test_adjacent_pieces_join() {
        assert_eq!(tokenize(r#"a"b c"'d e'f"#).unwrap(), vec!["ab cd ef"]);
        assert_eq!(tokenize(r"a\ b").unwrap(), vec!["a b"]);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            tokenize("echo 'oops").unwrap_err(),
            LexerError::UnterminatedQuote { quote: '\'', column: 6 }
        );
        assert!(matches!(
            tokenize("echo \"oops"),
            Err(LexerError::UnterminatedQuote { quote: '"', .. })
        ));
        assert_eq!(tokenize("a\\").unwrap_err(), LexerError::TrailingEscape);
    }
}
