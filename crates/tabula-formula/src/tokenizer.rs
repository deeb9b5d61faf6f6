//! Formula tokenizer
//!
//! Cell text that does not start with `=` is a single Text token. Formula
//! text is scanned with a small push-back buffer; every lexical ambiguity
//! (`<` vs `<=` vs `<>`, reference vs number vs function name) is resolved by
//! look-ahead, so scanning itself never fails. Only faults of the underlying
//! character stream are reported, and scanning carries on past them.

use crate::ast::Operator;
use crate::error::ParseError;
use crate::token::{Token, TokenKind, Tokens};
use crate::value::parse_logical;
use std::io::{self, BufReader, Read};
use tabula_core::CellError;

/// Tokenize cell text
///
/// # Examples
/// ```
/// use tabula_formula::{tokenize, TokenKind};
///
/// let tokens = tokenize("=sum(A1:A10)");
/// assert_eq!(
///     tokens.kinds(),
///     vec![TokenKind::Function, TokenKind::Open, TokenKind::Range, TokenKind::Close]
/// );
/// ```
pub fn tokenize(source: &str) -> Tokens {
    Tokenizer::new(source.chars().map(Ok)).run()
}

/// Tokenize cell text read from a UTF-8 byte stream
pub fn tokenize_reader<R: Read>(reader: R) -> Tokens {
    Tokenizer::new(Utf8Chars::new(BufReader::new(reader))).run()
}

/// Streaming tokenizer over any fallible character source
pub struct Tokenizer<I> {
    chars: I,
    pushback: Vec<char>,
    position: usize,
    tokens: Vec<Token>,
    errors: Vec<ParseError>,
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

impl<I> Tokenizer<I>
where
    I: Iterator<Item = io::Result<char>>,
{
    pub fn new(chars: I) -> Self {
        Self {
            chars,
            pushback: Vec::new(),
            position: 0,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Consume the whole source
    pub fn run(mut self) -> Tokens {
        match self.read() {
            Some('=') => self.formula(),
            Some(first) => {
                let mut text = String::from(first);
                while let Some(c) = self.read() {
                    text.push(c);
                }
                self.emit(TokenKind::Text, text, 0);
            }
            None => self.emit(TokenKind::Text, "", 0),
        }

        tracing::trace!(
            tokens = self.tokens.len(),
            errors = self.errors.len(),
            "tokenized cell text"
        );

        Tokens {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    fn formula(&mut self) {
        while let Some(c) = self.read() {
            let start = self.position - 1;
            match c {
                c if c.is_whitespace() => {}
                ',' => self.emit(TokenKind::Separator, ",", start),
                '(' => self.emit(TokenKind::Open, "(", start),
                ')' => self.emit(TokenKind::Close, ")", start),
                '<' => {
                    let op = if self.next_if(|c| c == '>').is_some() {
                        Operator::Inequality
                    } else if self.next_if(|c| c == '=').is_some() {
                        Operator::LessOrEqual
                    } else {
                        Operator::LessThan
                    };
                    self.emit_operator(op, start);
                }
                '>' => {
                    let op = if self.next_if(|c| c == '=').is_some() {
                        Operator::GreaterOrEqual
                    } else {
                        Operator::GreaterThan
                    };
                    self.emit_operator(op, start);
                }
                '"' => self.text(start),
                '#' => self.error_literal(start),
                '$' => self.absolute(start),
                c if is_alpha(c) => {
                    let mut letters = String::from(c);
                    self.take_while(&mut letters, is_alpha);
                    self.after_letters(letters, start);
                }
                c if is_digit(c) => self.number(c, start),
                '.' if self.peek().map_or(false, is_digit) => self.number(c, start),
                c => match Operator::from_symbol(c.encode_utf8(&mut [0; 4])) {
                    Some(op) => self.emit_operator(op, start),
                    None => self.emit(TokenKind::Unknown, c.to_string(), start),
                },
            }
        }
    }

    /// Letters have been read: function call, reference, logical or unknown
    fn after_letters(&mut self, letters: String, start: usize) {
        match self.peek() {
            Some('(') => self.function(letters, start),
            Some(c) if is_digit(c) || c == '$' => self.cell_reference(letters, start),
            Some(':') => self.second_half(letters, start),
            _ => {
                let kind = if parse_logical(&letters).is_some() {
                    TokenKind::Logical
                } else {
                    TokenKind::Unknown
                };
                self.emit(kind, letters, start);
            }
        }
    }

    /// A name directly followed by `(`; the paren becomes its own Open token
    fn function(&mut self, name: String, start: usize) {
        self.read();
        let open = self.position - 1;
        self.emit(TokenKind::Function, name, start);
        self.emit(TokenKind::Open, "(", open);
    }

    /// Column letters followed by a row: `A1`, `A$1`, or the first half of `A1:B2`
    fn cell_reference(&mut self, mut text: String, start: usize) {
        let absolute_row = self.next_if(|c| c == '$').is_some();
        let digits = self.take_while(&mut text, is_digit);
        if digits == 0 {
            // `A$` with no row is not a reference
            text.push('$');
            self.emit(TokenKind::Unknown, text, start);
            return;
        }
        match self.peek() {
            // names with digits, e.g. LOG10(
            Some('(') if !absolute_row => self.function(text, start),
            Some(':') => self.second_half(text, start),
            _ => self.emit(TokenKind::Range, text, start),
        }
    }

    /// The `:` and whatever reference follows it
    fn second_half(&mut self, mut text: String, start: usize) {
        if let Some(colon) = self.next_if(|c| c == ':') {
            text.push(colon);
        }
        self.next_if(|c| c == '$');
        self.take_while(&mut text, is_alpha);
        self.next_if(|c| c == '$');
        self.take_while(&mut text, is_digit);
        self.emit(TokenKind::Range, text, start);
    }

    /// A `$` outside a reference body: `$A$1`, `$A:$C`, `$1:$5`
    fn absolute(&mut self, start: usize) {
        let mut text = String::new();
        match self.peek() {
            Some(c) if is_alpha(c) => {
                self.take_while(&mut text, is_alpha);
                self.after_letters(text, start);
            }
            Some(c) if is_digit(c) => {
                self.take_while(&mut text, is_digit);
                if self.peek() == Some(':') {
                    self.second_half(text, start);
                } else {
                    self.emit(TokenKind::Unknown, format!("${}", text), start);
                }
            }
            _ => self.emit(TokenKind::Unknown, "$", start),
        }
    }

    /// Digits, or a leading `.`: number literal or whole-row reference
    fn number(&mut self, first: char, start: usize) {
        let mut text = String::from(first);
        if first != '.' {
            self.take_while(&mut text, is_digit);
            if self.peek() == Some(':') {
                self.second_half(text, start);
                return;
            }
            if let Some(dot) = self.next_if(|c| c == '.') {
                text.push(dot);
            }
        }
        self.take_while(&mut text, is_digit);
        self.exponent(&mut text);
        self.emit(TokenKind::Number, text, start);
    }

    /// Optional `e[+-]digits`; nothing is consumed unless digits follow
    fn exponent(&mut self, text: &mut String) {
        let Some(e) = self.next_if(|c| c == 'e' || c == 'E') else {
            return;
        };
        let sign = self.next_if(|c| c == '+' || c == '-');

        let mut digits = String::new();
        if self.take_while(&mut digits, is_digit) == 0 {
            if let Some(sign) = sign {
                self.unread(sign);
            }
            self.unread(e);
            return;
        }

        text.push(e);
        text.extend(sign);
        text.push_str(&digits);
    }

    /// A `"` has been read; `""` inside the literal is one quote
    fn text(&mut self, start: usize) {
        let mut text = String::new();
        loop {
            match self.read() {
                Some('"') => {
                    if self.next_if(|c| c == '"').is_some() {
                        text.push('"');
                    } else {
                        break;
                    }
                }
                Some(c) => text.push(c),
                None => {
                    self.errors
                        .push(ParseError::new(start, "unterminated text literal"));
                    break;
                }
            }
        }
        self.emit(TokenKind::Text, text, start);
    }

    fn error_literal(&mut self, start: usize) {
        let mut text = String::from('#');
        self.take_while(&mut text, |c| {
            c.is_ascii_alphanumeric() || matches!(c, '/' | '!' | '?')
        });
        let kind = if CellError::parse(&text).is_some() {
            TokenKind::Error
        } else {
            TokenKind::Unknown
        };
        self.emit(kind, text, start);
    }

    fn emit<S: Into<String>>(&mut self, kind: TokenKind, text: S, position: usize) {
        self.tokens.push(Token::new(kind, text, position));
    }

    fn emit_operator(&mut self, op: Operator, position: usize) {
        self.tokens.push(Token::operator(op, position));
    }

    /// Next character; stream faults are recorded and skipped
    fn read(&mut self) -> Option<char> {
        if let Some(c) = self.pushback.pop() {
            self.position += 1;
            return Some(c);
        }
        loop {
            match self.chars.next()? {
                Ok(c) => {
                    self.position += 1;
                    return Some(c);
                }
                Err(err) => {
                    tracing::debug!(position = self.position, %err, "formula read fault");
                    self.errors.push(ParseError::new(
                        self.position,
                        format!("read failed: {}", err),
                    ));
                }
            }
        }
    }

    fn unread(&mut self, c: char) {
        self.position = self.position.saturating_sub(1);
        self.pushback.push(c);
    }

    fn peek(&mut self) -> Option<char> {
        let c = self.read()?;
        self.unread(c);
        Some(c)
    }

    fn next_if(&mut self, pred: impl Fn(char) -> bool) -> Option<char> {
        let c = self.read()?;
        if pred(c) {
            Some(c)
        } else {
            self.unread(c);
            None
        }
    }

    /// Append matching characters to `text`, returning how many were taken
    fn take_while(&mut self, text: &mut String, pred: impl Fn(char) -> bool) -> usize {
        let mut taken = 0;
        while let Some(c) = self.next_if(&pred) {
            text.push(c);
            taken += 1;
        }
        taken
    }
}

/// Decodes UTF-8 from a byte stream, one character at a time
///
/// An invalid sequence yields an `InvalidData` error and decoding resumes
/// with the next byte. An I/O error or a sequence cut short by the end of the
/// stream ends the iteration after reporting it.
pub struct Utf8Chars<R> {
    bytes: io::Bytes<R>,
    done: bool,
}

impl<R: Read> Utf8Chars<R> {
    pub fn new(reader: R) -> Self {
        Self {
            bytes: reader.bytes(),
            done: false,
        }
    }

    fn fail(&mut self, err: io::Error) -> Option<io::Result<char>> {
        self.done = true;
        Some(Err(err))
    }
}

impl<R: Read> Iterator for Utf8Chars<R> {
    type Item = io::Result<char>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let first = match self.bytes.next()? {
            Ok(b) => b,
            Err(err) => return self.fail(err),
        };
        let width = match first {
            0x00..=0x7F => return Some(Ok(char::from(first))),
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => {
                return Some(Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("invalid UTF-8 lead byte 0x{:02X}", first),
                )))
            }
        };

        let mut buf = [first, 0, 0, 0];
        for slot in buf.iter_mut().take(width).skip(1) {
            match self.bytes.next() {
                Some(Ok(b)) => *slot = b,
                Some(Err(err)) => return self.fail(err),
                None => {
                    return self.fail(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "truncated UTF-8 sequence",
                    ))
                }
            }
        }

        let decoded = std::str::from_utf8(&buf[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "invalid UTF-8 sequence"));
        Some(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(tokens: &Tokens) -> Vec<&str> {
        tokens.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_single_reference() {
        let tokens = tokenize("=A1");
        assert_eq!(tokens.tokens, vec![Token::new(TokenKind::Range, "A1", 1)]);
        assert!(tokens.errors.is_empty());
    }

    #[test]
    fn test_function_call() {
        let tokens = tokenize("=sum(A1:A10)");
        assert_eq!(
            tokens.kinds(),
            vec![
                TokenKind::Function,
                TokenKind::Open,
                TokenKind::Range,
                TokenKind::Close
            ]
        );
        assert_eq!(texts(&tokens), vec!["sum", "(", "A1:A10", ")"]);
    }

    #[test]
    fn test_column_range_plus_number() {
        let tokens = tokenize("=sum(A:A) + 2.0");
        assert_eq!(tokens.len(), 6);
        assert_eq!(texts(&tokens), vec!["sum", "(", "A:A", ")", "+", "2.0"]);
        assert_eq!(tokens.tokens[4].operator, Some(Operator::Addition));
        assert_eq!(tokens.tokens[5].kind, TokenKind::Number);
    }

    #[test]
    fn test_not_a_formula() {
        let tokens = tokenize("hello, world");
        assert_eq!(
            tokens.tokens,
            vec![Token::new(TokenKind::Text, "hello, world", 0)]
        );
        assert_eq!(
            tokenize("").tokens,
            vec![Token::new(TokenKind::Text, "", 0)]
        );
    }

    #[test]
    fn test_comparison_lookahead() {
        let ops = |s: &str| -> Vec<Option<Operator>> {
            tokenize(s).tokens.iter().map(|t| t.operator).collect()
        };
        assert_eq!(ops("=1<>2")[1], Some(Operator::Inequality));
        assert_eq!(ops("=1<=2")[1], Some(Operator::LessOrEqual));
        assert_eq!(ops("=1<2")[1], Some(Operator::LessThan));
        assert_eq!(ops("=1>=2")[1], Some(Operator::GreaterOrEqual));
        assert_eq!(ops("=1>2")[1], Some(Operator::GreaterThan));
        assert_eq!(ops("=1=2")[1], Some(Operator::Equality));
        assert_eq!(tokenize("=1<2").len(), 3);
    }

    #[test]
    fn test_absolute_markers_dropped() {
        assert_eq!(texts(&tokenize("=$A$1:$B$2")), vec!["A1:B2"]);
        assert_eq!(texts(&tokenize("=$A:$C")), vec!["A:C"]);
        assert_eq!(texts(&tokenize("=$1:$5")), vec!["1:5"]);
        assert_eq!(texts(&tokenize("=A$3")), vec!["A3"]);
        assert!(tokenize("=$A$1")
            .tokens
            .iter()
            .all(|t| t.kind == TokenKind::Range));
    }

    #[test]
    fn test_row_range() {
        let tokens = tokenize("=1:5");
        assert_eq!(tokens.tokens, vec![Token::new(TokenKind::Range, "1:5", 1)]);
    }

    #[test]
    fn test_numbers() {
        for (source, text) in [
            ("=42", "42"),
            ("=3.25", "3.25"),
            ("=.5", ".5"),
            ("=1e5", "1e5"),
            ("=2.5E-3", "2.5E-3"),
        ] {
            let tokens = tokenize(source);
            assert_eq!(tokens.tokens, vec![Token::new(TokenKind::Number, text, 1)]);
        }
        // exponent marker without digits is left for the next token
        assert_eq!(
            tokenize("=3e").kinds(),
            vec![TokenKind::Number, TokenKind::Unknown]
        );
    }

    #[test]
    fn test_text_literal() {
        let tokens = tokenize(r#"="say ""hi""" & "x""#);
        assert_eq!(
            tokens.kinds(),
            vec![TokenKind::Text, TokenKind::Operator, TokenKind::Text]
        );
        assert_eq!(tokens.tokens[0].text, r#"say "hi""#);

        let unterminated = tokenize(r#"="abc"#);
        assert_eq!(unterminated.tokens[0].text, "abc");
        assert_eq!(unterminated.errors.len(), 1);
    }

    #[test]
    fn test_error_and_logical_literals() {
        let tokens = tokenize("=#DIV/0! & #N/A & #BOGUS & TRUE & false");
        assert_eq!(
            tokens.kinds(),
            vec![
                TokenKind::Error,
                TokenKind::Operator,
                TokenKind::Error,
                TokenKind::Operator,
                TokenKind::Unknown,
                TokenKind::Operator,
                TokenKind::Logical,
                TokenKind::Operator,
                TokenKind::Logical,
            ]
        );
    }

    #[test]
    fn test_names() {
        assert_eq!(
            tokenize("=LOG10(100)").kinds(),
            vec![
                TokenKind::Function,
                TokenKind::Open,
                TokenKind::Number,
                TokenKind::Close
            ]
        );
        assert_eq!(tokenize("=foo").kinds(), vec![TokenKind::Unknown]);
        assert_eq!(
            tokenize("=true()").kinds(),
            vec![TokenKind::Function, TokenKind::Open, TokenKind::Close]
        );
    }

    #[test]
    fn test_whitespace_and_positions() {
        let tokens = tokenize("=A1 +  2");
        let positions: Vec<usize> = tokens.tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![1, 4, 7]);

        let tokens = tokenize("=A1 A2");
        assert_eq!(texts(&tokens), vec!["A1", "A2"]);
    }

    #[test]
    fn test_unknown_character() {
        let tokens = tokenize("=1@2");
        assert_eq!(
            tokens.kinds(),
            vec![TokenKind::Number, TokenKind::Unknown, TokenKind::Number]
        );
        assert!(tokens.errors.is_empty());
    }

    #[test]
    fn test_reader_matches_str() {
        let source = "=sum(A1:B2, 3) & \"héllo\"";
        assert_eq!(tokenize_reader(source.as_bytes()), tokenize(source));
    }

    #[test]
    fn test_reader_invalid_utf8() {
        let tokens = tokenize_reader(&b"=1+\xFF2"[..]);
        assert_eq!(texts(&tokens), vec!["1", "+", "2"]);
        assert_eq!(tokens.errors.len(), 1);
        assert_eq!(tokens.errors[0].position, 3);
    }

    #[test]
    fn test_reader_truncated_sequence() {
        let tokens = tokenize_reader(&b"=\"ab\xC3"[..]);
        assert_eq!(tokens.tokens[0].text, "ab");
        // the truncated sequence plus the unterminated literal
        assert_eq!(tokens.errors.len(), 2);
    }

    /// Yields its bytes, then fails
    struct FailingReader {
        bytes: &'static [u8],
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.bytes.is_empty() {
                return Err(io::Error::new(io::ErrorKind::Other, "disk gone"));
            }
            let n = self.bytes.len().min(buf.len());
            buf[..n].copy_from_slice(&self.bytes[..n]);
            self.bytes = &self.bytes[n..];
            Ok(n)
        }
    }

    #[test]
    fn test_reader_io_error_keeps_earlier_tokens() {
        let tokens = tokenize_reader(FailingReader { bytes: b"=1+" });
        assert_eq!(texts(&tokens), vec!["1", "+"]);
        assert_eq!(
            tokens.kinds(),
            vec![TokenKind::Number, TokenKind::Operator]
        );
        assert_eq!(tokens.errors.len(), 1);
        assert_eq!(tokens.errors[0].position, 3);
        assert!(tokens.errors[0].message.starts_with("read failed"));
        assert!(tokens.errors[0].message.contains("disk gone"));
    }

    #[test]
    fn test_dangling_absolute_marker_kept() {
        let tokens = tokenize("=A$");
        assert_eq!(tokens.tokens, vec![Token::new(TokenKind::Unknown, "A$", 1)]);

        let tokens = tokenize("=A$+1");
        assert_eq!(texts(&tokens), vec!["A$", "+", "1"]);
        assert_eq!(tokens.kinds()[0], TokenKind::Unknown);
    }
}
