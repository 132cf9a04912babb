//! Lexer (tokenizer) for D-Bus type signatures
//!
//! Converts a signature string into a flat [`Token`] sequence consumed by the
//! tree builder. The grammar is strictly one token per character, so the
//! output always has exactly as many tokens as the input has characters and
//! a token's index doubles as its source position.

use crate::error::SignatureError;
use crate::parser::ast::BasicKind;

/// All token variants produced by the lexer, one per grammar character.
///
/// Thirteen basic scalar codes plus the six container/variant codes. Tokens
/// carry no payload; position is implicit in the sequence index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    // Basic scalar types
    Byte,       // y
    Boolean,    // b
    Int16,      // n
    Uint16,     // q
    Int32,      // i
    Uint32,     // u
    Int64,      // x
    Uint64,     // t
    Double,     // d
    UnixFd,     // h
    String,     // s
    ObjectPath, // o
    Signature,  // g

    // Containers and variant
    ArrayOpen,   // a
    StructOpen,  // (
    StructClose, // )
    Variant,     // v
    DictOpen,    // {
    DictClose,   // }
}

impl Token {
    /// Map a signature character to its token, or `None` for characters
    /// outside the grammar.
    pub fn from_char(ch: char) -> Option<Token> {
        match ch {
            'y' => Some(Token::Byte),
            'b' => Some(Token::Boolean),
            'n' => Some(Token::Int16),
            'q' => Some(Token::Uint16),
            'i' => Some(Token::Int32),
            'u' => Some(Token::Uint32),
            'x' => Some(Token::Int64),
            't' => Some(Token::Uint64),
            'd' => Some(Token::Double),
            'h' => Some(Token::UnixFd),
            's' => Some(Token::String),
            'o' => Some(Token::ObjectPath),
            'g' => Some(Token::Signature),
            'a' => Some(Token::ArrayOpen),
            '(' => Some(Token::StructOpen),
            ')' => Some(Token::StructClose),
            'v' => Some(Token::Variant),
            '{' => Some(Token::DictOpen),
            '}' => Some(Token::DictClose),
            _ => None,
        }
    }

    /// The signature character this token was lexed from.
    pub fn code(self) -> char {
        match self {
            Token::Byte => 'y',
            Token::Boolean => 'b',
            Token::Int16 => 'n',
            Token::Uint16 => 'q',
            Token::Int32 => 'i',
            Token::Uint32 => 'u',
            Token::Int64 => 'x',
            Token::Uint64 => 't',
            Token::Double => 'd',
            Token::UnixFd => 'h',
            Token::String => 's',
            Token::ObjectPath => 'o',
            Token::Signature => 'g',
            Token::ArrayOpen => 'a',
            Token::StructOpen => '(',
            Token::StructClose => ')',
            Token::Variant => 'v',
            Token::DictOpen => '{',
            Token::DictClose => '}',
        }
    }

    /// For a basic scalar token, the [`BasicKind`] it denotes; `None` for
    /// container and variant tokens.
    pub fn basic_kind(self) -> Option<BasicKind> {
        match self {
            Token::Byte => Some(BasicKind::Byte),
            Token::Boolean => Some(BasicKind::Boolean),
            Token::Int16 => Some(BasicKind::Int16),
            Token::Uint16 => Some(BasicKind::Uint16),
            Token::Int32 => Some(BasicKind::Int32),
            Token::Uint32 => Some(BasicKind::Uint32),
            Token::Int64 => Some(BasicKind::Int64),
            Token::Uint64 => Some(BasicKind::Uint64),
            Token::Double => Some(BasicKind::Double),
            Token::UnixFd => Some(BasicKind::UnixFd),
            Token::String => Some(BasicKind::String),
            Token::ObjectPath => Some(BasicKind::ObjectPath),
            Token::Signature => Some(BasicKind::Signature),
            Token::ArrayOpen
            | Token::StructOpen
            | Token::StructClose
            | Token::Variant
            | Token::DictOpen
            | Token::DictClose => None,
        }
    }
}

/// Tokenize an entire signature string.
///
/// Fails with [`SignatureError::InvalidCharacter`] on the first character
/// outside the grammar; no unknown token is ever handed to the builder.
pub fn tokenize(signature: &str) -> Result<Vec<Token>, SignatureError> {
    let mut tokens = Vec::with_capacity(signature.len());

    for (position, character) in signature.chars().enumerate() {
        match Token::from_char(character) {
            Some(token) => tokens.push(token),
            None => {
                return Err(SignatureError::InvalidCharacter {
                    character,
                    position,
                });
            }
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_token_per_character() {
        let tokens = tokenize("a{sv}").unwrap();
        assert_eq!(tokens.len(), 5);
        assert_eq!(
            tokens,
            vec![
                Token::ArrayOpen,
                Token::DictOpen,
                Token::String,
                Token::Variant,
                Token::DictClose,
            ]
        );
    }

    #[test]
    fn test_all_grammar_characters() {
        let tokens = tokenize("ybnqiuxtdhsoga()v{}").unwrap();
        assert_eq!(tokens.len(), 19);
        // Every token maps back to the character it was lexed from.
        let codes: String = tokens.iter().map(|t| t.code()).collect();
        assert_eq!(codes, "ybnqiuxtdhsoga()v{}");
    }

    #[test]
    fn test_scalar_tokens_carry_basic_kinds() {
        let tokens = tokenize("ybnqiuxtdhsog").unwrap();
        for token in &tokens {
            let kind = token.basic_kind().expect("scalar token");
            assert_eq!(kind.code(), token.code());
        }
        assert!(tokenize("a()v{}")
            .unwrap()
            .iter()
            .all(|t| t.basic_kind().is_none()));
    }

    #[test]
    fn test_empty_signature() {
        assert!(tokenize("").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_character() {
        let err = tokenize("iZs").unwrap_err();
        assert_eq!(
            err,
            SignatureError::InvalidCharacter {
                character: 'Z',
                position: 1
            }
        );
    }

    #[test]
    fn test_invalid_character_reported_at_first_occurrence() {
        let err = tokenize("ii?i?").unwrap_err();
        assert!(matches!(
            err,
            SignatureError::InvalidCharacter {
                character: '?',
                position: 2
            }
        ));
    }
}
