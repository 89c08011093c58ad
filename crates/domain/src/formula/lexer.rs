//! Tokenizer for occupation skill point formulas.

use super::FormulaError;
use crate::value_objects::Characteristic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token {
    Attribute(Characteristic),
    Number(u32),
    Times,
    Plus,
    Or,
    LParen,
    RParen,
}

/// Split formula text into tokens.
///
/// Words are either a characteristic abbreviation, the alternative keyword
/// (`or`, or `ou` as the Portuguese tables write it), or a bare `x` used as a
/// multiplication sign. Anything else is rejected.
pub(crate) fn tokenize(input: &str) -> Result<Vec<Token>, FormulaError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(pos, ch)) = chars.peek() {
        match ch {
            c if c.is_whitespace() => {
                chars.next();
            }
            '×' | '*' => {
                chars.next();
                tokens.push(Token::Times);
            }
            '+' => {
                chars.next();
                tokens.push(Token::Plus);
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            c if c.is_ascii_digit() => {
                let mut value: u32 = 0;
                while let Some(&(_, d)) = chars.peek() {
                    let Some(digit) = d.to_digit(10) else { break };
                    value = value
                        .checked_mul(10)
                        .and_then(|v| v.checked_add(digit))
                        .ok_or(FormulaError::Overflow)?;
                    chars.next();
                }
                tokens.push(Token::Number(value));
            }
            c if c.is_alphabetic() => {
                let mut word = String::new();
                while let Some(&(_, w)) = chars.peek() {
                    if !w.is_alphabetic() {
                        break;
                    }
                    word.push(w);
                    chars.next();
                }
                tokens.push(classify_word(&word)?);
            }
            other => {
                return Err(FormulaError::UnexpectedCharacter {
                    character: other,
                    position: pos,
                })
            }
        }
    }

    Ok(tokens)
}

fn classify_word(word: &str) -> Result<Token, FormulaError> {
    if word.eq_ignore_ascii_case("or") || word.eq_ignore_ascii_case("ou") {
        return Ok(Token::Or);
    }
    if word.eq_ignore_ascii_case("x") {
        return Ok(Token::Times);
    }
    Characteristic::from_abbreviation(word)
        .map(Token::Attribute)
        .ok_or_else(|| FormulaError::UnknownAttribute(word.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_alternative_group() {
        let tokens = tokenize("EDU × 2 + (DEX × 2 or STR*2)").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Attribute(Characteristic::Edu),
                Token::Times,
                Token::Number(2),
                Token::Plus,
                Token::LParen,
                Token::Attribute(Characteristic::Dex),
                Token::Times,
                Token::Number(2),
                Token::Or,
                Token::Attribute(Characteristic::Str),
                Token::Times,
                Token::Number(2),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn keywords_are_case_insensitive() {
        let tokens = tokenize("(APA x 2 OU des X 2)").unwrap();
        assert!(tokens.contains(&Token::Or));
        assert_eq!(tokens.iter().filter(|t| **t == Token::Times).count(), 2);
        assert!(tokens.contains(&Token::Attribute(Characteristic::App)));
    }

    #[test]
    fn rejects_unknown_words() {
        assert_eq!(
            tokenize("LUCK × 2"),
            Err(FormulaError::UnknownAttribute("LUCK".to_string()))
        );
    }

    #[test]
    fn rejects_foreign_operators() {
        assert!(matches!(
            tokenize("EDU / 2"),
            Err(FormulaError::UnexpectedCharacter { character: '/', .. })
        ));
        assert!(matches!(
            tokenize("EDU; drop"),
            Err(FormulaError::UnexpectedCharacter { character: ';', .. })
        ));
    }

    #[test]
    fn number_overflow_is_an_error() {
        assert_eq!(tokenize("99999999999"), Err(FormulaError::Overflow));
    }
}
