//! Recursive-descent parser for occupation skill point formulas.
//!
//! ```text
//! sum     := product ('+' product)*
//! product := factor (('×' | '*' | 'x') factor)*
//! factor  := ATTRIBUTE | INTEGER | '(' group ')'
//! group   := sum ('or' sum)*
//! ```
//!
//! A group with more than one alternative must stand alone as a term of the
//! outermost sum: `EDU × 2 + (DEX × 2 or STR × 2)` parses,
//! `EDU × (2 or 4)` does not. Parentheses nest at most `MAX_NESTING` deep.

use super::lexer::Token;
use super::FormulaError;
use crate::value_objects::Characteristic;

/// Deepest parenthesis nesting accepted.
pub const MAX_NESTING: usize = 32;

/// Parsed formula expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Number(u32),
    Attribute(Characteristic),
    Sum(Vec<Expr>),
    Product(Vec<Expr>),
    /// Parenthesized alternatives; exactly one is taken.
    Choice(Vec<Expr>),
}

impl Expr {
    /// Characteristics referenced anywhere below this node.
    pub fn attributes(&self) -> Vec<Characteristic> {
        let mut out = Vec::new();
        self.collect_attributes(&mut out);
        out
    }

    fn collect_attributes(&self, out: &mut Vec<Characteristic>) {
        match self {
            Expr::Number(_) => {}
            Expr::Attribute(c) => {
                if !out.contains(c) {
                    out.push(*c);
                }
            }
            Expr::Sum(items) | Expr::Product(items) | Expr::Choice(items) => {
                for item in items {
                    item.collect_attributes(out);
                }
            }
        }
    }
}

pub(crate) fn parse(tokens: &[Token]) -> Result<Expr, FormulaError> {
    if tokens.is_empty() {
        return Err(FormulaError::Empty);
    }
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let expr = parser.sum()?;
    match parser.peek() {
        None => Ok(expr),
        Some(token) => Err(FormulaError::UnexpectedToken {
            found: describe(token),
            position: parser.pos,
        }),
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn sum(&mut self) -> Result<Expr, FormulaError> {
        let mut terms = vec![self.product()?];
        while self.peek() == Some(Token::Plus) {
            self.advance();
            terms.push(self.product()?);
        }
        Ok(collapse(terms, Expr::Sum))
    }

    fn product(&mut self) -> Result<Expr, FormulaError> {
        let start = self.pos;
        let mut factors = vec![self.factor()?];
        while self.peek() == Some(Token::Times) {
            self.advance();
            factors.push(self.factor()?);
        }
        if factors.len() > 1 && factors.iter().any(|f| matches!(f, Expr::Choice(_))) {
            return Err(FormulaError::MisplacedChoice { position: start });
        }
        Ok(collapse(factors, Expr::Product))
    }

    fn factor(&mut self) -> Result<Expr, FormulaError> {
        let position = self.pos;
        match self.advance() {
            Some(Token::Number(n)) => Ok(Expr::Number(n)),
            Some(Token::Attribute(c)) => Ok(Expr::Attribute(c)),
            Some(Token::LParen) => {
                if self.depth == MAX_NESTING {
                    return Err(FormulaError::TooDeep { limit: MAX_NESTING });
                }
                self.depth += 1;
                let group = self.group();
                self.depth -= 1;
                let group = group?;
                if self.depth > 0 && matches!(group, Expr::Choice(_)) {
                    return Err(FormulaError::MisplacedChoice { position });
                }
                match self.advance() {
                    Some(Token::RParen) => Ok(group),
                    Some(token) => Err(FormulaError::UnexpectedToken {
                        found: describe(token),
                        position: self.pos - 1,
                    }),
                    None => Err(FormulaError::UnbalancedParentheses),
                }
            }
            Some(token) => Err(FormulaError::UnexpectedToken {
                found: describe(token),
                position,
            }),
            None => Err(FormulaError::UnexpectedEnd),
        }
    }

    fn group(&mut self) -> Result<Expr, FormulaError> {
        let mut alternatives = vec![self.sum()?];
        while self.peek() == Some(Token::Or) {
            self.advance();
            alternatives.push(self.sum()?);
        }
        Ok(if alternatives.len() == 1 {
            alternatives.remove(0)
        } else {
            Expr::Choice(alternatives)
        })
    }
}

fn collapse(mut items: Vec<Expr>, wrap: fn(Vec<Expr>) -> Expr) -> Expr {
    if items.len() == 1 {
        items.remove(0)
    } else {
        wrap(items)
    }
}

fn describe(token: Token) -> String {
    match token {
        Token::Attribute(c) => c.as_str().to_string(),
        Token::Number(n) => n.to_string(),
        Token::Times => "×".to_string(),
        Token::Plus => "+".to_string(),
        Token::Or => "or".to_string(),
        Token::LParen => "(".to_string(),
        Token::RParen => ")".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::super::lexer::tokenize;
    use super::*;

    fn parse_str(input: &str) -> Result<Expr, FormulaError> {
        parse(&tokenize(input)?)
    }

    #[test]
    fn parses_single_product() {
        assert_eq!(
            parse_str("EDU × 4").unwrap(),
            Expr::Product(vec![Expr::Attribute(Characteristic::Edu), Expr::Number(4)])
        );
    }

    #[test]
    fn parses_choice_group() {
        let expr = parse_str("EDU × 2 + (DEX × 2 or STR × 2)").unwrap();
        let Expr::Sum(terms) = expr else {
            panic!("expected a sum");
        };
        assert_eq!(terms.len(), 2);
        let Expr::Choice(alternatives) = &terms[1] else {
            panic!("expected a choice");
        };
        assert_eq!(alternatives.len(), 2);
        assert_eq!(alternatives[0].attributes(), vec![Characteristic::Dex]);
        assert_eq!(alternatives[1].attributes(), vec![Characteristic::Str]);
    }

    #[test]
    fn plain_parentheses_are_grouping() {
        assert_eq!(
            parse_str("(EDU + DEX) × 2").unwrap(),
            Expr::Product(vec![
                Expr::Sum(vec![
                    Expr::Attribute(Characteristic::Edu),
                    Expr::Attribute(Characteristic::Dex)
                ]),
                Expr::Number(2)
            ])
        );
    }

    #[test]
    fn reports_structural_errors() {
        assert_eq!(parse_str(""), Err(FormulaError::Empty));
        assert_eq!(parse_str("EDU ×"), Err(FormulaError::UnexpectedEnd));
        assert_eq!(
            parse_str("(EDU × 2"),
            Err(FormulaError::UnbalancedParentheses)
        );
        assert!(matches!(
            parse_str("EDU × 2)"),
            Err(FormulaError::UnexpectedToken { .. })
        ));
        assert!(matches!(
            parse_str("EDU or DEX"),
            Err(FormulaError::UnexpectedToken { .. })
        ));
    }

    #[test]
    fn nesting_is_bounded() {
        let at_limit = format!("{}EDU{}", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
        assert_eq!(
            parse_str(&at_limit).unwrap(),
            Expr::Attribute(Characteristic::Edu)
        );

        let deep = format!("{}EDU{}", "(".repeat(1000), ")".repeat(1000));
        assert_eq!(
            parse_str(&deep),
            Err(FormulaError::TooDeep { limit: MAX_NESTING })
        );
    }

    #[test]
    fn choice_must_be_a_term_of_the_outer_sum() {
        assert_eq!(
            parse_str("EDU × (2 or 4)"),
            Err(FormulaError::MisplacedChoice { position: 0 })
        );
        assert_eq!(
            parse_str("EDU × 2 + (DEX or STR) × 2"),
            Err(FormulaError::MisplacedChoice { position: 4 })
        );
        assert!(matches!(
            parse_str("EDU + (DEX × 2 or (STR or APP) × 2)"),
            Err(FormulaError::MisplacedChoice { .. })
        ));
        assert!(matches!(
            parse_str("((DEX or STR))"),
            Err(FormulaError::MisplacedChoice { .. })
        ));
        assert!(matches!(
            parse_str("(DEX × 2 or STR × 2) + EDU × 2"),
            Ok(Expr::Sum(_))
        ));
    }
}
