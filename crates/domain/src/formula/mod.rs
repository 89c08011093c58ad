//! Occupation skill point formulas.
//!
//! Occupation tables describe their budget as text such as
//! `"EDU × 2 + (DEX × 2 or STR × 2)"`. The text is tokenized and parsed into a
//! small expression tree; nothing is ever handed to a general evaluator.
//!
//! A parenthesized group with `or` between clauses is a choice: the player
//! picks one characteristic. Until they do, the group is stripped and the
//! budget is the conservative lower bound.

mod lexer;
mod parser;

pub use parser::Expr;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::value_objects::{Characteristic, Characteristics};

/// Multiplier of the fallback budget (Education × 4).
pub const DEFAULT_EDU_MULTIPLIER: u32 = 4;

/// Error when parsing or evaluating a formula
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    /// The formula string is empty
    #[error("Empty formula")]
    Empty,
    /// A word that is neither a characteristic nor a keyword
    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),
    /// A character outside the formula grammar
    #[error("Unexpected character '{character}' at byte {position}")]
    UnexpectedCharacter { character: char, position: usize },
    /// A token in the wrong place
    #[error("Unexpected token '{found}' at position {position}")]
    UnexpectedToken { found: String, position: usize },
    /// The formula stopped mid-expression
    #[error("Unexpected end of formula")]
    UnexpectedEnd,
    /// Missing closing parenthesis
    #[error("Unbalanced parentheses")]
    UnbalancedParentheses,
    /// Arithmetic overflow
    #[error("Formula value overflow")]
    Overflow,
    /// Parentheses nested past the parser limit
    #[error("Parentheses nested deeper than {limit}")]
    TooDeep { limit: usize },
    /// An `or` group used anywhere but as a term of the outer sum
    #[error("Choice group at position {position} must be a term of the outer sum")]
    MisplacedChoice { position: usize },
}

/// A parsed occupation formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupationFormula {
    source: String,
    expr: Expr,
}

impl OccupationFormula {
    /// Parse formula text like "EDU × 2 + (DEX × 2 or STR × 2)".
    pub fn parse(input: &str) -> Result<Self, FormulaError> {
        let tokens = lexer::tokenize(input)?;
        let expr = parser::parse(&tokens)?;
        Ok(Self {
            source: input.trim().to_string(),
            expr,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Whether the formula contains at least one `or` group.
    pub fn has_alternatives(&self) -> bool {
        contains_choice(&self.expr)
    }

    /// Characteristics the player can pick from, in formula order.
    pub fn choice_options(&self) -> Vec<Characteristic> {
        let mut options = Vec::new();
        collect_choice_options(&self.expr, &mut options);
        options
    }

    /// Evaluate against characteristics.
    ///
    /// With `choice = None` every choice group is stripped. With a choice, each
    /// group resolves to the first clause that references the chosen
    /// characteristic, or to its first clause when none does.
    pub fn evaluate(
        &self,
        chars: &Characteristics,
        choice: Option<Characteristic>,
    ) -> Result<u32, FormulaError> {
        eval(&self.expr, chars, choice)
    }
}

impl FromStr for OccupationFormula {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for OccupationFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// Result of evaluating an occupation formula for a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormulaOutcome {
    pub points: u32,
    /// The formula has an `or` group and no choice was supplied.
    pub unresolved_choice: bool,
    /// The formula could not be used and EDU × 4 was returned instead.
    pub fallback: bool,
}

/// The fallback budget: Education × 4.
pub fn default_occupation_points(chars: &Characteristics) -> u32 {
    chars.education.saturating_mul(DEFAULT_EDU_MULTIPLIER)
}

/// Evaluate formula text, never failing.
///
/// Malformed text logs a warning and yields the default EDU × 4 budget.
pub fn evaluate_occupation_points(
    formula: &str,
    chars: &Characteristics,
    choice: Option<Characteristic>,
) -> FormulaOutcome {
    let result = OccupationFormula::parse(formula).and_then(|parsed| {
        let points = parsed.evaluate(chars, choice)?;
        Ok((points, parsed.has_alternatives() && choice.is_none()))
    });

    match result {
        Ok((points, unresolved_choice)) => FormulaOutcome {
            points,
            unresolved_choice,
            fallback: false,
        },
        Err(error) => {
            tracing::warn!(
                formula = %formula,
                error = %error,
                "Could not evaluate occupation formula, falling back to EDU × 4"
            );
            FormulaOutcome {
                points: default_occupation_points(chars),
                unresolved_choice: false,
                fallback: true,
            }
        }
    }
}

fn eval(
    expr: &Expr,
    chars: &Characteristics,
    choice: Option<Characteristic>,
) -> Result<u32, FormulaError> {
    match expr {
        Expr::Number(n) => Ok(*n),
        Expr::Attribute(c) => Ok(chars.get(*c)),
        Expr::Sum(terms) => terms.iter().try_fold(0u32, |acc, term| {
            acc.checked_add(eval(term, chars, choice)?)
                .ok_or(FormulaError::Overflow)
        }),
        Expr::Product(factors) => factors.iter().try_fold(1u32, |acc, factor| {
            acc.checked_mul(eval(factor, chars, choice)?)
                .ok_or(FormulaError::Overflow)
        }),
        Expr::Choice(alternatives) => match choice {
            // Stripped: contributes nothing to the enclosing sum.
            None => Ok(0),
            Some(chosen) => {
                let picked = alternatives
                    .iter()
                    .find(|alt| alt.attributes().contains(&chosen))
                    .or_else(|| {
                        tracing::warn!(
                            choice = %chosen,
                            "Chosen characteristic not offered by formula, using first clause"
                        );
                        alternatives.first()
                    })
                    .ok_or(FormulaError::UnexpectedEnd)?;
                eval(picked, chars, choice)
            }
        },
    }
}

fn contains_choice(expr: &Expr) -> bool {
    match expr {
        Expr::Choice(_) => true,
        Expr::Sum(items) | Expr::Product(items) => items.iter().any(contains_choice),
        Expr::Number(_) | Expr::Attribute(_) => false,
    }
}

fn collect_choice_options(expr: &Expr, out: &mut Vec<Characteristic>) {
    match expr {
        Expr::Choice(alternatives) => {
            for c in alternatives.iter().flat_map(Expr::attributes) {
                if !out.contains(&c) {
                    out.push(c);
                }
            }
        }
        Expr::Sum(items) | Expr::Product(items) => {
            for item in items {
                collect_choice_options(item, out);
            }
        }
        Expr::Number(_) | Expr::Attribute(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn farmer_chars() -> Characteristics {
        Characteristics::default()
            .with(Characteristic::Edu, 60)
            .with(Characteristic::Dex, 70)
            .with(Characteristic::Str, 40)
    }

    const FARMER: &str = "EDU×2 + (DEX×2 or STR×2)";

    mod evaluation {
        use super::*;

        #[test]
        fn unresolved_choice_strips_the_group() {
            let outcome = evaluate_occupation_points(FARMER, &farmer_chars(), None);
            assert_eq!(outcome.points, 120);
            assert!(outcome.unresolved_choice);
            assert!(!outcome.fallback);
        }

        #[test]
        fn choice_picks_matching_clause() {
            let chars = farmer_chars();
            let dex = evaluate_occupation_points(FARMER, &chars, Some(Characteristic::Dex));
            let str_ = evaluate_occupation_points(FARMER, &chars, Some(Characteristic::Str));
            assert_eq!(dex.points, 260);
            assert_eq!(str_.points, 200);
            assert!(!dex.unresolved_choice);
        }

        #[test]
        fn unmatched_choice_uses_first_clause() {
            let outcome =
                evaluate_occupation_points(FARMER, &farmer_chars(), Some(Characteristic::Pow));
            assert_eq!(outcome.points, 260);
        }

        #[test]
        fn choice_is_ignored_without_alternatives() {
            let chars = farmer_chars();
            let outcome = evaluate_occupation_points("EDU × 4", &chars, Some(Characteristic::Dex));
            assert_eq!(outcome.points, 240);
            assert!(!outcome.unresolved_choice);
        }

        #[test]
        fn portuguese_abbreviations_and_keyword() {
            let chars = farmer_chars().with(Characteristic::App, 35);
            let formula = "EDU × 2 + (APA × 2 ou DES × 2 ou FOR × 2)";
            assert_eq!(
                evaluate_occupation_points(formula, &chars, Some(Characteristic::App)).points,
                190
            );
            assert_eq!(
                evaluate_occupation_points(formula, &chars, Some(Characteristic::Dex)).points,
                260
            );
            assert_eq!(evaluate_occupation_points(formula, &chars, None).points, 120);
        }

        #[test]
        fn stripped_budget_never_exceeds_any_choice() {
            let formulas = [
                FARMER,
                "EDU × 2 + (APA × 2 ou DES × 2 ou FOR × 2)",
                "EDU × 2 + (APP × 2 or POW × 2)",
            ];
            for edu in [0, 35, 80] {
                for other in [0, 45, 99] {
                    let chars = Characteristics::uniform(other).with(Characteristic::Edu, edu);
                    for formula in formulas {
                        let parsed = OccupationFormula::parse(formula).unwrap();
                        let floor = parsed.evaluate(&chars, None).unwrap();
                        for option in parsed.choice_options() {
                            assert!(floor <= parsed.evaluate(&chars, Some(option)).unwrap());
                        }
                    }
                }
            }
        }

        #[test]
        fn evaluation_is_deterministic() {
            let chars = farmer_chars();
            let first = evaluate_occupation_points(FARMER, &chars, Some(Characteristic::Str));
            let second = evaluate_occupation_points(FARMER, &chars, Some(Characteristic::Str));
            assert_eq!(first, second);
        }
    }

    mod fallback {
        use super::*;

        #[test]
        fn malformed_formula_falls_back_to_edu_times_four() {
            let chars = Characteristics::default().with(Characteristic::Edu, 55);
            for formula in ["", "EDU × (", "LUCK × 2", "EDU / 2", "process.exit()"] {
                let outcome = evaluate_occupation_points(formula, &chars, None);
                assert_eq!(outcome.points, 220, "formula {:?}", formula);
                assert!(outcome.fallback);
                assert!(!outcome.unresolved_choice);
            }
        }

        #[test]
        fn runaway_nesting_falls_back() {
            let chars = Characteristics::default();
            let formula = format!("{}EDU{}", "(".repeat(1000), ")".repeat(1000));
            let outcome = evaluate_occupation_points(&formula, &chars, None);
            assert!(outcome.fallback);
            assert_eq!(outcome.points, 200);
        }

        #[test]
        fn choice_inside_a_product_falls_back() {
            let chars = Characteristics::default().with(Characteristic::Edu, 60);
            for choice in [None, Some(Characteristic::Dex)] {
                let outcome = evaluate_occupation_points("EDU × (2 or 4)", &chars, choice);
                assert!(outcome.fallback);
                assert_eq!(outcome.points, 240);
            }
        }

        #[test]
        fn overflow_falls_back() {
            let chars = Characteristics::uniform(100);
            let outcome = evaluate_occupation_points("EDU × 4000000 × 4000000", &chars, None);
            assert!(outcome.fallback);
            assert_eq!(outcome.points, 400);
        }
    }

    mod inspection {
        use super::*;

        #[test]
        fn choice_options_in_formula_order() {
            let parsed =
                OccupationFormula::parse("EDU × 2 + (APA × 2 ou DES × 2 ou FOR × 2)").unwrap();
            assert!(parsed.has_alternatives());
            assert_eq!(
                parsed.choice_options(),
                vec![
                    Characteristic::App,
                    Characteristic::Dex,
                    Characteristic::Str
                ]
            );
        }

        #[test]
        fn plain_formula_has_no_options() {
            let parsed = OccupationFormula::parse("EDU × 2 + APP × 2").unwrap();
            assert!(!parsed.has_alternatives());
            assert!(parsed.choice_options().is_empty());
            assert_eq!(parsed.to_string(), "EDU × 2 + APP × 2");
        }
    }
}
