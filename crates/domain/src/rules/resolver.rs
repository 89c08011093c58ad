//! Skill name resolution.
//!
//! Weapons and other references name skills loosely ("Firearms (Rifles)",
//! "Firearms (Pistol)") while the sheet only carries specialised entries.
//! Resolution walks an ordered rule list and stops at the first hit; a miss
//! resolves to nothing and the caller treats it as a zero chance.

use serde::Serialize;

/// A single matching strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionRule {
    /// Identical name.
    Exact,
    /// Known weapon keywords mapped to a firearms specialisation.
    CategoryKeyword,
    /// Alphanumeric-only, case-folded containment in either direction.
    NormalizedContainment,
}

/// Rules in priority order.
pub const RESOLUTION_ORDER: [ResolutionRule; 3] = [
    ResolutionRule::Exact,
    ResolutionRule::CategoryKeyword,
    ResolutionRule::NormalizedContainment,
];

/// Keyword groups checked in order. SMG comes before machine gun because
/// "submachine gun" contains both.
const CATEGORY_KEYWORDS: &[(&[&str], &str)] = &[
    (&["submachine", "smg"], "Firearms (SMGs)"),
    (&["machine gun", "machinegun"], "Firearms (Machine Guns)"),
    (&["pistol", "handgun", "revolver"], "Firearms (Handguns)"),
    (
        &["rifle", "shotgun", "bow", "carbine"],
        "Firearms (Rifles/Shotguns)",
    ),
    (&["flamethrower"], "Firearms (Flamethrower)"),
];

/// A successful resolution and the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub name: &'a str,
    pub rule: ResolutionRule,
}

impl ResolutionRule {
    pub fn apply<'a>(&self, reference: &str, candidates: &[&'a str]) -> Option<&'a str> {
        match self {
            Self::Exact => exact(reference, candidates),
            Self::CategoryKeyword => category_keyword(reference, candidates),
            Self::NormalizedContainment => normalized_containment(reference, candidates),
        }
    }
}

/// Resolve a skill reference against the given skill names.
pub fn resolve_skill<'a>(reference: &str, candidates: &[&'a str]) -> Option<Resolution<'a>> {
    let resolution = RESOLUTION_ORDER.iter().find_map(|rule| {
        rule.apply(reference, candidates)
            .map(|name| Resolution { name, rule: *rule })
    });
    if resolution.is_none() {
        tracing::debug!(reference = %reference, "Skill reference did not resolve");
    }
    resolution
}

pub fn exact<'a>(reference: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates.iter().copied().find(|name| *name == reference)
}

pub fn category_keyword<'a>(reference: &str, candidates: &[&'a str]) -> Option<&'a str> {
    let lowered = reference.to_lowercase();
    let target = CATEGORY_KEYWORDS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(_, target)| *target)?;
    exact(target, candidates)
}

pub fn normalized_containment<'a>(reference: &str, candidates: &[&'a str]) -> Option<&'a str> {
    let wanted = normalize(reference);
    if wanted.is_empty() {
        return None;
    }
    candidates.iter().copied().find(|name| {
        let candidate = normalize(name);
        !candidate.is_empty() && (candidate.contains(&wanted) || wanted.contains(&candidate))
    })
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
