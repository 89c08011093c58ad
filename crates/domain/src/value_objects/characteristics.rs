//! Characteristic value objects - the eight primary attributes of an investigator.
//!
//! Provides type safety for characteristic references instead of magic strings
//! like "STR" or "DEX". Occupation tables in the source data use two abbreviation
//! sets (international and Portuguese), so parsing accepts both.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Default value for every characteristic on a fresh character.
pub const DEFAULT_CHARACTERISTIC: u32 = 50;

/// Upper bound of the percentile domain. Not enforced, only reported.
pub const MAX_CHARACTERISTIC: u32 = 100;

/// One of the eight primary characteristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Characteristic {
    /// Strength - physical power
    #[serde(rename = "STR")]
    Str,
    /// Constitution - health and endurance
    #[serde(rename = "CON")]
    Con,
    /// Size - height and weight
    #[serde(rename = "SIZ")]
    Siz,
    /// Dexterity - agility and speed
    #[serde(rename = "DEX")]
    Dex,
    /// Appearance - attractiveness and charisma
    #[serde(rename = "APP")]
    App,
    /// Intelligence - cunning and insight
    #[serde(rename = "INT")]
    Int,
    /// Power - willpower and magical aptitude
    #[serde(rename = "POW")]
    Pow,
    /// Education - formal and practical knowledge
    #[serde(rename = "EDU")]
    Edu,
}

impl Characteristic {
    pub const ALL: [Characteristic; 8] = [
        Self::Str,
        Self::Con,
        Self::Siz,
        Self::Dex,
        Self::App,
        Self::Int,
        Self::Pow,
        Self::Edu,
    ];

    /// Returns the international abbreviation (e.g., "STR", "DEX").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Str => "STR",
            Self::Con => "CON",
            Self::Siz => "SIZ",
            Self::Dex => "DEX",
            Self::App => "APP",
            Self::Int => "INT",
            Self::Pow => "POW",
            Self::Edu => "EDU",
        }
    }

    /// Returns the full name (e.g., "Strength").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Str => "Strength",
            Self::Con => "Constitution",
            Self::Siz => "Size",
            Self::Dex => "Dexterity",
            Self::App => "Appearance",
            Self::Int => "Intelligence",
            Self::Pow => "Power",
            Self::Edu => "Education",
        }
    }

    /// Looks up an abbreviation from either abbreviation set, case-insensitive.
    ///
    /// Full names are not accepted here; the formula lexer relies on this being
    /// a strict abbreviation lookup.
    pub fn from_abbreviation(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "STR" | "FOR" => Some(Self::Str),
            "CON" => Some(Self::Con),
            "SIZ" | "TAM" => Some(Self::Siz),
            "DEX" | "DES" => Some(Self::Dex),
            "APP" | "APA" => Some(Self::App),
            "INT" => Some(Self::Int),
            "POW" | "POD" => Some(Self::Pow),
            "EDU" => Some(Self::Edu),
            _ => None,
        }
    }
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Characteristic {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(c) = Self::from_abbreviation(trimmed) {
            return Ok(c);
        }
        Self::ALL
            .into_iter()
            .find(|c| c.display_name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DomainError::parse(format!("Unknown characteristic: {}", s)))
    }
}

/// The full set of characteristics for one character.
///
/// Replaced wholesale on every edit; derived values are recomputed from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Characteristics {
    #[serde(rename = "STR")]
    pub strength: u32,
    #[serde(rename = "CON")]
    pub constitution: u32,
    #[serde(rename = "SIZ")]
    pub size: u32,
    #[serde(rename = "DEX")]
    pub dexterity: u32,
    #[serde(rename = "APP")]
    pub appearance: u32,
    #[serde(rename = "INT")]
    pub intelligence: u32,
    #[serde(rename = "POW")]
    pub power: u32,
    #[serde(rename = "EDU")]
    pub education: u32,
}

impl Characteristics {
    /// Every characteristic set to the same value.
    pub fn uniform(value: u32) -> Self {
        Self {
            strength: value,
            constitution: value,
            size: value,
            dexterity: value,
            appearance: value,
            intelligence: value,
            power: value,
            education: value,
        }
    }

    pub fn get(&self, characteristic: Characteristic) -> u32 {
        match characteristic {
            Characteristic::Str => self.strength,
            Characteristic::Con => self.constitution,
            Characteristic::Siz => self.size,
            Characteristic::Dex => self.dexterity,
            Characteristic::App => self.appearance,
            Characteristic::Int => self.intelligence,
            Characteristic::Pow => self.power,
            Characteristic::Edu => self.education,
        }
    }

    /// Returns a copy with one characteristic replaced.
    pub fn with(mut self, characteristic: Characteristic, value: u32) -> Self {
        let slot = match characteristic {
            Characteristic::Str => &mut self.strength,
            Characteristic::Con => &mut self.constitution,
            Characteristic::Siz => &mut self.size,
            Characteristic::Dex => &mut self.dexterity,
            Characteristic::App => &mut self.appearance,
            Characteristic::Int => &mut self.intelligence,
            Characteristic::Pow => &mut self.power,
            Characteristic::Edu => &mut self.education,
        };
        *slot = value;
        self
    }

    /// Characteristics above the percentile range.
    pub fn out_of_range(&self) -> Vec<Characteristic> {
        Characteristic::ALL
            .into_iter()
            .filter(|c| self.get(*c) > MAX_CHARACTERISTIC)
            .collect()
    }
}

impl Default for Characteristics {
    fn default() -> Self {
        Self::uniform(DEFAULT_CHARACTERISTIC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviations_cover_both_sets() {
        assert_eq!(Characteristic::from_abbreviation("STR"), Some(Characteristic::Str));
        assert_eq!(Characteristic::from_abbreviation("FOR"), Some(Characteristic::Str));
        assert_eq!(Characteristic::from_abbreviation("des"), Some(Characteristic::Dex));
        assert_eq!(Characteristic::from_abbreviation("POD"), Some(Characteristic::Pow));
        assert_eq!(Characteristic::from_abbreviation("TAM"), Some(Characteristic::Siz));
        assert_eq!(Characteristic::from_abbreviation("APA"), Some(Characteristic::App));
        assert_eq!(Characteristic::from_abbreviation("LUCK"), None);
    }

    #[test]
    fn test_from_str_accepts_full_names() {
        assert_eq!("Education".parse::<Characteristic>(), Ok(Characteristic::Edu));
        assert_eq!(" power ".parse::<Characteristic>(), Ok(Characteristic::Pow));
        assert!("Wisdom".parse::<Characteristic>().is_err());
    }

    #[test]
    fn test_serde_uses_abbreviations() {
        let json = serde_json::to_string(&Characteristic::Edu).unwrap();
        assert_eq!(json, "\"EDU\"");

        let chars = Characteristics::default().with(Characteristic::Dex, 70);
        let value = serde_json::to_value(chars).unwrap();
        assert_eq!(value["DEX"], 70);
        assert_eq!(value["STR"], 50);
    }

    #[test]
    fn test_with_replaces_only_one_field() {
        let chars = Characteristics::default().with(Characteristic::Siz, 80);
        assert_eq!(chars.get(Characteristic::Siz), 80);
        for c in Characteristic::ALL.into_iter().filter(|c| *c != Characteristic::Siz) {
            assert_eq!(chars.get(c), DEFAULT_CHARACTERISTIC);
        }
    }

    #[test]
    fn test_out_of_range_reports_soft_violations() {
        let chars = Characteristics::default().with(Characteristic::Pow, 105);
        assert_eq!(chars.out_of_range(), vec![Characteristic::Pow]);
    }
}
