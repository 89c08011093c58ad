//! Skill catalog.
//!
//! Static reference data: every skill an investigator sheet lists, with its
//! base chance. Most bases are constants; Dodge and Language (Own) derive from
//! a characteristic.

use serde::Serialize;

use crate::value_objects::{Characteristic, Characteristics};

/// How a skill's starting chance is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "value")]
pub enum BaseValue {
    Fixed(u32),
    HalfOf(Characteristic),
    EqualTo(Characteristic),
}

impl BaseValue {
    pub fn resolve(&self, chars: &Characteristics) -> u32 {
        match self {
            Self::Fixed(value) => *value,
            Self::HalfOf(c) => chars.get(*c) / 2,
            Self::EqualTo(c) => chars.get(*c),
        }
    }

    /// Whether the base changes with characteristics.
    pub fn is_derived(&self) -> bool {
        !matches!(self, Self::Fixed(_))
    }
}

/// Skill categories for sheet grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Combat,
    Interpersonal,
    Investigation,
    Manipulation,
    Knowledge,
    Physical,
    Technical,
    Special,
    Mythos,
}

impl SkillCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Combat => "Combat",
            Self::Interpersonal => "Interpersonal",
            Self::Investigation => "Investigation",
            Self::Manipulation => "Manipulation",
            Self::Knowledge => "Knowledge",
            Self::Physical => "Physical",
            Self::Technical => "Technical",
            Self::Special => "Special",
            Self::Mythos => "Mythos",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillDefinition {
    pub name: &'static str,
    pub base: BaseValue,
    pub category: SkillCategory,
    pub requires_specialization: bool,
    pub uncommon: bool,
    pub modern: bool,
}

impl SkillDefinition {
    const fn new(name: &'static str, base: u32, category: SkillCategory) -> Self {
        Self {
            name,
            base: BaseValue::Fixed(base),
            category,
            requires_specialization: false,
            uncommon: false,
            modern: false,
        }
    }

    const fn derived(name: &'static str, base: BaseValue, category: SkillCategory) -> Self {
        Self {
            name,
            base,
            category,
            requires_specialization: false,
            uncommon: false,
            modern: false,
        }
    }

    const fn specialized(mut self) -> Self {
        self.requires_specialization = true;
        self
    }

    const fn uncommon(mut self) -> Self {
        self.uncommon = true;
        self
    }

    const fn modern(mut self) -> Self {
        self.modern = true;
        self
    }
}

use SkillCategory::*;

pub static SKILLS: &[SkillDefinition] = &[
    // Combat
    SkillDefinition::new("Throw", 20, Combat),
    SkillDefinition::new("Firearms (Handguns)", 20, Combat),
    SkillDefinition::new("Firearms (Rifles/Shotguns)", 25, Combat),
    SkillDefinition::new("Firearms (SMGs)", 15, Combat),
    SkillDefinition::new("Firearms (Machine Guns)", 10, Combat),
    SkillDefinition::new("Firearms (Flamethrower)", 10, Combat),
    SkillDefinition::new("Artillery", 1, Combat).uncommon(),
    SkillDefinition::derived("Dodge", BaseValue::HalfOf(Characteristic::Dex), Combat),
    SkillDefinition::new("Fighting (Brawl)", 25, Combat),
    SkillDefinition::new("Fighting (Whip)", 5, Combat),
    SkillDefinition::new("Fighting (Sword)", 20, Combat),
    SkillDefinition::new("Fighting (Garrote)", 15, Combat),
    SkillDefinition::new("Fighting (Spear)", 20, Combat),
    SkillDefinition::new("Fighting (Axe)", 15, Combat),
    SkillDefinition::new("Fighting (Flail)", 10, Combat),
    SkillDefinition::new("Fighting (Chainsaw)", 10, Combat),
    // Interpersonal
    SkillDefinition::new("Charm", 15, Interpersonal),
    SkillDefinition::new("Intimidate", 15, Interpersonal),
    SkillDefinition::new("Fast Talk", 5, Interpersonal),
    SkillDefinition::new("Persuade", 10, Interpersonal),
    SkillDefinition::derived(
        "Language (Own)",
        BaseValue::EqualTo(Characteristic::Edu),
        Interpersonal,
    ),
    SkillDefinition::new("Language (Other)", 1, Interpersonal).specialized(),
    // Investigation
    SkillDefinition::new("Spot Hidden", 25, Investigation),
    SkillDefinition::new("Listen", 20, Investigation),
    SkillDefinition::new("Track", 10, Investigation),
    SkillDefinition::new("Library Use", 20, Investigation),
    SkillDefinition::new("Appraise", 5, Investigation),
    // Manipulation
    SkillDefinition::new("Locksmith", 1, Manipulation),
    SkillDefinition::new("Electrical Repair", 10, Manipulation),
    SkillDefinition::new("Mechanical Repair", 10, Manipulation),
    SkillDefinition::new("Demolitions", 1, Manipulation).uncommon(),
    SkillDefinition::new("Disguise", 5, Manipulation),
    SkillDefinition::new("Electronics", 1, Manipulation).modern(),
    SkillDefinition::new("Forgery", 5, Manipulation),
    SkillDefinition::new("Photography", 5, Manipulation),
    SkillDefinition::new("Operate Heavy Machinery", 1, Manipulation),
    SkillDefinition::new("Sleight of Hand", 10, Manipulation),
    SkillDefinition::new("Computer Use", 5, Manipulation).modern(),
    // Knowledge
    SkillDefinition::new("Accounting", 5, Knowledge),
    SkillDefinition::new("Law", 5, Knowledge),
    SkillDefinition::new("History", 5, Knowledge),
    SkillDefinition::new("Medicine", 1, Knowledge),
    SkillDefinition::new("Natural World", 10, Knowledge),
    SkillDefinition::new("Occult", 5, Knowledge),
    SkillDefinition::new("Psychoanalysis", 1, Knowledge),
    SkillDefinition::new("Psychology", 10, Knowledge),
    SkillDefinition::new("First Aid", 30, Knowledge),
    SkillDefinition::new("Science (Astronomy)", 1, Knowledge).specialized(),
    SkillDefinition::new("Science (Biology)", 1, Knowledge).specialized(),
    SkillDefinition::new("Science (Botany)", 1, Knowledge).specialized(),
    SkillDefinition::new("Science (Forensics)", 1, Knowledge).specialized(),
    SkillDefinition::new("Science (Cryptography)", 1, Knowledge).specialized(),
    SkillDefinition::new("Science (Engineering)", 1, Knowledge).specialized(),
    SkillDefinition::new("Science (Pharmacy)", 1, Knowledge).specialized(),
    SkillDefinition::new("Science (Physics)", 1, Knowledge).specialized(),
    SkillDefinition::new("Science (Geology)", 1, Knowledge).specialized(),
    SkillDefinition::new("Science (Mathematics)", 1, Knowledge).specialized(),
    SkillDefinition::new("Science (Meteorology)", 1, Knowledge).specialized(),
    SkillDefinition::new("Science (Chemistry)", 1, Knowledge).specialized(),
    SkillDefinition::new("Science (Zoology)", 1, Knowledge).specialized(),
    SkillDefinition::new("Lore", 1, Knowledge).specialized().uncommon(),
    SkillDefinition::new("Art/Craft", 5, Knowledge).specialized(),
    // Physical
    SkillDefinition::new("Ride", 5, Physical),
    SkillDefinition::new("Drive Auto", 20, Physical),
    SkillDefinition::new("Climb", 20, Physical),
    SkillDefinition::new("Stealth", 20, Physical),
    SkillDefinition::new("Diving", 1, Physical),
    SkillDefinition::new("Swim", 20, Physical),
    SkillDefinition::new("Navigate", 10, Physical),
    SkillDefinition::new("Pilot", 1, Physical).specialized(),
    SkillDefinition::new("Jump", 20, Physical),
    SkillDefinition::new("Survival", 10, Physical).specialized(),
    // Technical
    SkillDefinition::new("Hypnosis", 1, Technical).uncommon(),
    SkillDefinition::new("Read Lips", 1, Technical).uncommon(),
    SkillDefinition::new("Animal Handling", 5, Technical).uncommon(),
    // Special
    SkillDefinition::new("Credit Rating", 0, Special),
    SkillDefinition::new("Cthulhu Mythos", 0, Mythos),
];

/// Look up a catalog entry by exact name.
pub fn find_skill(name: &str) -> Option<&'static SkillDefinition> {
    SKILLS.iter().find(|s| s.name == name)
}

/// Starting chance for a skill; unknown names contribute 0.
pub fn base_value(name: &str, chars: &Characteristics) -> u32 {
    match find_skill(name) {
        Some(def) => def.base.resolve(chars),
        None => {
            tracing::debug!(skill = %name, "Base value requested for unknown skill");
            0
        }
    }
}
