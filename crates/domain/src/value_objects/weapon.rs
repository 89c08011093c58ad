use serde::{Deserialize, Serialize};

use crate::catalog::WeaponDefinition;

/// A weapon carried by a character, copied out of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub skill: String,
    pub damage: String,
    pub range: String,
    pub attacks: String,
    pub ammo: Option<String>,
    pub malfunction: Option<u32>,
}

impl From<&WeaponDefinition> for Weapon {
    fn from(definition: &WeaponDefinition) -> Self {
        Self {
            name: definition.name.to_string(),
            skill: definition.skill.to_string(),
            damage: definition.damage.to_string(),
            range: definition.range.to_string(),
            attacks: definition.attacks.to_string(),
            ammo: definition.ammo.map(str::to_string),
            malfunction: definition.malfunction,
        }
    }
}
