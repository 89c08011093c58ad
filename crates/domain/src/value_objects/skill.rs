//! A skill as it sits on a character sheet.

use serde::{Deserialize, Serialize};

use crate::catalog::SkillDefinition;
use crate::rules::PointKind;
use crate::value_objects::Characteristics;

/// One skill row: catalog base plus the points spent on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    pub base_value: u32,
    pub occupation_points: u32,
    pub personal_points: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
}

impl Skill {
    /// A fresh row with no points spent.
    pub fn from_definition(definition: &SkillDefinition, chars: &Characteristics) -> Self {
        Self {
            name: definition.name.to_string(),
            base_value: definition.base.resolve(chars),
            occupation_points: 0,
            personal_points: 0,
            specialization: None,
        }
    }

    /// Base plus both allocations. Not capped.
    pub fn total(&self) -> u32 {
        self.base_value
            .saturating_add(self.occupation_points)
            .saturating_add(self.personal_points)
    }

    pub fn points(&self, kind: PointKind) -> u32 {
        match kind {
            PointKind::Occupation => self.occupation_points,
            PointKind::Personal => self.personal_points,
        }
    }

    pub(crate) fn set_points(&mut self, kind: PointKind, points: u32) {
        match kind {
            PointKind::Occupation => self.occupation_points = points,
            PointKind::Personal => self.personal_points = points,
        }
    }

    /// Name with the specialization label, e.g. "Art/Craft (Photography)".
    pub fn display_name(&self) -> String {
        match &self.specialization {
            Some(label) => format!("{} ({})", self.name, label),
            None => self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_skill;

    #[test]
    fn total_sums_base_and_allocations() {
        let mut skill =
            Skill::from_definition(find_skill("Spot Hidden").unwrap(), &Characteristics::default());
        skill.set_points(PointKind::Occupation, 40);
        skill.set_points(PointKind::Personal, 10);
        assert_eq!(skill.total(), 75);
        assert_eq!(skill.points(PointKind::Occupation), 40);
    }

    #[test]
    fn display_name_includes_specialization() {
        let mut skill =
            Skill::from_definition(find_skill("Art/Craft").unwrap(), &Characteristics::default());
        assert_eq!(skill.display_name(), "Art/Craft");
        skill.specialization = Some("Photography".to_string());
        assert_eq!(skill.display_name(), "Art/Craft (Photography)");
    }
}
