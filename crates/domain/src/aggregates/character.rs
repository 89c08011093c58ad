//! Character aggregate - one investigator sheet
//!
//! # Consistency
//!
//! Every mutation leaves the sheet fully recomputed:
//! - Derived stats follow the characteristics (see `DerivedStats::recompute`)
//! - Characteristic-based skill bases (Dodge, Language (Own)) follow too
//! - Both skill budgets are re-evaluated whenever their inputs change
//! - Switching occupation zeroes occupation points and keeps personal points
//!
//! Overspending a budget is not an error. The usage queries report it and
//! the caller decides how to show it.
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: state is only reachable through methods
//! - **Closed field enums** instead of string-keyed updates
//! - **Domain events**: mutations return `CharacterUpdate`

use serde::{Deserialize, Serialize};

use crate::catalog::{find_occupation, find_skill, find_weapon, Occupation, SKILLS};
use crate::error::DomainError;
use crate::events::CharacterUpdate;
use crate::formula::OccupationFormula;
use crate::rules::{
    check_success, percentile_chance, recompute_budgets, resolve_skill, BudgetUsage, PointKind,
    SkillBudget, SuccessLevel,
};
use crate::value_objects::{
    Backstory, BackstoryField, BasicInfo, BasicInfoField, Characteristic, Characteristics,
    DerivedStatField, DerivedStats, Skill, Status, StatusFlag, StatusNote, Weapon,
    MAX_CHARACTERISTIC,
};

/// An investigator character sheet.
///
/// # Example
///
/// ```
/// use investigator_domain::aggregates::Character;
/// use investigator_domain::value_objects::Characteristic;
///
/// let mut character = Character::new();
/// character.set_characteristic(Characteristic::Edu, 55).unwrap();
///
/// assert_eq!(character.occupation_skill_points(), 220);
/// assert_eq!(character.derived_stats().max_hit_points, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    basic_info: BasicInfo,
    characteristics: Characteristics,
    derived_stats: DerivedStats,
    skills: Vec<Skill>,
    weapons: Vec<Weapon>,
    backstory: Backstory,
    status: Status,

    // Cached budget totals
    occupation_skill_points: u32,
    personal_interest_points: u32,

    selected_occupation_skills: Vec<String>,
    occupation_points_choice: Option<Characteristic>,
}

impl Character {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// A blank sheet: every characteristic at 50 and the full skill catalog.
    pub fn new() -> Self {
        let characteristics = Characteristics::default();
        let budget = recompute_budgets(&characteristics, None, None);
        Self {
            basic_info: BasicInfo::default(),
            characteristics,
            derived_stats: DerivedStats::compute(&characteristics),
            skills: SKILLS
                .iter()
                .map(|definition| Skill::from_definition(definition, &characteristics))
                .collect(),
            weapons: Vec::new(),
            backstory: Backstory::default(),
            status: Status::default(),
            occupation_skill_points: budget.occupation_points,
            personal_interest_points: budget.personal_interest_points,
            selected_occupation_skills: Vec::new(),
            occupation_points_choice: None,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn basic_info(&self) -> &BasicInfo {
        &self.basic_info
    }

    pub fn name(&self) -> &str {
        &self.basic_info.name
    }

    pub fn characteristics(&self) -> &Characteristics {
        &self.characteristics
    }

    pub fn derived_stats(&self) -> &DerivedStats {
        &self.derived_stats
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn skill(&self, name: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.name == name)
    }

    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    pub fn backstory(&self) -> &Backstory {
        &self.backstory
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn occupation_skill_points(&self) -> u32 {
        self.occupation_skill_points
    }

    pub fn personal_interest_points(&self) -> u32 {
        self.personal_interest_points
    }

    pub fn selected_occupation_skills(&self) -> &[String] {
        &self.selected_occupation_skills
    }

    pub fn occupation_points_choice(&self) -> Option<Characteristic> {
        self.occupation_points_choice
    }

    /// The selected catalog occupation, if any.
    pub fn occupation(&self) -> Option<&'static Occupation> {
        if self.basic_info.occupation.is_empty() {
            return None;
        }
        find_occupation(&self.basic_info.occupation)
    }

    // =========================================================================
    // Skill queries
    // =========================================================================

    /// Stored total for a skill; unknown names count as 0.
    pub fn skill_total(&self, name: &str) -> u32 {
        self.skill(name).map(Skill::total).unwrap_or(0)
    }

    /// Total capped into the percentile range for rolling.
    pub fn skill_chance(&self, name: &str) -> u32 {
        percentile_chance(self.skill_total(name))
    }

    /// Grade a d100 roll against a skill.
    pub fn check_skill(&self, name: &str, roll: u32) -> SuccessLevel {
        check_success(roll, self.skill_chance(name))
    }

    /// Whether a skill counts as occupational.
    ///
    /// Matches an entry exactly, or as a family prefix: a selected "Firearms"
    /// covers "Firearms (Handguns)".
    pub fn is_occupation_skill(&self, name: &str) -> bool {
        covers(&self.selected_occupation_skills, name)
    }

    /// Occupation points spent across all skills, saturating at `u32::MAX`.
    pub fn occupation_points_used(&self) -> u32 {
        self.skills
            .iter()
            .fold(0u32, |used, s| used.saturating_add(s.occupation_points))
    }

    pub fn personal_points_used(&self) -> u32 {
        self.skills
            .iter()
            .fold(0u32, |used, s| used.saturating_add(s.personal_points))
    }

    pub fn occupation_budget(&self) -> BudgetUsage {
        BudgetUsage::new(self.occupation_points_used(), self.occupation_skill_points)
    }

    pub fn personal_budget(&self) -> BudgetUsage {
        BudgetUsage::new(self.personal_points_used(), self.personal_interest_points)
    }

    pub fn budget_usage(&self, kind: PointKind) -> BudgetUsage {
        match kind {
            PointKind::Occupation => self.occupation_budget(),
            PointKind::Personal => self.personal_budget(),
        }
    }

    /// The occupation formula offers a choice that has not been made.
    pub fn has_unresolved_occupation_choice(&self) -> bool {
        self.occupation_points_choice.is_none() && !self.occupation_choice_options().is_empty()
    }

    /// Characteristics the player may pick for the occupation's alternative group.
    pub fn occupation_choice_options(&self) -> Vec<Characteristic> {
        self.occupation()
            .and_then(|occupation| OccupationFormula::parse(occupation.skill_points).ok())
            .map(|formula| formula.choice_options())
            .unwrap_or_default()
    }

    // =========================================================================
    // Weapon queries
    // =========================================================================

    /// Chance with the weapon at `index`, through the skill resolver.
    ///
    /// A skill reference that resolves to nothing yields 0.
    pub fn weapon_skill_value(&self, index: usize) -> Result<u32, DomainError> {
        let weapon = self
            .weapons
            .get(index)
            .ok_or_else(|| DomainError::not_found("Weapon", index.to_string()))?;
        let names: Vec<&str> = self.skills.iter().map(|s| s.name.as_str()).collect();
        Ok(resolve_skill(&weapon.skill, &names)
            .map(|resolution| self.skill_total(resolution.name))
            .unwrap_or(0))
    }

    // =========================================================================
    // Characteristics and occupation
    // =========================================================================

    /// Replace one characteristic and recompute everything that depends on it.
    pub fn set_characteristic(
        &mut self,
        characteristic: Characteristic,
        value: i32,
    ) -> Result<CharacterUpdate, DomainError> {
        let to = u32::try_from(value).map_err(|_| {
            DomainError::validation(format!("{} cannot be negative: {}", characteristic, value))
        })?;
        if to > MAX_CHARACTERISTIC {
            tracing::debug!(
                characteristic = %characteristic,
                value = to,
                "Characteristic above the percentile range"
            );
        }

        let from = self.characteristics.get(characteristic);
        self.characteristics = self.characteristics.with(characteristic, to);
        self.derived_stats = self.derived_stats.recompute(&self.characteristics);
        self.refresh_skill_bases();
        let budget = self.refresh_budgets();

        Ok(CharacterUpdate::CharacteristicChanged {
            characteristic,
            from,
            to,
            budget,
        })
    }

    /// Switch occupation.
    ///
    /// Resets the alternative choice, replaces the occupational skill set with
    /// the occupation's suggestions and zeroes every occupation allocation.
    /// Personal allocations are untouched.
    pub fn select_occupation(&mut self, name: &str) -> Result<CharacterUpdate, DomainError> {
        let occupation =
            find_occupation(name).ok_or_else(|| DomainError::not_found("Occupation", name))?;

        let from = self.current_occupation_name();
        self.basic_info.occupation = occupation.name.to_string();
        self.occupation_points_choice = None;
        self.selected_occupation_skills = occupation
            .suggested_skills
            .iter()
            .map(|s| s.to_string())
            .collect();
        self.zero_occupation_points(|_| true);
        let budget = self.refresh_budgets();

        tracing::debug!(
            occupation = %occupation.name,
            occupation_points = budget.occupation_points,
            unresolved_choice = budget.unresolved_choice,
            "Occupation selected"
        );

        Ok(CharacterUpdate::OccupationSelected {
            from,
            to: occupation.name.to_string(),
            budget,
        })
    }

    /// Drop the occupation: EDU × 4 budget, no occupational skills.
    pub fn clear_occupation(&mut self) -> CharacterUpdate {
        let from = self.current_occupation_name();
        self.basic_info.occupation.clear();
        self.occupation_points_choice = None;
        self.selected_occupation_skills.clear();
        self.zero_occupation_points(|_| true);
        let budget = self.refresh_budgets();
        CharacterUpdate::OccupationCleared { from, budget }
    }

    /// Record which characteristic the occupation's alternative group uses.
    ///
    /// `None` strips the group again. A characteristic the formula does not
    /// offer is accepted and evaluated against the first alternative.
    pub fn apply_occupation_choice(
        &mut self,
        choice: Option<Characteristic>,
    ) -> Result<CharacterUpdate, DomainError> {
        if self.occupation().is_none() {
            return Err(DomainError::validation(
                "Cannot apply an occupation choice without an occupation",
            ));
        }
        self.occupation_points_choice = choice;
        let budget = self.refresh_budgets();
        Ok(CharacterUpdate::OccupationChoiceApplied { choice, budget })
    }

    /// Pick the free occupational skills on top of the occupation's suggestions.
    ///
    /// Suggested skills always stay selected. Skills that leave the set lose
    /// their occupation points.
    pub fn select_occupation_skills(
        &mut self,
        extra: Vec<String>,
    ) -> Result<CharacterUpdate, DomainError> {
        let occupation = self.occupation().ok_or_else(|| {
            DomainError::validation("Cannot select occupation skills without an occupation")
        })?;

        let mut picks: Vec<String> = Vec::new();
        for name in extra {
            let family = [name.clone()];
            if find_skill(&name).is_none() && !SKILLS.iter().any(|s| covers(&family, s.name)) {
                return Err(DomainError::not_found("Skill", name));
            }
            if occupation.suggested_skills.contains(&name.as_str()) || picks.contains(&name) {
                continue;
            }
            picks.push(name);
        }

        let allowed = occupation.choice_count();
        if picks.len() > allowed {
            return Err(DomainError::validation(format!(
                "{} allows {} extra occupation skills, got {}",
                occupation.name,
                allowed,
                picks.len()
            )));
        }

        self.selected_occupation_skills = occupation
            .suggested_skills
            .iter()
            .map(|s| s.to_string())
            .chain(picks)
            .collect();

        let selected = self.selected_occupation_skills.clone();
        let cleared = self.zero_occupation_points(|name| !covers(&selected, name));

        Ok(CharacterUpdate::OccupationSkillsSelected {
            skills: self.selected_occupation_skills.clone(),
            cleared,
        })
    }

    // =========================================================================
    // Skills
    // =========================================================================

    /// Set the occupation or personal points on a skill.
    ///
    /// Negative points are rejected. Going over budget is allowed and reported
    /// through `over_budget`.
    pub fn allocate_skill_points(
        &mut self,
        skill: &str,
        points: i32,
        kind: PointKind,
    ) -> Result<CharacterUpdate, DomainError> {
        let to = u32::try_from(points)
            .map_err(|_| DomainError::invalid_allocation(skill, points))?;
        let row = self
            .skills
            .iter_mut()
            .find(|s| s.name == skill)
            .ok_or_else(|| DomainError::not_found("Skill", skill))?;

        let from = row.points(kind);
        row.set_points(kind, to);
        let over_budget = self.budget_usage(kind).is_over_budget();

        Ok(CharacterUpdate::SkillPointsAllocated {
            skill: skill.to_string(),
            kind,
            from,
            to,
            over_budget,
        })
    }

    /// Label a skill that takes a specialization. Blank labels clear it.
    pub fn set_specialization(
        &mut self,
        skill: &str,
        label: Option<String>,
    ) -> Result<CharacterUpdate, DomainError> {
        let definition = find_skill(skill).ok_or_else(|| DomainError::not_found("Skill", skill))?;
        if !definition.requires_specialization {
            return Err(DomainError::validation(format!(
                "{} does not take a specialization",
                skill
            )));
        }
        let row = self
            .skills
            .iter_mut()
            .find(|s| s.name == skill)
            .ok_or_else(|| DomainError::not_found("Skill", skill))?;

        let to = label
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty());
        let from = std::mem::replace(&mut row.specialization, to.clone());

        Ok(CharacterUpdate::SpecializationChanged {
            skill: skill.to_string(),
            from,
            to,
        })
    }

    // =========================================================================
    // Derived stats
    // =========================================================================

    /// Set a current value, clamped into `[0, max]`.
    pub fn set_derived_current(&mut self, field: DerivedStatField, value: i64) -> CharacterUpdate {
        let from = self.derived_stats.current(field);
        let to = self.derived_stats.set_current(field, value);
        CharacterUpdate::DerivedStatChanged { field, from, to }
    }

    /// Shift a current value by `delta`, clamped into `[0, max]`.
    pub fn adjust_derived_current(&mut self, field: DerivedStatField, delta: i64) -> CharacterUpdate {
        let from = self.derived_stats.current(field);
        let to = self.derived_stats.adjust_current(field, delta);
        CharacterUpdate::DerivedStatChanged { field, from, to }
    }

    // =========================================================================
    // Weapons
    // =========================================================================

    pub fn add_weapon(&mut self, name: &str) -> Result<CharacterUpdate, DomainError> {
        let definition = find_weapon(name).ok_or_else(|| DomainError::not_found("Weapon", name))?;
        self.weapons.push(Weapon::from(definition));
        Ok(CharacterUpdate::WeaponAdded {
            index: self.weapons.len() - 1,
            name: definition.name.to_string(),
        })
    }

    pub fn remove_weapon(&mut self, index: usize) -> Result<CharacterUpdate, DomainError> {
        if index >= self.weapons.len() {
            return Err(DomainError::not_found("Weapon", index.to_string()));
        }
        let removed = self.weapons.remove(index);
        Ok(CharacterUpdate::WeaponRemoved {
            index,
            name: removed.name,
        })
    }

    // =========================================================================
    // Free text
    // =========================================================================

    pub fn set_basic_info(&mut self, field: BasicInfoField, value: String) -> CharacterUpdate {
        let from = self.basic_info.set(field, value);
        CharacterUpdate::BasicInfoChanged {
            field,
            from,
            to: self.basic_info.get(field).to_string(),
        }
    }

    pub fn set_backstory(&mut self, field: BackstoryField, value: String) -> CharacterUpdate {
        self.backstory.set(field, value);
        CharacterUpdate::BackstoryChanged { field }
    }

    pub fn set_status_flag(&mut self, flag: StatusFlag, value: bool) -> CharacterUpdate {
        let from = self.status.set_flag(flag, value);
        CharacterUpdate::StatusFlagChanged {
            flag,
            from,
            to: value,
        }
    }

    pub fn set_status_note(&mut self, note: StatusNote, value: String) -> CharacterUpdate {
        self.status.set_note(note, value);
        CharacterUpdate::StatusNoteChanged { note }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn current_occupation_name(&self) -> Option<String> {
        Some(self.basic_info.occupation.clone()).filter(|name| !name.is_empty())
    }

    fn refresh_skill_bases(&mut self) {
        for skill in &mut self.skills {
            if let Some(definition) = find_skill(&skill.name) {
                if definition.base.is_derived() {
                    skill.base_value = definition.base.resolve(&self.characteristics);
                }
            }
        }
    }

    fn refresh_budgets(&mut self) -> SkillBudget {
        let budget = recompute_budgets(
            &self.characteristics,
            self.occupation(),
            self.occupation_points_choice,
        );
        self.occupation_skill_points = budget.occupation_points;
        self.personal_interest_points = budget.personal_interest_points;
        budget
    }

    /// Zero occupation points on matching skills, returning the names that had any.
    fn zero_occupation_points(&mut self, mut matches: impl FnMut(&str) -> bool) -> Vec<String> {
        let mut cleared = Vec::new();
        for skill in &mut self.skills {
            if skill.occupation_points > 0 && matches(&skill.name) {
                skill.occupation_points = 0;
                cleared.push(skill.name.clone());
            }
        }
        cleared
    }
}

fn covers(selected: &[String], name: &str) -> bool {
    selected.iter().any(|entry| {
        name == entry
            || name
                .strip_prefix(entry.as_str())
                .is_some_and(|rest| rest.starts_with(" ("))
    })
}

impl Default for Character {
    fn default() -> Self {
        Self::new()
    }
}
