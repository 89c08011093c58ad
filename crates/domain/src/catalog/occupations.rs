//! Occupation catalog.
//!
//! Each occupation carries its skill point formula as authored text; the
//! formula module turns it into a budget.

use serde::Serialize;

/// Some occupations only exist in one play era.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Era {
    Classic,
    Modern,
}

/// Inclusive credit rating range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CreditRating {
    pub min: u32,
    pub max: u32,
}

impl CreditRating {
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Pick `count` skills, from `options` when given, from anything otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillChoice {
    pub count: usize,
    pub options: &'static [&'static str],
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Occupation {
    pub name: &'static str,
    pub skill_points: &'static str,
    pub credit_rating: CreditRating,
    pub suggested_skills: &'static [&'static str],
    pub skill_choices: &'static [SkillChoice],
    pub era: Option<Era>,
}

impl Occupation {
    /// Total number of free picks across all choice groups.
    pub fn choice_count(&self) -> usize {
        self.skill_choices.iter().map(|c| c.count).sum()
    }
}

const INTERPERSONAL: &[&str] = &["Charm", "Fast Talk", "Intimidate", "Persuade"];

const fn cr(min: u32, max: u32) -> CreditRating {
    CreditRating { min, max }
}

const fn any(count: usize, description: &'static str) -> SkillChoice {
    SkillChoice {
        count,
        options: &[],
        description,
    }
}

const fn interpersonal(count: usize) -> SkillChoice {
    SkillChoice {
        count,
        options: INTERPERSONAL,
        description: "interpersonal skill",
    }
}

pub static OCCUPATIONS: &[Occupation] = &[
    Occupation {
        name: "Acrobat",
        skill_points: "EDU × 2 + DEX × 2",
        credit_rating: cr(9, 20),
        suggested_skills: &["Throw", "Spot Hidden", "Climb", "Dodge", "Swim", "Jump"],
        skill_choices: &[any(2, "two other skills of the era")],
        era: None,
    },
    Occupation {
        name: "Federal Agent",
        skill_points: "EDU × 4",
        credit_rating: cr(20, 40),
        suggested_skills: &[
            "Firearms",
            "Law",
            "Drive Auto",
            "Spot Hidden",
            "Stealth",
            "Fighting (Brawl)",
            "Persuade",
        ],
        skill_choices: &[any(1, "any one skill")],
        era: None,
    },
    Occupation {
        name: "Undertaker",
        skill_points: "EDU × 4",
        credit_rating: cr(20, 40),
        suggested_skills: &[
            "Science (Biology)",
            "Science (Chemistry)",
            "Accounting",
            "Drive Auto",
            "History",
            "Occult",
            "Psychology",
        ],
        skill_choices: &[interpersonal(1)],
        era: None,
    },
    Occupation {
        name: "Farmer",
        skill_points: "EDU × 2 + (DEX × 2 or STR × 2)",
        credit_rating: cr(9, 30),
        suggested_skills: &[
            "Art/Craft",
            "Mechanical Repair",
            "Natural World",
            "Operate Heavy Machinery",
            "Track",
        ],
        skill_choices: &[
            SkillChoice {
                count: 1,
                options: &["Drive Auto", "Ride"],
                description: "Drive Auto or Ride",
            },
            interpersonal(1),
        ],
        era: None,
    },
    Occupation {
        name: "Alienist",
        skill_points: "EDU × 4",
        credit_rating: cr(10, 60),
        suggested_skills: &[
            "Science (Biology)",
            "Science (Chemistry)",
            "Law",
            "Listen",
            "Medicine",
            "Psychoanalysis",
            "Psychology",
        ],
        skill_choices: &[any(1, "Language (Other)")],
        era: Some(Era::Classic),
    },
    Occupation {
        name: "Mountain Climber",
        skill_points: "EDU × 2 + (DEX × 2 or STR × 2)",
        credit_rating: cr(30, 60),
        suggested_skills: &[
            "Climb",
            "Listen",
            "Navigate",
            "First Aid",
            "Track",
            "Jump",
            "Survival",
        ],
        skill_choices: &[any(1, "Language (Other)")],
        era: None,
    },
    Occupation {
        name: "Drifter",
        skill_points: "EDU × 2 + (APP × 2 or DEX × 2 or STR × 2)",
        credit_rating: cr(0, 5),
        suggested_skills: &["Climb", "Listen", "Stealth", "Navigate", "Jump"],
        skill_choices: &[interpersonal(1), any(2, "any two other skills")],
        era: None,
    },
    Occupation {
        name: "Entertainer",
        skill_points: "EDU × 2 + APP × 2",
        credit_rating: cr(9, 70),
        suggested_skills: &["Disguise", "Listen", "Psychology"],
        skill_choices: &[
            any(1, "Art/Craft (specify)"),
            interpersonal(2),
            any(2, "any two other skills"),
        ],
        era: None,
    },
    Occupation {
        name: "Antiquarian",
        skill_points: "EDU × 4",
        credit_rating: cr(30, 70),
        suggested_skills: &["Appraise", "Spot Hidden", "History", "Library Use"],
        skill_choices: &[
            any(1, "Art/Craft"),
            interpersonal(1),
            any(1, "Language (Other)"),
            any(1, "any other skill"),
        ],
        era: None,
    },
    Occupation {
        name: "Gambler",
        skill_points: "EDU × 2 + (APP × 2 or DEX × 2)",
        credit_rating: cr(8, 50),
        suggested_skills: &[
            "Art/Craft",
            "Accounting",
            "Spot Hidden",
            "Listen",
            "Sleight of Hand",
            "Psychology",
        ],
        skill_choices: &[interpersonal(2)],
        era: None,
    },
    Occupation {
        name: "Archaeologist",
        skill_points: "EDU × 4",
        credit_rating: cr(10, 40),
        suggested_skills: &[
            "Appraise",
            "Mechanical Repair",
            "Spot Hidden",
            "History",
            "Library Use",
        ],
        skill_choices: &[
            any(1, "Language (Other)"),
            SkillChoice {
                count: 1,
                options: &["Navigate", "Science"],
                description: "Navigate or Science",
            },
        ],
        era: None,
    },
    Occupation {
        name: "Architect",
        skill_points: "EDU × 4",
        credit_rating: cr(30, 70),
        suggested_skills: &[
            "Art/Craft",
            "Science (Mathematics)",
            "Accounting",
            "Law",
            "Persuade",
            "Psychology",
        ],
        skill_choices: &[
            any(1, "Language (Own)"),
            SkillChoice {
                count: 1,
                options: &["Computer Use", "Library Use"],
                description: "Computer Use or Library Use",
            },
        ],
        era: None,
    },
    Occupation {
        name: "Craftsperson",
        skill_points: "EDU × 2 + DEX × 2",
        credit_rating: cr(10, 40),
        suggested_skills: &["Mechanical Repair", "Accounting", "Spot Hidden", "Natural World"],
        skill_choices: &[
            any(2, "two Art/Craft specialisations"),
            any(2, "any two other skills"),
        ],
        era: None,
    },
    Occupation {
        name: "Artist",
        skill_points: "EDU × 2 + (DEX × 2 or POW × 2)",
        credit_rating: cr(9, 50),
        suggested_skills: &["Spot Hidden", "Psychology"],
        skill_choices: &[
            any(1, "Art/Craft"),
            interpersonal(1),
            any(1, "Language (Other)"),
            SkillChoice {
                count: 1,
                options: &["History", "Natural World"],
                description: "History or Natural World",
            },
            any(2, "any two other skills"),
        ],
        era: None,
    },
    Occupation {
        name: "Asylum Attendant",
        skill_points: "EDU × 2 + (STR × 2 or DEX × 2)",
        credit_rating: cr(8, 20),
        suggested_skills: &[
            "Listen",
            "Dodge",
            "Stealth",
            "Fighting (Brawl)",
            "First Aid",
            "Psychology",
        ],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Athlete",
        skill_points: "EDU × 2 + (DEX × 2 or STR × 2)",
        credit_rating: cr(9, 70),
        suggested_skills: &["Throw", "Ride", "Climb", "Fighting (Brawl)", "Swim", "Jump"],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Stage Actor",
        skill_points: "EDU × 2 + APP × 2",
        credit_rating: cr(9, 40),
        suggested_skills: &["Art/Craft", "Disguise", "History", "Psychology"],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Film Star",
        skill_points: "EDU × 2 + APP × 2",
        credit_rating: cr(20, 90),
        suggested_skills: &["Art/Craft", "Drive Auto", "Disguise", "Psychology"],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Laboratory Assistant",
        skill_points: "EDU × 4",
        credit_rating: cr(10, 30),
        suggested_skills: &[
            "Science (Chemistry)",
            "Electrical Repair",
            "Spot Hidden",
            "Library Use",
        ],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Bartender",
        skill_points: "EDU × 2 + APP × 2",
        credit_rating: cr(8, 25),
        suggested_skills: &[
            "Accounting",
            "Spot Hidden",
            "Listen",
            "Fighting (Brawl)",
            "Psychology",
        ],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Librarian",
        skill_points: "EDU × 4",
        credit_rating: cr(9, 35),
        suggested_skills: &["Accounting", "Library Use"],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Firefighter",
        skill_points: "EDU × 2 + (DEX × 2 or STR × 2)",
        credit_rating: cr(9, 30),
        suggested_skills: &[
            "Throw",
            "Mechanical Repair",
            "Drive Auto",
            "Climb",
            "Dodge",
            "Operate Heavy Machinery",
            "First Aid",
            "Jump",
        ],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Big Game Hunter",
        skill_points: "EDU × 2 + (DEX × 2 or STR × 2)",
        credit_rating: cr(20, 50),
        suggested_skills: &[
            "Firearms",
            "Science (Biology)",
            "Stealth",
            "Natural World",
            "Navigate",
            "Track",
            "Survival",
        ],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Bounty Hunter",
        skill_points: "EDU × 2 + (DEX × 2 or STR × 2)",
        credit_rating: cr(9, 30),
        suggested_skills: &["Law", "Drive Auto", "Stealth", "Psychology", "Track"],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Gentleman/Lady",
        skill_points: "EDU × 2 + APP × 2",
        credit_rating: cr(40, 90),
        suggested_skills: &[
            "Firearms (Rifles/Shotguns)",
            "Art/Craft",
            "Ride",
            "History",
            "Navigate",
        ],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Scientist",
        skill_points: "EDU × 4",
        credit_rating: cr(9, 50),
        suggested_skills: &["Science", "Spot Hidden", "Library Use"],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Forensic Surgeon",
        skill_points: "EDU × 4",
        credit_rating: cr(40, 60),
        suggested_skills: &[
            "Science (Biology)",
            "Science (Forensics)",
            "Science (Pharmacy)",
            "Spot Hidden",
            "Medicine",
            "Persuade",
            "Library Use",
        ],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Clergy, Member of the",
        skill_points: "EDU × 4",
        credit_rating: cr(9, 60),
        suggested_skills: &["Accounting", "Listen", "History", "Psychology", "Library Use"],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Accountant",
        skill_points: "EDU × 4",
        credit_rating: cr(30, 70),
        suggested_skills: &[
            "Accounting",
            "Law",
            "Spot Hidden",
            "Listen",
            "Persuade",
            "Library Use",
        ],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Foreign Correspondent",
        skill_points: "EDU × 4",
        credit_rating: cr(10, 40),
        suggested_skills: &["Listen", "History", "Psychology"],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Cowboy/Cowgirl",
        skill_points: "EDU × 2 + (DEX × 2 or STR × 2)",
        credit_rating: cr(9, 20),
        suggested_skills: &[
            "Throw",
            "Ride",
            "Dodge",
            "First Aid",
            "Track",
            "Jump",
            "Survival",
            "Natural World",
        ],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Criminal - Assassin",
        skill_points: "EDU × 2 + (DEX × 2 or STR × 2)",
        credit_rating: cr(30, 60),
        suggested_skills: &[
            "Firearms",
            "Locksmith",
            "Electrical Repair",
            "Mechanical Repair",
            "Disguise",
            "Stealth",
            "Fighting",
            "Psychology",
        ],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Criminal - Bank Robber",
        skill_points: "EDU × 2 + (STR × 2 or DEX × 2)",
        credit_rating: cr(5, 75),
        suggested_skills: &[
            "Firearms",
            "Locksmith",
            "Drive Auto",
            "Intimidate",
            "Fighting",
            "Operate Heavy Machinery",
        ],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Criminal - Burglar",
        skill_points: "EDU × 2 + DEX × 2",
        credit_rating: cr(5, 40),
        suggested_skills: &[
            "Appraise",
            "Locksmith",
            "Spot Hidden",
            "Climb",
            "Listen",
            "Stealth",
            "Sleight of Hand",
        ],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Criminal - Con Artist",
        skill_points: "EDU × 2 + APP × 2",
        credit_rating: cr(10, 65),
        suggested_skills: &[
            "Art/Craft",
            "Appraise",
            "Law",
            "Listen",
            "Sleight of Hand",
            "Psychology",
        ],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Criminal - Forger",
        skill_points: "EDU × 4",
        credit_rating: cr(20, 60),
        suggested_skills: &[
            "Forgery",
            "Appraise",
            "Accounting",
            "Spot Hidden",
            "History",
            "Sleight of Hand",
            "Library Use",
        ],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Museum Curator",
        skill_points: "EDU × 4",
        credit_rating: cr(20, 40),
        suggested_skills: &[
            "Appraise",
            "Accounting",
            "Spot Hidden",
            "History",
            "Occult",
            "Library Use",
        ],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Designer",
        skill_points: "EDU × 4",
        credit_rating: cr(10, 40),
        suggested_skills: &[
            "Art/Craft",
            "Mechanical Repair",
            "Accounting",
            "Spot Hidden",
            "Psychology",
        ],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Deprogrammer",
        skill_points: "EDU × 4",
        credit_rating: cr(10, 30),
        suggested_skills: &["Drive Auto", "Stealth", "History", "Occult", "Psychology"],
        skill_choices: &[],
        era: Some(Era::Modern),
    },
    Occupation {
        name: "Agency Detective",
        skill_points: "EDU × 2 + (STR × 2 or DEX × 2)",
        credit_rating: cr(20, 45),
        suggested_skills: &[
            "Firearms",
            "Law",
            "Stealth",
            "Fighting (Brawl)",
            "Psychology",
            "Track",
            "Library Use",
        ],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Private Investigator",
        skill_points: "EDU × 2 + (DEX × 2 or STR × 2)",
        credit_rating: cr(9, 30),
        suggested_skills: &[
            "Photography",
            "Law",
            "Disguise",
            "Spot Hidden",
            "Psychology",
            "Library Use",
        ],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Dilettante",
        skill_points: "EDU × 2 + APP × 2",
        credit_rating: cr(50, 99),
        suggested_skills: &["Firearms", "Art/Craft", "Ride"],
        skill_choices: &[
            SkillChoice {
                count: 1,
                options: &["Art/Craft", "Firearms", "Ride"],
                description: "Art/Craft (any), Firearms or Ride",
            },
            any(1, "one other skill as a personal or era specialty"),
            interpersonal(2),
        ],
        era: None,
    },
    Occupation {
        name: "Stuntman",
        skill_points: "EDU × 2 + (DEX × 2 or STR × 2)",
        credit_rating: cr(10, 50),
        suggested_skills: &[
            "Ride",
            "Drive Auto",
            "Climb",
            "Dodge",
            "Fighting",
            "Diving",
            "Swim",
            "Pilot",
            "First Aid",
            "Jump",
        ],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Editor",
        skill_points: "EDU × 4",
        credit_rating: cr(10, 30),
        suggested_skills: &["Accounting", "Spot Hidden", "History", "Psychology"],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Nurse",
        skill_points: "EDU × 4",
        credit_rating: cr(9, 30),
        suggested_skills: &[
            "Science (Biology)",
            "Science (Chemistry)",
            "Spot Hidden",
            "Listen",
            "Medicine",
            "First Aid",
            "Psychology",
        ],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Engineer",
        skill_points: "EDU × 4",
        credit_rating: cr(30, 60),
        suggested_skills: &[
            "Art/Craft",
            "Science (Engineering)",
            "Science (Physics)",
            "Electrical Repair",
            "Mechanical Repair",
            "Operate Heavy Machinery",
            "Library Use",
        ],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Author",
        skill_points: "EDU × 4",
        credit_rating: cr(9, 30),
        suggested_skills: &["History", "Natural World", "Occult", "Psychology", "Library Use"],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Spy",
        skill_points: "EDU × 2 + (APP × 2 or DEX × 2)",
        credit_rating: cr(20, 60),
        suggested_skills: &[
            "Firearms",
            "Art/Craft",
            "Disguise",
            "Listen",
            "Stealth",
            "Sleight of Hand",
            "Psychology",
        ],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Student/Intern",
        skill_points: "EDU × 4",
        credit_rating: cr(5, 10),
        suggested_skills: &["Listen", "Library Use"],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Explorer",
        skill_points: "EDU × 2 + (APP × 2 or DEX × 2 or STR × 2)",
        credit_rating: cr(55, 80),
        suggested_skills: &[
            "Firearms",
            "Climb",
            "History",
            "Natural World",
            "Swim",
            "Navigate",
            "Jump",
            "Survival",
        ],
        skill_choices: &[],
        era: Some(Era::Classic),
    },
    Occupation {
        name: "Zealot",
        skill_points: "EDU × 2 + (APP × 2 or POW × 2)",
        credit_rating: cr(0, 30),
        suggested_skills: &["Stealth", "History", "Psychology"],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Pharmacist",
        skill_points: "EDU × 4",
        credit_rating: cr(35, 75),
        suggested_skills: &[
            "Science (Pharmacy)",
            "Science (Chemistry)",
            "Accounting",
            "First Aid",
            "Psychology",
            "Library Use",
        ],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Photographer",
        skill_points: "EDU × 4",
        credit_rating: cr(9, 30),
        suggested_skills: &[
            "Photography",
            "Science (Chemistry)",
            "Spot Hidden",
            "Stealth",
            "Psychology",
        ],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Gangster - Boss",
        skill_points: "EDU × 2 + APP × 2",
        credit_rating: cr(60, 95),
        suggested_skills: &["Firearms", "Law", "Spot Hidden", "Listen", "Fighting", "Psychology"],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Gangster - Underling",
        skill_points: "EDU × 2 + (DEX × 2 or STR × 2)",
        credit_rating: cr(9, 20),
        suggested_skills: &["Firearms", "Drive Auto", "Fighting", "Psychology"],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Waitress/Waiter",
        skill_points: "EDU × 2 + (APP × 2 or DEX × 2)",
        credit_rating: cr(9, 20),
        suggested_skills: &["Art/Craft", "Accounting", "Listen", "Dodge", "Psychology"],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Hobo",
        skill_points: "EDU × 2 + (APP × 2 or DEX × 2)",
        credit_rating: cr(0, 5),
        suggested_skills: &["Climb", "Listen", "Stealth", "Navigate", "Jump"],
        skill_choices: &[
            any(1, "Art/Craft (any)"),
            SkillChoice {
                count: 1,
                options: &["Locksmith", "Sleight of Hand"],
                description: "Locksmith or Sleight of Hand",
            },
            any(1, "any other skill as a personal or era specialty"),
        ],
        era: None,
    },
    Occupation {
        name: "Salesperson",
        skill_points: "EDU × 2 + APP × 2",
        credit_rating: cr(9, 40),
        suggested_skills: &["Accounting", "Drive Auto", "Listen", "Psychology"],
        skill_choices: &[
            interpersonal(2),
            SkillChoice {
                count: 1,
                options: &["Stealth", "Sleight of Hand"],
                description: "Stealth or Sleight of Hand",
            },
            any(1, "any other skill"),
        ],
        era: None,
    },
    Occupation {
        name: "Tribe Member",
        skill_points: "EDU × 2 + (DEX × 2 or STR × 2)",
        credit_rating: cr(0, 15),
        suggested_skills: &[
            "Spot Hidden",
            "Climb",
            "Listen",
            "Natural World",
            "Swim",
            "Occult",
            "Survival",
        ],
        skill_choices: &[
            SkillChoice {
                count: 1,
                options: &["Fighting", "Throw"],
                description: "Fighting or Throw",
            },
        ],
        era: None,
    },
    Occupation {
        name: "Prospector",
        skill_points: "EDU × 2 + (DEX × 2 or STR × 2)",
        credit_rating: cr(9, 30),
        suggested_skills: &[
            "Science (Geology)",
            "Mechanical Repair",
            "Spot Hidden",
            "Climb",
            "History",
            "Navigate",
            "First Aid",
        ],
        skill_choices: &[any(1, "any other skill as a personal or era specialty")],
        era: None,
    },
    Occupation {
        name: "Journalist",
        skill_points: "EDU × 4",
        credit_rating: cr(9, 30),
        suggested_skills: &["History", "Language (Own)", "Psychology", "Library Use"],
        skill_choices: &[
            any(1, "Art/Craft (Art or Photography)"),
            interpersonal(1),
            any(2, "any two other skills as personal or era specialties"),
        ],
        era: None,
    },
    Occupation {
        name: "Reporter",
        skill_points: "EDU × 4",
        credit_rating: cr(9, 30),
        suggested_skills: &[
            "Art/Craft",
            "Spot Hidden",
            "Listen",
            "Stealth",
            "History",
            "Language (Own)",
            "Psychology",
        ],
        skill_choices: &[interpersonal(1)],
        era: None,
    },
    Occupation {
        name: "Judge",
        skill_points: "EDU × 4",
        credit_rating: cr(60, 90),
        suggested_skills: &[
            "Law",
            "Listen",
            "History",
            "Intimidate",
            "Language (Own)",
            "Persuade",
            "Psychology",
            "Library Use",
        ],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Lawyer",
        skill_points: "EDU × 4",
        credit_rating: cr(30, 80),
        suggested_skills: &["Accounting", "Law", "Psychology", "Library Use"],
        skill_choices: &[interpersonal(2), any(2, "any two other skills")],
        era: None,
    },
    Occupation {
        name: "Cult Leader",
        skill_points: "EDU × 2 + APP × 2",
        credit_rating: cr(30, 60),
        suggested_skills: &["Accounting", "Spot Hidden", "Occult", "Psychology"],
        skill_choices: &[interpersonal(2), any(2, "any two other skills as specialties")],
        era: None,
    },
    Occupation {
        name: "Book Dealer",
        skill_points: "EDU × 4",
        credit_rating: cr(20, 40),
        suggested_skills: &[
            "Appraise",
            "Accounting",
            "Drive Auto",
            "History",
            "Language (Own)",
            "Library Use",
        ],
        skill_choices: &[interpersonal(1), any(1, "Language (Other)")],
        era: None,
    },
    Occupation {
        name: "Shopkeeper",
        skill_points: "EDU × 2 + APP × 2",
        credit_rating: cr(20, 40),
        suggested_skills: &[
            "Electrical Repair",
            "Mechanical Repair",
            "Accounting",
            "Spot Hidden",
            "Listen",
            "Psychology",
        ],
        skill_choices: &[interpersonal(2)],
        era: None,
    },
    Occupation {
        name: "Sailor (Naval)",
        skill_points: "EDU × 2 + (DEX × 2 or STR × 2)",
        credit_rating: cr(9, 30),
        suggested_skills: &[
            "Firearms",
            "Fighting",
            "Swim",
            "Navigate",
            "Pilot",
            "First Aid",
            "Survival",
        ],
        skill_choices: &[
            SkillChoice {
                count: 1,
                options: &["Electrical Repair", "Mechanical Repair"],
                description: "Electrical Repair or Mechanical Repair",
            },
        ],
        era: None,
    },
    Occupation {
        name: "Sailor (Merchant)",
        skill_points: "EDU × 2 + (DEX × 2 or STR × 2)",
        credit_rating: cr(9, 30),
        suggested_skills: &[
            "Mechanical Repair",
            "Spot Hidden",
            "Natural World",
            "Swim",
            "Navigate",
            "First Aid",
            "Pilot",
        ],
        skill_choices: &[interpersonal(1)],
        era: None,
    },
    Occupation {
        name: "Mechanic",
        skill_points: "EDU × 4",
        credit_rating: cr(20, 40),
        suggested_skills: &[
            "Electrical Repair",
            "Mechanical Repair",
            "Drive Auto",
            "Climb",
            "Operate Heavy Machinery",
        ],
        skill_choices: &[
            any(1, "Art/Craft (e.g. Carpentry, Plumbing, Welding)"),
            any(2, "any two other skills as personal, era or trade specialties"),
        ],
        era: None,
    },
    Occupation {
        name: "Doctor of Medicine",
        skill_points: "EDU × 4",
        credit_rating: cr(30, 80),
        suggested_skills: &[
            "Science (Biology)",
            "Science (Pharmacy)",
            "Medicine",
            "First Aid",
            "Psychology",
        ],
        skill_choices: &[
            any(1, "Language (Other): Latin"),
            any(2, "any two other skills as academic or personal specialties"),
        ],
        era: Some(Era::Classic),
    },
    Occupation {
        name: "Diver",
        skill_points: "EDU × 2 + (DEX × 2 or STR × 2)",
        credit_rating: cr(9, 30),
        suggested_skills: &[
            "Science (Biology)",
            "Mechanical Repair",
            "Spot Hidden",
            "Diving",
            "Swim",
            "Pilot",
            "First Aid",
        ],
        skill_choices: &[any(1, "any other skill as a personal or era specialty")],
        era: None,
    },
    Occupation {
        name: "Missionary",
        skill_points: "EDU × 2 + APP × 2",
        credit_rating: cr(0, 30),
        suggested_skills: &["Mechanical Repair", "Medicine", "Natural World", "First Aid"],
        skill_choices: &[
            any(1, "Art/Craft (any)"),
            interpersonal(1),
            any(2, "any two other skills as personal or era specialties"),
        ],
        era: None,
    },
    Occupation {
        name: "Butler/Valet",
        skill_points: "EDU × 4",
        credit_rating: cr(30, 60),
        suggested_skills: &["Spot Hidden", "Listen", "First Aid", "Psychology"],
        skill_choices: &[
            any(1, "Art/Craft (any, e.g. Tailoring, Barbering, Cooking)"),
            any(1, "Language (Other)"),
            SkillChoice {
                count: 1,
                options: &["Appraise", "Accounting"],
                description: "Appraise or Accounting",
            },
            any(2, "any two other skills as personal or era specialties"),
        ],
        era: None,
    },
    Occupation {
        name: "Chauffeur",
        skill_points: "EDU × 2 + DEX × 2",
        credit_rating: cr(10, 40),
        suggested_skills: &[
            "Mechanical Repair",
            "Drive Auto",
            "Spot Hidden",
            "Listen",
            "Navigate",
        ],
        skill_choices: &[
            interpersonal(2),
            any(1, "any other skill as a personal or era specialty"),
        ],
        era: None,
    },
    Occupation {
        name: "Driver",
        skill_points: "EDU × 2 + DEX × 2",
        credit_rating: cr(9, 20),
        suggested_skills: &[
            "Mechanical Repair",
            "Accounting",
            "Drive Auto",
            "Listen",
            "Navigate",
            "Psychology",
        ],
        skill_choices: &[
            interpersonal(1),
            any(1, "any other skill as a personal or era specialty"),
        ],
        era: None,
    },
    Occupation {
        name: "Taxi Driver",
        skill_points: "EDU × 2 + DEX × 2",
        credit_rating: cr(9, 30),
        suggested_skills: &[
            "Electrical Repair",
            "Mechanical Repair",
            "Accounting",
            "Drive Auto",
            "Spot Hidden",
            "Fast Talk",
            "Navigate",
        ],
        skill_choices: &[any(1, "any other skill as a personal or era specialty")],
        era: None,
    },
    Occupation {
        name: "Musician",
        skill_points: "EDU × 2 + (APP × 2 or DEX × 2)",
        credit_rating: cr(9, 30),
        suggested_skills: &["Listen", "Psychology"],
        skill_choices: &[
            any(1, "Art/Craft (Instrument)"),
            interpersonal(1),
            any(4, "any four other skills"),
        ],
        era: None,
    },
    Occupation {
        name: "Antique Dealer",
        skill_points: "EDU × 4",
        credit_rating: cr(30, 50),
        suggested_skills: &[
            "Appraise",
            "Accounting",
            "Drive Auto",
            "History",
            "Navigate",
            "Library Use",
        ],
        skill_choices: &[interpersonal(2)],
        era: None,
    },
    Occupation {
        name: "Occultist",
        skill_points: "EDU × 4",
        credit_rating: cr(9, 65),
        suggested_skills: &[
            "Anthropology",
            "Science (Astronomy)",
            "History",
            "Occult",
            "Library Use",
        ],
        skill_choices: &[
            interpersonal(1),
            any(1, "Language (Other)"),
            any(1, "any other skill as a personal or era specialty"),
        ],
        era: None,
    },
    Occupation {
        name: "Military Officer",
        skill_points: "EDU × 2 + (DEX × 2 or STR × 2)",
        credit_rating: cr(20, 70),
        suggested_skills: &["Firearms", "Accounting", "Navigate", "First Aid", "Psychology"],
        skill_choices: &[
            interpersonal(2),
            any(1, "any other skill as a personal or era specialty"),
        ],
        era: None,
    },
    Occupation {
        name: "Police Detective",
        skill_points: "EDU × 2 + (DEX × 2 or STR × 2)",
        credit_rating: cr(20, 50),
        suggested_skills: &["Firearms", "Law", "Spot Hidden", "Listen", "Psychology"],
        skill_choices: &[
            interpersonal(1),
            SkillChoice {
                count: 1,
                options: &["Art/Craft", "Disguise"],
                description: "Art/Craft (Acting) or Disguise",
            },
            any(1, "any other skill as a personal or era specialty"),
        ],
        era: None,
    },
    Occupation {
        name: "Uniformed Police Officer",
        skill_points: "EDU × 2 + (DEX × 2 or STR × 2)",
        credit_rating: cr(9, 30),
        suggested_skills: &[
            "Firearms",
            "Law",
            "Spot Hidden",
            "Fighting (Brawl)",
            "First Aid",
            "Psychology",
        ],
        skill_choices: &[
            interpersonal(1),
            SkillChoice {
                count: 1,
                options: &["Ride", "Drive Auto"],
                description: "Ride or Drive Auto (personal specialty)",
            },
        ],
        era: None,
    },
    Occupation {
        name: "Unskilled Laborer",
        skill_points: "EDU × 2 + (DEX × 2 or STR × 2)",
        credit_rating: cr(5, 10),
        suggested_skills: &[
            "Throw",
            "Electrical Repair",
            "Mechanical Repair",
            "Drive Auto",
            "Fighting",
            "Operate Heavy Machinery",
            "First Aid",
        ],
        skill_choices: &[any(1, "any other skill as a personal or era specialty")],
        era: None,
    },
    Occupation {
        name: "Lumberjack",
        skill_points: "EDU × 2 + (DEX × 2 or STR × 2)",
        credit_rating: cr(9, 20),
        suggested_skills: &[
            "Throw",
            "Mechanical Repair",
            "Climb",
            "Dodge",
            "Fighting (Chainsaw)",
            "First Aid",
            "Jump",
        ],
        skill_choices: &[
            SkillChoice {
                count: 1,
                options: &["Science (Biology)", "Science (Botany)", "Natural World"],
                description: "Science (Biology or Botany) or Natural World",
            },
        ],
        era: None,
    },
    Occupation {
        name: "Miner",
        skill_points: "EDU × 2 + (DEX × 2 or STR × 2)",
        credit_rating: cr(9, 30),
        suggested_skills: &[
            "Mechanical Repair",
            "Spot Hidden",
            "Climb",
            "Stealth",
            "Science (Geology)",
            "Operate Heavy Machinery",
            "Jump",
        ],
        skill_choices: &[any(1, "any other skill as a personal or era specialty")],
        era: None,
    },
    Occupation {
        name: "Parapsychologist",
        skill_points: "EDU × 4",
        credit_rating: cr(9, 30),
        suggested_skills: &[
            "Anthropology",
            "Photography",
            "History",
            "Occult",
            "Psychology",
            "Library Use",
        ],
        skill_choices: &[
            any(1, "Language (Other)"),
            any(1, "any other skill as a personal or era specialty"),
        ],
        era: None,
    },
    Occupation {
        name: "Researcher",
        skill_points: "EDU × 4",
        credit_rating: cr(9, 40),
        suggested_skills: &["Spot Hidden", "History", "Library Use"],
        skill_choices: &[
            interpersonal(1),
            any(1, "Language (Other)"),
            any(3, "any three fields of study"),
        ],
        era: None,
    },
    Occupation {
        name: "Pilot",
        skill_points: "EDU × 2 + DEX × 2",
        credit_rating: cr(20, 70),
        suggested_skills: &[
            "Science (Astronomy)",
            "Electrical Repair",
            "Mechanical Repair",
            "Navigate",
            "Operate Heavy Machinery",
            "Pilot",
        ],
        skill_choices: &[any(2, "any two other skills as personal or era specialties")],
        era: None,
    },
    Occupation {
        name: "Aviator",
        skill_points: "EDU × 2 + DEX × 2",
        credit_rating: cr(30, 60),
        suggested_skills: &[
            "Electrical Repair",
            "Mechanical Repair",
            "Accounting",
            "Spot Hidden",
            "Listen",
            "Navigate",
            "Pilot",
        ],
        skill_choices: &[any(1, "any other skill as a personal or era specialty")],
        era: None,
    },
    Occupation {
        name: "Elected Politician",
        skill_points: "EDU × 2 + APP × 2",
        credit_rating: cr(50, 90),
        suggested_skills: &[
            "Charm",
            "Listen",
            "History",
            "Intimidate",
            "Fast Talk",
            "Language (Own)",
            "Persuade",
            "Psychology",
        ],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Professor",
        skill_points: "EDU × 4",
        credit_rating: cr(20, 70),
        suggested_skills: &["Language (Own)", "Psychology", "Library Use"],
        skill_choices: &[
            any(1, "Language (Other)"),
            any(4, "any four other skills as personal, academic or era specialties"),
        ],
        era: Some(Era::Classic),
    },
    Occupation {
        name: "Computer Programmer",
        skill_points: "EDU × 4",
        credit_rating: cr(10, 65),
        suggested_skills: &[
            "Science (Mathematics)",
            "Electrical Repair",
            "Electronics",
            "Spot Hidden",
            "Library Use",
            "Computer Use",
        ],
        skill_choices: &[any(2, "any two other skills as personal or era specialties")],
        era: Some(Era::Modern),
    },
    Occupation {
        name: "Hacker",
        skill_points: "EDU × 4",
        credit_rating: cr(10, 70),
        suggested_skills: &[
            "Electrical Repair",
            "Electronics",
            "Spot Hidden",
            "Library Use",
            "Computer Use",
        ],
        skill_choices: &[interpersonal(1), any(2, "any two other skills")],
        era: Some(Era::Modern),
    },
    Occupation {
        name: "Prostitute",
        skill_points: "EDU × 2 + APP × 2",
        credit_rating: cr(5, 50),
        suggested_skills: &["Dodge", "Stealth", "Sleight of Hand", "Psychology"],
        skill_choices: &[
            any(1, "Art/Craft (any)"),
            interpersonal(2),
            any(1, "any other skill as a personal or era specialty"),
        ],
        era: None,
    },
    Occupation {
        name: "Psychologist",
        skill_points: "EDU × 4",
        credit_rating: cr(10, 60),
        suggested_skills: &[
            "Accounting",
            "Listen",
            "Persuade",
            "Psychoanalysis",
            "Psychology",
            "Library Use",
        ],
        skill_choices: &[any(2, "any two other skills as personal or academic specialties")],
        era: None,
    },
    Occupation {
        name: "Psychiatrist",
        skill_points: "EDU × 4",
        credit_rating: cr(30, 80),
        suggested_skills: &[
            "Science (Biology)",
            "Science (Chemistry)",
            "Listen",
            "Medicine",
            "Persuade",
            "Psychoanalysis",
            "Psychology",
        ],
        skill_choices: &[any(1, "Language (Other)")],
        era: None,
    },
    Occupation {
        name: "Boxer/Wrestler",
        skill_points: "EDU × 2 + (DEX × 2 or STR × 2)",
        credit_rating: cr(9, 60),
        suggested_skills: &[
            "Spot Hidden",
            "Dodge",
            "Intimidate",
            "Fighting (Brawl)",
            "Psychology",
            "Jump",
        ],
        skill_choices: &[any(2, "any two other skills as personal or era specialties")],
        era: None,
    },
    Occupation {
        name: "Secretary",
        skill_points: "EDU × 4",
        credit_rating: cr(9, 30),
        suggested_skills: &["Accounting", "Language (Own)", "Psychology"],
        skill_choices: &[
            any(1, "Art/Craft (Typing or Shorthand)"),
            interpersonal(2),
            SkillChoice {
                count: 1,
                options: &["Library Use", "Computer Use"],
                description: "Library Use or Computer Use",
            },
            any(1, "any other skill as a personal or era specialty"),
        ],
        era: None,
    },
    Occupation {
        name: "Union Activist",
        skill_points: "EDU × 2 + (STR × 2 or APP × 2)",
        credit_rating: cr(5, 30),
        suggested_skills: &[
            "Accounting",
            "Law",
            "Listen",
            "Fighting (Brawl)",
            "Operate Heavy Machinery",
            "Psychology",
        ],
        skill_choices: &[interpersonal(2)],
        era: None,
    },
    Occupation {
        name: "Survivalist",
        skill_points: "EDU × 2 + (DEX × 2 or STR × 2)",
        credit_rating: cr(5, 30),
        suggested_skills: &[
            "Firearms",
            "Listen",
            "Spot Hidden",
            "Natural World",
            "Navigate",
            "First Aid",
            "Track",
            "Survival",
        ],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Soldier",
        skill_points: "EDU × 2 + (DEX × 2 or STR × 2)",
        credit_rating: cr(9, 30),
        suggested_skills: &["Firearms", "Dodge", "Stealth", "Fighting", "Survival"],
        skill_choices: &[
            SkillChoice {
                count: 1,
                options: &["Climb", "Swim"],
                description: "Climb or Swim",
            },
            SkillChoice {
                count: 2,
                options: &["First Aid", "Mechanical Repair", "Language (Other)"],
                description: "two of First Aid, Mechanical Repair or Language (Other)",
            },
        ],
        era: None,
    },
    Occupation {
        name: "Sanitation Technician",
        skill_points: "EDU × 2 + (DEX × 2 or STR × 2)",
        credit_rating: cr(6, 15),
        suggested_skills: &[
            "Electrical Repair",
            "Mechanical Repair",
            "Listen",
            "Stealth",
            "Fighting (Brawl)",
            "First Aid",
            "Psychology",
        ],
        skill_choices: &[interpersonal(1)],
        era: None,
    },
    Occupation {
        name: "Office Worker",
        skill_points: "EDU × 4",
        credit_rating: cr(9, 30),
        suggested_skills: &["Accounting", "Law", "Listen", "Library Use"],
        skill_choices: &[
            interpersonal(1),
            any(1, "Language (Own or Other)"),
            any(2, "any two other skills as personal or era specialties"),
        ],
        era: None,
    },
    Occupation {
        name: "Manager",
        skill_points: "EDU × 4",
        credit_rating: cr(40, 90),
        suggested_skills: &["Accounting", "Law", "Psychology"],
        skill_choices: &[
            interpersonal(2),
            any(1, "Language (Other)"),
            any(2, "any two other skills as personal or era specialties"),
        ],
        era: None,
    },
    Occupation {
        name: "Zookeeper",
        skill_points: "EDU × 4",
        credit_rating: cr(20, 40),
        suggested_skills: &[
            "Science (Pharmacy)",
            "Science (Zoology)",
            "Accounting",
            "Dodge",
            "Medicine",
            "Natural World",
            "First Aid",
            "Animal Handling",
        ],
        skill_choices: &[],
        era: None,
    },
    Occupation {
        name: "Animal Trainer",
        skill_points: "EDU × 2 + (APP × 2 or STR × 2)",
        credit_rating: cr(9, 30),
        suggested_skills: &[
            "Science (Zoology)",
            "Listen",
            "Stealth",
            "Natural World",
            "Track",
            "Jump",
            "Animal Handling",
        ],
        skill_choices: &[any(1, "any other skill as a personal or era specialty")],
        era: None,
    },
];

/// Look up an occupation by exact name.
pub fn find_occupation(name: &str) -> Option<&'static Occupation> {
    OCCUPATIONS.iter().find(|o| o.name == name)
}
