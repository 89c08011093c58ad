//! Weapon catalog.
//!
//! Weapons name the skill they use loosely ("Firearms (Rifles)") and the
//! resolver maps that onto a catalog skill. Ranges are in metres; ammo is
//! free text because some entries hold "single use" or split magazines.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponCategory {
    Melee,
    Thrown,
    Handgun,
    Rifle,
    Shotgun,
    Automatic,
    Heavy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeaponDefinition {
    pub name: &'static str,
    pub skill: &'static str,
    pub damage: &'static str,
    pub range: &'static str,
    pub attacks: &'static str,
    pub ammo: Option<&'static str>,
    pub malfunction: Option<u32>,
    pub category: WeaponCategory,
}

const fn melee(name: &'static str, skill: &'static str, damage: &'static str) -> WeaponDefinition {
    WeaponDefinition {
        name,
        skill,
        damage,
        range: "Touch",
        attacks: "1",
        ammo: None,
        malfunction: None,
        category: WeaponCategory::Melee,
    }
}

use WeaponCategory::*;

pub static WEAPONS: &[WeaponDefinition] = &[
    melee("Unarmed", "Fighting (Brawl)", "1D3 + DB"),
    melee("Knuckle Duster", "Fighting (Brawl)", "1D3 + 1 + DB"),
    WeaponDefinition {
        name: "Bullwhip",
        skill: "Fighting (Whip)",
        damage: "1D3 + DB / 2",
        range: "3 m",
        attacks: "1",
        ammo: None,
        malfunction: None,
        category: Melee,
    },
    melee("Lit Torch", "Fighting (Brawl)", "1D6 + burn"),
    WeaponDefinition {
        name: "Chainsaw",
        skill: "Fighting (Chainsaws)",
        damage: "2D8",
        range: "Touch",
        attacks: "1",
        ammo: None,
        malfunction: Some(95),
        category: Melee,
    },
    melee("Blackjack", "Fighting (Brawl)", "1D8 + DB"),
    melee("Large Club (Baseball Bat)", "Fighting (Brawl)", "1D8 + DB"),
    melee("Small Club (Baton)", "Fighting (Brawl)", "1D6 + DB"),
    melee("Garrote", "Fighting (Garrote)", "1D6 + DB"),
    melee("Hatchet / Sickle", "Fighting (Axe)", "1D6 + 1 + DB"),
    melee("Large Knife (Machete)", "Fighting (Brawl)", "1D8 + DB"),
    melee("Medium Knife (Carving)", "Fighting (Brawl)", "1D4 + 2 + DB"),
    melee("Small Knife (Switchblade)", "Fighting (Brawl)", "1D4 + DB"),
    WeaponDefinition {
        name: "Live Wire",
        skill: "Fighting (Brawl)",
        damage: "2D8 + stun",
        range: "Touch",
        attacks: "1",
        ammo: None,
        malfunction: Some(95),
        category: Melee,
    },
    WeaponDefinition {
        name: "Pepper Spray",
        skill: "Fighting (Brawl)",
        damage: "Stun",
        range: "2 m",
        attacks: "1",
        ammo: Some("25"),
        malfunction: None,
        category: Melee,
    },
    melee("Nunchaku", "Fighting (Flail)", "1D8 + DB"),
    melee("Cavalry Lance", "Fighting (Spear)", "1D8 + 1"),
    melee("Cavalry Sabre (Heavy Sword)", "Fighting (Sword)", "1D8 + 1 + DB"),
    melee("Medium Sword (Rapier)", "Fighting (Sword)", "1D6 + 1 + DB"),
    melee("Light Sword (Foil)", "Fighting (Sword)", "1D6 + DB"),
    WeaponDefinition {
        name: "Taser (Contact)",
        skill: "Fighting (Brawl)",
        damage: "1D3 + stun",
        range: "Touch",
        attacks: "1",
        ammo: Some("varies"),
        malfunction: Some(97),
        category: Melee,
    },
    melee("Wood Axe", "Fighting (Axe)", "1D8 + 2 + DB"),
    WeaponDefinition {
        name: "Thrown Rock",
        skill: "Throw",
        damage: "1D4 + DB/2",
        range: "STR/5 m",
        attacks: "1",
        ammo: None,
        malfunction: None,
        category: Thrown,
    },
    WeaponDefinition {
        name: "Shuriken",
        skill: "Throw",
        damage: "1D3 + DB/2",
        range: "STR/5 m",
        attacks: "2",
        ammo: Some("single use"),
        malfunction: Some(100),
        category: Thrown,
    },
    WeaponDefinition {
        name: "Thrown Spear",
        skill: "Throw",
        damage: "1D8 + DB/2",
        range: "STR/5 m",
        attacks: "1",
        ammo: None,
        malfunction: None,
        category: Thrown,
    },
    WeaponDefinition {
        name: "War Boomerang",
        skill: "Throw",
        damage: "1D8 + DB/2",
        range: "STR/5 m",
        attacks: "1",
        ammo: None,
        malfunction: None,
        category: Thrown,
    },
    WeaponDefinition {
        name: "Molotov Cocktail",
        skill: "Throw",
        damage: "2D6 + burn",
        range: "STR/5 m",
        attacks: "1/2",
        ammo: Some("single use"),
        malfunction: Some(95),
        category: Thrown,
    },
    WeaponDefinition {
        name: "Dynamite Stick",
        skill: "Throw",
        damage: "4D10 (3 m)",
        range: "STR/5 m",
        attacks: "1/2",
        ammo: Some("single use"),
        malfunction: Some(99),
        category: Thrown,
    },
    WeaponDefinition {
        name: "Hand Grenade",
        skill: "Throw",
        damage: "4D10 (3 m)",
        range: "STR/5 m",
        attacks: "1/2",
        ammo: Some("single use"),
        malfunction: Some(99),
        category: Thrown,
    },
    WeaponDefinition {
        name: "Flintlock",
        skill: "Firearms (Handguns)",
        damage: "1D6 + 1",
        range: "10 m",
        attacks: "1/4",
        ammo: Some("1"),
        malfunction: Some(95),
        category: Handgun,
    },
    WeaponDefinition {
        name: ".22 Short Automatic",
        skill: "Firearms (Handguns)",
        damage: "1D6",
        range: "10 m",
        attacks: "1 (3)",
        ammo: Some("6"),
        malfunction: Some(100),
        category: Handgun,
    },
    WeaponDefinition {
        name: ".25 Derringer (1B)",
        skill: "Firearms (Handguns)",
        damage: "1D6",
        range: "3 m",
        attacks: "1",
        ammo: Some("1"),
        malfunction: Some(100),
        category: Handgun,
    },
    WeaponDefinition {
        name: ".32 or 7.65mm Revolver",
        skill: "Firearms (Handguns)",
        damage: "1D8",
        range: "15 m",
        attacks: "1 (3)",
        ammo: Some("6"),
        malfunction: Some(100),
        category: Handgun,
    },
    WeaponDefinition {
        name: ".32 or 7.65mm Automatic",
        skill: "Firearms (Handguns)",
        damage: "1D8",
        range: "15 m",
        attacks: "1 (3)",
        ammo: Some("8"),
        malfunction: Some(99),
        category: Handgun,
    },
    WeaponDefinition {
        name: ".357 Magnum Revolver",
        skill: "Firearms (Handguns)",
        damage: "1D8 + 1D4",
        range: "15 m",
        attacks: "1 (3)",
        ammo: Some("6"),
        malfunction: Some(100),
        category: Handgun,
    },
    WeaponDefinition {
        name: ".38 or 9mm Revolver",
        skill: "Firearms (Handguns)",
        damage: "1D10",
        range: "15 m",
        attacks: "1 (3)",
        ammo: Some("6"),
        malfunction: Some(100),
        category: Handgun,
    },
    WeaponDefinition {
        name: ".38 Automatic",
        skill: "Firearms (Handguns)",
        damage: "1D10",
        range: "15 m",
        attacks: "1 (3)",
        ammo: Some("8"),
        malfunction: Some(99),
        category: Handgun,
    },
    WeaponDefinition {
        name: "Beretta M9",
        skill: "Firearms (Handguns)",
        damage: "1D10",
        range: "15 m",
        attacks: "1 (3)",
        ammo: Some("15"),
        malfunction: Some(98),
        category: Handgun,
    },
    WeaponDefinition {
        name: "Glock 17 9mm",
        skill: "Firearms (Handguns)",
        damage: "1D10",
        range: "15 m",
        attacks: "1 (3)",
        ammo: Some("17"),
        malfunction: Some(98),
        category: Handgun,
    },
    WeaponDefinition {
        name: "Luger P08",
        skill: "Firearms (Handguns)",
        damage: "1D10",
        range: "15 m",
        attacks: "1 (3)",
        ammo: Some("8"),
        malfunction: Some(99),
        category: Handgun,
    },
    WeaponDefinition {
        name: ".41 Revolver",
        skill: "Firearms (Handguns)",
        damage: "1D10",
        range: "15 m",
        attacks: "1 (3)",
        ammo: Some("8"),
        malfunction: Some(100),
        category: Handgun,
    },
    WeaponDefinition {
        name: ".44 Magnum Revolver",
        skill: "Firearms (Handguns)",
        damage: "1D10 + 1D4 + 2",
        range: "15 m",
        attacks: "1 (3)",
        ammo: Some("6"),
        malfunction: Some(100),
        category: Handgun,
    },
    WeaponDefinition {
        name: ".45 Revolver",
        skill: "Firearms (Handguns)",
        damage: "1D10 + 2",
        range: "15 m",
        attacks: "1 (3)",
        ammo: Some("6"),
        malfunction: Some(100),
        category: Handgun,
    },
    WeaponDefinition {
        name: ".45 Automatic",
        skill: "Firearms (Handguns)",
        damage: "1D10 + 2",
        range: "15 m",
        attacks: "1 (3)",
        ammo: Some("7"),
        malfunction: Some(100),
        category: Handgun,
    },
    WeaponDefinition {
        name: "Desert Eagle",
        skill: "Firearms (Handguns)",
        damage: "1D10 + 1D6 + 3",
        range: "15 m",
        attacks: "1 (3)",
        ammo: Some("7"),
        malfunction: Some(94),
        category: Handgun,
    },
    WeaponDefinition {
        name: "Taser (Dart)",
        skill: "Firearms (Handguns)",
        damage: "1D3 + stun",
        range: "5 m",
        attacks: "1",
        ammo: Some("3"),
        malfunction: Some(95),
        category: Handgun,
    },
    WeaponDefinition {
        name: "Flare Gun",
        skill: "Firearms (Handguns)",
        damage: "1D10 + 1D3 burn",
        range: "10 m",
        attacks: "1/2",
        ammo: Some("1"),
        malfunction: Some(100),
        category: Handgun,
    },
    WeaponDefinition {
        name: "Bow and Arrows",
        skill: "Firearms (Bows)",
        damage: "1D6 + DB/2",
        range: "30 m",
        attacks: "1",
        ammo: Some("1"),
        malfunction: Some(97),
        category: Rifle,
    },
    WeaponDefinition {
        name: "Crossbow",
        skill: "Firearms (Bows)",
        damage: "1D8 + 2",
        range: "50 m",
        attacks: "1/2",
        ammo: Some("1"),
        malfunction: Some(96),
        category: Rifle,
    },
    WeaponDefinition {
        name: ".58 Springfield Rifle Musket",
        skill: "Firearms (Rifles)",
        damage: "1D10 + 4",
        range: "60 m",
        attacks: "1/4",
        ammo: Some("1"),
        malfunction: Some(95),
        category: Rifle,
    },
    WeaponDefinition {
        name: ".22 Bolt-Action Rifle",
        skill: "Firearms (Rifles)",
        damage: "1D6 + 1",
        range: "30 m",
        attacks: "1",
        ammo: Some("6"),
        malfunction: Some(99),
        category: Rifle,
    },
    WeaponDefinition {
        name: ".30 Lever-Action Carbine",
        skill: "Firearms (Rifles)",
        damage: "2D6",
        range: "50 m",
        attacks: "1",
        ammo: Some("6"),
        malfunction: Some(98),
        category: Rifle,
    },
    WeaponDefinition {
        name: ".45 Martini-Henry Rifle",
        skill: "Firearms (Rifles)",
        damage: "1D8 + 1D6 + 3",
        range: "80 m",
        attacks: "1/3",
        ammo: Some("1"),
        malfunction: Some(100),
        category: Rifle,
    },
    WeaponDefinition {
        name: "Col. Moran's Air Rifle",
        skill: "Firearms (Rifles)",
        damage: "2D6 + 1",
        range: "20 m",
        attacks: "1/3",
        ammo: Some("1"),
        malfunction: Some(88),
        category: Rifle,
    },
    WeaponDefinition {
        name: "Garand M1 or M2 Rifle",
        skill: "Firearms (Rifles)",
        damage: "2D6 + 4",
        range: "110 m",
        attacks: "1",
        ammo: Some("8"),
        malfunction: Some(100),
        category: Rifle,
    },
    WeaponDefinition {
        name: "SKS Carbine",
        skill: "Firearms (Rifles)",
        damage: "2D6 + 1",
        range: "90 m",
        attacks: "1 (2)",
        ammo: Some("10"),
        malfunction: Some(97),
        category: Rifle,
    },
    WeaponDefinition {
        name: ".303 Lee-Enfield",
        skill: "Firearms (Rifles)",
        damage: "2D6 + 4",
        range: "110 m",
        attacks: "1",
        ammo: Some("10"),
        malfunction: Some(100),
        category: Rifle,
    },
    WeaponDefinition {
        name: ".30-06 Bolt-Action Rifle",
        skill: "Firearms (Rifles)",
        damage: "2D6 + 4",
        range: "110 m",
        attacks: "1",
        ammo: Some("5"),
        malfunction: Some(100),
        category: Rifle,
    },
    WeaponDefinition {
        name: ".30-06 Semi-Automatic Rifle",
        skill: "Firearms (Rifles)",
        damage: "2D6 + 4",
        range: "110 m",
        attacks: "1",
        ammo: Some("5"),
        malfunction: Some(100),
        category: Rifle,
    },
    WeaponDefinition {
        name: ".444 Marlin Rifle",
        skill: "Firearms (Rifles)",
        damage: "2D8 + 4",
        range: "110 m",
        attacks: "1",
        ammo: Some("5"),
        malfunction: Some(98),
        category: Rifle,
    },
    WeaponDefinition {
        name: "Elephant Gun (2B)",
        skill: "Firearms (Rifles)",
        damage: "3D6 + 4",
        range: "100 m",
        attacks: "1 or 2",
        ammo: Some("2"),
        malfunction: Some(100),
        category: Rifle,
    },
    WeaponDefinition {
        name: "20-gauge Shotgun (2B)",
        skill: "Firearms (Shotguns)",
        damage: "2D6 / 1D6 / 1D3",
        range: "10/20/50 m",
        attacks: "1 or 2",
        ammo: Some("2"),
        malfunction: Some(100),
        category: Shotgun,
    },
    WeaponDefinition {
        name: "16-gauge Shotgun (2B)",
        skill: "Firearms (Shotguns)",
        damage: "2D6+2 / 1D6+1 / 1D4",
        range: "10/20/50 m",
        attacks: "1 or 2",
        ammo: Some("2"),
        malfunction: Some(100),
        category: Shotgun,
    },
    WeaponDefinition {
        name: "12-gauge Shotgun (2B)",
        skill: "Firearms (Shotguns)",
        damage: "4D6 / 2D6 / 1D6",
        range: "10/20/50 m",
        attacks: "1 or 2",
        ammo: Some("2"),
        malfunction: Some(100),
        category: Shotgun,
    },
    WeaponDefinition {
        name: "12-gauge Shotgun (Pump)",
        skill: "Firearms (Shotguns)",
        damage: "4D6 / 2D6 / 1D6",
        range: "10/20/50 m",
        attacks: "1",
        ammo: Some("5"),
        malfunction: Some(100),
        category: Shotgun,
    },
    WeaponDefinition {
        name: "12-gauge Shotgun (Semi-Auto)",
        skill: "Firearms (Shotguns)",
        damage: "4D6 / 2D6 / 1D6",
        range: "10/20/50 m",
        attacks: "1 (2)",
        ammo: Some("5"),
        malfunction: Some(100),
        category: Shotgun,
    },
    WeaponDefinition {
        name: "12-gauge Shotgun (Sawn-off)",
        skill: "Firearms (Shotguns)",
        damage: "4D6 / 1D6",
        range: "5/10 m",
        attacks: "1 or 2",
        ammo: Some("2"),
        malfunction: Some(100),
        category: Shotgun,
    },
    WeaponDefinition {
        name: "10-gauge Shotgun (2B)",
        skill: "Firearms (Shotguns)",
        damage: "4D6+2 / 2D6+1 / 1D4",
        range: "10/20/50 m",
        attacks: "1 or 2",
        ammo: Some("2"),
        malfunction: Some(100),
        category: Shotgun,
    },
    WeaponDefinition {
        name: "Benelli M3 12-gauge",
        skill: "Firearms (Shotguns)",
        damage: "4D6 / 2D6 / 1D6",
        range: "10/20/50 m",
        attacks: "1 (2)",
        ammo: Some("7"),
        malfunction: Some(100),
        category: Shotgun,
    },
    WeaponDefinition {
        name: "SPAS 12-gauge",
        skill: "Firearms (Shotguns)",
        damage: "4D6 / 2D6 / 1D6",
        range: "10/20/50 m",
        attacks: "1",
        ammo: Some("8"),
        malfunction: Some(98),
        category: Shotgun,
    },
    WeaponDefinition {
        name: "AK-47 or AKM",
        skill: "Firearms (Rifle/SMG)",
        damage: "2D6 + 1",
        range: "100 m",
        attacks: "1 (2) or full auto",
        ammo: Some("30"),
        malfunction: Some(100),
        category: Automatic,
    },
    WeaponDefinition {
        name: "AK-74",
        skill: "Firearms (Rifle/SMG)",
        damage: "2D6",
        range: "110 m",
        attacks: "1 (2) or full auto",
        ammo: Some("30"),
        malfunction: Some(97),
        category: Automatic,
    },
    WeaponDefinition {
        name: "Barrett Model 82",
        skill: "Firearms (Rifles)",
        damage: "2D10 + 1D8 + 6",
        range: "250 m",
        attacks: "1",
        ammo: Some("11"),
        malfunction: Some(96),
        category: Automatic,
    },
    WeaponDefinition {
        name: "FN FAL",
        skill: "Firearms (Rifle/SMG)",
        damage: "2D6 + 4",
        range: "110 m",
        attacks: "1 (2) or burst",
        ammo: Some("20"),
        malfunction: Some(97),
        category: Automatic,
    },
    WeaponDefinition {
        name: "Galil",
        skill: "Firearms (Rifle/SMG)",
        damage: "2D6",
        range: "110 m",
        attacks: "1 or full auto",
        ammo: Some("20"),
        malfunction: Some(98),
        category: Automatic,
    },
    WeaponDefinition {
        name: "M16A2",
        skill: "Firearms (Rifle/SMG)",
        damage: "2D6",
        range: "110 m",
        attacks: "1 (2) or burst",
        ammo: Some("30"),
        malfunction: Some(97),
        category: Automatic,
    },
    WeaponDefinition {
        name: "M4",
        skill: "Firearms (Rifle/SMG)",
        damage: "2D6",
        range: "90 m",
        attacks: "1 or burst",
        ammo: Some("30"),
        malfunction: Some(97),
        category: Automatic,
    },
    WeaponDefinition {
        name: "Steyr AUG",
        skill: "Firearms (Rifle/SMG)",
        damage: "2D6",
        range: "110 m",
        attacks: "1 (2) or full auto",
        ammo: Some("30"),
        malfunction: Some(99),
        category: Automatic,
    },
    WeaponDefinition {
        name: "Thompson Submachine Gun",
        skill: "Firearms (SMG)",
        damage: "1D10 + 2",
        range: "20 m",
        attacks: "1 or full auto",
        ammo: Some("20/30/50"),
        malfunction: Some(96),
        category: Automatic,
    },
    WeaponDefinition {
        name: "Uzi",
        skill: "Firearms (SMG)",
        damage: "1D10",
        range: "20 m",
        attacks: "1 (2) or full auto",
        ammo: Some("32"),
        malfunction: Some(98),
        category: Automatic,
    },
    WeaponDefinition {
        name: "HK MP5",
        skill: "Firearms (SMG)",
        damage: "1D10",
        range: "20 m",
        attacks: "1 (2) or full auto",
        ammo: Some("15/30"),
        malfunction: Some(97),
        category: Automatic,
    },
    WeaponDefinition {
        name: "Ingram MAC-11",
        skill: "Firearms (SMG)",
        damage: "1D10",
        range: "15 m",
        attacks: "1 (3) or full auto",
        ammo: Some("32"),
        malfunction: Some(96),
        category: Automatic,
    },
    WeaponDefinition {
        name: "Gatling Gun 1882",
        skill: "Firearms (Machine Guns)",
        damage: "2D6 + 4",
        range: "100 m",
        attacks: "full auto",
        ammo: Some("200"),
        malfunction: Some(96),
        category: Heavy,
    },
    WeaponDefinition {
        name: "Browning Automatic Rifle M1918",
        skill: "Firearms (Machine Guns)",
        damage: "2D6 + 4",
        range: "90 m",
        attacks: "1 (2) or full auto",
        ammo: Some("20"),
        malfunction: Some(100),
        category: Heavy,
    },
    WeaponDefinition {
        name: "Browning M1917A1 .30",
        skill: "Firearms (Machine Guns)",
        damage: "2D6 + 4",
        range: "150 m",
        attacks: "full auto",
        ammo: Some("250"),
        malfunction: Some(96),
        category: Heavy,
    },
    WeaponDefinition {
        name: "Minigun",
        skill: "Firearms (Machine Guns)",
        damage: "2D6 + 4",
        range: "200 m",
        attacks: "full auto",
        ammo: Some("4000"),
        malfunction: Some(98),
        category: Heavy,
    },
    WeaponDefinition {
        name: "M79 Grenade Launcher",
        skill: "Firearms (Heavy Weapons)",
        damage: "3D10 (2 m)",
        range: "20 m",
        attacks: "1/3",
        ammo: Some("1"),
        malfunction: Some(99),
        category: Heavy,
    },
    WeaponDefinition {
        name: "Rocket Launcher (LAW)",
        skill: "Firearms (Heavy Weapons)",
        damage: "8D10 (1 m)",
        range: "150 m",
        attacks: "1",
        ammo: Some("1"),
        malfunction: Some(98),
        category: Heavy,
    },
    WeaponDefinition {
        name: "Flamethrower",
        skill: "Firearms (Flamethrower)",
        damage: "2D6 + burn",
        range: "25 m",
        attacks: "1",
        ammo: Some("10"),
        malfunction: Some(93),
        category: Heavy,
    },
];

/// Look up a weapon by exact name.
pub fn find_weapon(name: &str) -> Option<&'static WeaponDefinition> {
    WEAPONS.iter().find(|w| w.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SKILLS;
    use crate::rules::resolve_skill;

    #[test]
    fn weapon_names_are_unique() {
        for (i, weapon) in WEAPONS.iter().enumerate() {
            assert!(
                WEAPONS[i + 1..].iter().all(|other| other.name != weapon.name),
                "duplicate weapon {}",
                weapon.name
            );
        }
    }

    #[test]
    fn every_category_is_stocked() {
        let count = |category: WeaponCategory| {
            WEAPONS.iter().filter(|w| w.category == category).count()
        };
        assert_eq!(WEAPONS.len(), 89);
        assert_eq!(count(Melee), 22);
        assert_eq!(count(Thrown), 7);
        assert_eq!(count(Handgun), 18);
        assert_eq!(count(Rifle), 14);
        assert_eq!(count(Shotgun), 9);
        assert_eq!(count(Automatic), 12);
        assert_eq!(count(Heavy), 7);
    }

    #[test]
    fn touch_weapons_carry_no_ammo() {
        for weapon in WEAPONS.iter().filter(|w| w.range == "Touch") {
            assert_eq!(weapon.ammo, None, "{}", weapon.name);
        }
    }

    #[test]
    fn weapon_skills_resolve_except_heavy_weapons() {
        let names: Vec<&str> = SKILLS.iter().map(|s| s.name).collect();
        for weapon in WEAPONS {
            let resolved = resolve_skill(weapon.skill, &names);
            if weapon.skill == "Firearms (Heavy Weapons)" {
                assert!(resolved.is_none());
            } else {
                assert!(resolved.is_some(), "{} uses {}", weapon.name, weapon.skill);
            }
        }
    }

    #[test]
    fn find_weapon_by_name() {
        let revolver = find_weapon(".32 or 7.65mm Revolver").unwrap();
        assert_eq!(revolver.skill, "Firearms (Handguns)");
        assert_eq!(revolver.malfunction, Some(100));
        assert_eq!(revolver.category, Handgun);

        let dynamite = find_weapon("Dynamite Stick").unwrap();
        assert_eq!(dynamite.ammo, Some("single use"));
        assert!(find_weapon("Phaser").is_none());
    }
}
