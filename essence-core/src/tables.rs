use crate::catalogue::WeaponClass;

#[derive(Copy, Clone, Debug)]
pub(crate) struct AreaTable {
    pub name: &'static str,
    pub base: &'static [&'static str],
    pub additional: &'static [&'static str],
    pub skill: &'static [&'static str],
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct WeaponEntry {
    pub name: &'static str,
    pub rarity: u8,
    pub class: WeaponClass,
    pub base: &'static str,
    pub additional: &'static str,
    pub skill: &'static str,
}

// Every area rolls the same five base attributes.
const BASE_POOL: &[&str] = &[
    "Agility Boost",
    "Strength Boost",
    "Will Boost",
    "Intellect Boost",
    "Main Attribute Boost",
];

pub(crate) const AREA_TABLES: &[AreaTable] = &[
    AreaTable {
        name: "Hub Area",
        base: BASE_POOL,
        additional: &[
            "Attack Boost",
            "HP Up",
            "Arts DMG Boost",
            "Physical DMG Boost",
            "Critical Rate Boost",
            "Heat DMG Boost",
            "Ultimate Gain Efficiency",
        ],
        skill: &[
            "Nightfall",
            "Assault",
            "Efficiency",
            "Pursuit",
            "Suppression",
            "Medical",
        ],
    },
    AreaTable {
        name: "Originium Research Park",
        base: BASE_POOL,
        additional: &[
            "Attack Boost",
            "HP Up",
            "Electric DMG Boost",
            "Cryo DMG Boost",
            "Arts Intensity Boost",
            "Healing Boost",
            "Critical Rate Boost",
        ],
        skill: &[
            "Efficiency",
            "Fracture",
            "Medical",
            "Inspiration",
            "Detonate",
            "Flow",
        ],
    },
    AreaTable {
        name: "Mining Area",
        base: BASE_POOL,
        additional: &[
            "Attack Boost",
            "HP Up",
            "Physical DMG Boost",
            "Nature DMG Boost",
            "Heat DMG Boost",
            "Ultimate Gain Efficiency",
        ],
        skill: &[
            "Assault",
            "Pursuit",
            "Suppression",
            "Fracture",
            "Brutality",
            "Detonate",
        ],
    },
    AreaTable {
        name: "Energy Highlands",
        base: BASE_POOL,
        additional: &[
            "Attack Boost",
            "HP Up",
            "Electric DMG Boost",
            "Heat DMG Boost",
            "Arts DMG Boost",
            "Healing Boost",
        ],
        skill: &[
            "Efficiency",
            "Inspiration",
            "Twilight",
            "Flow",
            "Medical",
            "Brutality",
        ],
    },
    AreaTable {
        name: "Wuling City",
        base: BASE_POOL,
        additional: &[
            "Attack Boost",
            "Arts DMG Boost",
            "Cryo DMG Boost",
            "Nature DMG Boost",
            "Critical Rate Boost",
            "Arts Intensity Boost",
        ],
        skill: &[
            "Nightfall",
            "Twilight",
            "Pursuit",
            "Suppression",
            "Inspiration",
            "Efficiency",
        ],
    },
];

pub(crate) const WEAPONS: &[WeaponEntry] = &[
    WeaponEntry {
        name: "Oblivion",
        rarity: 6,
        class: WeaponClass::ArtsUnit,
        base: "Intellect Boost",
        additional: "Arts DMG Boost",
        skill: "Nightfall",
    },
    WeaponEntry {
        name: "Thunderstride",
        rarity: 6,
        class: WeaponClass::Sword,
        base: "Agility Boost",
        additional: "Attack Boost",
        skill: "Assault",
    },
    WeaponEntry {
        name: "Wildfire Crown",
        rarity: 6,
        class: WeaponClass::ArtsUnit,
        base: "Intellect Boost",
        additional: "Heat DMG Boost",
        skill: "Detonate",
    },
    WeaponEntry {
        name: "Grand Vigil",
        rarity: 6,
        class: WeaponClass::Greatsword,
        base: "Strength Boost",
        additional: "Physical DMG Boost",
        skill: "Brutality",
    },
    WeaponEntry {
        name: "Starfall Lance",
        rarity: 6,
        class: WeaponClass::Polearm,
        base: "Main Attribute Boost",
        additional: "Critical Rate Boost",
        skill: "Pursuit",
    },
    WeaponEntry {
        name: "Frostbound Verse",
        rarity: 6,
        class: WeaponClass::ArtsUnit,
        base: "Will Boost",
        additional: "Cryo DMG Boost",
        skill: "Twilight",
    },
    WeaponEntry {
        name: "Dawnkeeper",
        rarity: 6,
        class: WeaponClass::Handcannon,
        base: "Agility Boost",
        additional: "Electric DMG Boost",
        skill: "Efficiency",
    },
    WeaponEntry {
        name: "Ironclad Oath",
        rarity: 5,
        class: WeaponClass::Greatsword,
        base: "Strength Boost",
        additional: "HP Up",
        skill: "Suppression",
    },
    WeaponEntry {
        name: "Quiet Lantern",
        rarity: 5,
        class: WeaponClass::ArtsUnit,
        base: "Will Boost",
        additional: "Healing Boost",
        skill: "Medical",
    },
    WeaponEntry {
        name: "Hollow Reed",
        rarity: 5,
        class: WeaponClass::Polearm,
        base: "Agility Boost",
        additional: "Physical DMG Boost",
        skill: "Pursuit",
    },
    WeaponEntry {
        name: "Ember Script",
        rarity: 5,
        class: WeaponClass::ArtsUnit,
        base: "Intellect Boost",
        additional: "Attack Boost",
        skill: "Efficiency",
    },
    WeaponEntry {
        name: "Verdant Fang",
        rarity: 5,
        class: WeaponClass::Sword,
        base: "Main Attribute Boost",
        additional: "Nature DMG Boost",
        skill: "Fracture",
    },
    WeaponEntry {
        name: "Stormglass",
        rarity: 5,
        class: WeaponClass::Handcannon,
        base: "Intellect Boost",
        additional: "Electric DMG Boost",
        skill: "Inspiration",
    },
    WeaponEntry {
        name: "Crimson Ledger",
        rarity: 5,
        class: WeaponClass::Sword,
        base: "Strength Boost",
        additional: "Attack Boost",
        skill: "Assault",
    },
    WeaponEntry {
        name: "Pale Meridian",
        rarity: 5,
        class: WeaponClass::ArtsUnit,
        base: "Intellect Boost",
        additional: "Arts Intensity Boost",
        skill: "Flow",
    },
    WeaponEntry {
        name: "Night Heron",
        rarity: 5,
        class: WeaponClass::Polearm,
        base: "Agility Boost",
        additional: "Critical Rate Boost",
        skill: "Nightfall",
    },
    WeaponEntry {
        name: "Tarnished Edge",
        rarity: 4,
        class: WeaponClass::Sword,
        base: "Agility Boost",
        additional: "Attack Boost",
        skill: "Assault",
    },
    WeaponEntry {
        name: "Field Primer",
        rarity: 4,
        class: WeaponClass::ArtsUnit,
        base: "Intellect Boost",
        additional: "HP Up",
        skill: "Efficiency",
    },
    WeaponEntry {
        name: "Quarry Maul",
        rarity: 4,
        class: WeaponClass::Greatsword,
        base: "Strength Boost",
        additional: "Ultimate Gain Efficiency",
        skill: "Fracture",
    },
    WeaponEntry {
        name: "Signal Flare",
        rarity: 4,
        class: WeaponClass::Handcannon,
        base: "Will Boost",
        additional: "Heat DMG Boost",
        skill: "Detonate",
    },
    WeaponEntry {
        name: "Lattice Pike",
        rarity: 4,
        class: WeaponClass::Polearm,
        base: "Main Attribute Boost",
        additional: "Attack Boost",
        skill: "Suppression",
    },
    WeaponEntry {
        name: "Copper Psalm",
        rarity: 4,
        class: WeaponClass::ArtsUnit,
        base: "Will Boost",
        additional: "Arts DMG Boost",
        skill: "Medical",
    },
    WeaponEntry {
        name: "Dusk Cutter",
        rarity: 4,
        class: WeaponClass::Sword,
        base: "Intellect Boost",
        additional: "Attack Boost",
        skill: "Nightfall",
    },
    WeaponEntry {
        name: "Training Blade",
        rarity: 3,
        class: WeaponClass::Sword,
        base: "Strength Boost",
        additional: "Attack Boost",
        skill: "Assault",
    },
];
