//! 整合測試共用的角色資料

#![allow(dead_code)]

use dnd_core::{AbilityKind, AbilityRecord, CharacterRecord, SaveKind, SaveRecord};

pub const WINGBLADE_JSON: &str = r#"{
    "name": "Wingblade",
    "abilities": {
        "STR": { "base": 9, "racialBonus": 0, "levelBonus": {} },
        "DEX": { "base": 18, "racialBonus": 2, "levelBonus": {} },
        "CON": { "base": 15, "racialBonus": 0, "levelBonus": {} },
        "INT": { "base": 16, "racialBonus": 0, "levelBonus": {} },
        "WIS": { "base": 12, "racialBonus": 0, "levelBonus": {} },
        "CHA": { "base": 12, "racialBonus": 0, "levelBonus": {} }
    },
    "saves": {
        "FORT": { "classBonus": 0 },
        "REFL": { "classBonus": 2 },
        "WILL": { "classBonus": 2 }
    }
}"#;

/// 屬性陣列 18, 16, 15, 12, 12, 9 的示範角色
pub fn wingblade_record() -> CharacterRecord {
    let mut record = CharacterRecord {
        name: Some("Wingblade".to_string()),
        ..Default::default()
    };

    let bases = [9, 18, 15, 16, 12, 12];
    for (kind, base) in AbilityKind::all().into_iter().zip(bases) {
        record.abilities.set(kind, Some(AbilityRecord::new(base)));
    }
    record.abilities.dexterity = Some(AbilityRecord::new(18).with_racial_bonus(2));

    record.saves.set(SaveKind::Fortitude, Some(SaveRecord::new(0)));
    record.saves.set(SaveKind::Reflex, Some(SaveRecord::new(2)));
    record.saves.set(SaveKind::Will, Some(SaveRecord::new(2)));
    record
}
