mod common;

use common::{wingblade_record, WINGBLADE_JSON};
use dnd_core::loader::{
    character_from_json, character_from_json_file, character_to_json, character_to_json_file,
    record_from_json,
};
use dnd_core::{AbilityKind, Character, CharacterClass, GameError, SaveKind};

#[test]
fn test_wingblade() -> anyhow::Result<()> {
    let wingblade = character_from_json(WINGBLADE_JSON)?;
    let dex = wingblade.ability(AbilityKind::Dexterity);

    assert_eq!(dex.base, 18);
    assert_eq!(dex.score(), 20);
    assert_eq!(dex.modifier(), 5);
    assert_eq!(wingblade.save_bonus(SaveKind::Reflex), 7);

    // CON 15 -> 2
    assert_eq!(wingblade.save_bonus(SaveKind::Fortitude), 2);
    // WIS 12 -> 1
    assert_eq!(wingblade.save_bonus(SaveKind::Will), 3);
    assert_eq!(wingblade.ability(AbilityKind::Strength).modifier(), -1);
    Ok(())
}

#[test]
fn test_json_matches_typed_fixture() -> anyhow::Result<()> {
    assert_eq!(record_from_json(WINGBLADE_JSON)?, wingblade_record());
    Ok(())
}

#[test]
fn test_json_round_trip() -> anyhow::Result<()> {
    let original = Character::from_record(&wingblade_record())?;
    let reloaded = character_from_json(&character_to_json(&original)?)?;

    assert_eq!(reloaded.to_record(), original.to_record());
    for kind in AbilityKind::all() {
        assert_eq!(reloaded.ability(kind).score(), original.ability(kind).score());
        assert_eq!(
            reloaded.ability(kind).modifier(),
            original.ability(kind).modifier()
        );
    }
    for kind in SaveKind::all() {
        assert_eq!(reloaded.save_bonus(kind), original.save_bonus(kind));
    }
    Ok(())
}

#[test]
fn test_serialized_shape() -> anyhow::Result<()> {
    let mut wingblade = Character::from_record(&wingblade_record())?;
    wingblade
        .ability_mut(AbilityKind::Dexterity)
        .set_level_bonus(4, 1);

    let value: serde_json::Value = serde_json::from_str(&character_to_json(&wingblade)?)?;
    assert_eq!(value["name"], "Wingblade");
    assert_eq!(
        value["abilities"]["DEX"],
        serde_json::json!({ "base": 18, "racialBonus": 2, "levelBonus": { "4": 1 } })
    );
    assert_eq!(
        value["saves"]["REFL"],
        serde_json::json!({ "classBonus": 2, "miscBonus": 0 })
    );
    // 衍生數值不寫入
    assert!(value["abilities"]["DEX"].get("score").is_none());
    assert!(value["saves"]["REFL"].get("bonus").is_none());
    Ok(())
}

#[test]
fn test_missing_will_save() {
    let mut value: serde_json::Value = serde_json::from_str(WINGBLADE_JSON).unwrap();
    value["saves"].as_object_mut().unwrap().remove("WILL");

    let result = character_from_json(&value.to_string());
    assert!(matches!(result, Err(GameError::MissingField(field)) if field == "saves.WILL"));
}

#[test]
fn test_missing_ability_slot_and_fields() {
    let cases = [
        ("abilities", "CHA", "abilities.CHA"),
        ("saves", "FORT", "saves.FORT"),
    ];
    for (section, slot, expected) in cases {
        let mut value: serde_json::Value = serde_json::from_str(WINGBLADE_JSON).unwrap();
        value[section].as_object_mut().unwrap().remove(slot);
        let result = character_from_json(&value.to_string());
        assert!(
            matches!(&result, Err(GameError::MissingField(field)) if field == expected),
            "{}.{}: {:?}",
            section,
            slot,
            result
        );
    }

    let mut value: serde_json::Value = serde_json::from_str(WINGBLADE_JSON).unwrap();
    value["saves"]["REFL"].as_object_mut().unwrap().remove("classBonus");
    let result = character_from_json(&value.to_string());
    assert!(
        matches!(result, Err(GameError::MissingField(field)) if field == "saves.REFL.classBonus")
    );
}

#[test]
fn test_level_up_propagates_to_saves() -> anyhow::Result<()> {
    let mut wingblade = character_from_json(WINGBLADE_JSON)?;
    assert_eq!(wingblade.save_bonus(SaveKind::Fortitude), 2);

    // 4 級時體質 +1，15 -> 16
    wingblade
        .ability_mut(AbilityKind::Constitution)
        .set_level_bonus(4, 1);
    assert_eq!(wingblade.save_bonus(SaveKind::Fortitude), 3);

    wingblade.ability_mut(AbilityKind::Wisdom).base = 6;
    assert_eq!(wingblade.save_bonus(SaveKind::Will), 0);
    Ok(())
}

#[test]
fn test_class_resolves_save_records() -> anyhow::Result<()> {
    let warrior = CharacterClass::warrior();
    let mut record = wingblade_record();
    for kind in SaveKind::all() {
        record.saves.set(kind, Some(warrior.save_record(kind, 6)));
    }

    let character = Character::from_record(&record)?;
    // 好成長 6 級 = 5，差成長 6 級 = 2
    assert_eq!(character.save(SaveKind::Fortitude).class_bonus(), 5);
    assert_eq!(character.save(SaveKind::Reflex).class_bonus(), 2);
    assert_eq!(character.save_bonus(SaveKind::Fortitude), 7);
    assert_eq!(character.save_bonus(SaveKind::Reflex), 7);
    Ok(())
}

#[test]
fn test_json_file_round_trip() -> anyhow::Result<()> {
    let path = std::env::temp_dir().join(format!("dnd_core_wingblade_{}.json", std::process::id()));
    let original = character_from_json(WINGBLADE_JSON)?;

    character_to_json_file(&original, &path)?;
    let reloaded = character_from_json_file(&path);
    std::fs::remove_file(&path)?;

    assert_eq!(reloaded?, original);
    Ok(())
}
