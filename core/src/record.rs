//! 序列化紀錄
//!
//! 角色對外交換的資料形狀。必要欄位以 `Option` 表示，
//! 缺漏時由建構流程回報 [`GameError::MissingField`](crate::GameError::MissingField)，
//! 而不是當成 0 處理。

use crate::{abilities::AbilityKind, saves::SaveKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 屬性紀錄：`{ base, racialBonus?, levelBonus? }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<i32>,
    #[serde(default)]
    pub racial_bonus: i32,
    /// 等級 -> 該等級獲得的加值
    #[serde(default)]
    pub level_bonus: BTreeMap<u32, i32>,
}

impl AbilityRecord {
    pub fn new(base: i32) -> Self {
        Self {
            base: Some(base),
            ..Default::default()
        }
    }

    pub fn with_racial_bonus(mut self, racial_bonus: i32) -> Self {
        self.racial_bonus = racial_bonus;
        self
    }

    pub fn with_level_bonus(mut self, level: u32, bonus: i32) -> Self {
        self.level_bonus.insert(level, bonus);
        self
    }
}

/// 豁免紀錄：`{ classBonus, miscBonus? }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_bonus: Option<i32>,
    #[serde(default)]
    pub misc_bonus: i32,
}

impl SaveRecord {
    pub fn new(class_bonus: i32) -> Self {
        Self {
            class_bonus: Some(class_bonus),
            misc_bonus: 0,
        }
    }

    pub fn with_misc_bonus(mut self, misc_bonus: i32) -> Self {
        self.misc_bonus = misc_bonus;
        self
    }
}

/// 六個屬性欄位的紀錄
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityRecords {
    #[serde(rename = "STR", default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<AbilityRecord>,
    #[serde(rename = "DEX", default, skip_serializing_if = "Option::is_none")]
    pub dexterity: Option<AbilityRecord>,
    #[serde(rename = "CON", default, skip_serializing_if = "Option::is_none")]
    pub constitution: Option<AbilityRecord>,
    #[serde(rename = "INT", default, skip_serializing_if = "Option::is_none")]
    pub intelligence: Option<AbilityRecord>,
    #[serde(rename = "WIS", default, skip_serializing_if = "Option::is_none")]
    pub wisdom: Option<AbilityRecord>,
    #[serde(rename = "CHA", default, skip_serializing_if = "Option::is_none")]
    pub charisma: Option<AbilityRecord>,
}

impl AbilityRecords {
    pub fn get(&self, kind: AbilityKind) -> Option<&AbilityRecord> {
        self.slot(kind).as_ref()
    }

    pub fn set(&mut self, kind: AbilityKind, record: Option<AbilityRecord>) {
        *self.slot_mut(kind) = record;
    }

    fn slot(&self, kind: AbilityKind) -> &Option<AbilityRecord> {
        match kind {
            AbilityKind::Strength => &self.strength,
            AbilityKind::Dexterity => &self.dexterity,
            AbilityKind::Constitution => &self.constitution,
            AbilityKind::Intelligence => &self.intelligence,
            AbilityKind::Wisdom => &self.wisdom,
            AbilityKind::Charisma => &self.charisma,
        }
    }

    fn slot_mut(&mut self, kind: AbilityKind) -> &mut Option<AbilityRecord> {
        match kind {
            AbilityKind::Strength => &mut self.strength,
            AbilityKind::Dexterity => &mut self.dexterity,
            AbilityKind::Constitution => &mut self.constitution,
            AbilityKind::Intelligence => &mut self.intelligence,
            AbilityKind::Wisdom => &mut self.wisdom,
            AbilityKind::Charisma => &mut self.charisma,
        }
    }
}

/// 三個豁免欄位的紀錄
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecords {
    #[serde(rename = "FORT", default, skip_serializing_if = "Option::is_none")]
    pub fortitude: Option<SaveRecord>,
    #[serde(rename = "REFL", default, skip_serializing_if = "Option::is_none")]
    pub reflex: Option<SaveRecord>,
    #[serde(rename = "WILL", default, skip_serializing_if = "Option::is_none")]
    pub will: Option<SaveRecord>,
}

impl SaveRecords {
    pub fn get(&self, kind: SaveKind) -> Option<&SaveRecord> {
        match kind {
            SaveKind::Fortitude => self.fortitude.as_ref(),
            SaveKind::Reflex => self.reflex.as_ref(),
            SaveKind::Will => self.will.as_ref(),
        }
    }

    pub fn set(&mut self, kind: SaveKind, record: Option<SaveRecord>) {
        match kind {
            SaveKind::Fortitude => self.fortitude = record,
            SaveKind::Reflex => self.reflex = record,
            SaveKind::Will => self.will = record,
        }
    }
}

/// 角色紀錄：`{ name, abilities: {...}, saves: {...} }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub abilities: AbilityRecords,
    #[serde(default)]
    pub saves: SaveRecords,
}
