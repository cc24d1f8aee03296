//! 豁免系統
//!
//! 豁免加值 = 對應屬性調整值 + 職業加值 + 其他加值。
//! 對應屬性由豁免類型固定決定：堅韌 -> 體質、反射 -> 敏捷、意志 -> 睿智。

use crate::{
    abilities::{Ability, AbilityKind},
    record::SaveRecord,
    GameError, GameResult,
};

/// 豁免類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SaveKind {
    /// 堅韌
    Fortitude,
    /// 反射
    Reflex,
    /// 意志
    Will,
}

impl SaveKind {
    /// 此豁免綁定的屬性
    pub fn ability(&self) -> AbilityKind {
        match self {
            Self::Fortitude => AbilityKind::Constitution,
            Self::Reflex => AbilityKind::Dexterity,
            Self::Will => AbilityKind::Wisdom,
        }
    }

    /// 獲取豁免的縮寫名稱，與紀錄中的欄位名稱相同
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Fortitude => "FORT",
            Self::Reflex => "REFL",
            Self::Will => "WILL",
        }
    }

    /// 獲取豁免的完整名稱
    pub fn full_name(&self) -> &'static str {
        match self {
            Self::Fortitude => "Fortitude",
            Self::Reflex => "Reflex",
            Self::Will => "Will",
        }
    }

    /// 獲取所有豁免
    pub fn all() -> [SaveKind; 3] {
        [Self::Fortitude, Self::Reflex, Self::Will]
    }
}

/// 豁免的非衍生部分
///
/// 不持有屬性；加值需搭配屬性計算，見 [`BoundSave`]。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Save {
    pub class_bonus: i32,
    pub misc_bonus: i32,
}

impl Save {
    /// 創建新的豁免
    pub fn new(class_bonus: i32, misc_bonus: i32) -> Self {
        Self {
            class_bonus,
            misc_bonus,
        }
    }

    /// 從紀錄建構，缺少 `classBonus` 時失敗
    pub fn from_record(record: &SaveRecord) -> GameResult<Self> {
        let class_bonus = record
            .class_bonus
            .ok_or_else(|| GameError::MissingField("classBonus".to_string()))?;

        Ok(Self {
            class_bonus,
            misc_bonus: record.misc_bonus,
        })
    }

    /// 以給定屬性計算豁免加值
    pub fn bonus_with(&self, ability: &Ability) -> i64 {
        ability.modifier() + i64::from(self.class_bonus) + i64::from(self.misc_bonus)
    }

    /// 只輸出 `{classBonus, miscBonus}`，綁定的屬性不序列化
    pub fn to_record(&self) -> SaveRecord {
        SaveRecord {
            class_bonus: Some(self.class_bonus),
            misc_bonus: self.misc_bonus,
        }
    }
}

/// 綁定到屬性的豁免
///
/// 借用角色本身的屬性，而非複製，因此每次讀取 `bonus()`
/// 都反映屬性當下的狀態。
#[derive(Debug, Clone, Copy)]
pub struct BoundSave<'a> {
    save: &'a Save,
    ability: &'a Ability,
}

impl<'a> BoundSave<'a> {
    /// 將豁免綁定到屬性
    pub fn new(save: &'a Save, ability: &'a Ability) -> Self {
        Self { save, ability }
    }

    /// 豁免加值，每次呼叫都重新計算
    pub fn bonus(&self) -> i64 {
        self.save.bonus_with(self.ability)
    }

    /// 豁免的非衍生部分
    pub fn save(&self) -> &'a Save {
        self.save
    }

    /// 綁定的屬性
    pub fn ability(&self) -> &'a Ability {
        self.ability
    }

    /// 職業加值
    pub fn class_bonus(&self) -> i32 {
        self.save.class_bonus
    }

    /// 其他加值
    pub fn misc_bonus(&self) -> i32 {
        self.save.misc_bonus
    }
}

/// 角色的三項豁免
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Saves {
    pub fortitude: Save,
    pub reflex: Save,
    pub will: Save,
}

impl Saves {
    /// 以三項豁免創建
    pub fn new(fortitude: Save, reflex: Save, will: Save) -> Self {
        Self {
            fortitude,
            reflex,
            will,
        }
    }

    /// 獲取特定豁免
    pub fn get(&self, kind: SaveKind) -> &Save {
        match kind {
            SaveKind::Fortitude => &self.fortitude,
            SaveKind::Reflex => &self.reflex,
            SaveKind::Will => &self.will,
        }
    }

    /// 獲取特定豁免的可變參考
    pub fn get_mut(&mut self, kind: SaveKind) -> &mut Save {
        match kind {
            SaveKind::Fortitude => &mut self.fortitude,
            SaveKind::Reflex => &mut self.reflex,
            SaveKind::Will => &mut self.will,
        }
    }
}
