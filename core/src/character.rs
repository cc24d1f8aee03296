//! 角色系統
//!
//! 角色擁有六項屬性與三項豁免。豁免與屬性的綁定由欄位固定：
//! 堅韌 -> 體質、反射 -> 敏捷、意志 -> 睿智，建構後不會改變。

use crate::{
    abilities::{Ability, AbilityKind, AbilityScores},
    record::{AbilityRecords, CharacterRecord, SaveRecords},
    saves::{BoundSave, Save, SaveKind, Saves},
    GameError, GameResult,
};
use log::debug;

/// 角色
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    name: String,

    /// 屬性值
    abilities: AbilityScores,

    /// 豁免的非衍生部分
    saves: Saves,
}

impl Character {
    /// 創建新角色
    pub fn new(name: impl Into<String>, abilities: AbilityScores, saves: Saves) -> Self {
        Self {
            name: name.into(),
            abilities,
            saves,
        }
    }

    /// 從紀錄建構角色
    ///
    /// 任何必要欄位缺漏都會回傳 [`GameError::MissingField`]，
    /// 內容為完整路徑（如 `saves.WILL`、`abilities.DEX.base`）。
    pub fn from_record(record: &CharacterRecord) -> GameResult<Self> {
        let name = record
            .name
            .clone()
            .ok_or_else(|| GameError::MissingField("name".to_string()))?;

        let ability = |kind: AbilityKind| -> GameResult<Ability> {
            let path = format!("abilities.{}", kind.abbreviation());
            let entry = record
                .abilities
                .get(kind)
                .ok_or_else(|| GameError::MissingField(path.clone()))?;
            Ability::from_record(entry).map_err(|e| e.within(&path))
        };

        let abilities = AbilityScores {
            strength: ability(AbilityKind::Strength)?,
            dexterity: ability(AbilityKind::Dexterity)?,
            constitution: ability(AbilityKind::Constitution)?,
            intelligence: ability(AbilityKind::Intelligence)?,
            wisdom: ability(AbilityKind::Wisdom)?,
            charisma: ability(AbilityKind::Charisma)?,
        };

        let save = |kind: SaveKind| -> GameResult<Save> {
            let path = format!("saves.{}", kind.abbreviation());
            let entry = record
                .saves
                .get(kind)
                .ok_or_else(|| GameError::MissingField(path.clone()))?;
            Save::from_record(entry).map_err(|e| e.within(&path))
        };

        let saves = Saves {
            fortitude: save(SaveKind::Fortitude)?,
            reflex: save(SaveKind::Reflex)?,
            will: save(SaveKind::Will)?,
        };

        debug!("constructed character {}", name);
        Ok(Self::new(name, abilities, saves))
    }

    /// 角色名稱
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 六項屬性
    pub fn abilities(&self) -> &AbilityScores {
        &self.abilities
    }

    /// 三項豁免的非衍生部分
    pub fn saves(&self) -> &Saves {
        &self.saves
    }

    /// 獲取特定屬性
    pub fn ability(&self, kind: AbilityKind) -> &Ability {
        self.abilities.get(kind)
    }

    /// 修改屬性（如升級時的等級加值），綁定的豁免在下次讀取時反映變化
    pub fn ability_mut(&mut self, kind: AbilityKind) -> &mut Ability {
        self.abilities.get_mut(kind)
    }

    /// 獲取綁定到對應屬性的豁免
    pub fn save(&self, kind: SaveKind) -> BoundSave<'_> {
        BoundSave::new(self.saves.get(kind), self.abilities.get(kind.ability()))
    }

    /// 修改豁免的職業加值或其他加值
    pub fn save_mut(&mut self, kind: SaveKind) -> &mut Save {
        self.saves.get_mut(kind)
    }

    /// 計算豁免加值
    pub fn save_bonus(&self, kind: SaveKind) -> i64 {
        self.save(kind).bonus()
    }

    /// 輸出紀錄，衍生數值不會被寫入
    pub fn to_record(&self) -> CharacterRecord {
        let mut abilities = AbilityRecords::default();
        for (kind, ability) in self.abilities.iter() {
            abilities.set(kind, Some(ability.to_record()));
        }

        let mut saves = SaveRecords::default();
        for kind in SaveKind::all() {
            saves.set(kind, Some(self.saves.get(kind).to_record()));
        }

        CharacterRecord {
            name: Some(self.name.clone()),
            abilities,
            saves,
        }
    }
}
