//! 屬性值系統
//!
//! 六項屬性（力量、敏捷、體質、智力、睿智、魅力），
//! 每項由基礎值、種族加值與各等級加值組成最終分數與調整值。

use crate::{record::AbilityRecord, GameError, GameResult};
use std::collections::BTreeMap;

/// 六項屬性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbilityKind {
    /// 力量
    Strength,
    /// 敏捷 - 影響反射豁免
    Dexterity,
    /// 體質 - 影響堅韌豁免
    Constitution,
    /// 智力
    Intelligence,
    /// 睿智 - 影響意志豁免
    Wisdom,
    /// 魅力
    Charisma,
}

impl AbilityKind {
    /// 獲取屬性的縮寫名稱，與紀錄中的欄位名稱相同
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Constitution => "CON",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Charisma => "CHA",
        }
    }

    /// 獲取屬性的完整名稱
    pub fn full_name(&self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Constitution => "Constitution",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Charisma => "Charisma",
        }
    }

    /// 獲取所有屬性
    pub fn all() -> [AbilityKind; 6] {
        [
            Self::Strength,
            Self::Dexterity,
            Self::Constitution,
            Self::Intelligence,
            Self::Wisdom,
            Self::Charisma,
        ]
    }
}

/// 計算屬性調整值
///
/// 規則：調整值 = floor(分數 / 2) - 5。
/// 使用向下取整而非向零截斷，負分數時兩者不同（-1 -> -6）。
/// 分數以 `i64` 計算，任何 `i32` 輸入的總和都不會溢位。
pub fn modifier_for_score(score: i64) -> i64 {
    score.div_euclid(2) - 5
}

/// 單項屬性
///
/// 分數與調整值每次讀取時重新計算，不做快取。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ability {
    pub base: i32,
    pub racial_bonus: i32,
    level_bonus: BTreeMap<u32, i32>,
}

impl Ability {
    /// 創建只有基礎值的屬性
    pub fn new(base: i32) -> Self {
        Self {
            base,
            racial_bonus: 0,
            level_bonus: BTreeMap::new(),
        }
    }

    /// 從紀錄建構，缺少 `base` 時失敗
    pub fn from_record(record: &AbilityRecord) -> GameResult<Self> {
        let base = record
            .base
            .ok_or_else(|| GameError::MissingField("base".to_string()))?;

        Ok(Self {
            base,
            racial_bonus: record.racial_bonus,
            level_bonus: record.level_bonus.clone(),
        })
    }

    /// 最終分數 = 基礎值 + 種族加值 + 所有等級加值
    pub fn score(&self) -> i64 {
        i64::from(self.base)
            + i64::from(self.racial_bonus)
            + self
                .level_bonus
                .values()
                .map(|&bonus| i64::from(bonus))
                .sum::<i64>()
    }

    /// 屬性調整值
    pub fn modifier(&self) -> i64 {
        modifier_for_score(self.score())
    }

    /// 取得某等級的加值，未設定時為 0
    pub fn level_bonus(&self, level: u32) -> i32 {
        self.level_bonus.get(&level).copied().unwrap_or(0)
    }

    /// 所有等級加值
    pub fn level_bonuses(&self) -> &BTreeMap<u32, i32> {
        &self.level_bonus
    }

    /// 設定某等級的加值（升級事件），回傳原本的值
    pub fn set_level_bonus(&mut self, level: u32, bonus: i32) -> Option<i32> {
        self.level_bonus.insert(level, bonus)
    }

    /// 移除某等級的加值，回傳被移除的值
    pub fn remove_level_bonus(&mut self, level: u32) -> Option<i32> {
        self.level_bonus.remove(&level)
    }

    /// 輸出與建構輸入相同形狀的紀錄
    pub fn to_record(&self) -> AbilityRecord {
        AbilityRecord {
            base: Some(self.base),
            racial_bonus: self.racial_bonus,
            level_bonus: self.level_bonus.clone(),
        }
    }
}

/// 角色的六項屬性
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilityScores {
    pub strength: Ability,
    pub dexterity: Ability,
    pub constitution: Ability,
    pub intelligence: Ability,
    pub wisdom: Ability,
    pub charisma: Ability,
}

impl Default for AbilityScores {
    fn default() -> Self {
        Self {
            strength: Ability::new(10),
            dexterity: Ability::new(10),
            constitution: Ability::new(10),
            intelligence: Ability::new(10),
            wisdom: Ability::new(10),
            charisma: Ability::new(10),
        }
    }
}

impl AbilityScores {
    /// 以六個基礎值創建屬性
    pub fn new(str: i32, dex: i32, con: i32, int: i32, wis: i32, cha: i32) -> Self {
        Self {
            strength: Ability::new(str),
            dexterity: Ability::new(dex),
            constitution: Ability::new(con),
            intelligence: Ability::new(int),
            wisdom: Ability::new(wis),
            charisma: Ability::new(cha),
        }
    }

    /// 獲取特定屬性
    pub fn get(&self, kind: AbilityKind) -> &Ability {
        match kind {
            AbilityKind::Strength => &self.strength,
            AbilityKind::Dexterity => &self.dexterity,
            AbilityKind::Constitution => &self.constitution,
            AbilityKind::Intelligence => &self.intelligence,
            AbilityKind::Wisdom => &self.wisdom,
            AbilityKind::Charisma => &self.charisma,
        }
    }

    /// 獲取特定屬性的可變參考
    pub fn get_mut(&mut self, kind: AbilityKind) -> &mut Ability {
        match kind {
            AbilityKind::Strength => &mut self.strength,
            AbilityKind::Dexterity => &mut self.dexterity,
            AbilityKind::Constitution => &mut self.constitution,
            AbilityKind::Intelligence => &mut self.intelligence,
            AbilityKind::Wisdom => &mut self.wisdom,
            AbilityKind::Charisma => &mut self.charisma,
        }
    }

    /// 依 STR、DEX、CON、INT、WIS、CHA 的順序走訪
    pub fn iter(&self) -> impl Iterator<Item = (AbilityKind, &Ability)> + '_ {
        AbilityKind::all()
            .into_iter()
            .map(move |kind| (kind, self.get(kind)))
    }
}
