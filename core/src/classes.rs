//! 職業系統
//!
//! 職業是一組成長表：一個基本攻擊加值成長與三個豁免成長。
//! 職業不會自動套用到角色上；需要時由呼叫端以
//! [`CharacterClass::class_bonus`] 或 [`CharacterClass::save_record`] 取得數值。

use crate::{
    progression::{
        BaseAttackProgression, Progression, SaveProgression, AVERAGE_BAB_PROGRESSION,
        GOOD_BAB_PROGRESSION, GOOD_SAVE_PROGRESSION, POOR_BAB_PROGRESSION, POOR_SAVE_PROGRESSION,
    },
    record::SaveRecord,
    saves::SaveKind,
    GameError, GameResult,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 角色職業
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterClass {
    pub name: String,
    pub base_attack: BaseAttackProgression,
    pub fortitude: SaveProgression,
    pub reflex: SaveProgression,
    pub will: SaveProgression,
}

impl CharacterClass {
    /// 戰士：好的攻擊與堅韌成長，差的反射與意志成長
    pub fn warrior() -> Self {
        Self {
            name: "warrior".to_string(),
            base_attack: GOOD_BAB_PROGRESSION,
            fortitude: GOOD_SAVE_PROGRESSION,
            reflex: POOR_SAVE_PROGRESSION,
            will: POOR_SAVE_PROGRESSION,
        }
    }

    /// 某豁免的成長表
    pub fn save_progression(&self, kind: SaveKind) -> SaveProgression {
        match kind {
            SaveKind::Fortitude => self.fortitude,
            SaveKind::Reflex => self.reflex,
            SaveKind::Will => self.will,
        }
    }

    /// 某等級的豁免職業加值
    pub fn class_bonus(&self, kind: SaveKind, level: u32) -> i32 {
        self.save_progression(kind).bonus_at_level(level)
    }

    /// 某等級的基本攻擊加值
    pub fn base_attack_bonus(&self, level: u32) -> i32 {
        self.base_attack.bonus_at_level(level)
    }

    /// 將職業加值解析成豁免紀錄，供組裝角色紀錄時使用
    pub fn save_record(&self, kind: SaveKind, level: u32) -> SaveRecord {
        SaveRecord::new(self.class_bonus(kind, level))
    }
}

/// 職業表
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassTable {
    classes: Vec<CharacterClass>,
}

/// 設定檔中的基本攻擊成長：預設名稱或倍率
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BaseAttackSetting {
    Preset(String),
    Multiplier(f64),
}

/// 設定檔中的豁免成長：預設名稱或完整表格
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SaveSetting {
    Preset(String),
    Table(SaveProgression),
}

#[derive(Debug, Deserialize)]
struct ClassSetting {
    name: String,
    base_attack: BaseAttackSetting,
    fortitude: SaveSetting,
    reflex: SaveSetting,
    will: SaveSetting,
}

#[derive(Debug, Deserialize)]
struct ClassTableFile {
    #[serde(default)]
    classes: Vec<ClassSetting>,
}

#[derive(Serialize)]
struct ClassTableOut<'a> {
    classes: &'a [CharacterClass],
}

impl BaseAttackSetting {
    fn resolve(self) -> GameResult<BaseAttackProgression> {
        match self {
            Self::Multiplier(value) => Ok(BaseAttackProgression(value)),
            Self::Preset(name) => match name.as_str() {
                "good" => Ok(GOOD_BAB_PROGRESSION),
                "average" => Ok(AVERAGE_BAB_PROGRESSION),
                "poor" => Ok(POOR_BAB_PROGRESSION),
                _ => Err(GameError::UnknownProgression(name)),
            },
        }
    }
}

impl SaveSetting {
    fn resolve(self) -> GameResult<SaveProgression> {
        match self {
            Self::Table(progression) => Ok(progression),
            Self::Preset(name) => match name.as_str() {
                "good" => Ok(GOOD_SAVE_PROGRESSION),
                "poor" => Ok(POOR_SAVE_PROGRESSION),
                _ => Err(GameError::UnknownProgression(name)),
            },
        }
    }
}

impl ClassSetting {
    fn resolve(self) -> GameResult<CharacterClass> {
        Ok(CharacterClass {
            base_attack: self.base_attack.resolve()?,
            fortitude: self.fortitude.resolve()?,
            reflex: self.reflex.resolve()?,
            will: self.will.resolve()?,
            name: self.name,
        })
    }
}

impl ClassTable {
    /// 創建空的職業表
    pub fn new() -> Self {
        Self::default()
    }

    /// 內建職業
    pub fn builtin() -> Self {
        Self {
            classes: vec![CharacterClass::warrior()],
        }
    }

    /// 新增職業，名稱重複時失敗
    pub fn insert(&mut self, class: CharacterClass) -> GameResult<()> {
        if self.get(&class.name).is_some() {
            return Err(GameError::DuplicateClass(class.name));
        }
        self.classes.push(class);
        Ok(())
    }

    /// 依名稱查詢職業
    pub fn get(&self, name: &str) -> Option<&CharacterClass> {
        self.classes.iter().find(|class| class.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CharacterClass> {
        self.classes.iter()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// 從 TOML 字串載入職業表
    ///
    /// ```toml
    /// [[classes]]
    /// name = "warrior"
    /// base_attack = "good"
    /// fortitude = "good"
    /// reflex = "poor"
    /// will = { initial = 0.0, increment = 0.334 }
    /// ```
    pub fn from_toml_str(content: &str) -> GameResult<Self> {
        let file: ClassTableFile = toml::from_str(content).map_err(|e| GameError::Parse {
            format: "TOML".to_string(),
            reason: e.to_string(),
        })?;

        let mut table = Self::new();
        for setting in file.classes {
            table.insert(setting.resolve()?)?;
        }

        debug!("loaded {} classes from TOML", table.len());
        Ok(table)
    }

    /// 從 TOML 檔案載入職業表
    pub fn from_toml_file(path: &Path) -> GameResult<Self> {
        debug!("reading class table from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 以明確數值輸出 TOML
    pub fn to_toml_string(&self) -> GameResult<String> {
        toml::to_string(&ClassTableOut {
            classes: &self.classes,
        })
        .map_err(|e| GameError::Parse {
            format: "TOML".to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warrior_bonuses() {
        let warrior = CharacterClass::warrior();

        assert_eq!(warrior.class_bonus(SaveKind::Fortitude, 1), 2);
        assert_eq!(warrior.class_bonus(SaveKind::Fortitude, 4), 4);
        assert_eq!(warrior.class_bonus(SaveKind::Reflex, 1), 0);
        assert_eq!(warrior.class_bonus(SaveKind::Will, 3), 1);
        assert_eq!(warrior.base_attack_bonus(4), 2);
        assert_eq!(warrior.save_record(SaveKind::Fortitude, 2), SaveRecord::new(3));
    }

    #[test]
    fn test_load_presets_and_tables() {
        let content = r#"
            [[classes]]
            name = "scout"
            base_attack = "average"
            fortitude = "poor"
            reflex = "good"
            will = { initial = 1.0, increment = 0.25 }

            [[classes]]
            name = "champion"
            base_attack = 1
            fortitude = "good"
            reflex = "poor"
            will = "good"
        "#;

        let table = ClassTable::from_toml_str(content).unwrap();
        assert_eq!(table.len(), 2);

        let scout = table.get("scout").unwrap();
        assert_eq!(scout.base_attack, AVERAGE_BAB_PROGRESSION);
        assert_eq!(scout.reflex, GOOD_SAVE_PROGRESSION);
        assert_eq!(scout.will, SaveProgression::new(1.0, 0.25));

        let champion = table.get("champion").unwrap();
        assert_eq!(champion.base_attack_bonus(5), 5);
        assert!(table.get("warrior").is_none());
    }

    #[test]
    fn test_unknown_preset() {
        let content = r#"
            [[classes]]
            name = "odd"
            base_attack = "good"
            fortitude = "average"
            reflex = "poor"
            will = "poor"
        "#;

        let result = ClassTable::from_toml_str(content);
        assert!(matches!(result, Err(GameError::UnknownProgression(name)) if name == "average"));
    }

    #[test]
    fn test_duplicate_class() {
        let mut table = ClassTable::builtin();
        let result = table.insert(CharacterClass::warrior());
        assert!(matches!(result, Err(GameError::DuplicateClass(name)) if name == "warrior"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_invalid_toml() {
        let result = ClassTable::from_toml_str("[[classes]]\nname = ");
        assert!(matches!(result, Err(GameError::Parse { format, .. }) if format == "TOML"));
    }

    #[test]
    fn test_toml_output_reloads() {
        let table = ClassTable::builtin();
        let content = table.to_toml_string().unwrap();
        assert_eq!(ClassTable::from_toml_str(&content).unwrap(), table);
    }
}
