//! 角色載入器
//!
//! 以 JSON 讀寫角色紀錄。

use crate::{character::Character, record::CharacterRecord, GameError, GameResult};
use log::debug;
use std::path::Path;

fn json_error(e: serde_json::Error) -> GameError {
    GameError::Parse {
        format: "JSON".to_string(),
        reason: e.to_string(),
    }
}

/// 從 JSON 字串讀取角色紀錄
pub fn record_from_json(json: &str) -> GameResult<CharacterRecord> {
    serde_json::from_str(json).map_err(json_error)
}

/// 從 JSON 字串建構角色
///
/// # 範例
/// ```
/// use dnd_core::{loader::character_from_json, AbilityKind, SaveKind};
///
/// let json = r#"{
///     "name": "Wingblade",
///     "abilities": {
///         "STR": { "base": 9 },
///         "DEX": { "base": 18, "racialBonus": 2 },
///         "CON": { "base": 15 },
///         "INT": { "base": 16 },
///         "WIS": { "base": 12 },
///         "CHA": { "base": 12 }
///     },
///     "saves": {
///         "FORT": { "classBonus": 0 },
///         "REFL": { "classBonus": 2 },
///         "WILL": { "classBonus": 2 }
///     }
/// }"#;
///
/// let character = character_from_json(json).unwrap();
/// assert_eq!(character.ability(AbilityKind::Dexterity).score(), 20);
/// assert_eq!(character.save_bonus(SaveKind::Reflex), 7);
/// ```
pub fn character_from_json(json: &str) -> GameResult<Character> {
    Character::from_record(&record_from_json(json)?)
}

/// 輸出角色為格式化的 JSON
pub fn character_to_json(character: &Character) -> GameResult<String> {
    serde_json::to_string_pretty(&character.to_record()).map_err(json_error)
}

/// 從 JSON 檔案建構角色
pub fn character_from_json_file(path: &Path) -> GameResult<Character> {
    debug!("reading character from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    character_from_json(&content)
}

/// 將角色寫入 JSON 檔案
pub fn character_to_json_file(character: &Character, path: &Path) -> GameResult<()> {
    debug!("writing character {} to {}", character.name(), path.display());
    std::fs::write(path, character_to_json(character)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_json() {
        let result = character_from_json("{ \"name\": ");
        assert!(matches!(result, Err(GameError::Parse { format, .. }) if format == "JSON"));
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        let result = record_from_json(r#"{ "abilities": { "STR": { "base": "nine" } } }"#);
        assert!(matches!(result, Err(GameError::Parse { .. })));
    }

    #[test]
    fn test_empty_object_is_missing_name() {
        let result = character_from_json("{}");
        assert!(matches!(result, Err(GameError::MissingField(field)) if field == "name"));
    }

    #[test]
    fn test_missing_file() {
        let result = character_from_json_file(Path::new("does/not/exist.json"));
        assert!(matches!(result, Err(GameError::Io(_))));
    }
}
