//! 角色屬性核心函式庫
//!
//! 此函式庫實作角色屬性與衍生數值的計算規則，包括：
//! - 屬性值與調整值
//! - 豁免加值（堅韌、反射、意志）
//! - 豁免與基本攻擊加值的成長表
//! - 職業定義（可由 TOML 設定檔載入）
//! - 角色聚合與 JSON 序列化

pub mod abilities;
pub mod character;
pub mod classes;
pub mod loader;
pub mod progression;
pub mod record;
pub mod saves;

// 重新導出常用類型
pub use abilities::{modifier_for_score, Ability, AbilityKind, AbilityScores};
pub use character::Character;
pub use classes::{CharacterClass, ClassTable};
pub use progression::{
    BaseAttackProgression, Progression, SaveProgression, AVERAGE_BAB_PROGRESSION,
    GOOD_BAB_PROGRESSION, GOOD_SAVE_PROGRESSION, POOR_BAB_PROGRESSION, POOR_SAVE_PROGRESSION,
};
pub use record::{AbilityRecord, CharacterRecord, SaveRecord};
pub use saves::{BoundSave, Save, SaveKind, Saves};

/// 遊戲操作的結果類型
pub type GameResult<T> = Result<T, GameError>;

/// 遊戲錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// 建構時缺少必要欄位，內容為欄位路徑（如 `saves.WILL`）
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("{format} parse error: {reason}")]
    Parse { format: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Duplicate class: {0}")]
    DuplicateClass(String),

    #[error("Unknown progression: {0}")]
    UnknownProgression(String),
}

impl GameError {
    /// 在欄位路徑前加上上層欄位名稱
    ///
    /// `MissingField("base")` 經 `within("abilities.DEX")` 後成為
    /// `MissingField("abilities.DEX.base")`，其他錯誤維持不變。
    pub fn within(self, parent: &str) -> Self {
        match self {
            Self::MissingField(field) => Self::MissingField(format!("{}.{}", parent, field)),
            other => other,
        }
    }
}
