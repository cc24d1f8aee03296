//! 成長表
//!
//! 依等級計算的分數加值。豁免成長以 `{初始值, 每級增量}` 表示，
//! 基本攻擊加值成長則是單一的每級倍率，兩者格式不同、不可混用。
//!
//! ```text
//!       Good       Poor
//! 0th   2   2.0    0   0.0
//! 1st   2   2.5    0   0.3
//! 2nd   3   3.0    0   0.7
//! 3rd   3   3.5    1   1.0
//! 4th   4   4.0    1   1.3
//! ...
//! good(lvl) = 2 + floor(lvl / 2)
//! poor(lvl) = 0 + floor(lvl / 3)
//! ```

use serde::{Deserialize, Serialize};

/// 成長表的共同介面
pub trait Progression {
    /// 某等級的分數加值
    fn value_at_level(&self, level: u32) -> f64;

    /// 某等級的整數加值（向下取整）
    fn bonus_at_level(&self, level: u32) -> i32 {
        self.value_at_level(level).floor() as i32
    }
}

/// 豁免成長：`value = initial + level * increment`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SaveProgression {
    pub initial: f64,
    pub increment: f64,
}

pub const GOOD_SAVE_PROGRESSION: SaveProgression = SaveProgression {
    initial: 2.0,
    increment: 0.5,
};

pub const POOR_SAVE_PROGRESSION: SaveProgression = SaveProgression {
    initial: 0.0,
    increment: 0.334,
};

impl SaveProgression {
    /// 以初始值與每級增量創建
    pub const fn new(initial: f64, increment: f64) -> Self {
        Self { initial, increment }
    }
}

impl Progression for SaveProgression {
    fn value_at_level(&self, level: u32) -> f64 {
        self.initial + f64::from(level) * self.increment
    }
}

/// 基本攻擊加值成長：每級倍率
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BaseAttackProgression(pub f64);

// GOOD 與 POOR 的數值相同，保留原始資料的數值不做修正
pub const POOR_BAB_PROGRESSION: BaseAttackProgression = BaseAttackProgression(0.5);
pub const AVERAGE_BAB_PROGRESSION: BaseAttackProgression = BaseAttackProgression(0.75);
pub const GOOD_BAB_PROGRESSION: BaseAttackProgression = BaseAttackProgression(0.5);

impl BaseAttackProgression {
    /// 每級倍率
    pub fn multiplier(&self) -> f64 {
        self.0
    }
}

impl Progression for BaseAttackProgression {
    fn value_at_level(&self, level: u32) -> f64 {
        f64::from(level) * self.0
    }
}
