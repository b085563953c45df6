// src/hero/src/lib.rs

// 核心模块
mod bag;
mod builder;
mod core;
mod record;
mod stats;

// 子模块
pub mod class;

#[cfg(test)]
mod tests;

// 重新导出主要类型
pub use self::{
    bag::Inventory,
    builder::{BuildStage, CharacterBuilder},
    class::{Class, ClassProfile},
    core::{Character, HeroError, UNNAMED},
    record::{CharacterRecord, ToRecord},
    stats::{StatBlock, StatCode, filter_overrides},
};
