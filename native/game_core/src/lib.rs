//! Path: native/game_core/src/lib.rs
//! Summary: ゲームコア共通ロジック（定数・敵・ステータス・パーク・コンテンツ・セーブ・物理プリミティブ）

pub mod constants;
pub mod content;
pub mod enemy;
pub mod error;
pub mod input;
pub mod perk;
pub mod physics;
pub mod save;
pub mod stats;
pub mod util;

pub use error::GameError;
