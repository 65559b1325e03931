//! Path: native/game_sim/src/game_logic/mod.rs
//! Summary: フレームステップ・Chase AI・各システム

mod chase_ai;
mod frame_step;
pub(crate) mod systems;

pub use chase_ai::{find_nearest_enemy, update_chase_ai};
pub use frame_step::{frame_step, TickOutcome};
pub use systems::leveling::choose_perk;
