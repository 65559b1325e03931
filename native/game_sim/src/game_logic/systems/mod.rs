//! Path: native/game_sim/src/game_logic/systems/mod.rs
//! Summary: フレームステップから呼ばれる各システム

pub(crate) mod contact;
pub(crate) mod death;
pub(crate) mod effects;
pub(crate) mod interactables;
pub(crate) mod items;
pub(crate) mod leveling;
pub(crate) mod movement;
pub(crate) mod persistence;
pub(crate) mod projectiles;
pub(crate) mod spawn;
pub(crate) mod weapons;
