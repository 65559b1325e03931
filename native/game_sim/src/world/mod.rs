//! Path: native/game_sim/src/world/mod.rs
//! Summary: ワールド型（PlayerState, EnemyWorld, BulletWorld, PickupWorld, Interactable, GameWorld）

mod bullet;
mod enemy;
mod frame_event;
mod game_loop_control;
mod game_world;
mod interactable;
mod pickup;
mod player;

pub use bullet::{BulletWorld, ProjectileKind};
pub use enemy::EnemyWorld;
pub use frame_event::FrameEvent;
pub use game_loop_control::GameLoopControl;
pub use game_world::{Camera, GameWorld, PerkOffer, RunOutcome, SessionConfig};
pub use interactable::{Interactable, InteractableState, Portal};
pub use pickup::{PickupKind, PickupWorld};
pub use player::{Facing, PlayerState};

/// `keep[i]` が true の要素だけを順序を保って残す（SoA の各列に同じマスクを適用する）
pub(crate) fn retain_by_mask<T>(v: &mut Vec<T>, keep: &[bool]) {
    let mut i = 0;
    v.retain(|_| {
        let k = keep.get(i).copied().unwrap_or(true);
        i += 1;
        k
    });
}
