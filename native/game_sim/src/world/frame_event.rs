//! Path: native/game_sim/src/world/frame_event.rs
//! Summary: フレーム内で発生したゲームイベント（描画・SE 側が毎フレーム drain する）

use super::PickupKind;
use game_core::enemy::EnemyKind;

#[derive(Debug, Clone, PartialEq)]
pub enum FrameEvent {
    EnemyKilled     { kind: EnemyKind, x: f32, y: f32 },
    PlayerDamaged   { damage: f32 },
    LevelUp         { new_level: u32 },
    PickupCollected { kind: PickupKind },
    BossSpawned     { hp: f32 },
    /// 演出のみ（中心はキャスト時点で固定）
    NovaCast        { x: f32, y: f32, radius: f32 },
    Interacted      { index: usize },
    PortalOpened    { x: f32, y: f32 },
    BoltFired       { angle: f32 },
    PlayerDied      { survival_secs: f32 },
}
