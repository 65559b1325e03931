//! Path: native/game_sim/src/world/player.rs
//! Summary: プレイヤー状態（座標・向き・詠唱タイマー・ステータス）

use game_core::stats::PlayerStats;

/// 左右のみの向き
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    pub fn toward(from_x: f32, to_x: f32) -> Self {
        if to_x >= from_x { Self::Right } else { Self::Left }
    }
}

/// プレイヤー状態（座標は当たり判定の中心）
pub struct PlayerState {
    pub x:            f32,
    pub y:            f32,
    pub facing:       Facing,
    /// > 0 の間は詠唱アニメーション
    pub cast_timer:   f32,
    pub stats:        PlayerStats,
    pub character_id: String,
}

impl PlayerState {
    pub fn is_casting(&self) -> bool {
        self.cast_timer > 0.0
    }
}
