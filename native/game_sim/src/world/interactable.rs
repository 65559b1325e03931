//! Path: native/game_sim/src/world/interactable.rs
//! Summary: マップ上のインタラクト対象とポータル

use game_core::constants::INTERACT_RADIUS;
use game_core::content::InteractableDef;

/// 一方向にしか進まない状態
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum InteractableState {
    Undiscovered,
    InRange,
    Interacted,
}

#[derive(Clone, Debug)]
pub struct Interactable {
    pub kind:   String,
    pub x:      f32,
    pub y:      f32,
    pub half_w: f32,
    pub half_h: f32,
    pub state:  InteractableState,
}

impl Interactable {
    /// 配置定義（ワールドサイズに対する割合）から生成する
    pub fn from_def(def: &InteractableDef, world_w: f32, world_h: f32) -> Self {
        Self {
            kind:   def.kind.clone(),
            x:      (def.x * world_w).clamp(0.0, world_w),
            y:      (def.y * world_h).clamp(0.0, world_h),
            half_w: def.w * 0.5,
            half_h: def.h * 0.5,
            state:  InteractableState::Undiscovered,
        }
    }

    /// 半サイズ + INTERACT_RADIUS の軸平行範囲にいるか
    pub fn in_range(&self, px: f32, py: f32) -> bool {
        (px - self.x).abs() <= self.half_w + INTERACT_RADIUS
            && (py - self.y).abs() <= self.half_h + INTERACT_RADIUS
    }

    pub fn is_interacted(&self) -> bool {
        self.state == InteractableState::Interacted
    }

    /// 状態を進める（後戻りはしない）
    pub fn advance_to(&mut self, next: InteractableState) {
        if next > self.state {
            self.state = next;
        }
    }
}

/// 全インタラクト完了で一度だけマップ中央に出現する
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Portal {
    pub x: f32,
    pub y: f32,
}
