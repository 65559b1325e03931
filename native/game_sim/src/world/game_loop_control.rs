//! Path: native/game_sim/src/world/game_loop_control.rs
//! Summary: ポーズメニューによる一時停止フラグ

/// メニューによるポーズ（レベルアップ待ちとは別）
#[derive(Default)]
pub struct GameLoopControl {
    paused: bool,
}

impl GameLoopControl {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn pause(&mut self) {
        self.paused = true;
    }
    pub fn resume(&mut self) {
        self.paused = false;
    }
    pub fn toggle(&mut self) {
        self.paused = !self.paused;
    }
    pub fn is_paused(&self) -> bool {
        self.paused
    }
}
