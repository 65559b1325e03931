//! Path: native/game_sim/src/world/pickup.rs
//! Summary: ドロップアイテム SoA（PickupWorld）

use super::retain_by_mask;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickupKind {
    SmallXp,
    LargeXp,
    /// ボスのレアドロップ。経験値ではなく永続カウンタに入る
    RareFruit,
}

#[derive(Default)]
pub struct PickupWorld {
    pub positions_x: Vec<f32>,
    pub positions_y: Vec<f32>,
    pub kinds:       Vec<PickupKind>,
    pub alive:       Vec<bool>,
    pub count:       usize,
}

impl PickupWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.positions_x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions_x.is_empty()
    }

    pub fn spawn(&mut self, x: f32, y: f32, kind: PickupKind) {
        self.positions_x.push(x);
        self.positions_y.push(y);
        self.kinds.push(kind);
        self.alive.push(true);
        self.count += 1;
    }

    pub fn kill(&mut self, i: usize) {
        if self.alive[i] {
            self.alive[i] = false;
            self.count = self.count.saturating_sub(1);
        }
    }

    pub fn sweep(&mut self) {
        if self.count == self.len() {
            return;
        }
        let keep = self.alive.clone();
        retain_by_mask(&mut self.positions_x, &keep);
        retain_by_mask(&mut self.positions_y, &keep);
        retain_by_mask(&mut self.kinds, &keep);
        retain_by_mask(&mut self.alive, &keep);
    }
}
