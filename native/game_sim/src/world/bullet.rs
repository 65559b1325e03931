//! Path: native/game_sim/src/world/bullet.rs
//! Summary: 弾丸 SoA（BulletWorld）と弾の種類

use super::retain_by_mask;

/// 弾の種類（描画用）
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectileKind {
    /// 自動射撃のアイスボルト
    Bolt,
    /// Icicle Barrage の放射弾
    Icicle,
}

/// 弾丸 SoA。非貫通なので最初に当たった敵で消える
#[derive(Default)]
pub struct BulletWorld {
    pub positions_x:  Vec<f32>,
    pub positions_y:  Vec<f32>,
    pub velocities_x: Vec<f32>,
    pub velocities_y: Vec<f32>,
    pub damage:       Vec<f32>,
    pub lifetime:     Vec<f32>,
    pub alive:        Vec<bool>,
    pub kinds:        Vec<ProjectileKind>,
    pub count:        usize,
}

impl BulletWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.positions_x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions_x.is_empty()
    }

    #[allow(clippy::too_many_arguments)]
    pub fn spawn(
        &mut self,
        x: f32, y: f32,
        vx: f32, vy: f32,
        damage: f32,
        lifetime: f32,
        kind: ProjectileKind,
    ) {
        self.positions_x.push(x);
        self.positions_y.push(y);
        self.velocities_x.push(vx);
        self.velocities_y.push(vy);
        self.damage.push(damage);
        self.lifetime.push(lifetime);
        self.alive.push(true);
        self.kinds.push(kind);
        self.count += 1;
    }

    pub fn kill(&mut self, i: usize) {
        if self.alive[i] {
            self.alive[i] = false;
            self.count = self.count.saturating_sub(1);
        }
    }

    /// 消えた弾を順序を保って取り除く
    pub fn sweep(&mut self) {
        if self.count == self.len() {
            return;
        }
        let keep = self.alive.clone();
        retain_by_mask(&mut self.positions_x, &keep);
        retain_by_mask(&mut self.positions_y, &keep);
        retain_by_mask(&mut self.velocities_x, &keep);
        retain_by_mask(&mut self.velocities_y, &keep);
        retain_by_mask(&mut self.damage, &keep);
        retain_by_mask(&mut self.lifetime, &keep);
        retain_by_mask(&mut self.kinds, &keep);
        retain_by_mask(&mut self.alive, &keep);
    }
}
