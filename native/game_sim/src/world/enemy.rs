//! Path: native/game_sim/src/world/enemy.rs
//! Summary: 敵 SoA（EnemyWorld）と CrowdBody の実装

use super::retain_by_mask;
use game_core::constants::ENEMY_DEATH_FADE;
use game_core::enemy::EnemyKind;
use game_core::physics::separation::CrowdBody;

/// 敵 SoA（Structure of Arrays）
///
/// 撃破された敵は `dead` になり、フェードが終わるまで配列に残る（当たり判定・移動・
/// ターゲット対象外）。削除はフレーム末尾の `sweep` でまとめて行い、残りの順序は保つ。
#[derive(Clone, Default)]
pub struct EnemyWorld {
    pub positions_x:  Vec<f32>,
    pub positions_y:  Vec<f32>,
    pub speeds:       Vec<f32>,
    pub hp:           Vec<f32>,
    /// ボス HP バー表示用
    pub hp_max:       Vec<f32>,
    pub kinds:        Vec<EnemyKind>,
    pub dead:         Vec<bool>,
    /// 死亡フェードの残り時間（秒）
    pub death_timer:  Vec<f32>,
    /// 生存数
    pub count:        usize,
    /// 近隣クエリ結果の再利用バッファ
    pub neighbor_buf: Vec<usize>,
    keep_buf:         Vec<bool>,
}

impl EnemyWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.positions_x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions_x.is_empty()
    }

    pub fn is_live(&self, i: usize) -> bool {
        !self.dead[i]
    }

    pub fn has_live(&self) -> bool {
        self.count > 0
    }

    /// 末尾に追加してインデックスを返す（挿入順 = インデックス順）
    pub fn spawn(&mut self, x: f32, y: f32, kind: EnemyKind, hp: f32, speed: f32) -> usize {
        self.positions_x.push(x);
        self.positions_y.push(y);
        self.speeds.push(speed);
        self.hp.push(hp);
        self.hp_max.push(hp);
        self.kinds.push(kind);
        self.dead.push(false);
        self.death_timer.push(0.0);
        self.count += 1;
        self.len() - 1
    }

    /// 死亡状態にしてフェードを開始する（二重呼び出しは無視）
    pub fn kill(&mut self, i: usize) {
        if !self.dead[i] {
            self.dead[i] = true;
            self.death_timer[i] = ENEMY_DEATH_FADE;
            self.count = self.count.saturating_sub(1);
        }
    }

    /// 死亡フェードを進める
    pub fn tick_death_fades(&mut self, dt: f32) {
        for i in 0..self.len() {
            if self.dead[i] {
                self.death_timer[i] -= dt;
            }
        }
    }

    /// フェードを終えた敵を取り除く。戻り値は取り除いた数
    pub fn sweep(&mut self) -> usize {
        self.keep_buf.clear();
        self.keep_buf.extend(
            self.dead
                .iter()
                .zip(&self.death_timer)
                .map(|(&dead, &t)| !(dead && t <= 0.0)),
        );
        let removed = self.keep_buf.iter().filter(|&&k| !k).count();
        if removed == 0 {
            return 0;
        }
        let keep = std::mem::take(&mut self.keep_buf);
        retain_by_mask(&mut self.positions_x, &keep);
        retain_by_mask(&mut self.positions_y, &keep);
        retain_by_mask(&mut self.speeds, &keep);
        retain_by_mask(&mut self.hp, &keep);
        retain_by_mask(&mut self.hp_max, &keep);
        retain_by_mask(&mut self.kinds, &keep);
        retain_by_mask(&mut self.dead, &keep);
        retain_by_mask(&mut self.death_timer, &keep);
        self.keep_buf = keep;
        removed
    }

    /// 生存中のボスのインデックス（HUD 用）
    pub fn live_boss(&self) -> Option<usize> {
        (0..self.len()).find(|&i| !self.dead[i] && self.kinds[i].is_boss())
    }

    /// シーン終了時の全削除
    pub fn clear(&mut self) {
        self.positions_x.clear();
        self.positions_y.clear();
        self.speeds.clear();
        self.hp.clear();
        self.hp_max.clear();
        self.kinds.clear();
        self.dead.clear();
        self.death_timer.clear();
        self.count = 0;
    }
}

impl CrowdBody for EnemyWorld {
    fn body_count(&self) -> usize          { self.positions_x.len() }
    fn is_active(&self, i: usize) -> bool  { !self.dead[i] }
    fn is_boss(&self, i: usize) -> bool    { self.kinds[i].is_boss() }
    fn pos_x(&self, i: usize) -> f32       { self.positions_x[i] }
    fn pos_y(&self, i: usize) -> f32       { self.positions_y[i] }
    fn add_pos(&mut self, i: usize, dx: f32, dy: f32) {
        self.positions_x[i] += dx;
        self.positions_y[i] += dy;
    }
    fn neighbor_buf(&mut self) -> &mut Vec<usize> { &mut self.neighbor_buf }
}
