//! Path: native/game_core/src/physics/separation.rs
//! Summary: ボスが周囲の通常敵を押しのける（CrowdBody トレイトと適用ロジック）

use super::spatial_hash::SpatialHash;

/// 押し出し処理から見た敵集団
pub trait CrowdBody {
    fn body_count(&self) -> usize;
    /// 死亡（フェード中）でない
    fn is_active(&self, i: usize) -> bool;
    fn is_boss(&self, i: usize) -> bool;
    fn pos_x(&self, i: usize) -> f32;
    fn pos_y(&self, i: usize) -> f32;
    fn add_pos(&mut self, i: usize, dx: f32, dy: f32);
    fn neighbor_buf(&mut self) -> &mut Vec<usize>;
}

/// 生存中の各ボスが `radius` 以内の生存中の通常敵を外向きに押す。
/// 押す量は距離に反比例（`force / max(d, min_dist) * dt`）。
/// `hash` は呼び出し前に生存中の敵で構築済みであること。
pub fn apply_boss_push<W: CrowdBody>(
    world: &mut W,
    hash: &SpatialHash,
    radius: f32,
    force: f32,
    min_dist: f32,
    dt: f32,
) {
    let len = world.body_count();
    for b in 0..len {
        if !world.is_active(b) || !world.is_boss(b) {
            continue;
        }
        let bx = world.pos_x(b);
        let by = world.pos_y(b);

        hash.query_nearby_into(bx, by, radius, world.neighbor_buf());
        let nb_len = world.neighbor_buf().len();
        for ni in 0..nb_len {
            let j = world.neighbor_buf()[ni];
            if j == b || !world.is_active(j) || world.is_boss(j) {
                continue;
            }
            let dx = world.pos_x(j) - bx;
            let dy = world.pos_y(j) - by;
            let dist_sq = dx * dx + dy * dy;
            if dist_sq >= radius * radius {
                continue;
            }
            let dist = dist_sq.sqrt();
            // 完全に重なっているときは +x 方向へ
            let (nx, ny) = if dist > 1e-6 { (dx / dist, dy / dist) } else { (1.0, 0.0) };
            let push = force / dist.max(min_dist) * dt;
            world.add_pos(j, nx * push, ny * push);
        }
    }
}
