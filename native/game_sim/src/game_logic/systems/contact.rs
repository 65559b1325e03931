use crate::world::{FrameEvent, GameWorld};
use game_core::constants::{
    CONTACT_DAMAGE_PER_SEC, CONTACT_KNOCKBACK, ICE_BARRIER_MULT, MAX_ENEMY_HALF, PLAYER_HALF_H,
    PLAYER_HALF_W,
};
use game_core::physics::aabb_overlap;

/// プレイヤーと重なっている敵ごとに毎フレーム接触ダメージ（重なった数だけ加算）。
/// 触れた敵はプレイヤーから少し押し返す。
pub(crate) fn update_contact_damage(w: &mut GameWorld, dt: f32) {
    let px = w.player.x;
    let py = w.player.y;
    let mult = if w.player.stats.perks.ice_barrier { ICE_BARRIER_MULT } else { 1.0 };
    let dmg_each = CONTACT_DAMAGE_PER_SEC * dt * mult;

    let query_r = (PLAYER_HALF_W + MAX_ENEMY_HALF).hypot(PLAYER_HALF_H + MAX_ENEMY_HALF);
    let mut candidates = std::mem::take(&mut w.query_buf);
    w.collision.query_nearby_into(px, py, query_r, &mut candidates);

    let mut total = 0.0;
    for &i in &candidates {
        if !w.enemies.is_live(i) {
            continue;
        }
        let (hw, hh) = w.enemies.kinds[i].half_extents();
        let ex = w.enemies.positions_x[i];
        let ey = w.enemies.positions_y[i];
        if !aabb_overlap(px, py, PLAYER_HALF_W, PLAYER_HALF_H, ex, ey, hw, hh) {
            continue;
        }
        w.player.stats.apply_damage(dmg_each);
        total += dmg_each;

        let dx = ex - px;
        let dy = ey - py;
        let d = (dx * dx + dy * dy).sqrt();
        let (nx, ny) = if d > 1e-3 { (dx / d, dy / d) } else { (1.0, 0.0) };
        w.enemies.positions_x[i] += nx * CONTACT_KNOCKBACK * dt;
        w.enemies.positions_y[i] += ny * CONTACT_KNOCKBACK * dt;
    }
    w.query_buf = candidates;

    if total > 0.0 {
        w.frame_events.push(FrameEvent::PlayerDamaged { damage: total });
    }
}
