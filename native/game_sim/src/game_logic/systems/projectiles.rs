use super::death::damage_enemy;
use crate::world::GameWorld;
use game_core::constants::{BULLET_HALF, MAX_ENEMY_HALF};
use game_core::physics::aabb_overlap;
use game_core::save::MetaStore;

/// 弾の移動・寿命更新と、弾 vs 敵の衝突判定（1 発につき最大 1 体）
pub(crate) fn update_projectiles_and_enemy_hits(w: &mut GameWorld, meta: &mut MetaStore, dt: f32) {
    let bullet_len = w.bullets.len();
    for i in 0..bullet_len {
        if !w.bullets.alive[i] {
            continue;
        }
        w.bullets.positions_x[i] += w.bullets.velocities_x[i] * dt;
        w.bullets.positions_y[i] += w.bullets.velocities_y[i] * dt;
        w.bullets.lifetime[i] -= dt;
        if w.bullets.lifetime[i] <= 0.0 {
            w.bullets.kill(i);
        }
    }

    // ノヴァ・接触ノックバックで動いた分を反映
    w.rebuild_collision();

    let query_r = (BULLET_HALF + MAX_ENEMY_HALF) * std::f32::consts::SQRT_2;
    let mut candidates = std::mem::take(&mut w.query_buf);
    for bi in 0..bullet_len {
        if !w.bullets.alive[bi] {
            continue;
        }
        let bx = w.bullets.positions_x[bi];
        let by = w.bullets.positions_y[bi];
        w.collision.query_nearby_into(bx, by, query_r, &mut candidates);

        // 候補はインデックス昇順なので、重なった中で最も古い敵に当たる
        let hit = candidates.iter().copied().find(|&ei| {
            if !w.enemies.is_live(ei) {
                return false;
            }
            let (hw, hh) = w.enemies.kinds[ei].half_extents();
            aabb_overlap(
                bx, by, BULLET_HALF, BULLET_HALF,
                w.enemies.positions_x[ei], w.enemies.positions_y[ei], hw, hh,
            )
        });
        if let Some(ei) = hit {
            let dmg = w.bullets.damage[bi];
            damage_enemy(w, meta, ei, dmg);
            w.bullets.kill(bi);
        }
    }
    w.query_buf = candidates;
}
