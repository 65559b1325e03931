use super::death::damage_enemy;
use crate::game_logic::chase_ai::find_nearest_enemy;
use crate::world::{Facing, FrameEvent, GameWorld, ProjectileKind};
use game_core::constants::{
    BOLT_LIFETIME, BOLT_SPEED, CAST_DURATION, ICICLE_COUNT, ICICLE_DMG_MULT, ICICLE_INTERVAL,
    ICICLE_LIFETIME, ICICLE_SPEED, NOVA_DAMAGE, NOVA_KNOCKBACK, NOVA_RADIUS,
};
use game_core::save::MetaStore;

/// 自動射撃。生存中の敵がいる間だけクールダウンが進み、0 以下で最寄りの敵へ 1 発撃つ
pub(crate) fn update_auto_fire(w: &mut GameWorld, meta: &mut MetaStore, dt: f32) {
    if !w.enemies.has_live() {
        return;
    }
    w.player.stats.fire_cooldown -= dt;
    if w.player.stats.fire_cooldown > 0.0 {
        return;
    }
    let px = w.player.x;
    let py = w.player.y;
    let Some(target) = find_nearest_enemy(&w.enemies, px, py) else {
        return;
    };
    let tx = w.enemies.positions_x[target];
    let ty = w.enemies.positions_y[target];
    let angle = (ty - py).atan2(tx - px);

    w.bullets.spawn(
        px, py,
        angle.cos() * BOLT_SPEED,
        angle.sin() * BOLT_SPEED,
        w.player.stats.bullet_dmg,
        BOLT_LIFETIME,
        ProjectileKind::Bolt,
    );
    w.player.stats.fire_cooldown = w.player.stats.fire_rate;
    meta.add_bolt();

    w.player.cast_timer = CAST_DURATION;
    w.player.facing = Facing::toward(px, tx);
    w.frame_events.push(FrameEvent::BoltFired { angle });
}

/// ノヴァ（特殊ボタン押しっぱなしで発動）。範囲内の敵に固定ダメージ + 生き残りをノックバック
pub(crate) fn update_nova(w: &mut GameWorld, meta: &mut MetaStore, special_held: bool, dt: f32) {
    if special_held && w.player.stats.nova_cooldown_remaining <= 0.0 {
        w.player.stats.nova_cooldown_remaining = w.player.stats.nova_cooldown_max;
        let px = w.player.x;
        let py = w.player.y;

        // 接触ノックバックで動いた後の位置で引く
        w.rebuild_collision();
        let mut candidates = std::mem::take(&mut w.query_buf);
        w.collision.query_nearby_into(px, py, NOVA_RADIUS, &mut candidates);
        for &i in &candidates {
            if !w.enemies.is_live(i) {
                continue;
            }
            let dx = w.enemies.positions_x[i] - px;
            let dy = w.enemies.positions_y[i] - py;
            let d = (dx * dx + dy * dy).sqrt();
            if d >= NOVA_RADIUS {
                continue;
            }
            if !damage_enemy(w, meta, i, NOVA_DAMAGE) {
                let (ux, uy) = if d > 1e-3 { (dx / d, dy / d) } else { (0.0, 0.0) };
                w.enemies.positions_x[i] += ux * NOVA_KNOCKBACK;
                w.enemies.positions_y[i] += uy * NOVA_KNOCKBACK;
            }
        }
        w.query_buf = candidates;

        log::debug!("nova cast at ({px:.0}, {py:.0})");
        w.frame_events.push(FrameEvent::NovaCast {
            x: px,
            y: py,
            radius: w.player.stats.aura_radius,
        });
    }
    if w.player.stats.nova_cooldown_remaining > 0.0 {
        w.player.stats.nova_cooldown_remaining -= dt;
    }
}

/// Icicle Barrage: 一定間隔で全方位に等間隔で氷柱を放つ
pub(crate) fn update_icicles(w: &mut GameWorld, dt: f32) {
    if !w.player.stats.perks.icicle_barrage {
        return;
    }
    w.player.stats.icicle_timer -= dt;
    if w.player.stats.icicle_timer > 0.0 {
        return;
    }
    w.player.stats.icicle_timer = ICICLE_INTERVAL;

    let dmg = (w.player.stats.bullet_dmg * ICICLE_DMG_MULT).round();
    for k in 0..ICICLE_COUNT {
        let a = k as f32 / ICICLE_COUNT as f32 * std::f32::consts::TAU;
        w.bullets.spawn(
            w.player.x, w.player.y,
            a.cos() * ICICLE_SPEED,
            a.sin() * ICICLE_SPEED,
            dmg,
            ICICLE_LIFETIME,
            ProjectileKind::Icicle,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{memory_meta, quiet_world};
    use game_core::enemy::EnemyKind;

    #[test]
    fn nova_sees_enemies_moved_since_last_rebuild() {
        let mut w = quiet_world(31);
        let (mut meta, _) = memory_meta();
        let (px, py) = (w.player.x, w.player.y);
        w.enemies.spawn(px + 1000.0, py, EnemyKind::Snowling, 100.0, 0.0);
        w.rebuild_collision();
        // 大きな dt のノックバック相当で別セルへ移動
        w.enemies.positions_x[0] = px + 100.0;

        update_nova(&mut w, &mut meta, true, 0.016);
        assert!((w.enemies.hp[0] - 70.0).abs() < 0.001);
    }
}
