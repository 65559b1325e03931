use crate::game_logic::chase_ai::{find_nearest_enemy, update_chase_ai};
use crate::world::{Facing, GameWorld};
use game_core::constants::{BOSS_PUSH_FORCE, BOSS_PUSH_MIN_DIST, BOSS_PUSH_RADIUS};
use game_core::input::InputFrame;
use game_core::physics::separation::apply_boss_push;

/// プレイヤー移動（斜め正規化・ワールド境界クランプ）と向きの更新
pub(crate) fn update_player_movement(w: &mut GameWorld, input: &InputFrame, dt: f32) {
    let (dx, dy) = input.move_dir();
    let speed = w.player.stats.speed;
    w.player.x = (w.player.x + dx * speed * dt).clamp(0.0, w.world_w);
    w.player.y = (w.player.y + dy * speed * dt).clamp(0.0, w.world_h);

    // 入力があればその向き、なければ最寄りの敵の方を向く
    if input.axis_x != 0 {
        w.player.facing = if input.axis_x > 0 { Facing::Right } else { Facing::Left };
    } else if let Some(t) = find_nearest_enemy(&w.enemies, w.player.x, w.player.y) {
        w.player.facing = Facing::toward(w.player.x, w.enemies.positions_x[t]);
    }
}

/// 敵の追跡とボスによる押し出し
pub(crate) fn update_enemy_movement(w: &mut GameWorld, dt: f32) {
    let stats = &w.player.stats;
    update_chase_ai(
        &mut w.enemies,
        w.player.x,
        w.player.y,
        stats.aura_radius,
        stats.aura_slow_factor,
        dt,
    );

    w.rebuild_collision();
    apply_boss_push(
        &mut w.enemies,
        &w.collision,
        BOSS_PUSH_RADIUS,
        BOSS_PUSH_FORCE,
        BOSS_PUSH_MIN_DIST,
        dt,
    );
}
