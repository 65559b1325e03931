use crate::world::{FrameEvent, GameWorld};
use game_core::enemy::{boss_stats, regular_stats, EnemyKind};
use game_core::util::{pick_spawn_position, spawn_interval};

/// 通常敵とボスのスポーンタイマー。導入演出中は止めておき、終わった瞬間から通常の間隔で湧く
pub(crate) fn update_spawn(w: &mut GameWorld, dt: f32) {
    // 導入中: 通常敵は 0 に固定（終了直後に 1 体目）、ボスは残り時間をそのまま保持する
    if !w.is_intro_done() {
        w.spawn_timer = 0.0;
        return;
    }

    w.spawn_timer -= dt;
    if w.spawn_timer <= 0.0 {
        spawn_regular(w);
        w.spawn_timer = spawn_interval(w.spawn.base_every, w.spawn.growth, w.elapsed_seconds);
    }

    w.boss_timer -= dt;
    if w.boss_timer <= 0.0 {
        spawn_boss(w);
        w.boss_timer = w.spawn.boss_every;
    }
}

pub(crate) fn spawn_regular(w: &mut GameWorld) {
    let view = w.view_rect();
    let (x, y) = pick_spawn_position(&mut w.rng, &view, w.world_w, w.world_h);
    let kind = EnemyKind::roll_regular(&mut w.rng);
    let (hp, speed) = regular_stats(w.elapsed_seconds);
    w.enemies.spawn(x, y, kind, hp, speed);
    log::trace!("spawned {} hp={hp:.1} speed={speed:.1}", kind.name());
}

pub(crate) fn spawn_boss(w: &mut GameWorld) {
    let view = w.view_rect();
    let (x, y) = pick_spawn_position(&mut w.rng, &view, w.world_w, w.world_h);
    let (hp, speed) = boss_stats(w.elapsed_seconds, w.player.stats.speed);
    w.enemies.spawn(x, y, EnemyKind::Wendigo, hp, speed);
    log::debug!("boss spawned hp={hp:.0} speed={speed:.1} at ({x:.0}, {y:.0})");
    w.frame_events.push(FrameEvent::BossSpawned { hp });
}
