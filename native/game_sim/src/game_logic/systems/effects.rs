use crate::world::GameWorld;

/// 見た目の状態（詠唱タイマー・カメラ・オーラ位相・死亡フェード）を進め、
/// フレーム末尾の一括削除を行う
pub(crate) fn update_visual_state(w: &mut GameWorld, dt: f32) {
    if w.player.cast_timer > 0.0 {
        w.player.cast_timer = (w.player.cast_timer - dt).max(0.0);
    }
    w.camera.follow(w.player.x, w.player.y, dt, w.world_w, w.world_h);
    w.aura_phase += dt;

    w.enemies.tick_death_fades(dt);
    w.enemies.sweep();
    w.bullets.sweep();
    w.pickups.sweep();
}

/// オーラの不透明度（0.05〜0.10 で明滅）
pub fn aura_alpha(phase: f32) -> f32 {
    0.05 + 0.05 * (((phase * 3.0).sin() + 1.0) / 2.0)
}
