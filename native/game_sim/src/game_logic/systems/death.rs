use crate::world::{FrameEvent, GameWorld, PickupKind};
use game_core::constants::{LARGE_XP_CHANCE, RARE_FRUIT_CHANCE};
use game_core::save::MetaStore;
use rand::Rng;

/// 敵にダメージを与える。撃破したら true（死亡済みの敵には何もしない）
pub(crate) fn damage_enemy(w: &mut GameWorld, meta: &mut MetaStore, i: usize, dmg: f32) -> bool {
    if !w.enemies.is_live(i) {
        return false;
    }
    w.enemies.hp[i] -= dmg;
    if w.enemies.hp[i] <= 0.0 {
        on_enemy_killed(w, meta, i);
        true
    } else {
        false
    }
}

fn on_enemy_killed(w: &mut GameWorld, meta: &mut MetaStore, i: usize) {
    let kind = w.enemies.kinds[i];
    let x = w.enemies.positions_x[i];
    let y = w.enemies.positions_y[i];

    w.enemies.kill(i);
    w.kill_count += 1;
    meta.add_kill();

    let drop = if w.rng.gen::<f32>() < LARGE_XP_CHANCE {
        PickupKind::LargeXp
    } else {
        PickupKind::SmallXp
    };
    w.pickups.spawn(x, y, drop);

    // ボスは経験値とは別にレアドロップを抽選
    if kind.is_boss() && w.rng.gen::<f32>() < RARE_FRUIT_CHANCE {
        w.pickups.spawn(x + 16.0, y, PickupKind::RareFruit);
    }

    log::debug!("enemy killed: {} at ({x:.0}, {y:.0})", kind.name());
    w.frame_events.push(FrameEvent::EnemyKilled { kind, x, y });
}
