use crate::world::{FrameEvent, GameWorld, PickupKind};
use game_core::constants::{
    LARGE_XP_VALUE, PICKUP_COLLECT_RADIUS, PICKUP_MAGNET_RADIUS, PICKUP_MAGNET_SPEED,
    SMALL_XP_VALUE,
};
use game_core::save::MetaStore;

/// ドロップアイテムの吸い寄せと回収。
/// 経験値はランのステータスへ、レアフルーツは永続カウンタへ（どちらか一方のみ）
pub(crate) fn update_pickups(w: &mut GameWorld, meta: &mut MetaStore, dt: f32) {
    let px = w.player.x;
    let py = w.player.y;
    for i in 0..w.pickups.len() {
        if !w.pickups.alive[i] {
            continue;
        }
        let mut dx = px - w.pickups.positions_x[i];
        let mut dy = py - w.pickups.positions_y[i];
        let mut d = (dx * dx + dy * dy).sqrt();
        if d < PICKUP_MAGNET_RADIUS && d > 1e-3 {
            let step = (PICKUP_MAGNET_SPEED * dt).min(d);
            w.pickups.positions_x[i] += dx / d * step;
            w.pickups.positions_y[i] += dy / d * step;
            dx = px - w.pickups.positions_x[i];
            dy = py - w.pickups.positions_y[i];
            d = (dx * dx + dy * dy).sqrt();
        }
        if d >= PICKUP_COLLECT_RADIUS {
            continue;
        }

        let kind = w.pickups.kinds[i];
        match kind {
            PickupKind::LargeXp => w.player.stats.add_xp(LARGE_XP_VALUE),
            PickupKind::SmallXp => w.player.stats.add_xp(SMALL_XP_VALUE),
            PickupKind::RareFruit => meta.add_rare_fruit(),
        }
        w.pickups.kill(i);
        w.frame_events.push(FrameEvent::PickupCollected { kind });
    }
}
