//! Path: native/game_sim/src/game_logic/chase_ai.rs
//! Summary: 敵 Chase AI（オーラ減速込み）と最近接探索

use crate::world::EnemyWorld;

/// 最近接の生存敵インデックスを返す（二乗距離、同距離なら先に追加された敵）
pub fn find_nearest_enemy(enemies: &EnemyWorld, px: f32, py: f32) -> Option<usize> {
    let mut min_dist = f32::MAX;
    let mut nearest  = None;
    for i in 0..enemies.len() {
        if !enemies.is_live(i) {
            continue;
        }
        let dx   = enemies.positions_x[i] - px;
        let dy   = enemies.positions_y[i] - py;
        let dist = dx * dx + dy * dy;
        if dist < min_dist {
            min_dist = dist;
            nearest  = Some(i);
        }
    }
    nearest
}

/// 生存中の敵をプレイヤーへ直進させる。オーラ半径内では `aura_slow` 倍に減速
pub fn update_chase_ai(
    enemies: &mut EnemyWorld,
    player_x: f32,
    player_y: f32,
    aura_radius: f32,
    aura_slow: f32,
    dt: f32,
) {
    for i in 0..enemies.len() {
        if !enemies.is_live(i) {
            continue;
        }
        let dx = player_x - enemies.positions_x[i];
        let dy = player_y - enemies.positions_y[i];
        let dist = (dx * dx + dy * dy).sqrt();
        if dist < 0.001 {
            continue;
        }
        let mut speed = enemies.speeds[i];
        if dist < aura_radius {
            speed *= aura_slow;
        }
        // プレイヤーを通り越さない
        let step = (speed * dt).min(dist);
        enemies.positions_x[i] += (dx / dist) * step;
        enemies.positions_y[i] += (dy / dist) * step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::enemy::EnemyKind;

    #[test]
    fn nearest_ties_go_to_first_inserted() {
        let mut e = EnemyWorld::new();
        e.spawn(10.0, 0.0, EnemyKind::Snowling, 10.0, 70.0);
        e.spawn(-10.0, 0.0, EnemyKind::Snowling, 10.0, 70.0);
        e.spawn(0.0, 10.0, EnemyKind::Snowling, 10.0, 70.0);
        assert_eq!(find_nearest_enemy(&e, 0.0, 0.0), Some(0));
        e.kill(0);
        assert_eq!(find_nearest_enemy(&e, 0.0, 0.0), Some(1));
    }

    #[test]
    fn nearest_ignores_dead() {
        let mut e = EnemyWorld::new();
        e.spawn(1.0, 0.0, EnemyKind::Ghoul, 10.0, 70.0);
        e.kill(0);
        assert_eq!(find_nearest_enemy(&e, 0.0, 0.0), None);
    }

    #[test]
    fn aura_slows_enemies_inside_radius() {
        let mut e = EnemyWorld::new();
        e.spawn(100.0, 0.0, EnemyKind::Snowling, 10.0, 100.0);
        e.spawn(500.0, 0.0, EnemyKind::Snowling, 10.0, 100.0);
        update_chase_ai(&mut e, 0.0, 0.0, 110.0, 0.6, 0.1);
        assert!((e.positions_x[0] - 94.0).abs() < 0.001);
        assert!((e.positions_x[1] - 490.0).abs() < 0.001);
    }

    #[test]
    fn dead_enemies_do_not_move() {
        let mut e = EnemyWorld::new();
        e.spawn(100.0, 0.0, EnemyKind::Snowling, 10.0, 100.0);
        e.kill(0);
        update_chase_ai(&mut e, 0.0, 0.0, 110.0, 0.6, 0.1);
        assert!((e.positions_x[0] - 100.0).abs() < 0.001);
    }
}
