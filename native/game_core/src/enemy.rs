//! Path: native/game_core/src/enemy.rs
//! Summary: 敵種類・当たり判定サイズ・経過時間による難易度スケーリング

use crate::constants::{
    BOSS_BASE_HP, BOSS_BASE_SPEED, BOSS_HP_PER_SEC, BOSS_SPEED_MARGIN, BOSS_SPEED_PER_MIN,
    ENEMY_BASE_HP, ENEMY_BASE_SPEED, ENEMY_HP_PER_MIN, ENEMY_MAX_SPEED, ENEMY_SPEED_PER_MIN,
    PRIMARY_KIND_CHANCE,
};
use rand::Rng;

/// 敵の種類
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[repr(u8)]
pub enum EnemyKind {
    #[default]
    Snowling = 0,
    Ghoul    = 1,
    /// ボス
    Wendigo  = 2,
}

impl EnemyKind {
    pub fn is_boss(&self) -> bool {
        matches!(self, Self::Wendigo)
    }

    /// 当たり判定 AABB の半幅・半高
    pub fn half_extents(&self) -> (f32, f32) {
        match self {
            Self::Snowling | Self::Ghoul => (18.0, 24.0),
            Self::Wendigo => (32.0, 40.0),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Snowling => "snowling",
            Self::Ghoul => "ghoul",
            Self::Wendigo => "wendigo",
        }
    }

    /// 通常敵の種類を 60/40 で選ぶ
    pub fn roll_regular<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen::<f32>() < PRIMARY_KIND_CHANCE {
            Self::Snowling
        } else {
            Self::Ghoul
        }
    }
}

/// 通常敵の (hp, speed)。経過分数に比例して強くなり、速度は上限で止まる
pub fn regular_stats(elapsed_secs: f32) -> (f32, f32) {
    let t = elapsed_secs / 60.0;
    let hp = ENEMY_BASE_HP + t * ENEMY_HP_PER_MIN;
    let speed = (ENEMY_BASE_SPEED + t * ENEMY_SPEED_PER_MIN).clamp(ENEMY_BASE_SPEED, ENEMY_MAX_SPEED);
    (hp, speed)
}

/// ボスの (hp, speed)。
/// 速度は経過時間から求めたうえで `player_speed - 20` 未満に抑える（逃げ切れないボスを作らない）。
/// 下限は 0。`player_speed <= 20` では不等式を満たせないので、コンテンツ読み込み時にそうした
/// キャラクターは弾いている（`ContentDb::from_json_strs`）。
pub fn boss_stats(elapsed_secs: f32, player_speed: f32) -> (f32, f32) {
    let hp = BOSS_BASE_HP + elapsed_secs * BOSS_HP_PER_SEC;
    let derived = BOSS_BASE_SPEED + (elapsed_secs / 60.0) * BOSS_SPEED_PER_MIN;
    let cap = player_speed - BOSS_SPEED_MARGIN - 1.0;
    (hp, derived.min(cap).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn regular_stats_scale_with_minutes() {
        let (hp0, sp0) = regular_stats(0.0);
        assert!((hp0 - 10.0).abs() < 0.001);
        assert!((sp0 - 70.0).abs() < 0.001);
        let (hp5, sp5) = regular_stats(300.0);
        assert!((hp5 - 50.0).abs() < 0.001);
        assert!((sp5 - 130.0).abs() < 0.001);
    }

    #[test]
    fn regular_speed_is_capped() {
        let (_, sp) = regular_stats(3600.0);
        assert!((sp - 170.0).abs() < 0.001);
    }

    #[test]
    fn boss_speed_strictly_below_player_margin() {
        for player_speed in [120.0_f32, 180.0, 210.0, 320.0] {
            for elapsed in [0.0_f32, 30.0, 600.0, 3600.0, 1.0e7, f32::INFINITY] {
                let (_, speed) = boss_stats(elapsed, player_speed);
                assert!(speed < player_speed - 20.0, "speed {speed} elapsed {elapsed}");
            }
        }
    }

    #[test]
    fn boss_hp_grows_per_second() {
        let (hp, _) = boss_stats(100.0, 210.0);
        assert!((hp - 1400.0).abs() < 0.001);
    }

    #[test]
    fn roll_regular_never_boss() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut snowlings = 0;
        for _ in 0..1_000 {
            let k = EnemyKind::roll_regular(&mut rng);
            assert!(!k.is_boss());
            if k == EnemyKind::Snowling {
                snowlings += 1;
            }
        }
        assert!(snowlings > 500 && snowlings < 700);
    }

    #[test]
    fn boss_is_larger() {
        let (bw, bh) = EnemyKind::Wendigo.half_extents();
        let (sw, sh) = EnemyKind::Snowling.half_extents();
        assert!(bw > sw && bh > sh);
    }

    #[test]
    fn boss_speed_floors_at_zero_for_slow_players() {
        let (_, speed) = boss_stats(600.0, 15.0);
        assert_eq!(speed, 0.0);
    }
}
