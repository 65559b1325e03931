//! Path: native/game_core/src/stats.rs
//! Summary: ラン中のプレイヤーステータスとパークによる変換

use crate::content::BaseStats;
use crate::perk::PerkId;

/// ランの間だけ有効なパークフラグ
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ActivePerks {
    pub icicle_barrage: bool,
    pub ice_barrier:    bool,
}

/// プレイヤーステータス（ラン開始時にキャラクター基礎値から生成し、ラン終了で破棄）
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerStats {
    pub speed:                   f32,
    pub hp_max:                  f32,
    pub hp:                      f32,
    pub bullet_dmg:              f32,
    /// 自動射撃の間隔（秒）
    pub fire_rate:               f32,
    pub fire_cooldown:           f32,
    pub aura_radius:             f32,
    /// オーラ内の敵速度に掛ける係数
    pub aura_slow_factor:        f32,
    pub nova_cooldown_max:       f32,
    pub nova_cooldown_remaining: f32,
    pub level:                   u32,
    pub xp:                      u32,
    pub perks:                   ActivePerks,
    pub icicle_timer:            f32,
}

impl PlayerStats {
    pub fn from_base(base: &BaseStats) -> Self {
        Self {
            speed:                   base.speed,
            hp_max:                  base.hp_max,
            hp:                      base.hp_max,
            bullet_dmg:              base.bullet_dmg,
            fire_rate:               base.fire_rate,
            fire_cooldown:           0.0,
            aura_radius:             base.aura_r,
            aura_slow_factor:        base.aura_slow,
            nova_cooldown_max:       base.nova_cd,
            nova_cooldown_remaining: 0.0,
            level:                   1,
            xp:                      0,
            perks:                   ActivePerks::default(),
            icicle_timer:            0.0,
        }
    }

    /// HP を減らす。クランプはしない（死亡判定はフレームステップ側）
    pub fn apply_damage(&mut self, amount: f32) {
        self.hp -= amount;
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0.0
    }

    pub fn add_xp(&mut self, amount: u32) {
        self.xp = self.xp.saturating_add(amount);
    }

    pub fn apply_perk(&mut self, perk: PerkId) {
        match perk {
            PerkId::BoltDmg => self.bullet_dmg = (self.bullet_dmg * 1.25).round(),
            PerkId::FireRate => self.fire_rate = (self.fire_rate * 0.88).max(0.18),
            PerkId::AuraR => self.aura_radius += 30.0,
            PerkId::AuraSlow => self.aura_slow_factor = (self.aura_slow_factor + 0.1).min(0.9),
            PerkId::NovaCd => self.nova_cooldown_max = (self.nova_cooldown_max * 0.8).max(2.5),
            PerkId::HpUp => {
                self.hp_max += 20.0;
                self.hp = (self.hp + 10.0).min(self.hp_max);
            }
            PerkId::IcicleBarrage => {
                self.perks.icicle_barrage = true;
                // 次のティックで即発射
                self.icicle_timer = 0.0;
            }
            PerkId::IceBarrier => self.perks.ice_barrier = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> BaseStats {
        BaseStats {
            speed:      210.0,
            hp_max:     100.0,
            bullet_dmg: 10.0,
            fire_rate:  0.6,
            aura_r:     110.0,
            aura_slow:  0.6,
            nova_cd:    6.0,
        }
    }

    #[test]
    fn from_base_starts_fresh() {
        let s = PlayerStats::from_base(&base());
        assert_eq!(s.level, 1);
        assert_eq!(s.xp, 0);
        assert!((s.hp - s.hp_max).abs() < 0.001);
        assert!(s.fire_cooldown.abs() < 0.001);
        assert!(s.nova_cooldown_remaining.abs() < 0.001);
        assert!(!s.perks.icicle_barrage && !s.perks.ice_barrier);
    }

    #[test]
    fn bolt_dmg_rounds() {
        let mut s = PlayerStats::from_base(&base());
        s.apply_perk(PerkId::BoltDmg);
        assert!((s.bullet_dmg - 13.0).abs() < 0.001);
        s.apply_perk(PerkId::BoltDmg);
        assert!((s.bullet_dmg - 16.0).abs() < 0.001);
    }

    #[test]
    fn fire_rate_has_floor() {
        let mut s = PlayerStats::from_base(&base());
        for _ in 0..30 {
            s.apply_perk(PerkId::FireRate);
        }
        assert!((s.fire_rate - 0.18).abs() < 0.001);
    }

    #[test]
    fn aura_slow_has_ceiling() {
        let mut s = PlayerStats::from_base(&base());
        for _ in 0..10 {
            s.apply_perk(PerkId::AuraSlow);
        }
        assert!((s.aura_slow_factor - 0.9).abs() < 0.001);
    }

    #[test]
    fn nova_cd_has_floor() {
        let mut s = PlayerStats::from_base(&base());
        for _ in 0..20 {
            s.apply_perk(PerkId::NovaCd);
        }
        assert!((s.nova_cooldown_max - 2.5).abs() < 0.001);
    }

    #[test]
    fn hp_up_heals_within_max() {
        let mut s = PlayerStats::from_base(&base());
        s.apply_perk(PerkId::HpUp);
        assert!((s.hp_max - 120.0).abs() < 0.001);
        assert!((s.hp - 110.0).abs() < 0.001);

        s.apply_damage(100.0);
        s.apply_perk(PerkId::HpUp);
        assert!((s.hp_max - 140.0).abs() < 0.001);
        assert!((s.hp - 20.0).abs() < 0.001);
    }

    #[test]
    fn hp_never_exceeds_max_after_any_perk() {
        let mut s = PlayerStats::from_base(&base());
        for round in 0..5 {
            for p in PerkId::ALL {
                s.apply_perk(p);
                assert!(s.hp <= s.hp_max, "round {round} perk {p}");
            }
        }
    }

    #[test]
    fn icicle_barrage_fires_next_tick() {
        let mut s = PlayerStats::from_base(&base());
        s.icicle_timer = 3.0;
        s.apply_perk(PerkId::IcicleBarrage);
        assert!(s.perks.icicle_barrage);
        assert!(s.icicle_timer.abs() < 0.001);
    }

    #[test]
    fn apply_damage_does_not_clamp() {
        let mut s = PlayerStats::from_base(&base());
        s.apply_damage(150.0);
        assert!((s.hp + 50.0).abs() < 0.001);
        assert!(s.is_dead());
    }
}
