//! Path: native/game_core/src/perk.rs
//! Summary: パーク ID（閉じた enum）とパーク定義

use serde::Deserialize;

/// レベルアップで選べるパーク
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub enum PerkId {
    BoltDmg,
    FireRate,
    AuraR,
    AuraSlow,
    NovaCd,
    HpUp,
    IcicleBarrage,
    IceBarrier,
}

impl PerkId {
    pub const ALL: [PerkId; 8] = [
        Self::BoltDmg,
        Self::FireRate,
        Self::AuraR,
        Self::AuraSlow,
        Self::NovaCd,
        Self::HpUp,
        Self::IcicleBarrage,
        Self::IceBarrier,
    ];

    /// コンテンツ・セーブで使う snake_case の ID
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BoltDmg       => "bolt_dmg",
            Self::FireRate      => "fire_rate",
            Self::AuraR         => "aura_r",
            Self::AuraSlow      => "aura_slow",
            Self::NovaCd        => "nova_cd",
            Self::HpUp          => "hp_up",
            Self::IcicleBarrage => "icicle_barrage",
            Self::IceBarrier    => "ice_barrier",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.as_str() == id)
    }
}

impl std::fmt::Display for PerkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// perks.json の 1 エントリ（ID は未検証の文字列のまま）
#[derive(Clone, Debug, Deserialize)]
pub struct RawPerkDef {
    pub id:   String,
    pub name: String,
    #[serde(default)]
    pub desc: String,
}

/// 検証済みのパーク定義
#[derive(Clone, Debug, PartialEq)]
pub struct PerkDef {
    pub id:   PerkId,
    pub name: String,
    pub desc: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_parse_back() {
        for p in PerkId::ALL {
            assert_eq!(PerkId::from_id(p.as_str()), Some(p));
        }
    }

    #[test]
    fn unknown_id_is_none() {
        assert_eq!(PerkId::from_id("lava_boots"), None);
        assert_eq!(PerkId::from_id("BOLT_DMG"), None);
    }
}
