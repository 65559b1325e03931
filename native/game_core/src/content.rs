//! Path: native/game_core/src/content.rs
//! Summary: キャラクター・マップ・パークの静的コンテンツ（JSON）読み込み

use crate::constants::BOSS_SPEED_MARGIN;
use crate::error::GameError;
use crate::perk::{PerkDef, PerkId, RawPerkDef};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

pub const CHARACTERS_FILE: &str = "characters.json";
pub const MAPS_FILE:       &str = "maps.json";
pub const PERKS_FILE:      &str = "perks.json";

/// キャラクターの基礎ステータス（JSON のキー名は camelCase）
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct BaseStats {
    pub speed:      f32,
    #[serde(rename = "hpMax")]
    pub hp_max:     f32,
    #[serde(rename = "bulletDmg")]
    pub bullet_dmg: f32,
    #[serde(rename = "fireRate")]
    pub fire_rate:  f32,
    #[serde(rename = "auraR")]
    pub aura_r:     f32,
    #[serde(rename = "auraSlow")]
    pub aura_slow:  f32,
    #[serde(rename = "novaCD")]
    pub nova_cd:    f32,
}

/// アニメーションのフレーム名プレフィックス（再生は描画側）
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AnimMeta {
    pub walk:   String,
    pub cast:   String,
    pub frames: u32,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CharacterDef {
    pub id:   String,
    pub name: String,
    #[serde(default)]
    pub desc: String,
    pub atlas: String,
    #[serde(rename = "atlasJson")]
    pub atlas_json: String,
    pub anim: AnimMeta,
    pub base: BaseStats,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct BgColors {
    pub top:    String,
    pub bottom: String,
}

/// マップのスポーンパラメータ
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpawnParams {
    pub base_every: f32,
    pub growth:     f32,
    pub boss_every: f32,
}

/// 雪・火の粉などの環境パーティクル設定（省略時はデフォルト値）
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParticleParams {
    pub rate:        u32,
    pub lifespan:    u32,
    pub speed_y_min: f32,
    pub speed_y_max: f32,
    pub scale_start: f32,
    pub scale_end:   f32,
    pub alpha_start: f32,
    pub alpha_end:   f32,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            rate:        2,
            lifespan:    4000,
            speed_y_min: 10.0,
            speed_y_max: 30.0,
            scale_start: 1.0,
            scale_end:   0.5,
            alpha_start: 0.9,
            alpha_end:   0.0,
        }
    }
}

/// マップ上のインタラクト対象の配置。x, y はワールドサイズに対する割合（0..1）
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct InteractableDef {
    pub kind: String,
    pub x:    f32,
    pub y:    f32,
    pub w:    f32,
    pub h:    f32,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MapDef {
    pub id:       String,
    pub name:     String,
    pub bg:       BgColors,
    pub tile:     String,
    pub particle: String,
    #[serde(default)]
    pub particles: ParticleParams,
    pub spawn:    SpawnParams,
    #[serde(default, rename = "enemyTint")]
    pub enemy_tint: Option<String>,
    #[serde(default)]
    pub interactables: Vec<InteractableDef>,
}

/// 読み込み済みコンテンツ（読み取り専用）
#[derive(Clone, Debug)]
pub struct ContentDb {
    pub characters: BTreeMap<String, CharacterDef>,
    pub maps:       BTreeMap<String, MapDef>,
    pub perks:      Vec<PerkDef>,
}

impl ContentDb {
    /// `dir` 以下の characters.json / maps.json / perks.json を読み込む
    pub fn load_dir(dir: &Path) -> Result<Self, GameError> {
        let read = |name: &str| {
            let path = dir.join(name);
            std::fs::read_to_string(&path).map_err(|source| GameError::ContentIo {
                path: path.display().to_string(),
                source,
            })
        };
        let db = Self::from_json_strs(&read(CHARACTERS_FILE)?, &read(MAPS_FILE)?, &read(PERKS_FILE)?)?;
        log::info!(
            "content loaded from {}: {} characters, {} maps, {} perks",
            dir.display(),
            db.characters.len(),
            db.maps.len(),
            db.perks.len()
        );
        Ok(db)
    }

    pub fn from_json_strs(characters: &str, maps: &str, perks: &str) -> Result<Self, GameError> {
        let characters: BTreeMap<String, CharacterDef> = parse(CHARACTERS_FILE, characters)?;
        // ボスは常にプレイヤーより BOSS_SPEED_MARGIN 以上遅くなければならない
        if let Some(slow) = characters.values().find(|c| c.base.speed <= BOSS_SPEED_MARGIN) {
            return Err(GameError::ContentParse {
                path:    CHARACTERS_FILE.to_string(),
                details: format!(
                    "character '{}' speed {} must exceed {BOSS_SPEED_MARGIN}",
                    slow.id, slow.base.speed
                ),
            });
        }
        let maps: BTreeMap<String, MapDef> = parse(MAPS_FILE, maps)?;
        let raw_perks: Vec<RawPerkDef> = parse(PERKS_FILE, perks)?;

        let perks = raw_perks
            .into_iter()
            .filter_map(|raw| match PerkId::from_id(&raw.id) {
                Some(id) => Some(PerkDef { id, name: raw.name, desc: raw.desc }),
                None => {
                    log::warn!("dropping unknown perk id '{}'", raw.id);
                    None
                }
            })
            .collect();

        Ok(Self { characters, maps, perks })
    }

    /// リポジトリ同梱の content/ をバイナリに埋め込んだもの
    pub fn builtin() -> Result<Self, GameError> {
        Self::from_json_strs(
            include_str!("../../../content/characters.json"),
            include_str!("../../../content/maps.json"),
            include_str!("../../../content/perks.json"),
        )
    }

    pub fn character(&self, id: &str) -> Result<&CharacterDef, GameError> {
        self.characters
            .get(id)
            .ok_or_else(|| GameError::UnknownCharacter(id.to_string()))
    }

    pub fn map(&self, id: &str) -> Result<&MapDef, GameError> {
        self.maps.get(id).ok_or_else(|| GameError::UnknownMap(id.to_string()))
    }

    /// 指定 ID があればそれを、なければ先頭のキャラクターを返す
    pub fn character_or_first(&self, id: &str) -> Option<&CharacterDef> {
        self.characters.get(id).or_else(|| self.characters.values().next())
    }

    pub fn map_or_first(&self, id: &str) -> Option<&MapDef> {
        self.maps.get(id).or_else(|| self.maps.values().next())
    }

    pub fn perk_pool(&self) -> Vec<PerkId> {
        self.perks.iter().map(|p| p.id).collect()
    }

    pub fn perk_def(&self, id: PerkId) -> Option<&PerkDef> {
        self.perks.iter().find(|p| p.id == id)
    }
}

fn parse<T: serde::de::DeserializeOwned>(path: &str, src: &str) -> Result<T, GameError> {
    serde_json::from_str(src).map_err(|e| GameError::ContentParse {
        path: path.to_string(),
        details: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_content_loads() {
        let db = ContentDb::builtin().expect("builtin content");
        assert!(db.characters.contains_key("arienn"));
        assert!(db.maps.contains_key("frozen_crossroads"));
        assert_eq!(db.perks.len(), PerkId::ALL.len());
        let arienn = db.character("arienn").expect("arienn");
        assert!((arienn.base.hp_max - 100.0).abs() < 0.001);
        let map = db.map("frozen_crossroads").expect("map");
        assert!(!map.interactables.is_empty());
    }

    #[test]
    fn unknown_perks_are_dropped() {
        let chars = include_str!("../../../content/characters.json");
        let maps = include_str!("../../../content/maps.json");
        let perks = r#"[
            {"id": "bolt_dmg", "name": "Sharper Bolts", "desc": "+25% damage"},
            {"id": "meteor", "name": "Meteor", "desc": "not in this game"}
        ]"#;
        let db = ContentDb::from_json_strs(chars, maps, perks).expect("content");
        assert_eq!(db.perk_pool(), vec![PerkId::BoltDmg]);
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = ContentDb::from_json_strs("{", "{}", "[]").unwrap_err();
        match err {
            GameError::ContentParse { path, .. } => assert_eq!(path, CHARACTERS_FILE),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn too_slow_character_is_rejected() {
        let chars = r#"{
            "snail": {
                "id": "snail", "name": "Snail",
                "atlas": "a.png", "atlasJson": "a.json",
                "anim": {"walk": "w_", "cast": "c_", "frames": 4},
                "base": {"speed": 20, "hpMax": 100, "bulletDmg": 10, "fireRate": 0.6,
                         "auraR": 110, "auraSlow": 0.6, "novaCD": 6}
            }
        }"#;
        let err = ContentDb::from_json_strs(chars, include_str!("../../../content/maps.json"), "[]")
            .unwrap_err();
        match err {
            GameError::ContentParse { path, details } => {
                assert_eq!(path, CHARACTERS_FILE);
                assert!(details.contains("snail"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_particles_use_defaults() {
        let maps = r##"{
            "plain": {
                "id": "plain", "name": "Plain",
                "bg": {"top": "#000000", "bottom": "#111111"},
                "tile": "t.png", "particle": "p.png",
                "spawn": {"baseEvery": 1.0, "growth": 0.01, "bossEvery": 60}
            }
        }"##;
        let db = ContentDb::from_json_strs(
            include_str!("../../../content/characters.json"),
            maps,
            "[]",
        )
        .expect("content");
        let m = db.map("plain").expect("plain");
        assert_eq!(m.particles, ParticleParams::default());
        assert!(m.enemy_tint.is_none());
        assert!(m.interactables.is_empty());
    }

    #[test]
    fn lookup_falls_back_to_first() {
        let db = ContentDb::builtin().expect("builtin content");
        assert!(db.character_or_first("nobody").is_some());
        assert!(matches!(db.map("nowhere"), Err(GameError::UnknownMap(_))));
    }
}
