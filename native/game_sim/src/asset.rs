//! Path: native/game_sim/src/asset.rs
//! Summary: ラン開始前のアセット存在チェック（見つからなければブロッキングエラー）

use game_core::content::{CharacterDef, MapDef};
use game_core::error::GameError;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// 全キャラクター・全マップ共通のアトラス
pub const BASE_ATLAS:      &str = "assets/base/atlas_base.png";
pub const BASE_ATLAS_JSON: &str = "assets/base/atlas_base.json";

/// アセットの所在を答える
pub trait AssetCatalog {
    fn exists(&self, path: &str) -> bool;
}

/// ディレクトリ上のアセット（パスはルートからの相対）
pub struct DirAssets {
    root: PathBuf,
}

impl DirAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetCatalog for DirAssets {
    fn exists(&self, path: &str) -> bool {
        self.root.join(path).is_file()
    }
}

/// 既知のパス集合（テスト・ヘッドレス実行用）
impl AssetCatalog for BTreeSet<String> {
    fn exists(&self, path: &str) -> bool {
        self.contains(path)
    }
}

/// ランに必要なアセットの一覧
pub fn run_asset_paths(character: &CharacterDef, map: &MapDef) -> Vec<String> {
    vec![
        BASE_ATLAS.to_string(),
        BASE_ATLAS_JSON.to_string(),
        character.atlas.clone(),
        character.atlas_json.clone(),
        map.tile.clone(),
        map.particle.clone(),
    ]
}

/// 必要なアセットが全て揃っているか確認する。欠けていれば一覧付きで ContentMissing
pub fn ensure_run_assets(
    catalog: &dyn AssetCatalog,
    character: &CharacterDef,
    map: &MapDef,
) -> Result<(), GameError> {
    let missing: Vec<String> = run_asset_paths(character, map)
        .into_iter()
        .filter(|p| !catalog.exists(p))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        log::warn!("run assets missing: {}", missing.join(", "));
        Err(GameError::ContentMissing { missing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::content::ContentDb;

    #[test]
    fn reports_every_missing_path() {
        let db = ContentDb::builtin().expect("content");
        let ch = db.character("arienn").expect("arienn");
        let map = db.map("frozen_crossroads").expect("map");

        let mut have: BTreeSet<String> = run_asset_paths(ch, map).into_iter().collect();
        assert!(ensure_run_assets(&have, ch, map).is_ok());

        have.remove(&ch.atlas);
        have.remove(BASE_ATLAS_JSON);
        match ensure_run_assets(&have, ch, map) {
            Err(GameError::ContentMissing { missing }) => {
                assert_eq!(missing, vec![BASE_ATLAS_JSON.to_string(), ch.atlas.clone()]);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn dir_assets_checks_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::create_dir_all(dir.path().join("assets/base")).expect("mkdir");
        std::fs::write(dir.path().join(BASE_ATLAS), b"png").expect("write");
        let cat = DirAssets::new(dir.path());
        assert!(cat.exists(BASE_ATLAS));
        assert!(!cat.exists(BASE_ATLAS_JSON));
    }
}
