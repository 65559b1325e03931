//! Path: native/game_sim/src/storage.rs
//! Summary: ファイルへのセーブ（一時ファイルに書いてから rename）

use directories::ProjectDirs;
use game_core::save::SaveStorage;
use std::fs;
use std::path::PathBuf;

/// セーブディレクトリを上書きする環境変数
pub const SAVE_DIR_ENV: &str = "ICE_SURVIVOR_SAVE_DIR";

pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// プラットフォーム標準のデータディレクトリ
    pub fn default_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "ice-survivor").map(|d| d.data_dir().to_path_buf())
    }

    /// `ICE_SURVIVOR_SAVE_DIR` があればそれを、なければ標準ディレクトリを使う
    pub fn from_env_or_default() -> Option<Self> {
        std::env::var_os(SAVE_DIR_ENV)
            .map(PathBuf::from)
            .or_else(Self::default_dir)
            .map(Self::new)
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }
}

impl SaveStorage for FileStorage {
    fn read(&self, name: &str) -> Option<String> {
        fs::read_to_string(self.dir.join(name)).ok()
    }

    fn write(&mut self, name: &str, blob: &str) -> bool {
        let path = self.dir.join(name);
        let tmp = self.dir.join(format!("{name}.tmp"));
        let result = fs::create_dir_all(&self.dir)
            .and_then(|_| fs::write(&tmp, blob))
            .and_then(|_| fs::rename(&tmp, &path));
        match result {
            Ok(()) => true,
            Err(e) => {
                log::warn!("failed to write {}: {e}", path.display());
                false
            }
        }
    }
}
