//! Path: native/game_core/src/save.rs
//! Summary: 永続メタデータ（セーブレコード）・旧形式マイグレーション・間引きコミット

use crate::constants::{
    COMMIT_INTERVAL_SECS, DEFAULT_CHARACTER, DEFAULT_MAP, DEFAULT_PROFILE_NAME, MAX_PROFILE_NAME,
    SAVE_FILE, SAVE_VERSION,
};
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

// ─── Record ──────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub sound: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { sound: true }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RunMeta {
    pub runs:      u64,
    /// 最長生存時間（秒）
    pub best_time: f64,
}

/// 累積カウンタ（減ることはない）
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CumulativeStats {
    pub enemies_killed: u64,
    pub bolts_fired:    u64,
    pub seconds_played: f64,
    pub rare_fruit:     u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LastSelection {
    pub character: String,
    pub map:       String,
}

impl Default for LastSelection {
    fn default() -> Self {
        Self {
            character: DEFAULT_CHARACTER.to_string(),
            map:       DEFAULT_MAP.to_string(),
        }
    }
}

/// キャラクターごとのメタ情報（新しいランには影響しない）
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CharacterMeta {
    pub best_level: u32,
    pub seen_perks: BTreeSet<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveRecord {
    pub version:    u32,
    pub profile:    Profile,
    pub settings:   Settings,
    pub meta:       RunMeta,
    pub stats:      CumulativeStats,
    pub last:       LastSelection,
    pub characters: BTreeMap<String, CharacterMeta>,
}

impl Default for SaveRecord {
    fn default() -> Self {
        let mut characters = BTreeMap::new();
        characters.insert(DEFAULT_CHARACTER.to_string(), CharacterMeta::default());
        Self {
            version:  SAVE_VERSION,
            profile:  Profile::default(),
            settings: Settings::default(),
            meta:     RunMeta::default(),
            stats:    CumulativeStats::default(),
            last:     LastSelection::default(),
            characters,
        }
    }
}

impl SaveRecord {
    /// JSON blob からレコードを復元する。旧形式はここでマイグレーションする
    pub fn from_blob(blob: &str) -> Result<Self, GameError> {
        let mut value: Value =
            serde_json::from_str(blob).map_err(|e| GameError::SaveCorrupt(e.to_string()))?;
        if !value.is_object() {
            return Err(GameError::SaveCorrupt("top level is not an object".into()));
        }
        migrate(&mut value);
        serde_json::from_value(value).map_err(|e| GameError::SaveCorrupt(e.to_string()))
    }

    pub fn to_blob(&self) -> Result<String, GameError> {
        serde_json::to_string(self).map_err(|e| GameError::SaveCorrupt(e.to_string()))
    }

    /// 表示用のプロフィール名（未設定なら "Player"）
    pub fn display_name(&self) -> &str {
        if self.profile.name.is_empty() {
            DEFAULT_PROFILE_NAME
        } else {
            &self.profile.name
        }
    }
}

/// 旧形式（キャラクターごとの level/xp/perks）を bestLevel/seenPerks に変換し、
/// version を 2 に引き上げる
fn migrate(value: &mut Value) {
    if let Some(chars) = value.get_mut("characters").and_then(Value::as_object_mut) {
        for (id, ch) in chars.iter_mut() {
            let Some(obj) = ch.as_object() else { continue };
            if !(obj.contains_key("level") || obj.contains_key("xp") || obj.contains_key("perks")) {
                continue;
            }
            let best_level = obj
                .get("level")
                .and_then(Value::as_f64)
                .unwrap_or(0.0)
                .max(0.0) as u32;
            let seen: Vec<Value> = obj
                .get("perks")
                .and_then(Value::as_array)
                .map(|perks| perks.iter().filter(|p| p.is_string()).cloned().collect())
                .unwrap_or_default();
            log::debug!("migrating legacy character save '{id}' (level {best_level})");
            *ch = json!({ "bestLevel": best_level, "seenPerks": seen });
        }
    }
    let version = value.get("version").and_then(Value::as_u64).unwrap_or(0);
    if version < u64::from(SAVE_VERSION) {
        if let Some(obj) = value.as_object_mut() {
            obj.insert("version".into(), json!(SAVE_VERSION));
        }
    }
}

// ─── Storage ─────────────────────────────────────────────────

/// 名前付き blob の読み書き（ファイル・メモリなど）
pub trait SaveStorage {
    fn read(&self, name: &str) -> Option<String>;
    /// 成功したら true
    fn write(&mut self, name: &str, blob: &str) -> bool;
}

#[derive(Default)]
struct MemoryInner {
    files:       BTreeMap<String, String>,
    writes:      usize,
    fail_writes: bool,
}

/// メモリ上のストレージ。clone は同じ中身を共有する（テストで書き込み回数を観察する用途）
#[derive(Clone, Default)]
pub struct MemoryStorage {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(name: &str, blob: &str) -> Self {
        let s = Self::new();
        s.inner.borrow_mut().files.insert(name.to_string(), blob.to_string());
        s
    }

    pub fn write_count(&self) -> usize {
        self.inner.borrow().writes
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.borrow_mut().fail_writes = fail;
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.inner.borrow().files.get(name).cloned()
    }
}

impl SaveStorage for MemoryStorage {
    fn read(&self, name: &str) -> Option<String> {
        self.get(name)
    }

    fn write(&mut self, name: &str, blob: &str) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_writes {
            return false;
        }
        inner.writes += 1;
        inner.files.insert(name.to_string(), blob.to_string());
        true
    }
}

// ─── MetaStore ───────────────────────────────────────────────

/// セッション全体で 1 つの永続メタデータ。ランには `&mut` で渡す
pub struct MetaStore {
    pub record:  SaveRecord,
    storage:     Box<dyn SaveStorage>,
    /// シミュレーション時計（秒）。`tick` で進む
    clock:       f64,
    last_commit: Option<f64>,
}

impl MetaStore {
    /// ストレージから読み込む。存在しない・壊れている場合はデフォルトで復旧する
    pub fn load(storage: Box<dyn SaveStorage>) -> Self {
        let record = match storage.read(SAVE_FILE) {
            None => {
                log::debug!("no save found, starting with defaults");
                SaveRecord::default()
            }
            Some(blob) => SaveRecord::from_blob(&blob).unwrap_or_else(|e| {
                log::debug!("recovering from unreadable save: {e}");
                SaveRecord::default()
            }),
        };
        Self { record, storage, clock: 0.0, last_commit: None }
    }

    pub fn tick(&mut self, dt: f64) {
        self.clock += dt;
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// 保存する。`force` でなければ前回から 2.5 秒未満の呼び出しは捨てる。
    /// 書き込み失敗はログに残して握りつぶす（次の間引きコミットで再試行）。
    /// 実際に書き込みが成功したときだけ true を返す
    pub fn commit(&mut self, force: bool) -> bool {
        if !force {
            if let Some(last) = self.last_commit {
                if self.clock - last < COMMIT_INTERVAL_SECS {
                    return false;
                }
            }
        }
        self.last_commit = Some(self.clock);

        let result = self.record.to_blob().and_then(|blob| {
            if self.storage.write(SAVE_FILE, &blob) {
                Ok(())
            } else {
                Err(GameError::SaveWriteFailure { name: SAVE_FILE.to_string() })
            }
        });
        match result {
            Ok(()) => {
                log::trace!("save committed (force={force})");
                true
            }
            Err(e) => {
                log::warn!("save commit failed: {e}");
                false
            }
        }
    }

    pub fn add_kill(&mut self) {
        self.record.stats.enemies_killed += 1;
    }

    pub fn add_bolt(&mut self) {
        self.record.stats.bolts_fired += 1;
    }

    pub fn add_rare_fruit(&mut self) {
        self.record.stats.rare_fruit += 1;
    }

    /// ポーズ中でないティックごとに呼ぶ（累積プレイ時間 + 間引きコミット）
    pub fn add_seconds_played(&mut self, dt: f32) {
        self.record.stats.seconds_played += f64::from(dt);
        self.commit(false);
    }

    /// ラン終了（死亡）。ベストタイム更新・ラン回数加算・強制コミット
    pub fn record_run_end(&mut self, survival_secs: f32) {
        let meta = &mut self.record.meta;
        meta.best_time = meta.best_time.max(f64::from(survival_secs));
        meta.runs += 1;
        self.commit(true);
    }

    /// パーク選択。キャラクターのベストレベルと既出パークを更新する
    pub fn record_perk(&mut self, character_id: &str, level: u32, perk_id: &str) {
        let ch = self.record.characters.entry(character_id.to_string()).or_default();
        ch.best_level = ch.best_level.max(level);
        ch.seen_perks.insert(perk_id.to_string());
        self.commit(false);
    }

    /// プロフィール名を設定する（前後の空白除去・最大 24 文字・空なら "Player"）
    pub fn set_profile_name(&mut self, raw: &str) {
        let trimmed: String = raw.trim().chars().take(MAX_PROFILE_NAME).collect();
        self.record.profile.name = if trimmed.is_empty() {
            DEFAULT_PROFILE_NAME.to_string()
        } else {
            trimmed
        };
        self.commit(true);
    }

    pub fn set_last_character(&mut self, id: &str) {
        self.record.last.character = id.to_string();
        self.commit(false);
    }

    pub fn set_last_map(&mut self, id: &str) {
        self.record.last.map = id.to_string();
        self.commit(false);
    }

    pub fn needs_profile_name(&self) -> bool {
        self.record.profile.name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (MetaStore, MemoryStorage) {
        let storage = MemoryStorage::new();
        (MetaStore::load(Box::new(storage.clone())), storage)
    }

    #[test]
    fn missing_save_gives_defaults() {
        let (meta, _) = store();
        assert_eq!(meta.record, SaveRecord::default());
        assert_eq!(meta.record.version, 2);
        assert_eq!(meta.record.last.character, "arienn");
        assert_eq!(meta.record.last.map, "frozen_crossroads");
        assert!(meta.needs_profile_name());
    }

    #[test]
    fn corrupt_save_recovers_to_defaults() {
        let storage = MemoryStorage::with_blob(SAVE_FILE, "{not json");
        let meta = MetaStore::load(Box::new(storage));
        assert_eq!(meta.record, SaveRecord::default());
    }

    #[test]
    fn legacy_character_format_is_migrated() {
        let blob = r#"{
            "version": 1,
            "profile": {"name": "Vera"},
            "stats": {"enemiesKilled": 12, "boltsFired": 40, "secondsPlayed": 33.5},
            "characters": {"arienn": {"level": 7, "xp": 120, "perks": ["bolt_dmg", "hp_up", 3]}}
        }"#;
        let rec = SaveRecord::from_blob(blob).expect("migrated");
        assert_eq!(rec.version, 2);
        assert_eq!(rec.profile.name, "Vera");
        assert_eq!(rec.stats.enemies_killed, 12);
        let ch = &rec.characters["arienn"];
        assert_eq!(ch.best_level, 7);
        assert!(ch.seen_perks.contains("bolt_dmg"));
        assert!(ch.seen_perks.contains("hp_up"));
        assert_eq!(ch.seen_perks.len(), 2);
        // 欠けたフィールドはデフォルト
        assert_eq!(rec.last, LastSelection::default());
        assert!(rec.settings.sound);
    }

    #[test]
    fn blob_uses_camel_case_keys() {
        let rec = SaveRecord::default();
        let blob = rec.to_blob().expect("blob");
        assert!(blob.contains("\"enemiesKilled\""));
        assert!(blob.contains("\"bestTime\""));
        assert!(blob.contains("\"seenPerks\""));
        assert_eq!(SaveRecord::from_blob(&blob).expect("parse"), rec);
    }

    #[test]
    fn throttled_commits_write_once() {
        let (mut meta, storage) = store();
        assert!(meta.commit(false));
        meta.tick(1.0);
        assert!(!meta.commit(false));
        assert_eq!(storage.write_count(), 1);
        meta.tick(1.6);
        assert!(meta.commit(false));
        assert_eq!(storage.write_count(), 2);
    }

    #[test]
    fn forced_commit_always_writes() {
        let (mut meta, storage) = store();
        assert!(meta.commit(true));
        assert!(meta.commit(true));
        assert!(meta.commit(true));
        assert_eq!(storage.write_count(), 3);
    }

    #[test]
    fn failed_write_is_swallowed_and_retried_later() {
        let (mut meta, storage) = store();
        storage.set_fail_writes(true);
        assert!(!meta.commit(false));
        assert_eq!(storage.write_count(), 0);
        storage.set_fail_writes(false);
        meta.tick(2.5);
        assert!(meta.commit(false));
        assert_eq!(storage.write_count(), 1);
    }

    #[test]
    fn run_end_updates_best_time_as_max() {
        let (mut meta, storage) = store();
        meta.record_run_end(42.0);
        meta.record_run_end(12.0);
        assert_eq!(meta.record.meta.runs, 2);
        assert!((meta.record.meta.best_time - 42.0).abs() < 0.001);
        assert_eq!(storage.write_count(), 2);
        let saved = SaveRecord::from_blob(&storage.get(SAVE_FILE).expect("saved")).expect("parse");
        assert_eq!(saved.meta.runs, 2);
    }

    #[test]
    fn record_perk_keeps_max_and_set() {
        let (mut meta, _) = store();
        meta.record_perk("arienn", 4, "hp_up");
        meta.record_perk("arienn", 2, "hp_up");
        meta.record_perk("arienn", 3, "aura_r");
        let ch = &meta.record.characters["arienn"];
        assert_eq!(ch.best_level, 4);
        assert_eq!(ch.seen_perks.len(), 2);
    }

    #[test]
    fn profile_name_is_trimmed_and_limited() {
        let (mut meta, storage) = store();
        meta.set_profile_name("   ");
        assert_eq!(meta.record.profile.name, "Player");
        meta.set_profile_name("  Aurora Borealis the Unthawed Queen  ");
        assert_eq!(meta.record.profile.name.chars().count(), 24);
        assert!(meta.record.profile.name.starts_with("Aurora"));
        assert_eq!(storage.write_count(), 2);
        assert!(!meta.needs_profile_name());
    }
}
