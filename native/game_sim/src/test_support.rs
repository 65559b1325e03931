//! Path: native/game_sim/src/test_support.rs
//! Summary: テスト用のワールド・メタストア生成

use crate::world::{GameWorld, SessionConfig};
use game_core::content::ContentDb;
use game_core::save::{MemoryStorage, MetaStore};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// 導入演出なし・自動スポーンなしのワールド（frozen_crossroads / arienn）
pub(crate) fn quiet_world(seed: u64) -> GameWorld {
    let db = ContentDb::builtin().expect("builtin content");
    let character = db.character("arienn").expect("arienn");
    let map = db.map("frozen_crossroads").expect("frozen_crossroads");
    let config = SessionConfig { intro_secs: 0.0, ..SessionConfig::default() };
    let mut w = GameWorld::new(character, map, db.perk_pool(), &config, StdRng::seed_from_u64(seed));
    w.spawn_timer = 1.0e9;
    w.boss_timer = 1.0e9;
    w
}

pub(crate) fn memory_meta() -> (MetaStore, MemoryStorage) {
    let storage = MemoryStorage::new();
    (MetaStore::load(Box::new(storage.clone())), storage)
}
