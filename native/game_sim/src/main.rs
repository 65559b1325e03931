//! Path: native/game_sim/src/main.rs
//! Summary: ヘッドレス実行バイナリ（自動操縦で N 秒プレイし、結果を JSON で出力）

// Headless runner.
// Usage: ice_survivor_headless [seconds] [seed]
// `ICE_SURVIVOR_CONTENT` でコンテンツディレクトリ、`ICE_SURVIVOR_SAVE_DIR` でセーブ先を変更できる。
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use game_core::content::ContentDb;
use game_core::error::GameError;
use game_core::input::{EdgeDetector, InputFrame};
use game_core::save::{MemoryStorage, MetaStore, SaveStorage};
use game_sim::{find_nearest_enemy, frame_step, GameWorld, SessionConfig, TickOutcome};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

const CONTENT_ENV: &str = "ICE_SURVIVOR_CONTENT";
const DT: f32 = 1.0 / 60.0;
const DEFAULT_SECONDS: f32 = 120.0;
/// この距離より近い敵がいればノヴァを撃つ
const NOVA_TRIGGER_DIST: f32 = 120.0;

#[derive(Serialize)]
struct Summary {
    character:      String,
    map:            String,
    simulated_secs: f32,
    died:           bool,
    level:          u32,
    kills:          u32,
    relics:         String,
    portal_open:    bool,
    runs:           u64,
    best_time:      f64,
    wall_ms:        f64,
}

fn load_content() -> Result<ContentDb, GameError> {
    match std::env::var_os(CONTENT_ENV) {
        Some(dir) => ContentDb::load_dir(&PathBuf::from(dir)),
        None => ContentDb::builtin(),
    }
}

fn open_storage() -> Box<dyn SaveStorage> {
    match game_sim::FileStorage::from_env_or_default() {
        Some(fs) => {
            log::info!("save dir: {}", fs.dir().display());
            Box::new(fs)
        }
        None => {
            log::warn!("no save directory available; using in-memory storage");
            Box::new(MemoryStorage::new())
        }
    }
}

/// 最寄りの敵から離れる方向に動き、近ければノヴァ、インタラクトは交互に押す
fn autopilot(w: &GameWorld, interact: &mut EdgeDetector, frame: u64) -> InputFrame {
    let (px, py) = (w.player.x, w.player.y);
    let mut input = InputFrame::default();
    if let Some(i) = find_nearest_enemy(&w.enemies, px, py) {
        let dx = px - w.enemies.positions_x[i];
        let dy = py - w.enemies.positions_y[i];
        input.axis_x = if dx.abs() > 4.0 { dx.signum() as i8 } else { 0 };
        input.axis_y = if dy.abs() > 4.0 { dy.signum() as i8 } else { 0 };
        input.special_held = dx * dx + dy * dy < NOVA_TRIGGER_DIST * NOVA_TRIGGER_DIST;
    }
    input.interact_pressed = interact.update(frame % 2 == 0);
    input
}

fn run(seconds: f32, seed: Option<u64>) -> Result<Summary, GameError> {
    let content = load_content()?;
    let mut meta = MetaStore::load(open_storage());
    if meta.needs_profile_name() {
        meta.set_profile_name("Headless");
    }

    let last = meta.record.last.clone();
    let character = content
        .character_or_first(&last.character)
        .ok_or_else(|| GameError::UnknownCharacter(last.character.clone()))?;
    let map = content
        .map_or_first(&last.map)
        .ok_or_else(|| GameError::UnknownMap(last.map.clone()))?;
    let rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let mut w = GameWorld::new(character, map, content.perk_pool(), &SessionConfig::default(), rng);

    let start = Instant::now();
    let mut interact = EdgeDetector::default();
    let mut frame: u64 = 0;
    let mut died = false;
    while w.elapsed_seconds < seconds {
        let input = autopilot(&w, &mut interact, frame);
        match frame_step(&mut w, &mut meta, &input, DT) {
            TickOutcome::Died(_) => {
                died = true;
                break;
            }
            TickOutcome::AwaitingPerk => {
                game_sim::choose_perk(&mut w, &mut meta, 0)?;
            }
            TickOutcome::Running | TickOutcome::Paused => {}
        }
        w.drain_frame_events();
        frame += 1;
    }
    if !died {
        meta.commit(true);
    }

    Ok(Summary {
        character:      character.id.clone(),
        map:            map.id.clone(),
        simulated_secs: w.elapsed_seconds,
        died,
        level:          w.player.stats.level,
        kills:          w.kill_count,
        relics:         format!("{}/{}", w.interacted_count, w.interactables.len()),
        portal_open:    w.portal.is_some(),
        runs:           meta.record.meta.runs,
        best_time:      meta.record.meta.best_time,
        wall_ms:        start.elapsed().as_secs_f64() * 1000.0,
    })
}

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seconds = args
        .next()
        .and_then(|s| s.parse::<f32>().ok())
        .unwrap_or(DEFAULT_SECONDS);
    let seed = args.next().and_then(|s| s.parse::<u64>().ok());

    match run(seconds, seed) {
        Ok(summary) => match serde_json::to_string_pretty(&summary) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("summary serialization failed: {e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            log::error!("headless run failed: {e}");
            ExitCode::FAILURE
        }
    }
}
