//! GameApp を通した一連のラン（名前入力 → 選択 → プレイ → 死亡 → メニュー）

use std::collections::BTreeSet;

use game_core::constants::SAVE_FILE;
use game_core::content::ContentDb;
use game_core::input::InputFrame;
use game_core::perk::PerkId;
use game_core::save::{MemoryStorage, MetaStore, SaveRecord};
use game_sim::asset::run_asset_paths;
use game_sim::{FrameEvent, GameApp, SessionConfig, TickOutcome};

const DT: f32 = 1.0 / 60.0;

fn catalog(db: &ContentDb) -> BTreeSet<String> {
    db.characters
        .values()
        .flat_map(|ch| db.maps.values().map(move |map| run_asset_paths(ch, map)))
        .flatten()
        .collect()
}

fn new_app(storage: &MemoryStorage, intro_secs: f32) -> GameApp {
    let db = ContentDb::builtin().expect("content");
    let assets = catalog(&db);
    let meta = MetaStore::load(Box::new(storage.clone()));
    let config = SessionConfig { intro_secs, ..SessionConfig::default() };
    GameApp::new(db, meta, Box::new(assets), config).with_seed(2024)
}

fn enter_run(app: &mut GameApp) {
    app.boot().expect("boot");
    if app.scene().name() == "name_entry" {
        app.submit_name("Integration").expect("name");
    }
    app.start().expect("start");
    app.select_character("arienn").expect("character");
    app.select_map("frozen_crossroads").expect("map");
    assert_eq!(app.scene().name(), "run");
}

#[test]
fn full_run_keeps_invariants_and_persists_result() {
    let storage = MemoryStorage::new();
    let mut app = new_app(&storage, 3.0);
    enter_run(&mut app);

    let mut prev_xp = 0;
    let mut prev_level = 1;
    let mut prev_hp = app.world().expect("world").player.stats.hp;
    let mut died = None;

    for _ in 0..(60 * 45) {
        let outcome = app.tick(&InputFrame::default(), DT);
        app.drain_frame_events();
        match outcome {
            TickOutcome::Died(result) => {
                died = Some(result);
                break;
            }
            TickOutcome::AwaitingPerk => {
                let perk = app.choose_perk(0).expect("perk");
                let w = app.world().expect("world");
                if perk == PerkId::HpUp {
                    assert!(w.player.stats.hp <= w.player.stats.hp_max);
                }
                prev_hp = w.player.stats.hp;
                continue;
            }
            TickOutcome::Running | TickOutcome::Paused => {}
        }

        let w = app.world().expect("world");
        let s = &w.player.stats;
        assert!(s.xp >= prev_xp, "xp went down");
        assert!(s.level >= prev_level, "level went down");
        assert!(s.hp <= prev_hp + 1.0e-4, "hp went up without a perk");
        if w.elapsed_seconds < 2.9 {
            assert!(w.enemies.is_empty(), "spawned during intro");
        }
        prev_xp = s.xp;
        prev_level = s.level;
        prev_hp = s.hp;
    }

    let result = match died {
        Some(r) => r,
        None => {
            app.world_mut().expect("world").player.stats.hp = 0.0;
            match app.tick(&InputFrame::default(), DT) {
                TickOutcome::Died(r) => r,
                other => panic!("expected death, got {other:?}"),
            }
        }
    };

    assert_eq!(app.scene().name(), "menu");
    let summary = app.menu_summary();
    assert_eq!(summary.runs, 1);
    assert!((summary.best_time - f64::from(result.survival_secs)).abs() < 1.0e-3);

    let blob = storage.get(SAVE_FILE).expect("save written");
    let saved = SaveRecord::from_blob(&blob).expect("parse");
    assert_eq!(saved.meta.runs, 1);
    assert_eq!(saved.profile.name, "Integration");
    assert_eq!(saved.stats.enemies_killed, u64::from(result.kills));
    assert_eq!(saved.last.map, "frozen_crossroads");
}

#[test]
fn visiting_every_relic_opens_portal_once() {
    let storage = MemoryStorage::new();
    let mut app = new_app(&storage, 0.0);
    enter_run(&mut app);

    let targets: Vec<(f32, f32)> = app
        .world()
        .expect("world")
        .interactables
        .iter()
        .map(|it| (it.x, it.y))
        .collect();
    assert_eq!(targets.len(), 3);

    let mut portal_events = 0;
    let mut interacted_events = 0;
    for (x, y) in targets {
        let w = app.world_mut().expect("world");
        w.player.x = x;
        w.player.y = y;
        let press = InputFrame { interact_pressed: true, ..InputFrame::default() };
        app.tick(&press, DT);
        for ev in app.drain_frame_events() {
            match ev {
                FrameEvent::PortalOpened { .. } => portal_events += 1,
                FrameEvent::Interacted { .. } => interacted_events += 1,
                _ => {}
            }
        }
    }
    for _ in 0..30 {
        app.tick(&InputFrame::default(), DT);
        for ev in app.drain_frame_events() {
            if let FrameEvent::PortalOpened { .. } = ev {
                portal_events += 1;
            }
        }
    }

    assert_eq!(interacted_events, 3);
    assert_eq!(portal_events, 1);
    let hud = app.hud().expect("hud");
    assert!(hud.portal_open);
    assert!(hud.lines.iter().any(|l| l == "Relics: 3/3"));
    assert!(hud.lines.iter().any(|l| l == "Portal: open"));
}

#[test]
fn second_session_reuses_saved_profile() {
    let storage = MemoryStorage::new();
    {
        let mut app = new_app(&storage, 0.0);
        app.boot().expect("boot");
        app.submit_name("Returning").expect("name");
    }
    let mut app = new_app(&storage, 0.0);
    app.boot().expect("boot");
    assert_eq!(app.scene().name(), "menu");
    assert_eq!(app.menu_summary().player_name, "Returning");
}
