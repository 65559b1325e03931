//! Path: native/game_sim/src/app.rs
//! Summary: シーン遷移（Boot → 名前入力 → メニュー → キャラ選択 → マップ選択 → ラン）とラン駆動

use crate::asset::{ensure_run_assets, AssetCatalog};
use crate::game_logic::{self, frame_step, TickOutcome};
use crate::render_snapshot::{build_hud, build_minimap, HudSnapshot, MinimapSnapshot};
use crate::world::{FrameEvent, GameWorld, RunOutcome, SessionConfig};
use game_core::content::ContentDb;
use game_core::error::GameError;
use game_core::input::InputFrame;
use game_core::perk::PerkId;
use game_core::save::MetaStore;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// 現在のシーン
pub enum Scene {
    Boot,
    NameEntry,
    Menu,
    CharacterSelect,
    MapSelect,
    Run(Box<GameWorld>),
    /// アセット不足でランを開始できなかった（メッセージを表示してメニューに戻る）
    AssetsMissing { message: String },
}

impl Scene {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Boot => "boot",
            Self::NameEntry => "name_entry",
            Self::Menu => "menu",
            Self::CharacterSelect => "character_select",
            Self::MapSelect => "map_select",
            Self::Run(_) => "run",
            Self::AssetsMissing { .. } => "assets_missing",
        }
    }
}

/// メニュー画面に出す集計
#[derive(Clone, Debug, PartialEq)]
pub struct MenuSummary {
    pub player_name:  String,
    pub runs:         u64,
    pub best_time:    f64,
    pub last_outcome: Option<RunOutcome>,
}

pub struct GameApp {
    content:      ContentDb,
    meta:         MetaStore,
    assets:       Box<dyn AssetCatalog>,
    config:       SessionConfig,
    scene:        Scene,
    /// None なら各ランはエントロピーから乱数を初期化する
    rng_seed:     Option<u64>,
    last_outcome: Option<RunOutcome>,
    /// ワールド破棄後も描画側が取り出せるように残したイベント
    pending_events: Vec<FrameEvent>,
}

impl GameApp {
    pub fn new(
        content: ContentDb,
        meta: MetaStore,
        assets: Box<dyn AssetCatalog>,
        config: SessionConfig,
    ) -> Self {
        Self {
            content,
            meta,
            assets,
            config,
            scene: Scene::Boot,
            rng_seed: None,
            last_outcome: None,
            pending_events: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn meta(&self) -> &MetaStore {
        &self.meta
    }

    pub fn content(&self) -> &ContentDb {
        &self.content
    }

    pub fn last_outcome(&self) -> Option<RunOutcome> {
        self.last_outcome
    }

    pub fn world(&self) -> Option<&GameWorld> {
        match &self.scene {
            Scene::Run(w) => Some(w.as_ref()),
            _ => None,
        }
    }

    pub fn world_mut(&mut self) -> Option<&mut GameWorld> {
        match &mut self.scene {
            Scene::Run(w) => Some(w.as_mut()),
            _ => None,
        }
    }

    // ─── シーン遷移 ─────────────────────────────────────────────

    /// 起動。プロフィール名が未設定なら名前入力へ
    pub fn boot(&mut self) -> Result<(), GameError> {
        self.expect_scene(matches!(self.scene, Scene::Boot))?;
        let next = if self.meta.needs_profile_name() {
            Scene::NameEntry
        } else {
            Scene::Menu
        };
        self.transition(next);
        Ok(())
    }

    pub fn submit_name(&mut self, raw: &str) -> Result<(), GameError> {
        self.expect_scene(matches!(self.scene, Scene::NameEntry))?;
        self.meta.set_profile_name(raw);
        self.transition(Scene::Menu);
        Ok(())
    }

    pub fn start(&mut self) -> Result<(), GameError> {
        self.expect_scene(matches!(self.scene, Scene::Menu))?;
        self.transition(Scene::CharacterSelect);
        Ok(())
    }

    pub fn select_character(&mut self, id: &str) -> Result<(), GameError> {
        self.expect_scene(matches!(self.scene, Scene::CharacterSelect))?;
        self.content.character(id)?;
        self.meta.set_last_character(id);
        self.transition(Scene::MapSelect);
        Ok(())
    }

    /// マップを選んでランを開始する。アセットが欠けていれば AssetsMissing に入りエラーを返す
    pub fn select_map(&mut self, id: &str) -> Result<(), GameError> {
        self.expect_scene(matches!(self.scene, Scene::MapSelect))?;
        self.content.map(id)?;
        self.meta.set_last_map(id);
        self.start_run()
    }

    /// 一つ前のシーンへ
    pub fn back(&mut self) -> Result<(), GameError> {
        let next = match self.scene {
            Scene::CharacterSelect | Scene::AssetsMissing { .. } => Scene::Menu,
            Scene::MapSelect => Scene::CharacterSelect,
            _ => return Err(GameError::WrongScene(self.scene.name())),
        };
        self.transition(next);
        Ok(())
    }

    // ─── ラン中の操作 ─────────────────────────────────────────

    /// ポーズメニューの開閉。レベルアップ選択中は開かない
    pub fn toggle_pause(&mut self) -> Result<bool, GameError> {
        let w = self.run_world_mut()?;
        if !w.awaiting_perk() {
            w.control.toggle();
        }
        Ok(w.control.is_paused())
    }

    pub fn resume(&mut self) -> Result<(), GameError> {
        self.run_world_mut()?.control.resume();
        Ok(())
    }

    /// ポーズメニューの「メインメニュー」。ランは記録せずに破棄する
    pub fn return_to_menu(&mut self) -> Result<(), GameError> {
        let w = self.run_world_mut()?;
        if !w.control.is_paused() {
            return Err(GameError::WrongScene("run"));
        }
        log::info!("run abandoned at {:.1}s", w.elapsed_seconds);
        self.transition(Scene::Menu);
        Ok(())
    }

    pub fn choose_perk(&mut self, index: usize) -> Result<PerkId, GameError> {
        match &mut self.scene {
            Scene::Run(w) => game_logic::choose_perk(w, &mut self.meta, index),
            other => Err(GameError::WrongScene(other.name())),
        }
    }

    /// 1 フレーム進める。ラン中のセーブ時計は frame_step が進め、
    /// ラン以外のシーンではここで進める
    pub fn tick(&mut self, input: &InputFrame, dt: f32) -> TickOutcome {
        let Scene::Run(w) = &mut self.scene else {
            self.meta.tick(f64::from(dt));
            return TickOutcome::Paused;
        };
        let outcome = frame_step(w, &mut self.meta, input, dt);
        if let TickOutcome::Died(result) = outcome {
            // ワールドを破棄する前に死亡フレームのイベントを退避
            self.pending_events.extend(w.drain_frame_events());
            self.last_outcome = Some(result);
            self.transition(Scene::Menu);
        }
        outcome
    }

    /// 描画側が毎フレーム取り出すイベント（ラン終了フレームの分も含む）
    pub fn drain_frame_events(&mut self) -> Vec<FrameEvent> {
        let mut events = std::mem::take(&mut self.pending_events);
        if let Some(w) = self.world_mut() {
            events.extend(w.drain_frame_events());
        }
        events
    }

    // ─── 表示用スナップショット ─────────────────────────────

    pub fn hud(&self) -> Option<HudSnapshot> {
        self.world().map(|w| build_hud(w, &self.meta))
    }

    pub fn minimap(&self) -> Option<MinimapSnapshot> {
        self.world().map(build_minimap)
    }

    pub fn menu_summary(&self) -> MenuSummary {
        MenuSummary {
            player_name:  self.meta.record.display_name().to_string(),
            runs:         self.meta.record.meta.runs,
            best_time:    self.meta.record.meta.best_time,
            last_outcome: self.last_outcome,
        }
    }

    // ─── 内部 ───────────────────────────────────────────────

    fn expect_scene(&self, ok: bool) -> Result<(), GameError> {
        if ok {
            Ok(())
        } else {
            Err(GameError::WrongScene(self.scene.name()))
        }
    }

    fn run_world_mut(&mut self) -> Result<&mut GameWorld, GameError> {
        match &mut self.scene {
            Scene::Run(w) => Ok(w.as_mut()),
            other => Err(GameError::WrongScene(other.name())),
        }
    }

    /// 直前の選択（なければ先頭のエントリ）でランを組み立てる
    fn start_run(&mut self) -> Result<(), GameError> {
        let last = &self.meta.record.last;
        let character = self
            .content
            .character_or_first(&last.character)
            .ok_or_else(|| GameError::UnknownCharacter(last.character.clone()))?;
        let map = self
            .content
            .map_or_first(&last.map)
            .ok_or_else(|| GameError::UnknownMap(last.map.clone()))?;

        if let Err(e) = ensure_run_assets(self.assets.as_ref(), character, map) {
            let message = e.to_string();
            self.transition(Scene::AssetsMissing { message });
            return Err(e);
        }

        let rng = match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let world = GameWorld::new(character, map, self.content.perk_pool(), &self.config, rng);
        self.transition(Scene::Run(Box::new(world)));
        Ok(())
    }

    fn transition(&mut self, next: Scene) {
        let mut prev = std::mem::replace(&mut self.scene, next);
        if let Scene::Run(w) = &mut prev {
            w.teardown();
        }
        log::info!("scene: {} -> {}", prev.name(), self.scene.name());
    }
}
