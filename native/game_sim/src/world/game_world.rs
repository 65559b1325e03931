//! Path: native/game_sim/src/world/game_world.rs
//! Summary: 1 ラン分のゲームワールド（GameWorld）とセッション設定・カメラ・パーク提示

use super::{
    BulletWorld, EnemyWorld, Facing, FrameEvent, GameLoopControl, Interactable, PickupWorld,
    PlayerState, Portal,
};
use game_core::constants::{
    CAMERA_LERP_SPEED, CELL_SIZE, INTRO_DURATION, SCREEN_HEIGHT, SCREEN_WIDTH, WORLD_MULT,
};
use game_core::content::{CharacterDef, MapDef, SpawnParams};
use game_core::perk::PerkId;
use game_core::physics::spatial_hash::SpatialHash;
use game_core::stats::PlayerStats;
use game_core::util::Rect;
use rand::rngs::StdRng;
use serde::Serialize;
use std::collections::VecDeque;

/// ランごとの設定
#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub viewport_w: f32,
    pub viewport_h: f32,
    /// 導入演出の長さ（秒）
    pub intro_secs: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            viewport_w: SCREEN_WIDTH,
            viewport_h: SCREEN_HEIGHT,
            intro_secs: INTRO_DURATION,
        }
    }
}

/// プレイヤー追従カメラ（x, y は表示矩形の左上）
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Camera {
    fn target(&self, px: f32, py: f32, world_w: f32, world_h: f32) -> (f32, f32) {
        (
            (px - self.w * 0.5).clamp(0.0, (world_w - self.w).max(0.0)),
            (py - self.h * 0.5).clamp(0.0, (world_h - self.h).max(0.0)),
        )
    }

    pub fn centered_on(px: f32, py: f32, w: f32, h: f32, world_w: f32, world_h: f32) -> Self {
        let mut cam = Self { x: 0.0, y: 0.0, w, h };
        let (tx, ty) = cam.target(px, py, world_w, world_h);
        cam.x = tx;
        cam.y = ty;
        cam
    }

    /// 目標位置へ補間しながら追従する（ワールド境界内に収める）
    pub fn follow(&mut self, px: f32, py: f32, dt: f32, world_w: f32, world_h: f32) {
        let (tx, ty) = self.target(px, py, world_w, world_h);
        let t = (CAMERA_LERP_SPEED * dt).min(1.0);
        self.x += (tx - self.x) * t;
        self.y += (ty - self.y) * t;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

/// レベルアップ 1 回分のパーク提示
#[derive(Clone, Debug, PartialEq)]
pub struct PerkOffer {
    pub new_level: u32,
    pub choices:   Vec<PerkId>,
}

/// ランの結果（死亡時に確定）
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RunOutcome {
    pub survival_secs: f32,
    pub level:         u32,
    pub kills:         u32,
}

/// 1 ラン分のゲームワールド。ラン開始時に生成し、ラン終了で破棄する
pub struct GameWorld {
    pub frame_id:           u32,
    pub map_id:             String,
    pub world_w:            f32,
    pub world_h:            f32,
    pub player:             PlayerState,
    pub enemies:            EnemyWorld,
    pub bullets:            BulletWorld,
    pub pickups:            PickupWorld,
    pub interactables:      Vec<Interactable>,
    pub interacted_count:   usize,
    pub portal:             Option<Portal>,
    /// 生存中の敵の空間ハッシュ（毎フレーム再構築）
    pub collision:          SpatialHash,
    /// 近傍クエリ結果の再利用バッファ
    pub query_buf:          Vec<usize>,
    pub rng:                StdRng,
    pub spawn:              SpawnParams,
    /// 通常敵スポーンまでの残り秒数
    pub spawn_timer:        f32,
    pub boss_timer:         f32,
    pub intro_remaining:    f32,
    /// ラン開始からの経過時間（秒）＝生存時間
    pub elapsed_seconds:    f32,
    pub kill_count:         u32,
    pub camera:             Camera,
    /// オーラの明滅用の位相
    pub aura_phase:         f32,
    pub perk_pool:          Vec<PerkId>,
    pub pending_offers:     VecDeque<PerkOffer>,
    /// このフレームで発生したイベント（毎フレーム drain される）
    pub frame_events:       Vec<FrameEvent>,
    /// 今フレームのインタラクト対象
    pub interact_target:    Option<usize>,
    pub control:            GameLoopControl,
    pub outcome:            Option<RunOutcome>,
    /// 直近フレームのステップ処理時間（ミリ秒）
    pub last_frame_time_ms: f64,
}

impl GameWorld {
    pub fn new(
        character: &CharacterDef,
        map: &MapDef,
        perk_pool: Vec<PerkId>,
        config: &SessionConfig,
        rng: StdRng,
    ) -> Self {
        let world_w = config.viewport_w * WORLD_MULT;
        let world_h = config.viewport_h * WORLD_MULT;
        let (px, py) = (world_w * 0.5, world_h * 0.5);

        let interactables = map
            .interactables
            .iter()
            .map(|def| Interactable::from_def(def, world_w, world_h))
            .collect();

        log::info!(
            "run start: character={} map={} world={}x{}",
            character.id, map.id, world_w, world_h
        );

        Self {
            frame_id:           0,
            map_id:             map.id.clone(),
            world_w,
            world_h,
            player: PlayerState {
                x:            px,
                y:            py,
                facing:       Facing::Right,
                cast_timer:   0.0,
                stats:        PlayerStats::from_base(&character.base),
                character_id: character.id.clone(),
            },
            enemies:            EnemyWorld::new(),
            bullets:            BulletWorld::new(),
            pickups:            PickupWorld::new(),
            interactables,
            interacted_count:   0,
            portal:             None,
            collision:          SpatialHash::new(CELL_SIZE),
            query_buf:          Vec::new(),
            rng,
            spawn:              map.spawn,
            spawn_timer:        0.0,
            boss_timer:         map.spawn.boss_every,
            intro_remaining:    config.intro_secs.max(0.0),
            elapsed_seconds:    0.0,
            kill_count:         0,
            camera: Camera::centered_on(px, py, config.viewport_w, config.viewport_h, world_w, world_h),
            aura_phase:         0.0,
            perk_pool,
            pending_offers:     VecDeque::new(),
            frame_events:       Vec::new(),
            interact_target:    None,
            control:            GameLoopControl::new(),
            outcome:            None,
            last_frame_time_ms: 0.0,
        }
    }

    /// 衝突判定用の Spatial Hash を生存中の敵で再構築する
    pub(crate) fn rebuild_collision(&mut self) {
        self.collision.clear();
        for i in 0..self.enemies.len() {
            if self.enemies.is_live(i) {
                self.collision.insert(i, self.enemies.positions_x[i], self.enemies.positions_y[i]);
            }
        }
    }

    pub fn is_intro_done(&self) -> bool {
        self.intro_remaining <= 0.0
    }

    pub fn awaiting_perk(&self) -> bool {
        !self.pending_offers.is_empty()
    }

    /// メニューポーズかレベルアップ待ち
    pub fn is_paused(&self) -> bool {
        self.control.is_paused() || self.awaiting_perk()
    }

    pub fn current_offer(&self) -> Option<&PerkOffer> {
        self.pending_offers.front()
    }

    pub fn view_rect(&self) -> Rect {
        self.camera.rect()
    }

    pub fn drain_frame_events(&mut self) -> Vec<FrameEvent> {
        std::mem::take(&mut self.frame_events)
    }

    /// シーン終了時の後片付け
    pub fn teardown(&mut self) {
        self.enemies.clear();
        self.bullets = BulletWorld::new();
        self.pickups = PickupWorld::new();
        self.frame_events.clear();
        self.pending_offers.clear();
    }
}
