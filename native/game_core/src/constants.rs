//! Path: native/game_core/src/constants.rs
//! Summary: ビューポート・当たり判定サイズ・スポーン/戦闘/セーブの定数定義

// Viewport（SessionConfig のデフォルト値）
pub const SCREEN_WIDTH:  f32 = 1280.0;
pub const SCREEN_HEIGHT: f32 = 720.0;

/// ワールドサイズ = ビューポート × WORLD_MULT
pub const WORLD_MULT: f32 = 5.0;

// Camera lerp speed（プレイヤー追従）
pub const CAMERA_LERP_SPEED: f32 = 7.5;

/// 導入演出の長さ（秒）。完了するまでスポーンとインタラクトを止める
pub const INTRO_DURATION: f32 = 3.0;

// Frame budget（trace ログ用）
pub const FRAME_BUDGET_MS: f64 = 1000.0 / 60.0;

// ─── 当たり判定（AABB の半幅・半高） ───────────────────────────
pub const PLAYER_HALF_W: f32 = 14.0;
pub const PLAYER_HALF_H: f32 = 22.0;
pub const BULLET_HALF:   f32 = 6.0;
/// 最大の敵（Wendigo）の半サイズ。近傍クエリ半径の余白に使う
pub const MAX_ENEMY_HALF: f32 = 40.0;

// Spatial hash cell size
pub const CELL_SIZE: f32 = 80.0;

// ─── Spawn Director ──────────────────────────────────────────
pub const MIN_SPAWN_INTERVAL: f32 = 0.23;
pub const NEAR_SPAWN_CHANCE:  f32 = 0.8;
pub const NEAR_SPAWN_PAD:     f32 = 40.0;
pub const FAR_SPAWN_PAD:      f32 = 80.0;
pub const FAR_SPAWN_ATTEMPTS: usize = 8;
/// 通常敵の種類比率（Snowling : Ghoul = 60 : 40）
pub const PRIMARY_KIND_CHANCE: f32 = 0.6;

pub const ENEMY_BASE_HP:       f32 = 10.0;
pub const ENEMY_HP_PER_MIN:    f32 = 8.0;
pub const ENEMY_BASE_SPEED:    f32 = 70.0;
pub const ENEMY_SPEED_PER_MIN: f32 = 12.0;
pub const ENEMY_MAX_SPEED:     f32 = 170.0;

pub const BOSS_BASE_HP:        f32 = 600.0;
pub const BOSS_HP_PER_SEC:     f32 = 8.0;
pub const BOSS_BASE_SPEED:     f32 = 60.0;
pub const BOSS_SPEED_PER_MIN:  f32 = 10.0;
/// ボスは常に player.speed - BOSS_SPEED_MARGIN より遅い
pub const BOSS_SPEED_MARGIN:   f32 = 20.0;

// ─── Combat ──────────────────────────────────────────────────
pub const CONTACT_DAMAGE_PER_SEC: f32 = 16.0;
pub const ICE_BARRIER_MULT:       f32 = 0.7;
pub const CONTACT_KNOCKBACK:      f32 = 60.0;

// ボスによる取り巻きの押し出し
pub const BOSS_PUSH_RADIUS:   f32 = 140.0;
pub const BOSS_PUSH_FORCE:    f32 = 9000.0;
pub const BOSS_PUSH_MIN_DIST: f32 = 8.0;

pub const BOLT_SPEED:    f32 = 420.0;
pub const BOLT_LIFETIME: f32 = 1.2;
pub const CAST_DURATION: f32 = 0.28;

pub const NOVA_DAMAGE:    f32 = 30.0;
pub const NOVA_RADIUS:    f32 = 140.0;
pub const NOVA_KNOCKBACK: f32 = 28.0;

pub const ICICLE_INTERVAL: f32 = 4.0;
pub const ICICLE_COUNT:    usize = 6;
pub const ICICLE_SPEED:    f32 = 340.0;
pub const ICICLE_LIFETIME: f32 = 1.0;
pub const ICICLE_DMG_MULT: f32 = 0.75;

/// 撃破後のフェードアウト時間（この間は当たり判定なし）
pub const ENEMY_DEATH_FADE: f32 = 0.28;

pub const LARGE_XP_CHANCE:   f32 = 0.15;
pub const RARE_FRUIT_CHANCE: f32 = 0.33;

// ─── Pickups ─────────────────────────────────────────────────
pub const PICKUP_MAGNET_RADIUS:  f32 = 180.0;
pub const PICKUP_MAGNET_SPEED:   f32 = 160.0;
pub const PICKUP_COLLECT_RADIUS: f32 = 24.0;
pub const LARGE_XP_VALUE: u32 = 8;
pub const SMALL_XP_VALUE: u32 = 3;

// ─── Progression ─────────────────────────────────────────────
pub const XP_PER_LEVEL: u32 = 50;
pub const PERK_CHOICES: usize = 3;

// ─── Interactables ───────────────────────────────────────────
pub const INTERACT_RADIUS: f32 = 48.0;

// ─── Persistence ─────────────────────────────────────────────
pub const SAVE_FILE:            &str = "save.json";
pub const SAVE_VERSION:         u32 = 2;
pub const COMMIT_INTERVAL_SECS: f64 = 2.5;
pub const MAX_PROFILE_NAME:     usize = 24;
pub const DEFAULT_PROFILE_NAME: &str = "Player";
pub const DEFAULT_CHARACTER:    &str = "arienn";
pub const DEFAULT_MAP:          &str = "frozen_crossroads";
