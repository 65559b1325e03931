//! Path: native/game_sim/src/lib.rs
//! Summary: モジュール宣言と pub use（ワールド・フレームステップ・シーン・セーブ・スナップショット）

pub mod app;
pub mod asset;
pub mod game_logic;
pub mod render_snapshot;
pub mod storage;
pub mod world;

#[cfg(test)]
mod test_support;

pub use app::{GameApp, MenuSummary, Scene};
pub use asset::{ensure_run_assets, AssetCatalog, DirAssets};
pub use game_logic::{choose_perk, find_nearest_enemy, frame_step, update_chase_ai, TickOutcome};
pub use render_snapshot::{build_hud, build_minimap, build_player_visual, HudSnapshot, MinimapSnapshot, PlayerVisual};
pub use storage::FileStorage;
pub use world::{EnemyWorld, FrameEvent, GameWorld, RunOutcome, SessionConfig};
