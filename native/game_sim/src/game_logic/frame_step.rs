//! Path: native/game_sim/src/game_logic/frame_step.rs
//! Summary: 1 フレーム分のシミュレーション（固定順序のシステム呼び出し）

use super::systems::contact::update_contact_damage;
use super::systems::effects::update_visual_state;
use super::systems::interactables::update_interactables;
use super::systems::items::update_pickups;
use super::systems::leveling::check_level_up;
use super::systems::movement::{update_enemy_movement, update_player_movement};
use super::systems::persistence::{record_death, touch};
use super::systems::projectiles::update_projectiles_and_enemy_hits;
use super::systems::spawn::update_spawn;
use super::systems::weapons::{update_auto_fire, update_icicles, update_nova};
use crate::world::{GameWorld, RunOutcome};
use game_core::constants::FRAME_BUDGET_MS;
use game_core::input::InputFrame;
use game_core::save::MetaStore;

/// 1 ティックの結果
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    Running,
    /// メニューポーズ中（ポーズ入力以外は何も進まない）
    Paused,
    /// パーク選択待ち（`choose_perk` で再開）
    AwaitingPerk,
    Died(RunOutcome),
}

/// 1 フレーム分を進める。
///
/// 順序: 入力 → 移動/ターゲット → 戦闘 → アイテム回収 → レベル判定 → インタラクト →
/// スポーン → 死亡判定 → 見た目の同期 → 永続化。
/// 回収より先に死亡判定をすると、そのフレームで得た経験値が失われる。
pub fn frame_step(w: &mut GameWorld, meta: &mut MetaStore, input: &InputFrame, dt: f32) -> TickOutcome {
    if let Some(outcome) = w.outcome {
        return TickOutcome::Died(outcome);
    }

    // ── 入力: ポーズ切り替えだけはポーズ中も受け付ける ─────────────
    if input.pause_pressed && !w.awaiting_perk() {
        w.control.toggle();
        log::info!("pause toggled: paused={}", w.control.is_paused());
    }
    if w.control.is_paused() {
        return TickOutcome::Paused;
    }
    if w.awaiting_perk() {
        return TickOutcome::AwaitingPerk;
    }

    log::trace!("frame_step: dt={dt} frame_id={}", w.frame_id);
    let t_start = std::time::Instant::now();

    w.frame_id += 1;
    w.elapsed_seconds += dt;
    if w.intro_remaining > 0.0 {
        w.intro_remaining = (w.intro_remaining - dt).max(0.0);
    }

    // ── 移動・ターゲット ───────────────────────────────────────
    update_player_movement(w, input, dt);
    update_enemy_movement(w, dt);

    // ── 戦闘 ──────────────────────────────────────────────────
    w.rebuild_collision();
    update_contact_damage(w, dt);
    update_auto_fire(w, meta, dt);
    update_nova(w, meta, input.special_held, dt);
    update_icicles(w, dt);
    update_projectiles_and_enemy_hits(w, meta, dt);

    // ── アイテム回収 → レベル判定 ──────────────────────────────
    update_pickups(w, meta, dt);
    check_level_up(w);

    // ── インタラクト・ポータル ─────────────────────────────────
    update_interactables(w, input.interact_pressed);

    // ── スポーン ──────────────────────────────────────────────
    update_spawn(w, dt);

    // ── 死亡判定 ──────────────────────────────────────────────
    let died = if w.player.stats.is_dead() {
        Some(record_death(w, meta))
    } else {
        None
    };

    // ── 見た目の同期・一括削除 ─────────────────────────────────
    update_visual_state(w, dt);

    // ── 永続化 ────────────────────────────────────────────────
    touch(meta, dt);

    let elapsed_ms = t_start.elapsed().as_secs_f64() * 1000.0;
    w.last_frame_time_ms = elapsed_ms;
    if elapsed_ms > FRAME_BUDGET_MS {
        log::debug!(
            "frame budget exceeded: {:.2}ms (enemies: {})",
            elapsed_ms,
            w.enemies.count
        );
    }

    match died {
        Some(outcome) => TickOutcome::Died(outcome),
        None if w.awaiting_perk() => TickOutcome::AwaitingPerk,
        None => TickOutcome::Running,
    }
}
