use crate::world::{FrameEvent, GameWorld, RunOutcome};
use game_core::save::MetaStore;

/// 死亡時: 結果を確定し、ベストタイム・ラン回数を更新して強制保存
pub(crate) fn record_death(w: &mut GameWorld, meta: &mut MetaStore) -> RunOutcome {
    let outcome = RunOutcome {
        survival_secs: w.elapsed_seconds,
        level:         w.player.stats.level,
        kills:         w.kill_count,
    };
    meta.record_run_end(outcome.survival_secs);
    log::info!(
        "run over: survived {:.1}s, level {}, kills {}",
        outcome.survival_secs, outcome.level, outcome.kills
    );
    w.frame_events.push(FrameEvent::PlayerDied { survival_secs: outcome.survival_secs });
    w.outcome = Some(outcome);
    outcome
}

/// ポーズしていないティックごと: セーブ時計を進め、プレイ時間加算 + 間引きコミット
pub(crate) fn touch(meta: &mut MetaStore, dt: f32) {
    meta.tick(f64::from(dt));
    meta.add_seconds_played(dt);
}
