use crate::world::{FrameEvent, GameWorld, PerkOffer};
use game_core::constants::PERK_CHOICES;
use game_core::error::GameError;
use game_core::perk::PerkId;
use game_core::save::MetaStore;
use game_core::util::xp_required_for_next;
use rand::Rng;

/// 経験値がしきい値を超えている間レベルを上げ、1 レベルごとにパーク提示を積む
pub(crate) fn check_level_up(w: &mut GameWorld) {
    while w.player.stats.xp >= xp_required_for_next(w.player.stats.level) {
        w.player.stats.level += 1;
        let new_level = w.player.stats.level;
        log::debug!("level up -> {new_level}");
        w.frame_events.push(FrameEvent::LevelUp { new_level });

        let choices = draw_perk_choices(&w.perk_pool, &mut w.rng);
        if choices.is_empty() {
            log::warn!("perk pool is empty, skipping offer for level {new_level}");
            continue;
        }
        w.pending_offers.push_back(PerkOffer { new_level, choices });
    }
}

/// プールから重複なしで最大 3 つ選ぶ（残りからランダムなインデックスを毎回引く）
pub(crate) fn draw_perk_choices<R: Rng + ?Sized>(pool: &[PerkId], rng: &mut R) -> Vec<PerkId> {
    let mut remaining = pool.to_vec();
    let mut choices = Vec::with_capacity(PERK_CHOICES);
    while choices.len() < PERK_CHOICES && !remaining.is_empty() {
        let i = rng.gen_range(0..remaining.len());
        choices.push(remaining.remove(i));
    }
    choices
}

/// 先頭のパーク提示から `index` 番目を選ぶ。
/// ステータス変換を適用し、キャラクターのメタ情報（ベストレベル・既出パーク）を更新する。
/// 提示が空になればランは再開する。
pub fn choose_perk(w: &mut GameWorld, meta: &mut MetaStore, index: usize) -> Result<PerkId, GameError> {
    let offer = w
        .pending_offers
        .front()
        .ok_or(GameError::InvalidChoice { index, available: 0 })?;
    let perk = *offer.choices.get(index).ok_or(GameError::InvalidChoice {
        index,
        available: offer.choices.len(),
    })?;
    w.pending_offers.pop_front();

    w.player.stats.apply_perk(perk);
    meta.record_perk(&w.player.character_id, w.player.stats.level, perk.as_str());
    log::info!("perk chosen: {perk} (level {})", w.player.stats.level);
    Ok(perk)
}
