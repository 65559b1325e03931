//! Path: native/game_sim/src/render_snapshot.rs
//! Summary: GameWorld から HUD・ミニマップ・プレイヤー演出用のスナップショットを構築
//!
//! 描画側はこのスナップショットだけを見て表示する（ワールドには触らない）。

use crate::game_logic::systems::effects::aura_alpha;
use crate::world::{Facing, GameWorld, PickupKind};
use game_core::save::MetaStore;
use game_core::util::{xp_required_for_next, Rect};

#[derive(Clone, Debug, PartialEq)]
pub struct BossHudInfo {
    pub name:   String,
    pub hp:     f32,
    pub hp_max: f32,
}

/// HUD の表示内容
#[derive(Clone, Debug, PartialEq)]
pub struct HudSnapshot {
    /// 左上に並べる表示行
    pub lines:           Vec<String>,
    pub boss:            Option<BossHudInfo>,
    pub xp_to_next:      u32,
    pub relics_found:    usize,
    pub relics_total:    usize,
    pub portal_open:     bool,
    /// インタラクト可能な対象の種類（プロンプト表示用）
    pub interact_prompt: Option<String>,
    pub intro_active:    bool,
    pub paused:          bool,
}

/// ミニマップに描く点（ワールド座標）。投影は描画側で行う
#[derive(Clone, Debug, PartialEq)]
pub struct MinimapSnapshot {
    pub world_w:       f32,
    pub world_h:       f32,
    pub view:          Rect,
    pub player:        (f32, f32),
    pub enemies:       Vec<(f32, f32)>,
    pub pickups:       Vec<(f32, f32, PickupKind)>,
    /// (x, y, interacted)
    pub interactables: Vec<(f32, f32, bool)>,
    pub portal:        Option<(f32, f32)>,
}

/// プレイヤーの見た目（向き・詠唱中か・オーラ）
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerVisual {
    pub x:           f32,
    pub y:           f32,
    pub facing:      Facing,
    pub casting:     bool,
    pub aura_radius: f32,
    pub aura_alpha:  f32,
}

pub fn build_hud(w: &GameWorld, meta: &MetaStore) -> HudSnapshot {
    let s = &w.player.stats;
    let nova = if s.nova_cooldown_remaining > 0.0 {
        format!("{:.1}s", s.nova_cooldown_remaining)
    } else {
        "ready".to_string()
    };
    let relics_total = w.interactables.len();
    let portal_open = w.portal.is_some();

    let lines = vec![
        format!("Player: {}", meta.record.display_name()),
        format!("HP: {}/{}", s.hp.max(0.0) as i32, s.hp_max as i32),
        format!("LVL: {}", s.level),
        format!("XP: {}", s.xp),
        format!("Nova: {nova}"),
        format!("Relics: {}/{}", w.interacted_count, relics_total),
        format!("Portal: {}", if portal_open { "open" } else { "sealed" }),
    ];

    let boss = w.enemies.live_boss().map(|i| BossHudInfo {
        name:   w.enemies.kinds[i].name().to_string(),
        hp:     w.enemies.hp[i].max(0.0),
        hp_max: w.enemies.hp_max[i],
    });

    HudSnapshot {
        lines,
        boss,
        xp_to_next: xp_required_for_next(s.level).saturating_sub(s.xp),
        relics_found: w.interacted_count,
        relics_total,
        portal_open,
        interact_prompt: w
            .interact_target
            .and_then(|i| w.interactables.get(i))
            .map(|it| it.kind.clone()),
        intro_active: !w.is_intro_done(),
        paused: w.is_paused(),
    }
}

pub fn build_minimap(w: &GameWorld) -> MinimapSnapshot {
    let enemies = (0..w.enemies.len())
        .filter(|&i| w.enemies.is_live(i))
        .map(|i| (w.enemies.positions_x[i], w.enemies.positions_y[i]))
        .collect();
    let pickups = (0..w.pickups.len())
        .filter(|&i| w.pickups.alive[i])
        .map(|i| (w.pickups.positions_x[i], w.pickups.positions_y[i], w.pickups.kinds[i]))
        .collect();
    MinimapSnapshot {
        world_w: w.world_w,
        world_h: w.world_h,
        view: w.view_rect(),
        player: (w.player.x, w.player.y),
        enemies,
        pickups,
        interactables: w
            .interactables
            .iter()
            .map(|it| (it.x, it.y, it.is_interacted()))
            .collect(),
        portal: w.portal.map(|p| (p.x, p.y)),
    }
}

pub fn build_player_visual(w: &GameWorld) -> PlayerVisual {
    PlayerVisual {
        x:           w.player.x,
        y:           w.player.y,
        facing:      w.player.facing,
        casting:     w.player.is_casting(),
        aura_radius: w.player.stats.aura_radius,
        aura_alpha:  aura_alpha(w.aura_phase),
    }
}
