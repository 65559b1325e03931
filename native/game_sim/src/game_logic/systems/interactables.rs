use crate::world::{FrameEvent, GameWorld, InteractableState, Portal};

/// 範囲判定・インタラクト対象の選択・インタラクト・ポータル出現
pub(crate) fn update_interactables(w: &mut GameWorld, interact_pressed: bool) {
    let px = w.player.x;
    let py = w.player.y;

    let mut target = None;
    let mut best = f32::MAX;
    for (i, it) in w.interactables.iter_mut().enumerate() {
        if it.is_interacted() || !it.in_range(px, py) {
            continue;
        }
        it.advance_to(InteractableState::InRange);
        let dx = it.x - px;
        let dy = it.y - py;
        let d = dx * dx + dy * dy;
        if d < best {
            best = d;
            target = Some(i);
        }
    }
    w.interact_target = target;

    if interact_pressed && w.is_intro_done() {
        if let Some(i) = target {
            w.interactables[i].advance_to(InteractableState::Interacted);
            w.interacted_count += 1;
            w.interact_target = None;
            log::info!(
                "interacted with {} ({}/{})",
                w.interactables[i].kind,
                w.interacted_count,
                w.interactables.len()
            );
            w.frame_events.push(FrameEvent::Interacted { index: i });
        }
    }

    if w.portal.is_none() && w.interacted_count == w.interactables.len() {
        let portal = Portal { x: w.world_w * 0.5, y: w.world_h * 0.5 };
        log::info!("portal opened at ({:.0}, {:.0})", portal.x, portal.y);
        w.frame_events.push(FrameEvent::PortalOpened { x: portal.x, y: portal.y });
        w.portal = Some(portal);
    }
}
