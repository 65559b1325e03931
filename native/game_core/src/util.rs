//! Path: native/game_core/src/util.rs
//! Summary: 経験値しきい値・スポーン間隔・スポーン位置などの共通ユーティリティ

use crate::constants::{
    FAR_SPAWN_ATTEMPTS, FAR_SPAWN_PAD, MIN_SPAWN_INTERVAL, NEAR_SPAWN_CHANCE, NEAR_SPAWN_PAD,
    XP_PER_LEVEL,
};
use rand::Rng;

/// 現在の `level` から次のレベルに上がるための経験値しきい値（level × 50）
pub fn xp_required_for_next(level: u32) -> u32 {
    level.saturating_mul(XP_PER_LEVEL)
}

/// 経過時間に応じた通常敵のスポーン間隔（線形に短くなり 0.23 秒で下げ止まる）
pub fn spawn_interval(base_every: f32, growth: f32, elapsed_secs: f32) -> f32 {
    // base_every が下限より短いマップでも clamp が panic しないように
    let floor = MIN_SPAWN_INTERVAL.min(base_every);
    (base_every - elapsed_secs * growth).clamp(floor, base_every)
}

/// ワールド座標の矩形（左上 + サイズ）
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// `pad` だけ外側に広げた矩形の外にあるか
    pub fn is_outside_padded(&self, x: f32, y: f32, pad: f32) -> bool {
        x < self.x - pad || x > self.x + self.w + pad || y < self.y - pad || y > self.y + self.h + pad
    }
}

pub fn clamp_to_world(x: f32, y: f32, world_w: f32, world_h: f32) -> (f32, f32) {
    (x.clamp(0.0, world_w), y.clamp(0.0, world_h))
}

/// スポーン位置を決める。
///
/// 80% はカメラ矩形の外側すぐ（ランダムな辺）、20% はワールド全体から最大 8 回
/// サンプリングして「矩形 + 80」の外側にある最初の点を採用する。見つからなければ
/// 最後のサンプルをそのまま使う。どちらもワールド境界にクランプする。
pub fn pick_spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    view: &Rect,
    world_w: f32,
    world_h: f32,
) -> (f32, f32) {
    let (x, y) = if rng.gen::<f32>() < NEAR_SPAWN_CHANCE {
        match rng.gen_range(0..4) {
            0 => (view.x - NEAR_SPAWN_PAD, view.y + rng.gen::<f32>() * view.h),
            1 => (view.x + view.w + NEAR_SPAWN_PAD, view.y + rng.gen::<f32>() * view.h),
            2 => (view.x + rng.gen::<f32>() * view.w, view.y - NEAR_SPAWN_PAD),
            _ => (view.x + rng.gen::<f32>() * view.w, view.y + view.h + NEAR_SPAWN_PAD),
        }
    } else {
        let mut sample = (0.0, 0.0);
        for _ in 0..FAR_SPAWN_ATTEMPTS {
            sample = (rng.gen::<f32>() * world_w, rng.gen::<f32>() * world_h);
            if view.is_outside_padded(sample.0, sample.1, FAR_SPAWN_PAD) {
                break;
            }
        }
        sample
    };
    clamp_to_world(x, y, world_w, world_h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_xp_required_for_next() {
        assert_eq!(xp_required_for_next(1), 50);
        assert_eq!(xp_required_for_next(2), 100);
        assert_eq!(xp_required_for_next(7), 350);
    }

    #[test]
    fn spawn_interval_tightens_and_floors() {
        assert!((spawn_interval(1.2, 0.004, 0.0) - 1.2).abs() < 0.001);
        assert!((spawn_interval(1.2, 0.004, 100.0) - 0.8).abs() < 0.001);
        assert!((spawn_interval(1.2, 0.004, 10_000.0) - 0.23).abs() < 0.001);
    }

    #[test]
    fn spawn_interval_short_base_does_not_panic() {
        assert!((spawn_interval(0.1, 0.5, 30.0) - 0.1).abs() < 0.001);
    }

    #[test]
    fn spawn_positions_stay_inside_world() {
        let mut rng = StdRng::seed_from_u64(7);
        let (ww, wh) = (6400.0, 3600.0);
        // カメラがワールドの角にいてもクランプされる
        let views = [
            Rect::new(0.0, 0.0, 1280.0, 720.0),
            Rect::new(5120.0, 2880.0, 1280.0, 720.0),
            Rect::new(2560.0, 1440.0, 1280.0, 720.0),
        ];
        for view in views.iter() {
            for _ in 0..2_000 {
                let (x, y) = pick_spawn_position(&mut rng, view, ww, wh);
                assert!((0.0..=ww).contains(&x), "x out of bounds: {x}");
                assert!((0.0..=wh).contains(&y), "y out of bounds: {y}");
            }
        }
    }

    #[test]
    fn spawn_positions_mostly_outside_view() {
        let mut rng = StdRng::seed_from_u64(99);
        let view = Rect::new(2560.0, 1440.0, 1280.0, 720.0);
        let outside = (0..1_000)
            .map(|_| pick_spawn_position(&mut rng, &view, 6400.0, 3600.0))
            .filter(|&(x, y)| view.is_outside_padded(x, y, 0.0))
            .count();
        assert!(outside > 950);
    }

    #[test]
    fn far_spawn_falls_back_to_last_sample_when_view_covers_world() {
        // ビューがワールド全体を覆うと遠方サンプルは全て「矩形 + 80」の内側になる
        let mut rng = StdRng::seed_from_u64(21);
        let (ww, wh) = (1280.0, 720.0);
        let view = Rect::new(0.0, 0.0, ww, wh);
        let mut interior = 0;
        for _ in 0..1_000 {
            let (x, y) = pick_spawn_position(&mut rng, &view, ww, wh);
            assert!((0.0..=ww).contains(&x) && (0.0..=wh).contains(&y));
            // 近傍スポーンはクランプされて必ず境界上に乗る
            let on_edge = x == 0.0 || x == ww || y == 0.0 || y == wh;
            if !on_edge {
                assert!(!view.is_outside_padded(x, y, FAR_SPAWN_PAD));
                interior += 1;
            }
        }
        assert!(interior > 100 && interior < 300, "interior = {interior}");
    }
}
