//! Path: native/game_core/src/physics/mod.rs
//! Summary: 物理モジュール（AABB・ボスによる押し出し・空間ハッシュ）

pub mod separation;
pub mod spatial_hash;

/// 中心 + 半サイズの AABB 同士が重なっているか（辺が接するだけなら重ならない）
#[inline]
pub fn aabb_overlap(
    ax: f32, ay: f32, ahw: f32, ahh: f32,
    bx: f32, by: f32, bhw: f32, bhh: f32,
) -> bool {
    (ax - bx).abs() < ahw + bhw && (ay - by).abs() < ahh + bhh
}
