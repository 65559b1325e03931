//! Path: native/game_core/src/input.rs
//! Summary: 1 フレーム分の入力（方向軸・エッジ入力・ホールド入力）とエッジ検出

/// 1 フレーム分の入力
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputFrame {
    /// -1 / 0 / 1
    pub axis_x:           i8,
    pub axis_y:           i8,
    /// 押した瞬間のフレームだけ true
    pub interact_pressed: bool,
    pub pause_pressed:    bool,
    /// ノヴァ（押しっぱなし）
    pub special_held:     bool,
}

impl InputFrame {
    /// 軸入力を正規化した移動方向（斜めでも速さ 1）
    pub fn move_dir(&self) -> (f32, f32) {
        let x = f32::from(self.axis_x.signum());
        let y = f32::from(self.axis_y.signum());
        let len = (x * x + y * y).sqrt();
        if len < 0.001 {
            (0.0, 0.0)
        } else {
            (x / len, y / len)
        }
    }
}

/// ホールド状態のボタンを「押した瞬間」に変換する
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeDetector {
    prev: bool,
}

impl EdgeDetector {
    pub fn update(&mut self, held: bool) -> bool {
        let edge = held && !self.prev;
        self.prev = held;
        edge
    }
}
