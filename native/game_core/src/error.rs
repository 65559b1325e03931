//! Path: native/game_core/src/error.rs
//! Summary: コンテンツ読み込み・セーブ・UI 呼び出しのエラー型

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// ラン開始に必要なアセットが揃っていない（ブロッキング）
    #[error("missing assets: {}", missing.join(", "))]
    ContentMissing { missing: Vec<String> },

    #[error("failed to parse content {path}: {details}")]
    ContentParse { path: String, details: String },

    #[error("content io error at {path}: {source}")]
    ContentIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// セーブが壊れている。呼び出し側はデフォルトのレコードで復旧する
    #[error("save data is corrupt: {0}")]
    SaveCorrupt(String),

    #[error("failed to write save '{name}'")]
    SaveWriteFailure { name: String },

    #[error("unknown character '{0}'")]
    UnknownCharacter(String),

    #[error("unknown map '{0}'")]
    UnknownMap(String),

    #[error("invalid choice {index} (available: {available})")]
    InvalidChoice { index: usize, available: usize },

    #[error("operation not valid in scene {0}")]
    WrongScene(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_missing_lists_every_entry() {
        let err = GameError::ContentMissing {
            missing: vec!["bg/frozen.png".into(), "chars/arienn.png".into()],
        };
        assert_eq!(
            err.to_string(),
            "missing assets: bg/frozen.png, chars/arienn.png"
        );
    }

    #[test]
    fn invalid_choice_message() {
        let err = GameError::InvalidChoice { index: 4, available: 3 };
        assert_eq!(err.to_string(), "invalid choice 4 (available: 3)");
    }
}
