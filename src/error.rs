use thiserror::Error;

#[derive(Error, Debug)]
pub enum BeanSeedError {
    #[error("入力ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON生成エラー: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BeanSeedError>;
