use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("No tool matches the prompt")]
    UnsupportedIntent,

    #[error("Tool matched but its argument pattern did not")]
    PatternExtraction,

    #[error("Invalid calculation: {0}")]
    Evaluation(String),

    #[error("Memory store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, ToolError>;
