use thiserror::Error;

/// 构造 [`Genome`](crate::genome::Genome) 时的错误。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenomeError {
    #[error("genome '{name}' has an empty sequence")]
    EmptySequence { name: String },
    #[error("genome '{name}' has invalid base '{base}' at position {position}")]
    InvalidBase { name: String, position: usize, base: char },
}

/// 基因组文件加载错误。任何一种都会使整个加载失败。
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("genome file is empty")]
    Empty,
    #[error("line {line}: sequence data before any '>' header")]
    MissingHeader { line: usize },
    #[error("line {line}: empty line")]
    EmptyLine { line: usize },
    #[error("line {line}, column {column}: invalid base '{base}'")]
    InvalidBase { line: usize, column: usize, base: char },
    #[error("line {line}: record '{name}' has no sequence")]
    EmptyRecord { line: usize, name: String },
    #[error("line {line}: sequence follows a header with an empty name")]
    EmptyName { line: usize },
    #[error(transparent)]
    Genome(#[from] GenomeError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// 查询参数违反约定（"operation not applicable"），索引状态保持不变。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("minimum search length must be positive")]
    InvalidSearchLength,
    #[error("fragment of length {fragment} is shorter than the minimum length {minimum}")]
    FragmentTooShort { fragment: usize, minimum: usize },
    #[error("minimum length {minimum} is below the index search length {k}")]
    MinimumBelowSearchLength { minimum: usize, k: usize },
    #[error("fragment match length {chunk} is below the index search length {k}")]
    ChunkBelowSearchLength { chunk: usize, k: usize },
}
