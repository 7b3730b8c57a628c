use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },

    #[error("nearest query against an empty population")]
    EmptyPopulationQuery,

    #[error("agent at ({row}, {col}) found no open neighbouring cell in {attempts} attempts")]
    ImpassableAgent {
        row: usize,
        col: usize,
        attempts: u32,
    },

    #[error("map has no open cells to place agents on")]
    NoOpenCells,

    #[error("map error: {0}")]
    Map(#[from] crate::world::loader::MapError),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
