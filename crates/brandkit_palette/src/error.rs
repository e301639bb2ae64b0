use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("invalid hex color '{0}': expected #RRGGBB")]
    InvalidHex(String),

    #[error("unknown color token '{0}'")]
    UnknownToken(String),

    #[error("duplicate css variable '{0}'")]
    DuplicateVariable(String),
}

pub type Result<T> = std::result::Result<T, PaletteError>;
