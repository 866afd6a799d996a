use thiserror::Error;

pub type Result<T> = std::result::Result<T, PortfolioError>;

#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("world: {0}")]
    World(#[from] folio_world::Error),

    #[error("audio: {0}")]
    Audio(#[from] folio_audio::Error),

    #[cfg(feature = "lua")]
    #[error(transparent)]
    Config(#[from] app::lua_config::ConfigError),

    #[error("script step {step}: {message}")]
    Script { step: usize, message: String },

    #[error("no hotspot with id '{0}'")]
    UnknownHotspot(String),
}

impl PortfolioError {
    pub fn script(step: usize, message: impl Into<String>) -> Self {
        Self::Script {
            step,
            message: message.into(),
        }
    }
}
