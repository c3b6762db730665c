// Error type for parameter validation and configuration loading.
//
// The generation pipeline itself is infallible: it is a pure computation over
// validated inputs. Errors only arise at the edges, when a caller checks its
// `GenerationParameters` before generating or loads a `GeneratorConfig` from
// disk.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BloomError {
    #[error("bloom must be a finite value in [0, 1], got {0}")]
    InvalidBloom(f64),

    #[error("petal count must be at least 1, got {0}")]
    InvalidPetalCount(u32),

    #[error("explicit colors must not be empty")]
    EmptyColor,

    #[error("invalid generator config: {0}")]
    InvalidConfig(String),

    #[error("config io error: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
