use snail_sim::SimError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("simulator error: {0}")]
    Sim(#[from] SimError),

    #[error("scene has been torn down")]
    TornDown,
}

pub type SceneResult<T> = Result<T, SceneError>;
