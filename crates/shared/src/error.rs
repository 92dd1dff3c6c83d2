use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown game mode: {0:?}")]
pub struct ParseGameModeError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown screen: {0:?}")]
pub struct ParseScreenError(pub String);
