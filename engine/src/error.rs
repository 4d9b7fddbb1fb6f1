use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Archetype text outside warrior / mage / archer.
    #[error("invalid hero archetype: {0:?} (expected warrior, mage or archer)")]
    InvalidArchetype(String),
    #[error("at least one duel sample is required")]
    NoSamples,
}
