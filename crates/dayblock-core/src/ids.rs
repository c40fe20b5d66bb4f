//! Injectable identifier source for generated blocks.
//!
//! Block ids are the only non-deterministic output of the engine, so the
//! generator is a capability handed to the scheduler and break planner
//! instead of an ambient `uuid` call. Tests and reproducible CLI runs use
//! [`SequentialSource`].

/// Source of identifiers for newly created time blocks.
pub trait IdSource {
    /// Produce the next unique identifier.
    fn next_id(&mut self) -> String;
}

/// Production id source backed by UUID v4.
#[derive(Debug, Clone, Default)]
pub struct UuidSource;

impl IdSource for UuidSource {
    fn next_id(&mut self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Deterministic id source producing `<prefix>-1`, `<prefix>-2`, ...
#[derive(Debug, Clone)]
pub struct SequentialSource {
    prefix: String,
    counter: u64,
}

impl SequentialSource {
    /// Create a sequential source with the given prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: 0,
        }
    }
}

impl Default for SequentialSource {
    fn default() -> Self {
        Self::new("block")
    }
}

impl IdSource for SequentialSource {
    fn next_id(&mut self) -> String {
        self.counter += 1;
        format!("{}-{}", self.prefix, self.counter)
    }
}
