use std::default::Default;

/// What to do with the payload of a directive whose network id is already
/// bound to a local object
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ExistingPayload {
    /// Write the payload onto the existing object
    Reapply,
    /// Keep the existing object's state as it is
    Ignore,
}

/// Contains Config properties which will be used by a Spawner
#[derive(Clone, Debug)]
pub struct SpawnConfig {
    /// Whether a repeated spawn of an already-bound network id re-applies
    /// its payload
    pub existing_payload: ExistingPayload,
    /// Whether an object created for a directive whose payload turns out to
    /// be corrupt is unspawned again, leaving no trace of the directive
    pub rollback_on_corrupt_payload: bool,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            existing_payload: ExistingPayload::Reapply,
            rollback_on_corrupt_payload: true,
        }
    }
}
