//! Civilizations - every player's fixed baseline production.

use serde::{Deserialize, Serialize};

use crate::cards::Resource;

/// A player's civilization. Produces one unit of `produced_resource` per
/// turn for the whole game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Civilization {
    /// Display name.
    pub name: String,
    /// Resource produced for free.
    pub produced_resource: Resource,
}

impl Civilization {
    /// Create a civilization.
    pub fn new(name: impl Into<String>, produced_resource: Resource) -> Self {
        Self {
            name: name.into(),
            produced_resource,
        }
    }
}
