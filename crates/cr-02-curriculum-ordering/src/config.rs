//! Configuration for the Curriculum Ordering Stage

use serde::{Deserialize, Serialize};

/// Ordering configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrderingConfig {
    /// Complexity assumed when neither metadata nor the item declares one
    pub default_complexity: u8,
    /// Relevance assumed when metadata declares none
    pub default_relevance: u8,
}

impl Default for OrderingConfig {
    fn default() -> Self {
        Self {
            default_complexity: 1,
            default_relevance: 5,
        }
    }
}
