use serde::{Deserialize, Serialize};

/// Rates used to price a lane booking, in whole kronor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PricingConfig {
    /// Charged for every player
    #[serde(default = "default_per_person")]
    pub per_person: u32,

    /// Charged for every reserved lane
    #[serde(default = "default_per_lane")]
    pub per_lane: u32,
}

fn default_per_person() -> u32 { 120 }
fn default_per_lane() -> u32 { 100 }

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            per_person: default_per_person(),
            per_lane: default_per_lane(),
        }
    }
}

/// Flat-rate pricing engine
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Total price for `people` players on `lanes` lanes
    pub fn quote(&self, people: u32, lanes: u32) -> u32 {
        people
            .saturating_mul(self.config.per_person)
            .saturating_add(lanes.saturating_mul(self.config.per_lane))
    }
}
