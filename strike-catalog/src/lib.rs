pub mod pricing;

pub use pricing::{PricingConfig, PricingEngine};
