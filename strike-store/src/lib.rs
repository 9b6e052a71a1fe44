pub mod app_config;
pub mod memory_store;
pub mod redis_repo;
pub mod booking_client;

pub use booking_client::HttpBookingGateway;
pub use memory_store::InMemoryConfirmationStore;
pub use redis_repo::{RedisClient, RedisConfirmationStore};
