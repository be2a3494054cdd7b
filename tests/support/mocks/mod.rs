// tests/support/mocks/mod.rs
pub mod repos;
pub mod security;
pub mod time;

pub use repos::{FailingCarRepository, InMemoryCarRepository};
pub use security::{
    ADMIN_TOKEN, DummyTokenManager, EXPIRED_TOKEN, MOCK_AUTHORITY_TOKEN, NO_AUTHORITY_TOKEN,
    READER_TOKEN, user,
};
pub use time::{DummyClock, SteppingClock, fixed_now};
