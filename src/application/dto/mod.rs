pub mod auth;
pub mod cars;
pub mod serde_time;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use cars::{CarDto, CarInput};
pub use crate::domain::pagination::Page;
