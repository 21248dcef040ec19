mod handler;
mod model;

pub use handler::{login, logout, profile, register};
pub use model::{CredentialsRequest, MessageResponse, ProfileResponse};
