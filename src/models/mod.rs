pub mod product;
pub mod user;

pub use product::{Product, ProductDraft, ProductPatch};
pub use user::{SessionUser, User};
