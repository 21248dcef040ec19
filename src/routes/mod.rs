pub mod data;
pub mod product;
pub mod user;
