mod handler;

pub use handler::{DataResponse, get_data};
