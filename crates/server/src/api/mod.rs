pub mod convert;
pub mod handlers;
pub mod intake;
pub mod routes;

pub use routes::create_router;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
