mod companies;
pub mod dto;
mod industries;
mod invoices;
pub mod response;
mod router;

pub use router::{AppState, create_router};
