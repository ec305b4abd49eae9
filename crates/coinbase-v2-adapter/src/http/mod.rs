/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod accounts;
pub mod addresses;
pub mod client;
pub mod error;
pub mod market;
pub mod payment_methods;
pub mod signature;
pub mod trades;
pub mod transactions;
pub mod transfers;
pub mod users;

pub use error::{CoinbaseError, Result};
pub use signature::RequestSigner;

pub use client::{ClientConfig, CoinbaseClient, Credentials};
