pub mod client;
pub mod error;
pub mod mock;
pub mod session;
pub mod source;

pub use client::OfferClient;
pub use error::ClientError;
pub use mock::mock_response;
pub use session::submit_search;
pub use source::OfferSource;
