pub mod traits;
pub mod http;
pub mod locator;
pub mod rss;
pub mod xml;

pub use traits::FeedClient;
pub use http::HttpFeedClient;
