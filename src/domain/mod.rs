pub mod feed;
pub mod article;

pub use feed::{FeedSource, SourceKind};
pub use article::{Article, RawFeedItem};
