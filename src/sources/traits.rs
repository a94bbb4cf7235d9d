use crate::errors::FeederResult;

#[cfg_attr(test, mockall::automock)]
pub trait FeedClient: Send + Sync {
    /// Fetch the raw feed document at `url`
    fn fetch(&self, url: &str) -> FeederResult<Vec<u8>>;
}
