use tracing::{info, warn};

use crate::domain::{FeedSource, RawFeedItem};
use crate::errors::FeederResult;
use crate::sources::rss;
use crate::sources::traits::FeedClient;

pub struct FetchService<C: FeedClient> {
    client: C,
}

impl<C: FeedClient> FetchService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Fetch and parse a single feed
    pub fn fetch_source(&self, source: &FeedSource) -> FeederResult<Vec<RawFeedItem>> {
        let body = self.client.fetch(&source.url)?;
        rss::parse_feed(&body)
    }

    /// Fetch every source in order and concatenate their items.
    /// A source that fails contributes nothing; the rest still run.
    pub fn fetch_all(&self, sources: &[FeedSource]) -> Vec<RawFeedItem> {
        let mut all_items = Vec::new();

        for source in sources {
            println!("Fetching articles from {}: {}", source.kind, source.url);

            match self.fetch_source(source) {
                Ok(items) => {
                    info!(url = %source.url, count = items.len(), "Fetched feed");
                    all_items.extend(items);
                }
                Err(e) => {
                    // Log error but continue with other feeds
                    warn!(url = %source.url, error = %e, "Error fetching RSS feed");
                }
            }
        }

        all_items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FeederError;
    use crate::sources::traits::MockFeedClient;
    use mockall::predicate::eq;
    use mockall::Sequence;

    fn feed_with(titles: &[&str]) -> Vec<u8> {
        let items: String = titles
            .iter()
            .map(|t| {
                format!(
                    "<item><title>{t}</title><link>https://x/{t}</link><pubDate>2024-01-01</pubDate></item>"
                )
            })
            .collect();
        format!("<rss><channel>{items}</channel></rss>").into_bytes()
    }

    fn sources() -> Vec<FeedSource> {
        vec![
            FeedSource::user("https://medium.com/feed/@alice".to_string()),
            FeedSource::organization("https://medium.com/feed/orgA".to_string(), "orgA".to_string()),
            FeedSource::organization("https://medium.com/feed/orgB".to_string(), "orgB".to_string()),
        ]
    }

    fn titles(items: &[RawFeedItem]) -> Vec<&str> {
        items.iter().filter_map(|i| i.title.as_deref()).collect()
    }

    #[test]
    fn test_items_concatenated_in_source_order() {
        let mut client = MockFeedClient::new();
        let mut seq = Sequence::new();
        client
            .expect_fetch()
            .with(eq("https://medium.com/feed/@alice"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(feed_with(&["alice1", "alice2"])));
        client
            .expect_fetch()
            .with(eq("https://medium.com/feed/orgA"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(feed_with(&["orgA1", "orgA2"])));
        client
            .expect_fetch()
            .with(eq("https://medium.com/feed/orgB"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(feed_with(&["orgB1", "orgB2"])));

        let service = FetchService::new(client);
        let items = service.fetch_all(&sources());

        assert_eq!(
            titles(&items),
            vec!["alice1", "alice2", "orgA1", "orgA2", "orgB1", "orgB2"]
        );
    }

    #[test]
    fn test_failed_source_contributes_nothing() {
        let mut client = MockFeedClient::new();
        client
            .expect_fetch()
            .with(eq("https://medium.com/feed/@alice"))
            .returning(|_| Ok(feed_with(&["alice1"])));
        client
            .expect_fetch()
            .with(eq("https://medium.com/feed/orgA"))
            .returning(|url| {
                Err(FeederError::HttpStatus {
                    url: url.to_string(),
                    status: 503,
                })
            });
        client
            .expect_fetch()
            .with(eq("https://medium.com/feed/orgB"))
            .returning(|_| Ok(feed_with(&["orgB1"])));

        let service = FetchService::new(client);
        let items = service.fetch_all(&sources());

        assert_eq!(titles(&items), vec!["alice1", "orgB1"]);
    }

    #[test]
    fn test_malformed_document_contributes_nothing() {
        let mut client = MockFeedClient::new();
        client
            .expect_fetch()
            .with(eq("https://medium.com/feed/@alice"))
            .returning(|_| Ok(b"<html>not a feed</html>".to_vec()));
        client
            .expect_fetch()
            .with(eq("https://medium.com/feed/orgA"))
            .returning(|_| Ok(b"<rss><channel><item>".to_vec()));
        client
            .expect_fetch()
            .with(eq("https://medium.com/feed/orgB"))
            .returning(|_| Ok(feed_with(&["orgB1", "orgB2"])));

        let service = FetchService::new(client);
        let items = service.fetch_all(&sources());

        assert_eq!(titles(&items), vec!["orgB1", "orgB2"]);
    }

    #[test]
    fn test_fetch_source_surfaces_error() {
        let mut client = MockFeedClient::new();
        client
            .expect_fetch()
            .returning(|_| Ok(b"<feed></feed>".to_vec()));

        let service = FetchService::new(client);
        let result = service.fetch_source(&sources()[0]);

        assert!(matches!(result, Err(FeederError::FeedParse(_))));
    }

    #[test]
    fn test_no_sources_fetches_nothing() {
        let mut client = MockFeedClient::new();
        client.expect_fetch().never();

        let service = FetchService::new(client);
        assert!(service.fetch_all(&[]).is_empty());
    }
}
