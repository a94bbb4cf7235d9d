use crate::config::Config;
use crate::domain::FeedSource;
use crate::errors::FeederResult;

pub const DEFAULT_BASE_URL: &str = "https://medium.com";

pub fn user_feed_url(base_url: &str, handle: &str) -> String {
    format!("{}/feed/@{}", base_url.trim_end_matches('/'), handle)
}

pub fn organization_feed_url(base_url: &str, slug: &str) -> String {
    format!("{}/feed/{}", base_url.trim_end_matches('/'), slug)
}

/// Build one feed source per identifier: the user first, then organizations
/// in the order given. Identifiers are not validated; a bad one just fails
/// to fetch later.
pub fn locate(config: &Config) -> FeederResult<Vec<FeedSource>> {
    config.validate()?;

    let mut sources = Vec::with_capacity(config.organizations.len() + 1);

    if let Some(handle) = &config.handle {
        sources.push(FeedSource::user(user_feed_url(&config.base_url, handle)));
    }

    for org in &config.organizations {
        sources.push(FeedSource::organization(
            organization_feed_url(&config.base_url, org),
            org.clone(),
        ));
    }

    Ok(sources)
}
