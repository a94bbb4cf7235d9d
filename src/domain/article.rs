use serde::{Deserialize, Serialize};

use crate::errors::FeederError;

/// An `<item>` as found in the feed, before any field is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFeedItem {
    pub title: Option<String>,
    pub content_encoded: Option<String>,
    pub creator: Option<String>,
    pub categories: Vec<String>,
    pub pub_date: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
}

impl RawFeedItem {
    /// Name of the first required field this item lacks, if any.
    pub fn missing_required(&self) -> Option<&'static str> {
        if self.title.is_none() {
            Some("title")
        } else if self.pub_date.is_none() {
            Some("pubDate")
        } else if self.link.is_none() {
            Some("link")
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub content: Option<String>,
    pub author: Option<String>,
    pub categories: Vec<String>,
    pub published_at: String,
    pub url: String,
    pub description: Option<String>,
}

impl TryFrom<RawFeedItem> for Article {
    type Error = FeederError;

    fn try_from(item: RawFeedItem) -> Result<Self, Self::Error> {
        Ok(Self {
            title: item.title.ok_or(FeederError::MissingField("title"))?,
            content: item.content_encoded,
            author: item.creator,
            categories: item.categories,
            published_at: item.pub_date.ok_or(FeederError::MissingField("pubDate"))?,
            url: item.link.ok_or(FeederError::MissingField("link"))?,
            description: item.description,
        })
    }
}
