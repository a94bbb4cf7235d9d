use tracing::warn;

use crate::domain::RawFeedItem;
use crate::errors::{FeederError, FeederResult};
use crate::sources::xml::{self, XmlElement};

/// Parse an RSS document and return its `rss > channel > item` entries in
/// document order. Items without a title, pubDate or link are skipped.
pub fn parse_feed(bytes: &[u8]) -> FeederResult<Vec<RawFeedItem>> {
    let root = xml::parse_document(bytes)?;

    if root.name != "rss" {
        return Err(FeederError::FeedParse(format!(
            "expected <rss> root element, found <{}>",
            root.name
        )));
    }

    let channel = root
        .child("channel")
        .ok_or_else(|| FeederError::FeedParse("missing <channel> element".to_string()))?;

    let mut items = Vec::new();
    for (index, element) in channel.children_named("item").enumerate() {
        let item = item_from_element(element);
        match item.missing_required() {
            None => items.push(item),
            Some(field) => warn!(
                index,
                field,
                title = item.title.as_deref().unwrap_or_default(),
                "Skipping feed item without required field"
            ),
        }
    }

    Ok(items)
}

fn item_from_element(element: &XmlElement) -> RawFeedItem {
    let text = |name: &str| element.child(name).map(|c| c.text.clone());

    RawFeedItem {
        title: text("title"),
        content_encoded: text("content:encoded"),
        creator: text("dc:creator"),
        categories: element
            .children_named("category")
            .map(|c| c.text.clone())
            .collect(),
        pub_date: text("pubDate"),
        link: text("link"),
        description: text("description"),
    }
}
