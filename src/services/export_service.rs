use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use tempfile::NamedTempFile;
use tracing::{error, info};

use crate::domain::{Article, RawFeedItem};
use crate::errors::{FeederError, FeederResult};

/// Characters replaced with `_` when building the file name prefix
const UNSAFE_FILENAME_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

pub struct ExportService {
    output_dir: PathBuf,
}

impl ExportService {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn normalize(items: Vec<RawFeedItem>) -> FeederResult<Vec<Article>> {
        items.into_iter().map(Article::try_from).collect()
    }

    /// `<dir>/<handle>-<org>...-medium-articles-<timestamp>.json`
    pub fn output_path(
        &self,
        handle: Option<&str>,
        organizations: &[String],
        now: DateTime<Utc>,
    ) -> PathBuf {
        let prefix = file_prefix(handle, organizations);
        let timestamp = now
            .to_rfc3339_opts(SecondsFormat::Millis, true)
            .replace([':', '.'], "-");

        self.output_dir
            .join(format!("{}-medium-articles-{}.json", prefix, timestamp))
    }

    /// Normalize and write all items to a new export file.
    ///
    /// Failing to create the output directory is an error. Failing to write
    /// the file is logged and reported as zero saved articles.
    pub fn save(
        &self,
        items: Vec<RawFeedItem>,
        handle: Option<&str>,
        organizations: &[String],
    ) -> FeederResult<usize> {
        fs::create_dir_all(&self.output_dir).map_err(|e| {
            error!(dir = %self.output_dir.display(), error = %e, "Error creating content directory");
            FeederError::Io(e)
        })?;

        let articles = Self::normalize(items)?;
        let path = self.output_path(handle, organizations, Utc::now());

        Ok(self.write_articles(&path, &articles))
    }

    /// Returns the number of articles written, zero on failure.
    fn write_articles(&self, path: &Path, articles: &[Article]) -> usize {
        match self.write_json(path, articles) {
            Ok(()) => {
                info!(path = %path.display(), count = articles.len(), "Wrote export file");
                println!("Articles saved to {}", path.display());
                articles.len()
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "Error saving articles");
                0
            }
        }
    }

    /// Write through a temp file in the same directory so the target is
    /// either complete or absent. An existing file at `path` is left alone.
    fn write_json(&self, path: &Path, articles: &[Article]) -> FeederResult<()> {
        let json = serde_json::to_string_pretty(articles)?;

        let mut file = NamedTempFile::new_in(&self.output_dir)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        file.persist_noclobber(path).map_err(|e| FeederError::Io(e.error))?;

        Ok(())
    }
}

/// Join handle and organizations with `-`, skipping empty parts
pub fn file_prefix(handle: Option<&str>, organizations: &[String]) -> String {
    handle
        .into_iter()
        .chain(organizations.iter().map(String::as_str))
        .filter(|part| !part.is_empty())
        .map(sanitize)
        .collect::<Vec<_>>()
        .join("-")
}

fn sanitize(part: &str) -> String {
    part.chars()
        .map(|c| {
            if c.is_control() || UNSAFE_FILENAME_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect()
}
