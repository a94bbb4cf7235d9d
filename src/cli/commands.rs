use std::path::PathBuf;

use clap::Parser;

use crate::sources::locator::DEFAULT_BASE_URL;

#[derive(Parser, Debug)]
#[command(name = "medium-feeder")]
#[command(about = "Export Medium author and publication feeds to timestamped JSON files")]
#[command(version)]
#[command(after_help = "Example: medium-feeder johndoe my-publication another-publication\n\nUse -- before identifiers that start with a hyphen: medium-feeder -- -handle")]
pub struct Cli {
    /// Medium username without the @ (pass "" to fetch publications only)
    pub handle: Option<String>,

    /// Publication slugs, fetched in the order given
    pub organizations: Vec<String>,

    /// Feed host to fetch from
    #[arg(long, env = "MEDIUM_FEED_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Directory the JSON export is written to
    #[arg(short, long, env = "FEEDER_OUTPUT_DIR", default_value = "content")]
    pub output_dir: PathBuf,
}
