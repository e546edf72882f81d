use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "persona-footprint")]
#[command(about = "Crawl a personal site or blog and synthesize a persona profile")]
#[command(version)]
pub struct Args {
    /// Website or blog URL to crawl
    pub uri: String,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Maximum number of pages, or posts in blog mode (overrides the config)
    #[arg(short, long)]
    pub max_pages: Option<usize>,

    /// Treat the URL as a blog and keep only post pages
    #[arg(short, long)]
    pub blog: bool,

    /// Owner id the collected content is stored under
    #[arg(short, long, default_value = "default")]
    pub owner: String,
}
