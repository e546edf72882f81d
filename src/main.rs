use clap::Parser;
use persona_footprint::{CollectError, Footprint, MemoryStore, PersonaProfile};
use std::sync::Arc;

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    ::log::info!("Building persona for URI: {}", args.uri);

    let start_time = std::time::Instant::now();
    let profile = match run(&args).await {
        Ok(profile) => profile,
        Err(e) => {
            ::log::error!("Failed to build persona: {}", e);
            std::process::exit(1);
        }
    };

    ::log::info!(
        "Persona complete - {} content items in {:.2} seconds",
        profile.content_items,
        start_time.elapsed().as_secs_f64()
    );

    match serde_json::to_string_pretty(&profile) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            ::log::error!("Failed to serialize persona: {}", e);
            std::process::exit(1);
        }
    }
}

async fn run(args: &Args) -> Result<PersonaProfile, CollectError> {
    let mut footprint = Footprint::new(&args.uri);
    if let Some(path) = &args.config {
        footprint = footprint.with_config_file(path)?;
    }
    // Blog mode may be picked from the URL, so cap both
    if let Some(max_pages) = args.max_pages {
        footprint = footprint.with_page_limit(max_pages);
    }
    if args.blog {
        footprint = footprint.with_blog_mode(true);
    }

    let collector = footprint.build(Arc::new(MemoryStore::new()))?;
    let summary = collector.collect_all_data(&args.owner, None).await?;
    if summary.total_items == 0 {
        ::log::warn!("No content collected from {}", args.uri);
    }

    collector.build_persona(&args.owner, &summary.tweets)
}
