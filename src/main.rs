//! # slack-gallery CLI
//!
//! Command-line interface for the slack-gallery library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use slack_gallery::GalleryError;
use slack_gallery::cli::Args;
use slack_gallery::config::GalleryConfig;
use slack_gallery::core::GalleryProcessor;
use slack_gallery::media::HttpFetcher;

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn run() -> Result<(), GalleryError> {
    let total_start = Instant::now();
    let config: GalleryConfig = <Args as ClapParser>::parse().into();

    println!("🖼️  slack-gallery v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", config.input_dir.display());
    println!("💾 Output:  {}", config.output_dir.display());
    println!("👤 Users:   {}", config.users_path.display());
    println!();

    let output_file = config.output_file();
    let mut processor = GalleryProcessor::new(config, HttpFetcher::new()?)?;

    println!("⏳ Processing day files...");
    let stats = processor.process_files()?;
    let total_time = total_start.elapsed();

    println!();
    println!("✅ Done! Gallery saved to {}", output_file.display());

    println!();
    println!("📊 Summary:");
    println!("   Day files: {}", stats.day_files);
    println!("   Messages:  {}", stats.messages);
    println!("   Posts:     {}", stats.posts);
    println!("   Media:     {} downloaded", stats.media_downloaded);
    if stats.media_skipped > 0 {
        println!("              {} without download URL", stats.media_skipped);
    }

    println!();
    println!("⚡ Total time: {:.2}s", total_time.as_secs_f64());

    Ok(())
}
