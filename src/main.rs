use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use paper_fetch::layers::UrlOutcome;
use paper_fetch::{logging, Cli, Config, Pipeline};

// Article pages to process. Add more entries here.
const INPUT_URLS: &[&str] = &[
    "https://www.nature.com/articles/s41524-025-01675-6",
    // "https://www.nature.com/articles/s41586-020-2649-2",
    // "https://science.org/doi/10.1126/science.abd4559",
];

#[tokio::main]
async fn main() -> Result<()> {
    // 0. Load Configuration
    dotenv().ok();
    logging::init()?;

    let config = Config::from(Cli::parse());
    let pipeline = Pipeline::new(&config)?;
    let save_folder = pipeline.prepare().await?;
    println!("Saving PDFs to: {}", save_folder.display());

    // 1. Process every page in order
    let summary = pipeline.run(INPUT_URLS).await;

    // 2. Report
    println!("\n--- Summary ---");
    for (url, outcome) in &summary.outcomes {
        match outcome {
            UrlOutcome::Saved(path) => println!("✅ {} -> {}", url, path.display()),
            UrlOutcome::NoDoi => println!("❌ {}: no DOI on page", url),
            UrlOutcome::NoPdfLink { filename } => {
                println!("⚠️ {}: no PDF link (would have been {})", url, filename)
            }
            UrlOutcome::NotPdf { content_type } => {
                println!("⚠️ {}: link did not serve a PDF ({})", url, content_type)
            }
            UrlOutcome::DownloadFailed(reason) | UrlOutcome::Failed(reason) => {
                println!("❌ {}: {}", url, reason)
            }
        }
    }
    println!(
        "{} saved, {} skipped, {} failed.",
        summary.saved(),
        summary.skipped(),
        summary.failed()
    );

    Ok(())
}
