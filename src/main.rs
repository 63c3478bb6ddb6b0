use clap::Parser;
use cottage_scout::client::{CottageApiClient, SearchOutcome, SearchSession, DEFAULT_BASE_URL};
use cottage_scout::form::FormInput;
use cottage_scout::render;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Search for available lake cottages through a remote suggestion API.
///
/// Field flags are raw strings on purpose: validation (required fields,
/// number and date parsing) lives in the form layer, matching the page
/// this tool replaces.
#[derive(Parser)]
#[command(name = "cottage-scout", version, about)]
struct Cli {
    /// Name of the person booking (optional)
    #[arg(long)]
    booker_name: Option<String>,

    /// Preferred city (optional)
    #[arg(long)]
    city: Option<String>,

    /// Number of people the cottage must sleep
    #[arg(long)]
    people: Option<String>,

    /// Minimum number of bedrooms
    #[arg(long)]
    bedrooms: Option<String>,

    /// Maximum distance to the nearest lake, in meters
    #[arg(long)]
    max_dist_lake: Option<String>,

    /// Maximum distance to the nearest city, in meters
    #[arg(long)]
    max_dist_city: Option<String>,

    /// First day of the stay, YYYY-MM-DD
    #[arg(long)]
    start_date: Option<String>,

    /// Length of the stay in days
    #[arg(long)]
    days: Option<String>,

    /// Allowed start-date shift in days
    #[arg(long)]
    date_shift: Option<String>,

    /// Suggestion API base URL (default: $COTTAGE_API_URL or the local demo backend)
    #[arg(long)]
    base_url: Option<String>,

    /// Where to write the rendered result page
    #[arg(long, default_value = "results.html")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Cli::parse();

    info!("🏕️ Cottage Scout");

    let form = FormInput {
        booker_name: args.booker_name,
        city: args.city,
        num_people: args.people,
        num_bedrooms: args.bedrooms,
        max_dist_lake: args.max_dist_lake,
        max_dist_city: args.max_dist_city,
        start_date: args.start_date,
        num_days: args.days,
        date_shift: args.date_shift,
    };

    // Validation failures abort before any request is made.
    let criteria = match form.build_criteria() {
        Ok(criteria) => criteria,
        Err(err) => {
            eprintln!("⚠️  {}", err);
            std::process::exit(2);
        }
    };

    let base_url = args
        .base_url
        .or_else(|| std::env::var("COTTAGE_API_URL").ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let client = CottageApiClient::new(&base_url)?;
    let mut session = SearchSession::new();

    let outcome = session.run(&client, &criteria).await;

    let (fragment, failed) = match &outcome {
        SearchOutcome::Results(suggestions) => {
            info!("✅ Found {} cottage suggestions", suggestions.len());
            for (i, s) in suggestions.iter().enumerate() {
                println!("{}. {} ({})", i + 1, s.address, s.cottage_id);
                println!("   {} people, {} bedrooms", s.capacity, s.number_of_bedrooms);
                println!("   {} m to lake, {} m to {}", s.distance_to_lake, s.distance_to_city, s.city_name);
                println!(
                    "   {} – {} ({} nights)",
                    s.start_date, s.end_date, s.nights()
                );
                println!();
            }
            if suggestions.is_empty() {
                println!("No cottages matched your criteria. Try loosening the filters.");
            }
            (
                render::render_results(suggestions, criteria.booker_name.as_deref()),
                false,
            )
        }
        SearchOutcome::Failed { endpoint, detail } => {
            eprintln!("Search failed against {}: {}", endpoint, detail);
            (render::render_error(endpoint, detail), true)
        }
        // A fresh session cannot be mid-flight here.
        SearchOutcome::Busy => unreachable!("no concurrent trigger exists in the CLI"),
    };

    let page = render::render_page(&fragment);
    tokio::fs::write(&args.output, page).await?;
    info!("💾 Saved result page to {}", args.output.display());

    if failed {
        std::process::exit(1);
    }
    Ok(())
}
