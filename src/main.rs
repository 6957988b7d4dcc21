use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use museum_tours_client::{
    config::Config,
    listing::{ListState, TourListing},
    services::{admin, tours},
    ApiContext,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting museum tours client");

    let ctx = ApiContext::new(config).map_err(|e| anyhow::anyhow!(e))?;
    info!("API base address: {}", ctx.endpoints.base_url());

    // Сведения о музее: сбой не мешает показать список экскурсий
    match admin::fetch_museum_info(&ctx).await {
        Ok(museum) => {
            info!(
                "Museum info loaded: {}",
                museum.name.as_deref().unwrap_or("(unnamed)")
            );
        }
        Err(e) => error!("Error loading museum information: {:?}", e),
    }

    // Список экскурсий через общий конвейер
    let mut listing = TourListing::new();
    let generation = listing.begin_load();
    let outcome = tours::list_tours(&ctx).await.map_err(|e| e.to_string());
    listing.resolve(generation, outcome);

    match listing.snapshot() {
        ListState::Populated(cards) => {
            println!("Available tours:");
            for card in cards {
                println!(
                    "  {} | guide: {} | {} | {}",
                    card.name, card.guide, card.duration, card.price_label
                );
            }
        }
        ListState::Empty => println!("No tours available at the moment."),
        ListState::Error(message) => println!("Unable to load tours: {}", message),
        ListState::Idle | ListState::Loading => {}
    }

    Ok(())
}
