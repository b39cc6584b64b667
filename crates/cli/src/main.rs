use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine::{EngineConfig, RecommendationEngine};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use wardrobe_store::{
    CatalogItem, CatalogRepository, InMemoryStore, ItemId, UserId, WardrobeItem,
    WardrobeRepository,
};

/// StyleRecs - Wardrobe Recommendation Engine
#[derive(Parser)]
#[command(name = "style-recs")]
#[command(about = "Wardrobe and catalog recommendations from your own closet", long_about = None)]
struct Cli {
    /// Path to the wardrobe/catalog dataset (JSON)
    #[arg(short, long, default_value = "data/demo.json")]
    data_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a user's learned taste profile
    Profile {
        /// User ID to display
        #[arg(long)]
        user_id: UserId,
    },

    /// Get catalog recommendations for a user
    Recommend {
        /// User ID to get recommendations for
        #[arg(long)]
        user_id: UserId,

        /// Number of recommendations to return
        #[arg(long, default_value = "20")]
        limit: usize,

        /// Show the reasons behind each recommendation
        #[arg(long)]
        explain: bool,
    },

    /// Compose outfit suggestions from a user's wardrobe
    Outfits {
        /// User ID to compose outfits for
        #[arg(long)]
        user_id: UserId,

        /// Occasion hint (accepted, not yet used for composition)
        #[arg(long)]
        occasion: Option<String>,
    },

    /// Show a user's matched style peers
    Peers {
        /// User ID to match peers for
        #[arg(long)]
        user_id: UserId,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    println!("Loading dataset from {}...", cli.data_file.display());
    let start = Instant::now();
    let store = Arc::new(
        InMemoryStore::load_from_json(&cli.data_file).context("Failed to load dataset")?,
    );
    println!("{} Loaded dataset in {:?}", "✓".green(), start.elapsed());

    let config = EngineConfig::default();
    let catalog_limit = config.catalog_limit;
    let engine = RecommendationEngine::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        config,
    );

    match cli.command {
        Commands::Profile { user_id } => handle_profile(&engine, user_id)?,
        Commands::Recommend {
            user_id,
            limit,
            explain,
        } => handle_recommend(&engine, &store, catalog_limit, user_id, limit, explain).await?,
        Commands::Outfits { user_id, occasion } => {
            handle_outfits(&engine, &store, user_id, occasion.as_deref())?
        }
        Commands::Peers { user_id } => handle_peers(&engine, user_id)?,
    }

    Ok(())
}

/// Handle the 'profile' command
fn handle_profile(engine: &RecommendationEngine, user_id: UserId) -> Result<()> {
    let profile = engine.learn_preferences(user_id);

    println!("{}", format!("Taste profile for user {}:", user_id).bold().blue());
    println!(
        "{}Favorite colors: {}",
        "• ".green(),
        join_or_none(&profile.favorite_colors)
    );
    println!(
        "{}Favorite brands: {}",
        "• ".green(),
        join_or_none(&profile.favorite_brands)
    );
    let mut styles: Vec<&str> = profile.preferred_styles.iter().map(String::as_str).collect();
    styles.sort_unstable();
    println!("{}Preferred styles: {}", "• ".green(), styles.join(", "));

    let mut categories: Vec<(&String, &u32)> = profile.category_frequency.iter().collect();
    categories.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    println!("Wardrobe by category:");
    for (category, count) in categories {
        println!("  - {}: {} item(s)", category, count);
    }
    Ok(())
}

/// Handle the 'recommend' command
async fn handle_recommend(
    engine: &RecommendationEngine,
    store: &Arc<InMemoryStore>,
    catalog_limit: usize,
    user_id: UserId,
    limit: usize,
    explain: bool,
) -> Result<()> {
    let wardrobe = store.items_for_user(user_id)?;
    let ranked = engine.recommend_items(user_id, &wardrobe).await;

    // Index the catalog slice for display
    let catalog: HashMap<ItemId, CatalogItem> = store
        .active_items(catalog_limit)?
        .into_iter()
        .map(|item| (item.id, item))
        .collect();

    println!("{}", "Catalog Recommendations:".bold().blue());
    if ranked.is_empty() {
        println!("  Nothing stood out for this wardrobe yet.");
    }
    for (rank, rec) in ranked.iter().take(limit).enumerate() {
        let label = catalog
            .get(&rec.item_id)
            .map(describe_catalog_item)
            .unwrap_or_else(|| format!("item {}", rec.item_id));
        println!(
            "{}. {} - Score: {} (confidence {}%)",
            (rank + 1).to_string().green(),
            label,
            rec.score,
            rec.confidence
        );
        if explain {
            for reason in &rec.reasons {
                println!("   {} {}", "↳".cyan(), reason);
            }
        }
    }
    Ok(())
}

/// Handle the 'outfits' command
fn handle_outfits(
    engine: &RecommendationEngine,
    store: &Arc<InMemoryStore>,
    user_id: UserId,
    occasion: Option<&str>,
) -> Result<()> {
    let wardrobe = store.items_for_user(user_id)?;
    let by_id: HashMap<ItemId, &WardrobeItem> =
        wardrobe.iter().map(|item| (item.id, item)).collect();

    let suggestions = engine.compose_outfits(user_id, &wardrobe, occasion);

    println!("{}", "Outfit Suggestions:".bold().blue());
    if suggestions.is_empty() {
        println!("  Not enough available pieces to build a full outfit.");
    }
    for suggestion in &suggestions {
        println!(
            "{} (confidence {}%)",
            suggestion.name.bold(),
            suggestion.confidence
        );
        for (slot, item_id) in [
            ("Top", suggestion.top),
            ("Bottom", suggestion.bottom),
            ("Shoes", suggestion.shoes),
        ] {
            let label = by_id
                .get(&item_id)
                .map(|item| describe_wardrobe_item(item))
                .unwrap_or_else(|| format!("item {}", item_id));
            println!("  {}: {}", slot, label);
        }
        println!("  {} {}", "↳".cyan(), suggestion.reasoning);
    }
    Ok(())
}

/// Handle the 'peers' command
fn handle_peers(engine: &RecommendationEngine, user_id: UserId) -> Result<()> {
    let profile = engine.learn_preferences(user_id);
    let peers = engine.find_peers(user_id, &profile);

    println!("{}", format!("Style peers for user {}:", user_id).bold().blue());
    if peers.is_empty() {
        println!("  No peers with overlapping taste found.");
        return Ok(());
    }
    println!(
        "{}Peers: {}",
        "• ".green(),
        peers
            .peers
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!(
        "{}Shared tags: {}",
        "• ".green(),
        peers.shared_tags.join(", ")
    );
    let mut popular: Vec<ItemId> = peers.popular_items.iter().copied().collect();
    popular.sort_unstable();
    println!(
        "{}Popular among peers: {} item(s)",
        "• ".cyan(),
        popular.len()
    );
    for item_id in popular.iter().take(10) {
        println!("  - catalog item {}", item_id);
    }
    Ok(())
}

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "(none yet)".to_string()
    } else {
        values.join(", ")
    }
}

fn describe_catalog_item(item: &CatalogItem) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if let Some(color) = item.color.as_deref() {
        parts.push(color);
    }
    if let Some(category) = item.category.as_deref() {
        parts.push(category);
    }
    let mut label = if parts.is_empty() {
        format!("item {}", item.id)
    } else {
        parts.join(" ")
    };
    if let Some(brand) = item.brand.as_deref() {
        label.push_str(&format!(" by {}", brand));
    }
    label
}

fn describe_wardrobe_item(item: &WardrobeItem) -> String {
    match item.color.as_deref() {
        Some(color) => format!("{} {}", color, item.category),
        None => item.category.clone(),
    }
}
