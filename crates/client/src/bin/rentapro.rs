use anyhow::Context;
use clap::{Parser, Subcommand};
use client::{
    ApiClient, ApiConfig, ApplicationFiles, ApplicationSubmitter, AthleteDirectory,
    AthleteProfile, ListOptions, SportCategories,
};
use domain::dto::ApplicationPayload;
use domain::models::Athlete;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "rentapro")]
#[command(about = "RentAPro marketplace API client", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Overrides API_BASE_URL
    #[arg(long)]
    base_url: Option<String>,

    /// Overrides API_KEY
    #[arg(long)]
    api_key: Option<String>,

    /// Overrides ASSET_BASE_URL
    #[arg(long)]
    asset_base_url: Option<String>,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the trainer directory
    Athletes {
        #[command(subcommand)]
        command: AthleteCommands,
    },
    /// List sport categories
    Categories {
        #[arg(long)]
        active_only: bool,
    },
    /// Submit a trainer application from a JSON payload
    Apply {
        payload: PathBuf,

        #[arg(long)]
        profile_picture: Option<PathBuf>,

        #[arg(long = "attachment")]
        attachments: Vec<PathBuf>,
    },
}

#[derive(Subcommand)]
enum AthleteCommands {
    List {
        #[arg(long)]
        search: Option<String>,

        #[arg(long)]
        sport: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        status: Option<String>,

        #[arg(long, default_value_t = 1)]
        page: u32,

        #[arg(long)]
        limit: Option<u32>,
    },
    Show {
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("rentapro={},client={}", log_level, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = ApiConfig::from_env()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(api_key) = cli.api_key {
        config.api_key = api_key;
    }
    if let Some(asset_base_url) = cli.asset_base_url {
        config.asset_base_url = asset_base_url;
    }
    let api = Arc::new(ApiClient::from_config(config)?);

    match cli.command {
        Commands::Athletes { command } => match command {
            AthleteCommands::List {
                search,
                sport,
                location,
                status,
                page,
                limit,
            } => {
                let mut options = ListOptions::default().page(page);
                if let Some(search) = search {
                    options = options.search(search);
                }
                if let Some(sport) = sport {
                    options = options.sport_category(sport);
                }
                if let Some(location) = location {
                    options = options.location(location);
                }
                if let Some(status) = status {
                    options = options.status(status);
                }
                if let Some(limit) = limit {
                    options = options.limit(limit);
                }
                handle_athlete_list(api, options).await?;
            }
            AthleteCommands::Show { id } => handle_athlete_show(api, &id).await?,
        },
        Commands::Categories { active_only } => handle_categories(api, active_only).await?,
        Commands::Apply {
            payload,
            profile_picture,
            attachments,
        } => handle_apply(api, payload, profile_picture, attachments).await?,
    }

    Ok(())
}

async fn handle_athlete_list(api: Arc<ApiClient>, options: ListOptions) -> anyhow::Result<()> {
    let asset_base_url = api.config().asset_base_url.clone();
    let directory = AthleteDirectory::new(api);
    let list = directory.fetch(options).await?;

    if list.athletes.is_empty() {
        tracing::info!("No trainers matched");
        return Ok(());
    }

    for athlete in &list.athletes {
        print_athlete_line(athlete, &asset_base_url);
    }

    let pagination = &list.pagination;
    println!(
        "\nPage {} of {} ({} trainers)",
        pagination.current_page, pagination.total_pages, pagination.total_records
    );
    if pagination.shows_controls() {
        let pages: Vec<String> = pagination
            .page_numbers()
            .into_iter()
            .map(|page| page.to_string())
            .collect();
        println!("Pages: {}", pages.join(" "));
    }

    Ok(())
}

async fn handle_athlete_show(api: Arc<ApiClient>, id: &str) -> anyhow::Result<()> {
    let asset_base_url = api.config().asset_base_url.clone();
    let mut profile = AthleteProfile::new(api);
    let athlete = profile.fetch(id).await?;

    println!("{} ({})", athlete.full_name, athlete.id);
    println!("  Sport:       {}", athlete.sport_category);
    println!("  Level:       {}", athlete.experience_level);
    println!("  Location:    {}", athlete.location);
    println!("  Rate:        ${}/hr", athlete.hourly_rate);
    println!(
        "  Rating:      {} ({} reviews)",
        athlete.rating, athlete.total_reviews
    );
    println!("  Contact:     {} / {}", athlete.email, athlete.phone);
    println!("  Picture:     {}", athlete.profile_picture_url(&asset_base_url));
    let specializations = athlete.specialization_list();
    if !specializations.is_empty() {
        println!("  Specializes: {}", specializations.join(", "));
    }
    if !athlete.bio.is_empty() {
        println!("\n{}", athlete.bio);
    }

    Ok(())
}

async fn handle_categories(api: Arc<ApiClient>, active_only: bool) -> anyhow::Result<()> {
    let mut categories = SportCategories::new(api);
    categories.fetch().await?;

    let listed: Vec<_> = if active_only {
        categories.active().collect()
    } else {
        categories.categories().iter().collect()
    };
    for category in listed {
        match &category.description {
            Some(description) => println!("{:>4}  {}: {}", category.id, category.name, description),
            None => println!("{:>4}  {}", category.id, category.name),
        }
    }

    Ok(())
}

async fn handle_apply(
    api: Arc<ApiClient>,
    payload_path: PathBuf,
    profile_picture: Option<PathBuf>,
    attachments: Vec<PathBuf>,
) -> anyhow::Result<()> {
    tracing::info!("Loading application from: {}", payload_path.display());

    let content = tokio::fs::read_to_string(&payload_path)
        .await
        .with_context(|| format!("Failed to read {}", payload_path.display()))?;
    let payload: ApplicationPayload = serde_json::from_str(&content)
        .with_context(|| format!("Invalid application JSON in {}", payload_path.display()))?;

    let files = ApplicationFiles::from_paths(profile_picture.as_deref(), &attachments).await?;

    let mut submitter = ApplicationSubmitter::new(api);
    let envelope = submitter.submit(&payload, &files).await?;

    tracing::info!(
        "✓ {}",
        envelope
            .message
            .as_deref()
            .unwrap_or("Application submitted successfully")
    );
    if let Some(id) = envelope.data.and_then(|receipt| receipt.application_id) {
        println!("Application id: {}", id);
    }

    Ok(())
}

fn print_athlete_line(athlete: &Athlete, asset_base_url: &str) {
    println!(
        "{:>5}  {:<28} {:<14} {:<18} ${:>7}/hr  ★ {}",
        athlete.id,
        athlete.full_name,
        athlete.sport_category,
        athlete.location,
        athlete.hourly_rate,
        athlete.rating
    );
    tracing::debug!(
        "  picture: {}",
        athlete.profile_picture_url(asset_base_url)
    );
}
