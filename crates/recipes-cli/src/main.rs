use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;

use recipes_cache::{CacheBackend, CacheConfig, RecipeCache, RedisCache, keys};
use recipes_cli::seeder;
use recipes_db::{Database, MongoConfig, MongoRecipeStore, MongoUserStore, load_fixture};

#[derive(Parser)]
#[command(name = "recipes-cli")]
#[command(about = "Recipes CLI - Administrative tools for the Recipes API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import recipes from a JSON fixture
    Seed {
        /// Path to the fixture file
        #[arg(short = 'f', long, default_value = "recipes.json")]
        file: PathBuf,
    },
    /// Insert randomly generated recipes
    SeedFake {
        /// Number of recipes to create
        #[arg(short = 'c', long, default_value = "20")]
        count: usize,
    },
    /// Create a user account
    CreateUser {
        /// Username
        #[arg(short = 'u', long)]
        username: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Delete the cached recipe list from Redis
    ClearCache,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command).await {
        eprintln!("\n❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Seed { file } => handle_seed(file).await,
        Commands::SeedFake { count } => handle_seed_fake(count).await,
        Commands::CreateUser { username, password } => {
            handle_create_user(username, password).await
        }
        Commands::ClearCache => handle_clear_cache().await,
    }
}

async fn connect() -> anyhow::Result<Database> {
    let config = MongoConfig::from_env()?;
    Database::connect(&config)
        .await
        .context("Failed to connect to MongoDB")
}

/// Cache handle used to drop the cached list after seeding. Without Redis
/// there is nothing to invalidate.
async fn connect_cache() -> RecipeCache {
    let config = CacheConfig::from_env();
    let Some(url) = config.connection_url() else {
        return RecipeCache::disconnected();
    };

    match RedisCache::new(&url).await {
        Ok(redis) => RecipeCache::new(Some(Arc::new(redis)), config.enabled, &config.key_prefix),
        Err(e) => {
            eprintln!("⚠️  Redis unavailable, cached recipe list left as is: {}", e);
            RecipeCache::disconnected()
        }
    }
}

async fn handle_seed(file: PathBuf) -> anyhow::Result<()> {
    let recipes = load_fixture(&file)?;
    let db = connect().await?;
    let cache = connect_cache().await;

    seeder::seed_recipes(&MongoRecipeStore::new(&db), &cache, recipes).await?;
    Ok(())
}

async fn handle_seed_fake(count: usize) -> anyhow::Result<()> {
    let db = connect().await?;
    let cache = connect_cache().await;

    seeder::seed_recipes(
        &MongoRecipeStore::new(&db),
        &cache,
        seeder::generate_recipes(count),
    )
    .await?;
    Ok(())
}

async fn handle_create_user(
    username: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let username = match username {
        Some(username) => username,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()?,
    };

    let db = connect().await?;
    seeder::create_user(&MongoUserStore::new(&db), &username, &password).await?;

    println!("\n✅ User created successfully!");
    println!("   Username: {}", username);
    Ok(())
}

async fn handle_clear_cache() -> anyhow::Result<()> {
    let config = CacheConfig::from_env();
    let url = config
        .connection_url()
        .context("REDIS_URI is not set; there is no cache to clear")?;

    let cache = RedisCache::new(&url).await?;
    let key = keys::recipes::list(&config.key_prefix);
    cache.delete(&key).await?;

    println!("✅ Cleared cached recipe list ({})", key);
    Ok(())
}
