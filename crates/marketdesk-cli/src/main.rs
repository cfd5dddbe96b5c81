use anyhow::Context;
use clap::{Parser, Subcommand};
use dialoguer::Input;
use dotenvy::dotenv;
use marketdesk_cli::render::{
    render_admin, render_catalog, render_matrix, render_profile, render_profile_line,
};
use marketdesk_cli::seeder::seed_profiles;
use marketdesk_config::ApiConfig;
use marketdesk_core::{PermissionCatalog, SelectionEvent};
use marketdesk_models::{ProfileId, ProfileKind, UpdateAdminAccountDto};
use marketdesk_store::editor::render_rows;
use marketdesk_store::{
    AdminProfileClient, HttpProfileRepository, ProfileEditor, ProfileRepository, TokenStore,
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "marketdesk-cli")]
#[command(about = "Marketdesk CLI - Manage permission profiles on a Marketdesk service", long_about = None)]
struct Cli {
    /// Service base URL (overrides ADMIN_API_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the permission catalog
    Catalog,
    /// List, inspect, create and edit permission profiles
    Profiles {
        #[command(subcommand)]
        command: ProfileCommands,
    },
    /// Create fake permission profiles
    Seed {
        /// Number of profiles to create
        #[arg(short = 'c', long, default_value = "10")]
        count: usize,
    },
    /// Show or update the signed-in administrator's account
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },
}

#[derive(Subcommand)]
enum ProfileCommands {
    /// List every profile
    List,
    /// Show one profile with its selection matrix
    Show { id: ProfileId },
    /// Create an empty profile
    Create {
        /// Profile name (prompted when omitted)
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// edit or view
        #[arg(short = 'k', long, default_value = "view")]
        kind: ProfileKind,
    },
    /// Toggle a permission type, or a whole category when no label is given
    Toggle {
        id: ProfileId,

        #[arg(short = 'c', long)]
        category: String,

        #[arg(short = 'l', long)]
        label: Option<String>,
    },
}

#[derive(Subcommand)]
enum AdminCommands {
    /// Show the account profile
    Show,
    /// Update account fields; omitted fields stay unchanged
    Update {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        /// Empty string clears the phone number
        #[arg(long)]
        phone: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn api_config(base_url: Option<String>) -> ApiConfig {
    match base_url {
        Some(url) => ApiConfig {
            base_url: url.trim_end_matches('/').to_string(),
            ..ApiConfig::from_env()
        },
        None => ApiConfig::from_env(),
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = api_config(cli.base_url);
    let tokens = TokenStore::from_env(&config.token_key);

    match cli.command {
        Commands::Catalog => {
            let repo = HttpProfileRepository::new(config, tokens)?;
            print!("{}", render_catalog(&repo.catalog().await?));
        }
        Commands::Profiles { command } => {
            let repo = HttpProfileRepository::new(config, tokens)?;
            handle_profiles(&repo, command).await?;
        }
        Commands::Seed { count } => {
            let repo = HttpProfileRepository::new(config, tokens)?;
            let catalog = Arc::new(repo.catalog().await?);
            let ids = seed_profiles(&repo, catalog, count).await?;
            println!("✅ Created {} profiles", ids.len());
        }
        Commands::Admin { command } => {
            let client = AdminProfileClient::new(config, tokens)?;
            handle_admin(&client, command).await?;
        }
    }

    Ok(())
}

async fn handle_profiles(
    repo: &HttpProfileRepository,
    command: ProfileCommands,
) -> anyhow::Result<()> {
    match command {
        ProfileCommands::List => {
            let profiles = repo.list().await?;
            if profiles.is_empty() {
                println!("No profiles yet. Create one with `profiles create`.");
            }
            for profile in &profiles {
                println!("{}", render_profile_line(profile));
            }
        }
        ProfileCommands::Show { id } => {
            let catalog = repo.catalog().await?;
            let profile = repo.get(id).await?;
            print!("{}", render_profile(&profile, &render_rows(&catalog, &profile.selections)));
        }
        ProfileCommands::Create { name, kind } => {
            let name = match name {
                Some(name) => name,
                None => Input::new()
                    .with_prompt("Profile name")
                    .interact_text()
                    .context("Failed to read profile name")?,
            };

            let mut editor = ProfileEditor::new(Arc::new(repo.catalog().await?));
            editor.rename(name);
            editor.set_kind(kind);
            let id = editor.submit(repo).await?;

            println!("✅ Created profile #{}", id);
        }
        ProfileCommands::Toggle {
            id,
            category,
            label,
        } => {
            let event = match label {
                Some(label) => SelectionEvent::ToggleType { category, label },
                None => SelectionEvent::ToggleCategory { category },
            };
            let catalog: PermissionCatalog = repo.catalog().await?;
            let profile = repo.apply_event(id, &event).await?;
            print!("{}", render_matrix(&render_rows(&catalog, &profile.selections)));
        }
    }

    Ok(())
}

async fn handle_admin(client: &AdminProfileClient, command: AdminCommands) -> anyhow::Result<()> {
    let account = match command {
        AdminCommands::Show => client.fetch().await?,
        AdminCommands::Update { name, email, phone } => {
            let dto = UpdateAdminAccountDto { name, email, phone };
            let account = client.update(&dto).await?;
            println!("✅ Account updated\n");
            account
        }
    };

    println!("{}", render_admin(&account));
    Ok(())
}
