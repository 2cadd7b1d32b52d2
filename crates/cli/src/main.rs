//! Pocketmart CLI - the storefront in a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! pm-cli categories
//! pm-cli products "men's clothing"
//! pm-cli product 7
//!
//! # Interactive cart session
//! pm-cli shop
//!
//! # Authenticate against the orders backend
//! pm-cli auth signin -e user@example.com -p secret
//! pm-cli auth signout
//!
//! # Track orders
//! pm-cli orders list
//! pm-cli orders pay 12
//! pm-cli orders receive 12
//!
//! # Profile
//! pm-cli profile show
//! pm-cli profile update -n "New Name" -p newpass
//! ```
//!
//! # Environment Variables
//!
//! - `POCKETMART_CATALOG_URL` - catalog base URL (default fakestoreapi.com)
//! - `POCKETMART_BACKEND_URL` - orders/auth backend base URL
//! - `POCKETMART_SESSION_PATH` - session file location

#![cfg_attr(not(test), forbid(unsafe_code))]
// This binary's whole job is writing to stdout
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use pocketmart_client::{AppState, ClientConfig};
use pocketmart_core::types::{OrderId, ProductId};

mod commands;

#[derive(Parser)]
#[command(name = "pm-cli")]
#[command(author, version, about = "Pocketmart storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog categories
    Categories,
    /// List the products in a category
    Products {
        /// Category name as listed by `categories`
        category: String,
    },
    /// Show a single product
    Product {
        /// Product id
        id: ProductId,
    },
    /// Interactive cart session (add/inc/dec/show)
    Shop,
    /// Sign in, sign up, or sign out
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
    /// Track and update your orders
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
    /// Show or update your profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Sign in with an existing account
    Signin {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Create an account and sign in
    Signup {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Forget the stored session
    Signout,
}

#[derive(Subcommand)]
enum OrdersAction {
    /// List your orders
    List,
    /// Pay an order
    Pay {
        /// Order id
        id: OrderId,
    },
    /// Mark a paid order as received
    Receive {
        /// Order id
        id: OrderId,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Show the signed-in profile
    Show,
    /// Update name and password
    Update {
        /// New display name
        #[arg(short, long)]
        name: String,

        /// New password
        #[arg(short, long)]
        password: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing; RUST_LOG controls verbosity
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::from_env()?;
    let state = AppState::new(config);

    match cli.command {
        Commands::Categories => commands::catalog::categories(&state).await?,
        Commands::Products { category } => commands::catalog::products(&state, &category).await?,
        Commands::Product { id } => commands::catalog::product(&state, id).await?,
        Commands::Shop => commands::cart::shop(&state).await?,
        Commands::Auth { action } => match action {
            AuthAction::Signin { email, password } => {
                commands::auth::sign_in(&state, &email, &password).await?;
            }
            AuthAction::Signup {
                name,
                email,
                password,
            } => {
                commands::auth::sign_up(&state, &name, &email, &password).await?;
            }
            AuthAction::Signout => commands::auth::sign_out(&state)?,
        },
        Commands::Orders { action } => match action {
            OrdersAction::List => commands::orders::list(&state).await?,
            OrdersAction::Pay { id } => commands::orders::pay(&state, id).await?,
            OrdersAction::Receive { id } => commands::orders::receive(&state, id).await?,
        },
        Commands::Profile { action } => match action {
            ProfileAction::Show => commands::profile::show(&state)?,
            ProfileAction::Update { name, password } => {
                commands::profile::update(&state, &name, &password).await?;
            }
        },
    }
    Ok(())
}
