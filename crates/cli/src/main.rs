//! Atelier CLI - terminal front end for the CMS backend.
//!
//! # Usage
//!
//! ```bash
//! # Log in (session persists to ATELIER_SESSION_PATH)
//! atelier auth login -e ana@atelier.studio -p <password>
//!
//! # Browse and manage posts
//! atelier posts list --search rust
//! atelier posts create -t "Title" -c "Body" --publish
//!
//! # Manage site configuration (staff)
//! atelier config set site_title "Atelier Studio"
//! atelier config reset --category seo
//!
//! # Public site info (no session)
//! atelier site info
//! ```
//!
//! # Commands
//!
//! - `auth` - Login, logout, registration, profile
//! - `posts` - Post CRUD and publish toggling
//! - `users` - Admin user management
//! - `config` - Site configuration management
//! - `site` - Public site information

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

use atelier_core::{ConfigCategory, Email, Slug, UserId};

mod commands;

#[derive(Parser)]
#[command(name = "atelier")]
#[command(author, version, about = "Atelier CMS command-line client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Login, logout, registration, and profile
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
    /// Post CRUD and publish toggling
    Posts {
        #[command(subcommand)]
        action: PostAction,
    },
    /// Admin user management
    Users {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Site configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Public site information
    Site {
        #[command(subcommand)]
        action: SiteAction,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Log in and persist the session
    Login {
        /// Account email address
        #[arg(short, long)]
        email: Email,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Register a new account
    Register {
        #[arg(short, long)]
        email: Email,

        #[arg(short, long)]
        password: String,

        #[arg(short, long, default_value = "")]
        first_name: String,

        #[arg(short, long, default_value = "")]
        last_name: String,
    },
    /// Clear the persisted session
    Logout,
    /// Show the persisted session user
    Whoami,
    /// Fetch the profile from the backend
    Profile,
    /// Update the logged-in user's name
    UpdateProfile {
        #[arg(short, long)]
        first_name: Option<String>,

        #[arg(short, long)]
        last_name: Option<String>,
    },
}

#[derive(Subcommand)]
enum PostAction {
    /// List posts
    List {
        /// Match against title and content
        #[arg(short, long)]
        search: Option<String>,

        /// Filter by author email
        #[arg(short, long)]
        author: Option<String>,

        /// 1-based page number
        #[arg(short, long)]
        page: Option<u32>,
    },
    /// Show a post by slug
    Get { slug: Slug },
    /// Create a post
    Create {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        content: String,

        /// Publish immediately instead of saving as a draft
        #[arg(long)]
        publish: bool,
    },
    /// Replace a post's title and content
    Update {
        slug: Slug,

        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        content: String,

        #[arg(long)]
        publish: bool,
    },
    /// Delete a post
    Delete { slug: Slug },
    /// List the logged-in user's own posts
    Mine,
    /// Flip a post's publish state
    TogglePublish { slug: Slug },
}

#[derive(Subcommand)]
enum UserAction {
    /// List users
    List {
        /// Match against email and name fields
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Create a user account
    Create {
        #[arg(short, long)]
        email: Email,

        #[arg(short, long)]
        password: String,

        #[arg(short, long, default_value = "")]
        first_name: String,

        #[arg(short, long, default_value = "")]
        last_name: String,

        /// Grant staff access
        #[arg(long)]
        staff: bool,
    },
    /// Patch a user's fields
    Update {
        id: i64,

        #[arg(short, long)]
        email: Option<Email>,

        #[arg(short, long)]
        first_name: Option<String>,

        #[arg(short, long)]
        last_name: Option<String>,
    },
    /// Delete a user account
    Delete { id: i64 },
    /// Flip a user's staff flag
    ToggleStaff { id: i64 },
    /// Flip a user's active flag
    ToggleActive { id: i64 },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// List configurations
    List {
        /// Restrict to one category (`site`, `email`, `seo`, `social`, `other`)
        #[arg(short, long)]
        category: Option<ConfigCategory>,

        /// Match against key, label, and description
        #[arg(short, long)]
        search: Option<String>,

        /// Group output by category
        #[arg(short, long)]
        grouped: bool,
    },
    /// Show one configuration
    Get { key: String },
    /// Set one configuration's stored value
    Set { key: String, value: String },
    /// Delete a configuration
    Delete { key: String },
    /// Apply several key=value updates in one call
    BulkSet {
        /// Updates as `key=value` pairs
        #[arg(required = true)]
        pairs: Vec<String>,
    },
    /// Reset stored values to defaults
    Reset {
        /// Restrict the reset to one category
        #[arg(short, long)]
        category: Option<ConfigCategory>,
    },
    /// List available categories and value types
    Choices,
}

#[derive(Subcommand)]
enum SiteAction {
    /// Show the aggregated public site info
    Info,
    /// Show the public configuration map
    Configurations,
    /// Show upcoming consultation availability
    Schedule {
        /// Number of days to show
        #[arg(short, long, default_value_t = 14)]
        days: u32,

        /// Fixed seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CommandError> {
    let client = commands::client()?;

    match cli.command {
        Commands::Auth { action } => match action {
            AuthAction::Login { email, password } => {
                commands::auth::login(&client, &email, &password).await?;
            }
            AuthAction::Register {
                email,
                password,
                first_name,
                last_name,
            } => {
                commands::auth::register(&client, email, password, first_name, last_name).await?;
            }
            AuthAction::Logout => commands::auth::logout(&client),
            AuthAction::Whoami => commands::auth::whoami(&client)?,
            AuthAction::Profile => commands::auth::profile(&client).await?,
            AuthAction::UpdateProfile {
                first_name,
                last_name,
            } => {
                commands::auth::update_profile(&client, first_name, last_name).await?;
            }
        },
        Commands::Posts { action } => match action {
            PostAction::List {
                search,
                author,
                page,
            } => commands::posts::list(&client, search, author, page).await?,
            PostAction::Get { slug } => commands::posts::get(&client, &slug).await?,
            PostAction::Create {
                title,
                content,
                publish,
            } => commands::posts::create(&client, title, content, publish).await?,
            PostAction::Update {
                slug,
                title,
                content,
                publish,
            } => commands::posts::update(&client, &slug, title, content, publish).await?,
            PostAction::Delete { slug } => commands::posts::delete(&client, &slug).await?,
            PostAction::Mine => commands::posts::mine(&client).await?,
            PostAction::TogglePublish { slug } => {
                commands::posts::toggle_publish(&client, &slug).await?;
            }
        },
        Commands::Users { action } => match action {
            UserAction::List { search } => {
                commands::users::list(&client, search.as_deref()).await?;
            }
            UserAction::Create {
                email,
                password,
                first_name,
                last_name,
                staff,
            } => {
                commands::users::create(&client, email, password, first_name, last_name, staff)
                    .await?;
            }
            UserAction::Update {
                id,
                email,
                first_name,
                last_name,
            } => {
                commands::users::update(&client, UserId::new(id), email, first_name, last_name)
                    .await?;
            }
            UserAction::Delete { id } => {
                commands::users::delete(&client, UserId::new(id)).await?;
            }
            UserAction::ToggleStaff { id } => {
                commands::users::toggle_staff(&client, UserId::new(id)).await?;
            }
            UserAction::ToggleActive { id } => {
                commands::users::toggle_active(&client, UserId::new(id)).await?;
            }
        },
        Commands::Config { action } => match action {
            ConfigAction::List {
                category,
                search,
                grouped,
            } => commands::config::list(&client, category, search, grouped).await?,
            ConfigAction::Get { key } => commands::config::get(&client, &key).await?,
            ConfigAction::Set { key, value } => {
                commands::config::set(&client, &key, value).await?;
            }
            ConfigAction::Delete { key } => commands::config::delete(&client, &key).await?,
            ConfigAction::BulkSet { pairs } => {
                commands::config::bulk_set(&client, &pairs).await?;
            }
            ConfigAction::Reset { category } => {
                commands::config::reset(&client, category).await?;
            }
            ConfigAction::Choices => commands::config::choices(&client).await?,
        },
        Commands::Site { action } => match action {
            SiteAction::Info => commands::site::info(&client).await?,
            SiteAction::Configurations => commands::site::configurations(&client).await?,
            SiteAction::Schedule { days, seed } => commands::site::schedule(days, seed).await?,
        },
    }
    Ok(())
}
