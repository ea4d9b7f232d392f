//! Clap derive structures for the `shopdesk` CLI.
//!
//! Every subcommand, argument, and flag is declared here. Command handlers
//! live in `commands/` and receive the parsed args.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use shopdesk_core::BrandStatus;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// shopdesk: back-office client for a storefront admin API
#[derive(Debug, Parser)]
#[command(
    name = "shopdesk",
    version,
    about = "Manage storefront brands, products, and notifications from the terminal",
    long_about = "A CLI for a storefront admin API.\n\n\
        Lists are paginated windows; deletes and updates are confirmed\n\
        against the page that holds the item.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Backend profile to use
    #[arg(long, short = 'p', env = "SHOPDESK_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Backend base URL (overrides profile)
    #[arg(long, short = 'b', env = "SHOPDESK_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Bearer token (overrides profile)
    #[arg(long, env = "SHOPDESK_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "SHOPDESK_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept invalid TLS certificates
    #[arg(long, short = 'k', env = "SHOPDESK_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "SHOPDESK_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    JsonCompact,
    Yaml,
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

// ── Command Tree ─────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage brands
    #[command(alias = "b")]
    Brands(BrandsArgs),

    /// Manage products
    #[command(alias = "p")]
    Products(ProductsArgs),

    /// Read and send notifications
    #[command(alias = "n")]
    Notifications(NotificationsArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Shared ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Page to show (1-based)
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Items per page (overrides profile)
    #[arg(long)]
    pub page_size: Option<u32>,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Id of the item to delete
    pub id: u64,

    /// Page of the list that holds the item
    #[arg(long, default_value = "1")]
    pub page: u32,
}

// ── Brands ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct BrandsArgs {
    #[command(subcommand)]
    pub command: BrandsCommand,
}

#[derive(Debug, Subcommand)]
pub enum BrandsCommand {
    /// List one page of brands
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show a single brand
    Get {
        /// Brand id
        id: u64,
    },

    /// Create a brand
    Create {
        /// Brand name
        #[arg(long)]
        name: String,

        /// active | inactive
        #[arg(long, default_value = "active")]
        status: BrandStatus,

        /// Logo image file
        #[arg(long)]
        logo: Option<PathBuf>,
    },

    /// Edit a brand listed on the given page
    Update {
        /// Brand id
        id: u64,

        /// Page of the list that holds the brand
        #[arg(long, default_value = "1")]
        page: u32,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        status: Option<BrandStatus>,

        /// Replace the logo
        #[arg(long)]
        logo: Option<PathBuf>,
    },

    /// Delete a brand listed on the given page
    #[command(alias = "rm")]
    Delete(DeleteArgs),
}

// ── Products ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub command: ProductsCommand,
}

/// Product fields shared by create and update. All optional so update
/// can patch only what was given.
#[derive(Debug, Args)]
pub struct ProductFields {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub sku: Option<String>,

    #[arg(long)]
    pub price: Option<f64>,

    #[arg(long)]
    pub quantity: Option<u32>,

    /// Short description
    #[arg(long)]
    pub small_desc: Option<String>,

    /// Long description
    #[arg(long)]
    pub desc: Option<String>,

    /// Discount amount; an empty value or 0 clears it
    #[arg(long)]
    pub discount: Option<String>,

    #[arg(long)]
    pub start_discount: Option<String>,

    #[arg(long)]
    pub end_discount: Option<String>,

    #[arg(long)]
    pub brand_id: Option<u64>,

    #[arg(long)]
    pub category_id: Option<u64>,

    /// Image file to upload (repeatable)
    #[arg(long = "image", action = clap::ArgAction::Append)]
    pub images: Vec<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum ProductsCommand {
    /// List one page of products
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show a single product
    Get {
        /// Product id
        id: u64,
    },

    /// Create a product (--name, --sku, --price, --brand-id and
    /// --category-id are required)
    Create(ProductFields),

    /// Edit a product listed on the given page
    Update {
        /// Product id
        id: u64,

        /// Page of the list that holds the product
        #[arg(long, default_value = "1")]
        page: u32,

        #[command(flatten)]
        fields: ProductFields,
    },

    /// Delete a product listed on the given page
    #[command(alias = "rm")]
    Delete(DeleteArgs),
}

// ── Notifications ────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct NotificationsArgs {
    #[command(subcommand)]
    pub command: NotificationsCommand,
}

#[derive(Debug, Subcommand)]
pub enum NotificationsCommand {
    /// Show the latest notifications
    Latest,

    /// Send a notification
    Send {
        /// Notification title
        #[arg(long)]
        title: String,

        /// Notification body
        #[arg(long)]
        body: String,
    },
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Interactive setup wizard
    Init,

    /// Show the resolved configuration
    Show,

    /// List profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name
        name: String,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
