//! Marketplace CLI - Admin tables, storefront home page, and registration.
//!
//! # Usage
//!
//! ```bash
//! # List tenants (page 1, 10 per page)
//! mp-cli tenants list
//!
//! # Filter payouts by status
//! mp-cli payouts list --status pending
//!
//! # Render the storefront home page
//! mp-cli home
//!
//! # Register an account (password from MP_REGISTER_PASSWORD)
//! mp-cli register -e jane@example.com -n "Jane Doe"
//! ```
//!
//! # Commands
//!
//! - `<resource> list|show|delete` - Admin tables per resource
//! - `tenants toggle-status|users|ai-config` - Tenant management
//! - `inventories sync-order` - Deduct stock for an order
//! - `home` - Storefront home page
//! - `register` - Create a storefront account

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::str::FromStr;

use clap::{Args, Parser, Subcommand};
use marketplace_client::{ClientConfig, ListParams, MarketplaceClient};
use marketplace_core::{
    BlogCategoryId, ColorId, CouponId, InventoryId, MailboxId, OrderId, PayoutId, PayoutStatus,
    ShippingId, SizeId, TenantId, WarehouseId,
};
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod home;
mod pages;

use commands::CliError;
use commands::admin::{self, Listing, Record};

#[derive(Parser)]
#[command(name = "mp-cli")]
#[command(author, version, about = "Marketplace CLI tools")]
struct Cli {
    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage tenants
    Tenants {
        #[command(subcommand)]
        action: TenantAction,
    },
    /// Browse warehouses
    Warehouses {
        #[command(subcommand)]
        action: ReadAction<WarehouseId>,
    },
    /// Browse categories
    Categories {
        #[command(subcommand)]
        action: ListAction,
    },
    /// Manage colors
    Colors {
        #[command(subcommand)]
        action: ResourceAction<ColorId>,
    },
    /// Manage sizes
    Sizes {
        #[command(subcommand)]
        action: ResourceAction<SizeId>,
    },
    /// Manage coupons
    Coupons {
        #[command(subcommand)]
        action: RecordAction<CouponId>,
    },
    /// Manage payouts
    Payouts {
        #[command(subcommand)]
        action: PayoutAction,
    },
    /// Manage shipping rates
    Shippings {
        #[command(subcommand)]
        action: ResourceAction<ShippingId>,
    },
    /// Manage inventory
    Inventories {
        #[command(subcommand)]
        action: InventoryAction,
    },
    /// Manage support mailboxes
    #[command(name = "support-mailbox")]
    SupportMailbox {
        #[command(subcommand)]
        action: ResourceAction<MailboxId>,
    },
    /// Manage blog categories
    BlogCategories {
        #[command(subcommand)]
        action: BlogAction,
    },
    /// Render the storefront home page
    Home,
    /// Register a storefront account
    Register {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Display name
        #[arg(short, long)]
        name: Option<String>,
    },
}

#[derive(Args)]
struct ListArgs {
    /// 1-based page number
    #[arg(long, default_value_t = marketplace_client::DEFAULT_PAGE)]
    page: u32,

    /// Page size
    #[arg(long, default_value_t = marketplace_client::DEFAULT_LIMIT)]
    limit: u32,

    /// Free-text search
    #[arg(long, default_value = "")]
    search: String,
}

impl From<ListArgs> for ListParams {
    fn from(args: ListArgs) -> Self {
        Self::default()
            .page(args.page)
            .limit(args.limit)
            .search(args.search)
    }
}

#[derive(Subcommand)]
enum ListAction {
    /// List records
    List(ListArgs),
}

#[derive(Subcommand)]
enum ReadAction<Id>
where
    Id: FromStr + Clone + Send + Sync + 'static,
    <Id as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    /// List records
    List(ListArgs),
    /// Show one record
    Show { id: Id },
}

#[derive(Subcommand)]
enum ResourceAction<Id>
where
    Id: FromStr + Clone + Send + Sync + 'static,
    <Id as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    /// List records
    List(ListArgs),
    /// Show one record
    Show { id: Id },
    /// Delete one record
    Delete { id: Id },
}

#[derive(Subcommand)]
enum RecordAction<Id>
where
    Id: FromStr + Clone + Send + Sync + 'static,
    <Id as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    /// Show one record
    Show { id: Id },
    /// Delete one record
    Delete { id: Id },
}

#[derive(Subcommand)]
enum TenantAction {
    /// List tenants
    List(ListArgs),
    /// Show one tenant
    Show { id: TenantId },
    /// Delete a tenant
    Delete { id: TenantId },
    /// Toggle a tenant between active and inactive
    ToggleStatus { id: TenantId },
    /// List a tenant's users and roles
    Users { tenant_id: TenantId },
    /// Show a tenant's AI assistant configuration
    AiConfig { id: TenantId },
}

#[derive(Subcommand)]
enum PayoutAction {
    /// List payouts
    List {
        #[command(flatten)]
        list: ListArgs,

        /// Only payouts in this status
        #[arg(long)]
        status: Option<PayoutStatus>,
    },
    /// Show one payout
    Show { id: PayoutId },
    /// Delete a payout
    Delete { id: PayoutId },
}

#[derive(Subcommand)]
enum InventoryAction {
    /// List inventory
    List {
        #[command(flatten)]
        list: ListArgs,

        /// Only inventory held in this warehouse
        #[arg(long)]
        warehouse: Option<WarehouseId>,
    },
    /// Show one inventory row
    Show { id: InventoryId },
    /// Delete an inventory row
    Delete { id: InventoryId },
    /// Deduct stock for an order's lines
    SyncOrder { order_id: OrderId },
}

#[derive(Subcommand)]
enum BlogAction {
    /// List blog categories
    List {
        /// Free-text search
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one blog category
    Show { id: BlogCategoryId },
    /// Delete a blog category
    Delete { id: BlogCategoryId },
}

/// Initialize Sentry error tracking when `SENTRY_DSN` is set.
fn init_sentry() -> Option<sentry::ClientInitGuard> {
    let dsn = std::env::var("SENTRY_DSN").ok().filter(|d| !d.is_empty())?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: std::env::var("SENTRY_ENVIRONMENT")
                .ok()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR => sentry_tracing::EventFilter::Event,
        tracing::Level::WARN | tracing::Level::INFO => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

fn init_tracing(json: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "mp_cli=info,marketplace_client=info".into());

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(sentry_tracing::layer().event_filter(sentry_event_filter));

    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let _sentry_guard = init_sentry();

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

#[allow(clippy::print_stdout)]
async fn run(cli: Cli) -> Result<(), CliError> {
    let config = ClientConfig::from_env()?;
    let client = MarketplaceClient::new(&config)?;

    let output = match cli.command {
        Commands::Tenants { action } => match action {
            TenantAction::List(args) => {
                admin::list(&client, Listing::Tenants, &args.into()).await?
            }
            TenantAction::Show { id } => admin::show(&client, Record::Tenant(id)).await?,
            TenantAction::Delete { id } => {
                admin::delete(&client, Record::Tenant(id)).await?;
                return Ok(());
            }
            TenantAction::ToggleStatus { id } => admin::toggle_tenant_status(&client, id).await?,
            TenantAction::Users { tenant_id } => admin::tenant_users(&client, tenant_id).await?,
            TenantAction::AiConfig { id } => admin::tenant_ai_config(&client, id).await?,
        },
        Commands::Warehouses { action } => match action {
            ReadAction::List(args) => {
                admin::list(&client, Listing::Warehouses, &args.into()).await?
            }
            ReadAction::Show { id } => admin::show(&client, Record::Warehouse(id)).await?,
        },
        Commands::Categories {
            action: ListAction::List(args),
        } => admin::list(&client, Listing::Categories, &args.into()).await?,
        Commands::Colors { action } => {
            resource(&client, action, Listing::Colors, Record::Color).await?
        }
        Commands::Sizes { action } => {
            resource(&client, action, Listing::Sizes, Record::Size).await?
        }
        Commands::Shippings { action } => {
            resource(&client, action, Listing::Shippings, Record::Shipping).await?
        }
        Commands::SupportMailbox { action } => {
            resource(&client, action, Listing::SupportMailbox, Record::SupportMailbox).await?
        }
        Commands::Coupons { action } => match action {
            RecordAction::Show { id } => admin::show(&client, Record::Coupon(id)).await?,
            RecordAction::Delete { id } => {
                admin::delete(&client, Record::Coupon(id)).await?;
                return Ok(());
            }
        },
        Commands::Payouts { action } => match action {
            PayoutAction::List { list, status } => {
                admin::list(&client, Listing::Payouts(status), &list.into()).await?
            }
            PayoutAction::Show { id } => admin::show(&client, Record::Payout(id)).await?,
            PayoutAction::Delete { id } => {
                admin::delete(&client, Record::Payout(id)).await?;
                return Ok(());
            }
        },
        Commands::Inventories { action } => match action {
            InventoryAction::List { list, warehouse } => {
                admin::list(&client, Listing::Inventories(warehouse), &list.into()).await?
            }
            InventoryAction::Show { id } => admin::show(&client, Record::Inventory(id)).await?,
            InventoryAction::Delete { id } => {
                admin::delete(&client, Record::Inventory(id)).await?;
                return Ok(());
            }
            InventoryAction::SyncOrder { order_id } => admin::sync_order(&client, order_id).await?,
        },
        Commands::BlogCategories { action } => match action {
            BlogAction::List { search } => admin::blog_categories(&client, search.as_deref()).await?,
            BlogAction::Show { id } => admin::show(&client, Record::BlogCategory(id)).await?,
            BlogAction::Delete { id } => {
                admin::delete(&client, Record::BlogCategory(id)).await?;
                return Ok(());
            }
        },
        Commands::Home => home::render(&home::load(&client).await),
        Commands::Register { email, name } => {
            commands::register::register(&client, &email, name).await?;
            return Ok(());
        }
    };

    print!("{output}");
    Ok(())
}

/// Dispatch the list/show/delete trio shared by several resources.
async fn resource<Id>(
    client: &MarketplaceClient,
    action: ResourceAction<Id>,
    listing: Listing,
    record: impl Fn(Id) -> Record,
) -> Result<String, CliError>
where
    Id: FromStr + Clone + Send + Sync + 'static,
    <Id as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    match action {
        ResourceAction::List(args) => admin::list(client, listing, &args.into()).await,
        ResourceAction::Show { id } => admin::show(client, record(id)).await,
        ResourceAction::Delete { id } => {
            admin::delete(client, record(id)).await?;
            Ok(String::new())
        }
    }
}
