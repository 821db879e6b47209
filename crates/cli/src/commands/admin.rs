//! Admin table commands.
//!
//! # Usage
//!
//! ```bash
//! # List the second page of tenants matching "acme"
//! mp-cli tenants list --page 2 --limit 5 --search acme
//!
//! # Show one record, delete another
//! mp-cli colors show 7
//! mp-cli coupons delete 42
//!
//! # Deduct stock for a placed order
//! mp-cli inventories sync-order 1001
//! ```
//!
//! # Environment Variables
//!
//! - `NEXT_PUBLIC_API_URL` - API root
//! - `NEXT_PUBLIC_TENANT_ID` - Tenant scope (defaults to `1`)

use marketplace_client::{ListParams, MarketplaceClient};
use marketplace_core::{
    BlogCategoryId, ColorId, CouponId, InventoryId, MailboxId, OrderId, PayoutId, PayoutStatus,
    ShippingId, SizeId, TenantId, WarehouseId,
};

use super::CliError;
use crate::pages::{self, TableRow};

/// A list-backed admin page.
#[derive(Debug, Clone, Copy)]
pub enum Listing {
    Tenants,
    Warehouses,
    Categories,
    Colors,
    Sizes,
    Payouts(Option<PayoutStatus>),
    Shippings,
    Inventories(Option<WarehouseId>),
    SupportMailbox,
}

/// A single record addressed by ID.
#[derive(Debug, Clone, Copy)]
pub enum Record {
    Tenant(TenantId),
    Warehouse(WarehouseId),
    Color(ColorId),
    Size(SizeId),
    Coupon(CouponId),
    Payout(PayoutId),
    Shipping(ShippingId),
    Inventory(InventoryId),
    SupportMailbox(MailboxId),
    BlogCategory(BlogCategoryId),
}

impl Record {
    const fn resource(self) -> &'static str {
        match self {
            Self::Tenant(_) => "Tenant",
            Self::Warehouse(_) => "Warehouse",
            Self::Color(_) => "Color",
            Self::Size(_) => "Size",
            Self::Coupon(_) => "Coupon",
            Self::Payout(_) => "Payout",
            Self::Shipping(_) => "Shipping rate",
            Self::Inventory(_) => "Inventory",
            Self::SupportMailbox(_) => "Support mailbox",
            Self::BlogCategory(_) => "Blog category",
        }
    }

    const fn id(self) -> i64 {
        match self {
            Self::Tenant(id) => id.as_i64(),
            Self::Warehouse(id) => id.as_i64(),
            Self::Color(id) => id.as_i64(),
            Self::Size(id) => id.as_i64(),
            Self::Coupon(id) => id.as_i64(),
            Self::Payout(id) => id.as_i64(),
            Self::Shipping(id) => id.as_i64(),
            Self::Inventory(id) => id.as_i64(),
            Self::SupportMailbox(id) => id.as_i64(),
            Self::BlogCategory(id) => id.as_i64(),
        }
    }
}

/// Render the admin page for `listing`.
pub async fn list(
    client: &MarketplaceClient,
    listing: Listing,
    params: &ListParams,
) -> Result<String, CliError> {
    let out = match listing {
        Listing::Tenants => pages::render_page("Tenants", &client.tenants().list(params).await?),
        Listing::Warehouses => {
            pages::render_page("Warehouses", &client.warehouses().list(params).await?)
        }
        Listing::Categories => {
            pages::render("Categories", &client.categories().list(params).await?)
        }
        Listing::Colors => pages::render_page("Colors", &client.colors().list(params).await?),
        Listing::Sizes => pages::render("Sizes", &client.sizes().list(params).await?),
        Listing::Payouts(status) => {
            pages::render_page("Payouts", &client.payouts().list(params, status).await?)
        }
        Listing::Shippings => {
            pages::render_page("Shipping Rates", &client.shippings().list(params).await?)
        }
        Listing::Inventories(warehouse_id) => pages::render_page(
            "Inventory",
            &client.inventories().list(params, warehouse_id).await?,
        ),
        Listing::SupportMailbox => pages::render(
            "Support Mailboxes",
            &client.support_mailboxes().list(params).await?,
        ),
    };
    Ok(out)
}

/// Render the blog category page.
pub async fn blog_categories(
    client: &MarketplaceClient,
    search: Option<&str>,
) -> Result<String, CliError> {
    let categories = client.blog_categories().all(search).await?;
    Ok(pages::render("Blog Categories", &categories))
}

fn single<T: TableRow>(record: Record, found: Option<T>) -> Result<String, CliError> {
    found
        .map(|row| pages::render(record.resource(), &[row]))
        .ok_or(CliError::NotFound {
            resource: record.resource(),
            id: record.id(),
        })
}

/// Render one record as a single-row table.
pub async fn show(client: &MarketplaceClient, record: Record) -> Result<String, CliError> {
    match record {
        Record::Tenant(id) => single(record, client.tenants().get(id).await?),
        Record::Warehouse(id) => single(record, client.warehouses().get(id).await?),
        Record::Color(id) => single(record, client.colors().get(id).await?),
        Record::Size(id) => single(record, client.sizes().get(id).await?),
        Record::Coupon(id) => single(record, client.coupons().get(id).await?),
        Record::Payout(id) => single(record, client.payouts().get(id).await?),
        Record::Shipping(id) => {
            let envelope = client.shippings().get(id).await?;
            if let Some(envelope) = &envelope
                && !envelope.message.is_empty()
            {
                tracing::info!("{}", envelope.message);
            }
            single(record, envelope.map(|e| e.data))
        }
        Record::Inventory(id) => single(record, client.inventories().get(id).await?),
        Record::SupportMailbox(id) => single(record, client.support_mailboxes().get(id).await?),
        Record::BlogCategory(id) => single(record, client.blog_categories().get(id).await?),
    }
}

/// Delete one record.
pub async fn delete(client: &MarketplaceClient, record: Record) -> Result<(), CliError> {
    match record {
        Record::Tenant(id) => client.tenants().delete(id).await?,
        Record::Color(id) => client.colors().delete(id).await?,
        Record::Size(id) => client.sizes().delete(id).await?,
        Record::Coupon(id) => client.coupons().delete(id).await?,
        Record::Payout(id) => client.payouts().delete(id).await?,
        Record::Shipping(id) => client.shippings().delete(id).await?,
        Record::Inventory(id) => client.inventories().delete(id).await?,
        Record::SupportMailbox(id) => client.support_mailboxes().delete(id).await?,
        Record::BlogCategory(id) => client.blog_categories().delete(id).await?,
        Record::Warehouse(_) => {
            return Err(CliError::Unsupported {
                resource: record.resource(),
                action: "delete",
            });
        }
    }

    tracing::info!("{} {} deleted", record.resource(), record.id());
    Ok(())
}

/// Flip a tenant between active and inactive.
pub async fn toggle_tenant_status(
    client: &MarketplaceClient,
    id: TenantId,
) -> Result<String, CliError> {
    let tenant = client.tenants().toggle_status(id).await?;
    tracing::info!("Tenant {} is now {}", tenant.id, tenant.status.as_str());
    Ok(pages::render("Tenant", &[tenant]))
}

/// Render the users of one tenant with their roles.
pub async fn tenant_users(
    client: &MarketplaceClient,
    tenant_id: TenantId,
) -> Result<String, CliError> {
    let users = client
        .user_tenant_roles()
        .tenant_users(tenant_id)
        .await?
        .ok_or(CliError::NotFound {
            resource: "Tenant",
            id: tenant_id.as_i64(),
        })?;
    Ok(pages::render("Tenant Users", &users))
}

/// Apply an order's stock deductions and render the rows that changed.
pub async fn sync_order(client: &MarketplaceClient, order_id: OrderId) -> Result<String, CliError> {
    let updated = client.inventories().update_from_order(order_id).await?;
    tracing::info!("Order {order_id}: {} inventory rows updated", updated.len());
    Ok(pages::render("Updated Inventory", &updated))
}

/// Render a tenant's assistant configuration.
pub async fn tenant_ai_config(
    client: &MarketplaceClient,
    id: TenantId,
) -> Result<String, CliError> {
    let config = client
        .tenants()
        .ai_config(id)
        .await?
        .ok_or(CliError::NotFound {
            resource: "Tenant",
            id: id.as_i64(),
        })?;

    let field = |value: Option<&str>| value.unwrap_or("-").to_string();
    Ok(format!(
        "AI Config for tenant {}\n\
         enabled:     {}\n\
         provider:    {}\n\
         model:       {}\n\
         temperature: {}\n",
        config.tenant_id,
        config.enabled,
        field(config.provider.as_deref()),
        field(config.model.as_deref()),
        config
            .temperature
            .map_or_else(|| "-".to_string(), |t| t.to_string()),
    ))
}
