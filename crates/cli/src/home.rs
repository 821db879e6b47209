//! Storefront home page.
//!
//! Sections load concurrently and independently; a section whose data fails
//! to load renders a placeholder instead of failing the page. Output order is
//! always [`HomeSection::ORDER`].

use std::fmt::Write as _;

use marketplace_client::{ApiError, ListParams, MarketplaceClient};
use marketplace_core::{BlogCategory, Category, Tenant, TenantId};

/// Sections of the home page, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeSection {
    Banner,
    FlashDeals,
    Categories,
    ProductList,
    Blog,
}

impl HomeSection {
    pub const ORDER: [Self; 5] = [
        Self::Banner,
        Self::FlashDeals,
        Self::Categories,
        Self::ProductList,
        Self::Blog,
    ];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Banner => "Welcome",
            Self::FlashDeals => "Flash Deals",
            Self::Categories => "Shop by Category",
            Self::ProductList => "Products",
            Self::Blog => "From the Blog",
        }
    }
}

/// Everything the home page needs, fetched up front.
#[derive(Debug, Default)]
pub struct HomeData {
    pub tenant: Option<Tenant>,
    pub categories: Option<Vec<Category>>,
    pub blog: Option<Vec<BlogCategory>>,
}

/// Fetch all section data concurrently.
pub async fn load(client: &MarketplaceClient) -> HomeData {
    let tenant_id = client.http().tenant_id().parse::<TenantId>().ok();

    let tenants = client.tenants();
    let categories_api = client.categories();
    let blog_api = client.blog_categories();
    let category_params = ListParams::default().limit(20);

    let (tenant, categories, blog) = futures::join!(
        tenants.get(tenant_id),
        categories_api.list(&category_params),
        blog_api.all(None),
    );

    HomeData {
        tenant: section_data("banner", tenant).flatten(),
        categories: section_data("categories", categories),
        blog: section_data("blog", blog),
    }
}

fn section_data<T>(section: &str, result: Result<T, ApiError>) -> Option<T> {
    match result {
        Ok(data) => Some(data),
        Err(e) => {
            tracing::warn!(section, error = %e, "Home section failed to load");
            None
        }
    }
}

/// Render the page in fixed section order.
#[must_use]
pub fn render(data: &HomeData) -> String {
    let mut out = String::new();
    for section in HomeSection::ORDER {
        let title = section.title();
        let _ = writeln!(out, "{title}\n{}", "-".repeat(title.chars().count()));
        render_section(&mut out, section, data);
        out.push('\n');
    }
    out
}

fn render_section(out: &mut String, section: HomeSection, data: &HomeData) {
    match section {
        HomeSection::Banner => match &data.tenant {
            Some(tenant) => {
                let store = tenant.store.as_ref();
                let name = store.map_or(tenant.name.as_str(), |s| s.name.as_str());
                let _ = writeln!(out, "{name}");
                if let Some(description) = store.and_then(|s| s.description.as_deref()) {
                    let _ = writeln!(out, "{description}");
                }
            }
            None => out.push_str("Welcome to our store\n"),
        },
        HomeSection::FlashDeals => out.push_str("No flash deals right now.\n"),
        HomeSection::Categories => match &data.categories {
            Some(categories) if !categories.is_empty() => {
                for category in categories.iter().filter(|c| c.is_root()) {
                    let _ = writeln!(out, "* {}", category.name);
                }
            }
            Some(_) => out.push_str("No categories yet.\n"),
            None => out.push_str("Categories are unavailable.\n"),
        },
        HomeSection::ProductList => {
            let names: Vec<&str> = data
                .categories
                .iter()
                .flatten()
                .flat_map(|c| &c.products)
                .filter_map(|p| p.get("name").and_then(serde_json::Value::as_str))
                .collect();
            if names.is_empty() {
                out.push_str("No products to show.\n");
            }
            for name in names {
                let _ = writeln!(out, "* {name}");
            }
        }
        HomeSection::Blog => match &data.blog {
            Some(blog) if !blog.is_empty() => {
                for category in blog {
                    let _ = writeln!(out, "* {}", category.name);
                }
            }
            Some(_) => out.push_str("No posts yet.\n"),
            None => out.push_str("The blog is unavailable.\n"),
        },
    }
}
