//! Admin pages: a title and one plain-text table per resource.

use std::fmt::Write as _;

use marketplace_core::{
    BlogCategory, Category, Color, Coupon, Inventory, Paginated, Payout, Shipping, Size,
    SupportMailbox, Tenant, TenantUser, Warehouse,
};

/// An entity that can be rendered as one table row.
pub trait TableRow {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

fn opt(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

impl TableRow for Tenant {
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Domain", "Email", "Status"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            opt(self.domain.as_deref()),
            opt(self.email.as_deref()),
            self.status.as_str().to_string(),
        ]
    }
}

impl TableRow for Warehouse {
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Code", "City", "Active"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            opt(self.code.as_deref()),
            opt(self.city.as_deref()),
            if self.is_active { "yes" } else { "no" }.to_string(),
        ]
    }
}

impl TableRow for Category {
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Slug", "Parent", "Subcategories"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            opt(self.slug.as_deref()),
            self.parent_id
                .map_or_else(|| "-".to_string(), |id| id.to_string()),
            (self.subtree_len() - 1).to_string(),
        ]
    }
}

impl TableRow for Color {
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Code"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            opt(self.code.as_deref()),
        ]
    }
}

impl TableRow for Size {
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Description"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            opt(self.description.as_deref()),
        ]
    }
}

impl TableRow for Coupon {
    const HEADERS: &'static [&'static str] = &["ID", "Code", "Value", "Used", "Active"];

    fn cells(&self) -> Vec<String> {
        let limit = self
            .usage_limit
            .map_or_else(|| "∞".to_string(), |limit| limit.to_string());
        vec![
            self.id.to_string(),
            self.code.clone(),
            self.value.to_string(),
            format!("{}/{limit}", self.used_count),
            if self.is_active { "yes" } else { "no" }.to_string(),
        ]
    }
}

impl TableRow for Payout {
    const HEADERS: &'static [&'static str] = &["ID", "Receiver", "Amount", "Status", "Reference"];

    fn cells(&self) -> Vec<String> {
        let receiver = match &self.receiver_id {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        let amount = match &self.currency {
            Some(currency) => format!("{} {currency}", self.amount),
            None => self.amount.to_string(),
        };
        vec![
            self.id.to_string(),
            receiver,
            amount,
            self.status.as_str().to_string(),
            opt(self.reference.as_deref()),
        ]
    }
}

impl TableRow for Shipping {
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Region", "Rate", "Days"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            opt(self.region.as_deref()),
            self.rate.to_string(),
            self.estimated_days
                .map_or_else(|| "-".to_string(), |days| days.to_string()),
        ]
    }
}

impl TableRow for Inventory {
    const HEADERS: &'static [&'static str] =
        &["ID", "Warehouse", "Product", "SKU", "Available", "Low stock"];

    fn cells(&self) -> Vec<String> {
        let warehouse = self
            .warehouse
            .as_ref()
            .map_or_else(|| self.warehouse_id.to_string(), |w| w.name.clone());
        vec![
            self.id.to_string(),
            warehouse,
            self.product_id.to_string(),
            opt(self.sku.as_deref()),
            self.available().to_string(),
            if self.is_low_stock() { "yes" } else { "" }.to_string(),
        ]
    }
}

impl TableRow for SupportMailbox {
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Email", "Status"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.email.clone(),
            self.status.as_str().to_string(),
        ]
    }
}

impl TableRow for BlogCategory {
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Slug", "Description"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            opt(self.slug.as_deref()),
            opt(self.description.as_deref()),
        ]
    }
}

impl TableRow for TenantUser {
    const HEADERS: &'static [&'static str] = &["User", "Email", "Name", "Roles"];

    fn cells(&self) -> Vec<String> {
        let roles: Vec<String> = self
            .roles
            .iter()
            .map(|role| {
                role.role_name
                    .clone()
                    .unwrap_or_else(|| role.role_id.to_string())
            })
            .collect();
        vec![
            self.id.clone(),
            self.email.clone(),
            opt(self.name.as_deref()),
            roles.join(", "),
        ]
    }
}

/// Render a title and a table of `rows`.
pub fn render<T: TableRow>(title: &str, rows: &[T]) -> String {
    let body: Vec<Vec<String>> = rows.iter().map(TableRow::cells).collect();

    let mut widths: Vec<usize> = T::HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in &body {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));

    if body.is_empty() {
        out.push_str("(no records)\n");
        return out;
    }

    let headers: Vec<String> = T::HEADERS.iter().map(ToString::to_string).collect();
    push_row(&mut out, &headers, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);
    for row in &body {
        push_row(&mut out, row, &widths);
    }
    out
}

/// Render a paginated list with a page footer.
pub fn render_page<T: TableRow>(title: &str, page: &Paginated<T>) -> String {
    let mut out = render(title, &page.data);
    let _ = writeln!(
        out,
        "\nPage {} of {} ({} total)",
        page.page,
        page.page_count.max(1),
        page.total
    );
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    let _ = writeln!(out, "{}", line.join("  ").trim_end());
}
