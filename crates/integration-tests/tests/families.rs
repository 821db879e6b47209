//! Behavior shared by every resource family: list defaults, unset IDs, and
//! how detail responses are unwrapped.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use httpmock::{Mock, prelude::*};
use marketplace_client::ListParams;
use marketplace_core::{
    BlogCategoryId, ColorId, CouponId, InventoryId, MailboxId, PayoutId, ShippingId, SizeId,
    TenantId, WarehouseId,
};
use marketplace_integration_tests::{
    TestContext, blog_category, color, coupon, envelope, inventory, mailbox, page, payout,
    shipping, size, tenant, warehouse,
};
use serde_json::{Value, json};

/// Every paginated list endpoint.
const LIST_PATHS: [&str; 9] = [
    "/tenants",
    "/warehouses",
    "/categories",
    "/colors",
    "/sizes",
    "/payouts",
    "/shippings",
    "/inventories",
    "/support-mailbox",
];

fn detail_mock<'a>(server: &'a MockServer, path: &str, data: Value) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(path);
        then.status(200).json_body(envelope(data));
    })
}

// ============================================================================
// Lists
// ============================================================================

#[tokio::test]
async fn test_every_list_defaults_to_first_page_of_ten() {
    let ctx = TestContext::new();
    let mocks: Vec<Mock<'_>> = LIST_PATHS
        .iter()
        .map(|path| {
            ctx.server.mock(|when, then| {
                when.method(GET)
                    .path(*path)
                    .query_param("page", "1")
                    .query_param("limit", "10")
                    .query_param_exists("search");
                then.status(200).json_body(page(vec![], 1, 0));
            })
        })
        .collect();

    let params = ListParams::default();
    let client = &ctx.client;
    client.tenants().list(&params).await.unwrap();
    client.warehouses().list(&params).await.unwrap();
    client.categories().list(&params).await.unwrap();
    client.colors().list(&params).await.unwrap();
    client.sizes().list(&params).await.unwrap();
    client.payouts().list(&params, None).await.unwrap();
    client.shippings().list(&params).await.unwrap();
    client.inventories().list(&params, None).await.unwrap();
    client.support_mailboxes().list(&params).await.unwrap();

    for (path, mock) in LIST_PATHS.iter().zip(&mocks) {
        assert_eq!(mock.calls(), 1, "{path} was not called with default params");
    }
}

#[tokio::test]
async fn test_every_list_is_cached_per_params() {
    let ctx = TestContext::new();
    let mocks: Vec<Mock<'_>> = LIST_PATHS
        .iter()
        .map(|path| {
            ctx.server.mock(|when, then| {
                when.method(GET).path(*path);
                then.status(200).json_body(page(vec![], 1, 0));
            })
        })
        .collect();

    let params = ListParams::default().search("x");
    let client = &ctx.client;
    for _ in 0..2 {
        client.tenants().list(&params).await.unwrap();
        client.warehouses().list(&params).await.unwrap();
        client.categories().list(&params).await.unwrap();
        client.colors().list(&params).await.unwrap();
        client.sizes().list(&params).await.unwrap();
        client.payouts().list(&params, None).await.unwrap();
        client.shippings().list(&params).await.unwrap();
        client.inventories().list(&params, None).await.unwrap();
        client.support_mailboxes().list(&params).await.unwrap();
    }

    for (path, mock) in LIST_PATHS.iter().zip(&mocks) {
        assert_eq!(mock.calls(), 1, "{path} was fetched twice");
    }
}

// ============================================================================
// Details
// ============================================================================

#[tokio::test]
async fn test_unset_ids_never_reach_the_server() {
    let ctx = TestContext::new();
    let any = ctx.server.mock(|_when, then| {
        then.status(500);
    });
    let client = &ctx.client;

    assert!(client.tenants().get(TenantId::new(0)).await.unwrap().is_none());
    assert!(client.tenants().ai_config(None::<TenantId>).await.unwrap().is_none());
    assert!(client.warehouses().get(WarehouseId::new(0)).await.unwrap().is_none());
    assert!(client.warehouses().get(None::<WarehouseId>).await.unwrap().is_none());
    assert!(client.colors().get(ColorId::new(0)).await.unwrap().is_none());
    assert!(client.sizes().get(SizeId::new(0)).await.unwrap().is_none());
    assert!(client.coupons().get(CouponId::new(0)).await.unwrap().is_none());
    assert!(client.payouts().get(PayoutId::new(0)).await.unwrap().is_none());
    assert!(client.shippings().get(ShippingId::new(0)).await.unwrap().is_none());
    assert!(client.inventories().get(InventoryId::new(0)).await.unwrap().is_none());
    assert!(
        client
            .support_mailboxes()
            .get(MailboxId::new(0))
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        client
            .blog_categories()
            .get(BlogCategoryId::new(0))
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        client
            .user_tenant_roles()
            .tenant_users(TenantId::new(0))
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        client
            .user_tenant_roles()
            .get(Some(""), TenantId::new(3))
            .await
            .unwrap()
            .is_none()
    );

    assert_eq!(any.calls(), 0);
}

#[tokio::test]
async fn test_details_resolve_to_envelope_data() {
    let ctx = TestContext::new();
    let server = &ctx.server;
    let mocks = [
        detail_mock(server, "/tenants/1", tenant(1, "Acme")),
        detail_mock(server, "/warehouses/2", warehouse(2, "North")),
        detail_mock(server, "/colors/3", color(3, "Teal", "#008080")),
        detail_mock(server, "/sizes/4", size(4, "XL")),
        detail_mock(server, "/coupons/5", coupon(5, "SPRING")),
        detail_mock(server, "/payouts/6", payout(6, "80.00", "pending")),
        detail_mock(server, "/inventories/7", inventory(7, 2, 40)),
        detail_mock(server, "/support-mailbox/8", mailbox(8, "Returns")),
        detail_mock(server, "/blog-categories/9", blog_category(9, "News")),
    ];
    let client = &ctx.client;

    let tenant = client.tenants().get(TenantId::new(1)).await.unwrap().unwrap();
    let warehouse = client.warehouses().get(WarehouseId::new(2)).await.unwrap().unwrap();
    let color = client.colors().get(ColorId::new(3)).await.unwrap().unwrap();
    let size = client.sizes().get(SizeId::new(4)).await.unwrap().unwrap();
    let coupon = client.coupons().get(CouponId::new(5)).await.unwrap().unwrap();
    let payout = client.payouts().get(PayoutId::new(6)).await.unwrap().unwrap();
    let inventory = client.inventories().get(InventoryId::new(7)).await.unwrap().unwrap();
    let mailbox = client
        .support_mailboxes()
        .get(MailboxId::new(8))
        .await
        .unwrap()
        .unwrap();
    let blog = client
        .blog_categories()
        .get(BlogCategoryId::new(9))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(tenant.name, "Acme");
    assert_eq!(warehouse.name, "North");
    assert_eq!(color.code.as_deref(), Some("#008080"));
    assert_eq!(size.name, "XL");
    assert_eq!(coupon.code, "SPRING");
    assert_eq!(payout.id, PayoutId::new(6));
    assert_eq!(inventory.available(), 40);
    assert_eq!(mailbox.name, "Returns");
    assert_eq!(blog.name, "News");
    for mock in &mocks {
        mock.assert_calls(1);
    }
}

#[tokio::test]
async fn test_shipping_detail_keeps_whole_envelope() {
    let ctx = TestContext::new();
    ctx.server.mock(|when, then| {
        when.method(GET).path("/shippings/3");
        then.status(200).json_body(json!({
            "success": true,
            "message": "Shipping rate found",
            "data": shipping(3, "Express", "12.50")
        }));
    });

    let found = ctx
        .client
        .shippings()
        .get(ShippingId::new(3))
        .await
        .unwrap()
        .unwrap();

    assert!(found.success);
    assert_eq!(found.message, "Shipping rate found");
    assert_eq!(found.data.name, "Express");
}
