//! Tenant scoping via the `x-tenant-id` header.

#![allow(clippy::unwrap_used)]

use httpmock::prelude::*;
use marketplace_client::{ListParams, TENANT_HEADER};
use marketplace_integration_tests::{TestContext, page, size};

#[tokio::test]
async fn test_default_tenant_is_one() {
    let ctx = TestContext::new();
    let mock = ctx.server.mock(|when, then| {
        when.method(GET).path("/sizes").header(TENANT_HEADER, "1");
        then.status(200).json_body(page(vec![size(1, "S")], 1, 1));
    });

    ctx.client
        .sizes()
        .list(&ListParams::default())
        .await
        .unwrap();

    mock.assert_calls(1);
}

#[tokio::test]
async fn test_configured_tenant_rides_on_every_request() {
    let ctx = TestContext::with_tenant("7");
    let list = ctx.server.mock(|when, then| {
        when.method(GET).path("/sizes").header(TENANT_HEADER, "7");
        then.status(200).json_body(page(vec![size(1, "S")], 1, 1));
    });
    let delete = ctx.server.mock(|when, then| {
        when.method(DELETE).path("/sizes/1").header(TENANT_HEADER, "7");
        then.status(204);
    });

    ctx.client
        .sizes()
        .list(&ListParams::default())
        .await
        .unwrap();
    ctx.client
        .sizes()
        .delete(marketplace_core::SizeId::new(1))
        .await
        .unwrap();

    list.assert_calls(1);
    delete.assert_calls(1);
}

#[tokio::test]
async fn test_wrong_tenant_does_not_match() {
    let ctx = TestContext::with_tenant("2");
    let mock = ctx.server.mock(|when, then| {
        when.method(GET).path("/sizes").header(TENANT_HEADER, "7");
        then.status(200).json_body(page(vec![], 1, 0));
    });

    let result = ctx.client.sizes().list(&ListParams::default()).await;

    assert!(result.is_err());
    assert_eq!(mock.calls(), 0);
}
