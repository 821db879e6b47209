//! Payout listing and user notifications.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use httpmock::prelude::*;
use marketplace_client::{ApiError, ListParams};
use marketplace_core::{PayoutInput, PayoutStatus, ReceiverType};
use marketplace_integration_tests::{Notice, TestContext, envelope, page, payout};
use rust_decimal::Decimal;
use serde_json::json;

fn input() -> PayoutInput {
    PayoutInput {
        receiver_type: ReceiverType::Vendor,
        receiver_id: json!(12),
        amount: Decimal::new(25_050, 2),
        currency: Some("USD".to_string()),
        status: None,
        method: Some("bank_transfer".to_string()),
        note: None,
    }
}

#[tokio::test]
async fn test_list_filters_by_status() {
    let ctx = TestContext::new();
    let pending = ctx.server.mock(|when, then| {
        when.method(GET)
            .path("/payouts")
            .query_param("status", "pending");
        then.status(200)
            .json_body(page(vec![payout(1, "250.50", "pending")], 1, 1));
    });

    let result = ctx
        .client
        .payouts()
        .list(&ListParams::default(), Some(PayoutStatus::Pending))
        .await
        .unwrap();

    pending.assert_calls(1);
    assert_eq!(result.data[0].amount, Decimal::new(25_050, 2));
    assert_eq!(result.data[0].status, PayoutStatus::Pending);
}

#[tokio::test]
async fn test_list_without_status_omits_filter() {
    let ctx = TestContext::new();
    let unfiltered = ctx.server.mock(|when, then| {
        when.method(GET)
            .path("/payouts")
            .query_param_missing("status");
        then.status(200).json_body(page(vec![], 1, 0));
    });

    ctx.client
        .payouts()
        .list(&ListParams::default(), None)
        .await
        .unwrap();

    unfiltered.assert_calls(1);
}

#[tokio::test]
async fn test_create_notifies_success() {
    let ctx = TestContext::new();
    let create = ctx.server.mock(|when, then| {
        when.method(POST).path("/payouts").json_body(json!({
            "receiverType": "vendor",
            "receiverId": 12,
            "amount": "250.50",
            "currency": "USD",
            "method": "bank_transfer"
        }));
        then.status(201)
            .json_body(envelope(payout(9, "250.50", "pending")));
    });

    let created = ctx.client.payouts().create(&input()).await.unwrap();

    create.assert_calls(1);
    assert_eq!(created.amount, Decimal::new(25_050, 2));
    assert_eq!(
        ctx.notifier.notices(),
        vec![Notice::Success("Payout created successfully".to_string())]
    );
}

#[tokio::test]
async fn test_create_failure_notifies_server_message() {
    let ctx = TestContext::new();
    ctx.server.mock(|when, then| {
        when.method(POST).path("/payouts");
        then.status(400)
            .json_body(json!({"statusCode": 400, "message": "Insufficient balance"}));
    });

    let err = ctx.client.payouts().create(&input()).await.unwrap_err();

    assert!(matches!(err, ApiError::Api { .. }));
    assert_eq!(
        ctx.notifier.notices(),
        vec![Notice::Error(
            "Failed to create payout: Insufficient balance".to_string()
        )]
    );
}

#[tokio::test]
async fn test_other_payout_mutations_are_silent() {
    let ctx = TestContext::new();
    ctx.server.mock(|when, then| {
        when.method(DELETE).path("/payouts/9");
        then.status(204);
    });

    ctx.client
        .payouts()
        .delete(marketplace_core::PayoutId::new(9))
        .await
        .unwrap();

    assert!(ctx.notifier.notices().is_empty());
}
