//! Support mailboxes: list shape and invalidation.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use httpmock::prelude::*;
use marketplace_client::ListParams;
use marketplace_core::{MailboxId, MailboxStatus, SupportMailboxInput};
use marketplace_integration_tests::{TestContext, envelope, mailbox, page};
use serde_json::json;

#[tokio::test]
async fn test_list_resolves_to_bare_items() {
    let ctx = TestContext::new();
    ctx.server.mock(|when, then| {
        when.method(GET).path("/support-mailbox");
        then.status(200).json_body(json!({
            "data": [mailbox(1, "Returns"), mailbox(2, "Billing")],
            "total": 2,
            "page": 1,
            "pageCount": 1
        }));
    });

    let mailboxes = ctx
        .client
        .support_mailboxes()
        .list(&ListParams::default())
        .await
        .unwrap();

    assert_eq!(mailboxes.len(), 2);
    assert_eq!(mailboxes[1].email, "billing@acme.test");
    assert_eq!(mailboxes[0].status, MailboxStatus::Active);
}

#[tokio::test]
async fn test_create_invalidates_list_but_not_detail() {
    let ctx = TestContext::new();
    let list = ctx.server.mock(|when, then| {
        when.method(GET).path("/support-mailbox");
        then.status(200).json_body(page(vec![mailbox(1, "Returns")], 1, 1));
    });
    let detail = ctx.server.mock(|when, then| {
        when.method(GET).path("/support-mailbox/1");
        then.status(200).json_body(envelope(mailbox(1, "Returns")));
    });
    let create = ctx.server.mock(|when, then| {
        when.method(POST).path("/support-mailbox").json_body(json!({
            "name": "Billing",
            "email": "billing@acme.test"
        }));
        then.status(201).json_body(envelope(mailbox(2, "Billing")));
    });

    let params = ListParams::default();
    let mailboxes = ctx.client.support_mailboxes();
    mailboxes.list(&params).await.unwrap();
    mailboxes.get(MailboxId::new(1)).await.unwrap();

    let input = SupportMailboxInput {
        name: "Billing".to_string(),
        email: "billing@acme.test".to_string(),
        description: None,
    };
    let created = mailboxes.create(&input).await.unwrap();

    mailboxes.list(&params).await.unwrap();
    mailboxes.get(MailboxId::new(1)).await.unwrap();

    assert_eq!(created.id, MailboxId::new(2));
    create.assert_calls(1);
    list.assert_calls(2);
    detail.assert_calls(1);
}

#[tokio::test]
async fn test_delete_leaves_list_cached() {
    let ctx = TestContext::new();
    let list = ctx.server.mock(|when, then| {
        when.method(GET).path("/support-mailbox");
        then.status(200).json_body(page(vec![mailbox(1, "Returns")], 1, 1));
    });
    let delete = ctx.server.mock(|when, then| {
        when.method(DELETE).path("/support-mailbox/1");
        then.status(200).json_body(envelope(json!(null)));
    });

    let params = ListParams::default();
    let mailboxes = ctx.client.support_mailboxes();
    mailboxes.list(&params).await.unwrap();
    mailboxes.delete(MailboxId::new(1)).await.unwrap();
    let after = mailboxes.list(&params).await.unwrap();

    delete.assert_calls(1);
    list.assert_calls(1);
    assert_eq!(after.len(), 1);
}
