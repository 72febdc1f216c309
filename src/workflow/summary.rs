use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::model::ScenarioCategory;

const GENERAL_SUMMARY: &str = "This workflow follows a generic request lifecycle: input is collected and validated, \
the main logic runs, results are stored and presented, and interested parties are informed. \
Refine the description with domain terms to get a more specific workflow.";

static SUMMARIES: Lazy<HashMap<ScenarioCategory, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            ScenarioCategory::Ecommerce,
            "This e-commerce workflow takes a customer from browsing the catalog to a confirmed order. \
It checks inventory before checkout, charges the customer through a payment gateway, records the order \
and sends a confirmation. The data model centers on products, carts, orders and payments.",
        ),
        (
            ScenarioCategory::Auth,
            "This authentication workflow validates submitted credentials against stored accounts, \
issues a session for successful logins and records every attempt for auditing. \
Failed checks route back before a session is created.",
        ),
        (
            ScenarioCategory::Booking,
            "This booking workflow lets a customer pick a time slot, checks availability, takes a deposit \
and stores the confirmed reservation before sending a confirmation with calendar details.",
        ),
        (
            ScenarioCategory::Support,
            "This support workflow turns a customer report into a tracked ticket, categorizes and assigns it, \
and loops through investigation and escalation until the issue is resolved and the customer is notified.",
        ),
        (
            ScenarioCategory::Content,
            "This content workflow covers drafting, editorial review and publishing. \
Drafts that are not approved return to the author with comments before they go live.",
        ),
        (
            ScenarioCategory::Workflow,
            "This approval workflow routes a request through validation and a manager review. \
The outcome is stored and the requester is notified whether the request was approved or returned.",
        ),
        (
            ScenarioCategory::Data,
            "This data workflow imports records from an external source, validates and transforms them, \
loads them into storage and reports how many records were imported or rejected.",
        ),
        (
            ScenarioCategory::Notification,
            "This notification workflow reacts to a system event, respects the user's delivery preferences, \
composes and sends the message, and logs the delivery result.",
        ),
        (ScenarioCategory::General, GENERAL_SUMMARY),
    ])
});

/// Canned summary paragraph for a category.
pub fn summary_for(category: ScenarioCategory) -> &'static str {
    SUMMARIES.get(&category).copied().unwrap_or(GENERAL_SUMMARY)
}
