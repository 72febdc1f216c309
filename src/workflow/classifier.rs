//! Keyword classifier mapping a description to a [`ScenarioCategory`].
//!
//! Categories are checked in the order of [`CATEGORY_KEYWORDS`] and the first
//! one with a keyword hit wins. This order is part of the public contract: a
//! description mentioning both a purchase and a support ticket is `Ecommerce`.

use crate::model::ScenarioCategory;

/// Ordered category rules. Earlier entries take priority.
pub const CATEGORY_KEYWORDS: &[(ScenarioCategory, &[&str])] = &[
    (
        ScenarioCategory::Ecommerce,
        &["e-commerce", "ecommerce", "shop", "cart", "checkout", "purchase", "buy", "product", "order", "payment", "store"],
    ),
    (
        ScenarioCategory::Auth,
        &["login", "log in", "sign in", "signup", "sign up", "register", "password", "authentication", "oauth", "2fa"],
    ),
    (ScenarioCategory::Booking, &["book", "reservation", "reserve", "appointment", "schedule", "calendar"]),
    (
        ScenarioCategory::Support,
        &["support", "ticket", "helpdesk", "help desk", "customer service", "complaint", "issue"],
    ),
    (ScenarioCategory::Content, &["blog", "article", "post", "content", "publish", "cms", "media"]),
    (ScenarioCategory::Workflow, &["approval", "approve", "workflow", "onboarding", "review", "process"]),
    (ScenarioCategory::Data, &["data", "etl", "import", "export", "report", "analytics", "pipeline", "sync"]),
    (ScenarioCategory::Notification, &["notify", "notification", "alert", "email", "sms", "reminder"]),
];

/// Classify a description by case-insensitive substring match.
pub fn classify(description: &str) -> ScenarioCategory {
    let text = description.to_lowercase();

    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|k| text.contains(k)) {
            return *category;
        }
    }

    ScenarioCategory::General
}
