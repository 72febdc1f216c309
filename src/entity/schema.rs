//! Static schemas for every [`EntityName`].

use std::collections::HashMap;

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::model::{DataType, EntityName, EntitySchema, PropertySchema};

fn schema(
    properties: Vec<(&str, PropertySchema)>,
    required: &[&str],
) -> EntitySchema {
    EntitySchema {
        schema_type: DataType::Object,
        properties: properties.into_iter().map(|(k, v)| (k.to_string(), v)).collect::<IndexMap<_, _>>(),
        required: required.iter().map(|r| r.to_string()).collect(),
    }
}

fn id(description: &str) -> PropertySchema {
    PropertySchema::new(DataType::String, description).format("uuid")
}

fn timestamp(description: &str) -> PropertySchema {
    PropertySchema::new(DataType::String, description).format("date-time")
}

fn user() -> EntitySchema {
    schema(
        vec![
            ("id", id("Unique user identifier")),
            ("email", PropertySchema::new(DataType::String, "Email address used to sign in").format("email")),
            ("name", PropertySchema::new(DataType::String, "Display name")),
            ("passwordHash", PropertySchema::new(DataType::String, "Hashed password")),
            ("role", PropertySchema::new(DataType::String, "Access role").allowed(&["customer", "agent", "admin"]).default_value("customer")),
            ("createdAt", timestamp("Account creation time")),
        ],
        &["id", "email", "name"],
    )
}

fn product() -> EntitySchema {
    schema(
        vec![
            ("id", id("Unique product identifier")),
            ("name", PropertySchema::new(DataType::String, "Product name")),
            ("description", PropertySchema::new(DataType::String, "Product description")),
            ("price", PropertySchema::new(DataType::Number, "Unit price").minimum(0.0)),
            ("stock", PropertySchema::new(DataType::Integer, "Units in stock").minimum(0.0).default_value(0)),
            ("category", PropertySchema::new(DataType::String, "Catalog category")),
        ],
        &["id", "name", "price"],
    )
}

fn order() -> EntitySchema {
    schema(
        vec![
            ("id", id("Unique order identifier")),
            ("userId", id("Customer who placed the order")),
            ("items", PropertySchema::new(DataType::Array, "Ordered products with quantities")),
            ("total", PropertySchema::new(DataType::Number, "Order total").minimum(0.0)),
            (
                "status",
                PropertySchema::new(DataType::String, "Fulfillment status")
                    .allowed(&["pending", "paid", "shipped", "delivered", "cancelled"])
                    .default_value("pending"),
            ),
            ("shippingAddress", PropertySchema::new(DataType::Object, "Delivery address")),
            ("createdAt", timestamp("Order placement time")),
        ],
        &["id", "userId", "items", "total", "status"],
    )
}

fn cart() -> EntitySchema {
    schema(
        vec![
            ("id", id("Unique cart identifier")),
            ("userId", id("Owner of the cart")),
            ("items", PropertySchema::new(DataType::Array, "Products in the cart with quantities")),
            ("subtotal", PropertySchema::new(DataType::Number, "Sum of item prices").minimum(0.0).default_value(0)),
            ("updatedAt", timestamp("Last modification time")),
        ],
        &["id", "items"],
    )
}

fn payment() -> EntitySchema {
    schema(
        vec![
            ("id", id("Unique payment identifier")),
            ("amount", PropertySchema::new(DataType::Number, "Charged amount").minimum(0.0)),
            ("currency", PropertySchema::new(DataType::String, "ISO 4217 currency code").default_value("USD")),
            ("method", PropertySchema::new(DataType::String, "Payment method").allowed(&["card", "paypal", "bank_transfer"])),
            (
                "status",
                PropertySchema::new(DataType::String, "Settlement status")
                    .allowed(&["pending", "completed", "failed", "refunded"])
                    .default_value("pending"),
            ),
            ("processedAt", timestamp("Settlement time")),
        ],
        &["id", "amount", "currency", "status"],
    )
}

fn ticket() -> EntitySchema {
    schema(
        vec![
            ("id", id("Unique ticket identifier")),
            ("subject", PropertySchema::new(DataType::String, "Short summary of the problem")),
            ("description", PropertySchema::new(DataType::String, "Full problem report")),
            ("priority", PropertySchema::new(DataType::String, "Urgency").allowed(&["low", "medium", "high", "urgent"]).default_value("medium")),
            (
                "status",
                PropertySchema::new(DataType::String, "Ticket status").allowed(&["open", "in_progress", "resolved", "closed"]).default_value("open"),
            ),
            ("assigneeId", id("Agent handling the ticket")),
            ("createdAt", timestamp("Ticket creation time")),
        ],
        &["id", "subject", "status"],
    )
}

fn booking() -> EntitySchema {
    schema(
        vec![
            ("id", id("Unique booking identifier")),
            ("userId", id("Customer who made the booking")),
            ("startTime", timestamp("Start of the reserved slot")),
            ("endTime", timestamp("End of the reserved slot")),
            ("guests", PropertySchema::new(DataType::Integer, "Number of guests").minimum(1.0).default_value(1)),
            (
                "status",
                PropertySchema::new(DataType::String, "Booking status").allowed(&["pending", "confirmed", "cancelled"]).default_value("pending"),
            ),
        ],
        &["id", "userId", "startTime", "status"],
    )
}

fn content() -> EntitySchema {
    schema(
        vec![
            ("id", id("Unique content identifier")),
            ("title", PropertySchema::new(DataType::String, "Headline")),
            ("body", PropertySchema::new(DataType::String, "Main text")),
            ("authorId", id("Author of the content")),
            (
                "status",
                PropertySchema::new(DataType::String, "Publication status").allowed(&["draft", "in_review", "published", "archived"]).default_value("draft"),
            ),
            ("publishedAt", timestamp("Publication time")),
        ],
        &["id", "title", "authorId", "status"],
    )
}

fn notification() -> EntitySchema {
    schema(
        vec![
            ("id", id("Unique notification identifier")),
            ("recipientId", id("User receiving the notification")),
            ("channel", PropertySchema::new(DataType::String, "Delivery channel").allowed(&["email", "sms", "push", "in_app"])),
            ("message", PropertySchema::new(DataType::String, "Rendered message")),
            ("read", PropertySchema::new(DataType::Boolean, "Whether the recipient has read it").default_value(false)),
            ("sentAt", timestamp("Delivery time")),
        ],
        &["id", "recipientId", "channel", "message"],
    )
}

fn session() -> EntitySchema {
    schema(
        vec![
            ("id", id("Unique session identifier")),
            ("userId", id("Authenticated user")),
            ("token", PropertySchema::new(DataType::String, "Opaque session token")),
            ("expiresAt", timestamp("Expiry time")),
            ("ipAddress", PropertySchema::new(DataType::String, "Client address").format("ipv4")),
        ],
        &["id", "userId", "token", "expiresAt"],
    )
}

fn task() -> EntitySchema {
    schema(
        vec![
            ("id", id("Unique task identifier")),
            ("title", PropertySchema::new(DataType::String, "Task title")),
            ("assigneeId", id("User responsible for the task")),
            (
                "status",
                PropertySchema::new(DataType::String, "Task status").allowed(&["todo", "in_progress", "approved", "rejected", "done"]).default_value("todo"),
            ),
            ("dueDate", PropertySchema::new(DataType::String, "Due date").format("date")),
        ],
        &["id", "title", "status"],
    )
}

fn record() -> EntitySchema {
    schema(
        vec![
            ("id", id("Unique record identifier")),
            ("type", PropertySchema::new(DataType::String, "Record type")),
            ("data", PropertySchema::new(DataType::Object, "Record payload")),
            ("createdAt", timestamp("Creation time")),
            ("updatedAt", timestamp("Last modification time")),
        ],
        &["id", "type", "data"],
    )
}

static SCHEMAS: Lazy<HashMap<EntityName, EntitySchema>> = Lazy::new(|| {
    HashMap::from([
        (EntityName::User, user()),
        (EntityName::Product, product()),
        (EntityName::Order, order()),
        (EntityName::Cart, cart()),
        (EntityName::Payment, payment()),
        (EntityName::Ticket, ticket()),
        (EntityName::Booking, booking()),
        (EntityName::Content, content()),
        (EntityName::Notification, notification()),
        (EntityName::Session, session()),
        (EntityName::Task, task()),
        (EntityName::Record, record()),
    ])
});

static RECORD_SCHEMA: Lazy<EntitySchema> = Lazy::new(record);

/// Schema of an entity. Entities missing from the table get the `Record` schema.
pub fn schema_for(entity: EntityName) -> &'static EntitySchema {
    SCHEMAS.get(&entity).unwrap_or_else(|| Lazy::force(&RECORD_SCHEMA))
}
