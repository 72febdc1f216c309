//! Curated relationship table.
//!
//! Only pairs listed here produce a relationship. A pair is looked up in both
//! orders, and direction and cardinality come from the matching entry.

use crate::model::{
    Cardinality::{self, *},
    EntityName::{self, *},
    Relationship,
};

/// Relationship table entry.
#[derive(Debug, Clone, Copy)]
pub struct RelationshipRule {
    pub from: EntityName,
    pub to: EntityName,
    pub cardinality: Cardinality,
    pub description: &'static str,
}

impl RelationshipRule {
    const fn new(
        from: EntityName,
        to: EntityName,
        cardinality: Cardinality,
        description: &'static str,
    ) -> Self {
        Self {
            from,
            to,
            cardinality,
            description,
        }
    }

    pub fn to_relationship(&self) -> Relationship {
        Relationship {
            from: self.from,
            to: self.to,
            cardinality: self.cardinality,
            description: self.description.to_string(),
        }
    }
}

pub const RELATIONSHIP_TABLE: &[RelationshipRule] = &[
    RelationshipRule::new(User, Order, OneToMany, "A user places many orders"),
    RelationshipRule::new(User, Cart, OneToOne, "A user owns one active cart"),
    RelationshipRule::new(User, Payment, OneToMany, "A user makes many payments"),
    RelationshipRule::new(User, Ticket, OneToMany, "A user opens many support tickets"),
    RelationshipRule::new(User, Booking, OneToMany, "A user makes many bookings"),
    RelationshipRule::new(User, Content, OneToMany, "A user authors many content items"),
    RelationshipRule::new(User, Notification, OneToMany, "A user receives many notifications"),
    RelationshipRule::new(User, Session, OneToMany, "A user has many sessions"),
    RelationshipRule::new(User, Task, OneToMany, "A user is assigned many tasks"),
    RelationshipRule::new(User, Record, OneToMany, "A user owns many records"),
    RelationshipRule::new(Cart, Product, ManyToMany, "A cart holds many products and a product sits in many carts"),
    RelationshipRule::new(Order, Product, ManyToMany, "An order contains many products and a product appears in many orders"),
    RelationshipRule::new(Order, Payment, OneToMany, "An order is settled by one or more payments"),
    RelationshipRule::new(Cart, Order, OneToOne, "A checked out cart becomes one order"),
    RelationshipRule::new(Order, Notification, OneToMany, "An order triggers status notifications"),
    RelationshipRule::new(Booking, Payment, OneToOne, "A booking is secured by one deposit payment"),
    RelationshipRule::new(Booking, Notification, OneToMany, "A booking triggers confirmations and reminders"),
    RelationshipRule::new(Ticket, Notification, OneToMany, "A ticket triggers status updates"),
    RelationshipRule::new(Ticket, Task, OneToMany, "A ticket is worked through follow-up tasks"),
    RelationshipRule::new(Content, Task, OneToMany, "A content item goes through review tasks"),
    RelationshipRule::new(Task, Notification, OneToMany, "A task triggers assignment and outcome notifications"),
];

/// Relationship for an unordered entity pair, if the table has one.
///
/// `(a, b)` is tried first, then `(b, a)`.
pub fn find_relationship(
    a: EntityName,
    b: EntityName,
) -> Option<Relationship> {
    lookup(a, b).or_else(|| lookup(b, a)).map(RelationshipRule::to_relationship)
}

fn lookup(
    from: EntityName,
    to: EntityName,
) -> Option<&'static RelationshipRule> {
    RELATIONSHIP_TABLE.iter().find(|rule| rule.from == from && rule.to == to)
}
