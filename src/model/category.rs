use serde::{Deserialize, Serialize};

/// Scenario category a description is classified into.
///
/// `General` is the fallback for descriptions no keyword matches.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum::AsRefStr, strum::EnumString, strum::EnumIter, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ScenarioCategory {
    Ecommerce,
    Auth,
    Booking,
    Support,
    Content,
    Workflow,
    Data,
    Notification,
    #[default]
    General,
}
