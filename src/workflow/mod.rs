//! Classification and step generation.

pub mod classifier;
pub mod summary;
pub mod template;

pub use classifier::{CATEGORY_KEYWORDS, classify};
pub use summary::summary_for;
pub use template::{StepTemplate, TEMPLATES, generate_steps, template_for};
