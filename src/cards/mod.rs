//! Card system: resources, card definitions, and registry.
//!
//! ## Key Types
//!
//! - `Resource` / `ResourceCategory`: tradable goods, compared by value
//! - `Card` / `CardKind`: buildable units and what they yield
//! - `Side` / `SideSet`: neighbor positions for commercial discounts
//! - `CardRegistry`: validated card lookup by name

pub mod definition;
pub mod registry;
pub mod resource;

pub use definition::{Card, CardKind, Side, SideSet};
pub use registry::CardRegistry;
pub use resource::{Resource, ResourceCategory, ResourceCounts};
