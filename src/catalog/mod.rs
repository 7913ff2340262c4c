//! Declarative configuration tables sampled by the generators.

pub mod finance;
pub mod menu;
pub mod staff;
pub mod templates;

pub use menu::{Category, MenuItem, Size};
pub use staff::{Location, Role, StaffMember, WorkPattern};
pub use templates::{RowKind, TemplateSpec};
