//! In-memory core of a multi-site CMS admin dashboard.
//!
//! Each entity type (pages, posts, team, services, testimonials, submissions,
//! users, sites) lives in a versioned [`store::Collection`]; list screens
//! derive their rows through the pure projection in [`project`] and edit
//! through the tri-state buffer in [`form`]. [`screen::Screen`] wires the
//! three together the way every management screen behaves: open a form,
//! commit or cancel, toggle, reorder, delete, with a toast per outcome.

pub mod auth;
pub mod dashboard;
pub mod error;
pub mod form;
pub mod models;
pub mod notify;
pub mod project;
pub mod screen;
pub mod seed;
pub mod settings;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::AdminError;
pub use form::{FormBinding, FormMode};
pub use project::Criteria;
pub use screen::Screen;
pub use store::Collection;
