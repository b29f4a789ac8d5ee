//! Page-level components. Each takes an `on_navigate` handler instead of
//! linking to routes.

pub mod admin;
pub mod blog;
pub mod site;
