//! Marketing site: landing, about, contacts, pricing, login.

mod layout;
mod login;
mod pages;
mod pricing;

pub use layout::SiteLayout;
pub use login::LoginView;
pub use pages::{AboutView, ContactsView, HomeView};
pub use pricing::PricingView;
