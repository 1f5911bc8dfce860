//! Application layer for Wisen.
//!
//! Session flag, admin editing workflow and public view derivation, tied
//! together by the [`Site`] session context.

pub mod auth;
pub mod description;
pub mod editor;
pub mod route;
pub mod site;
pub mod views;

pub use auth::SessionFlagStore;
pub use description::DescriptionService;
pub use route::Route;
pub use site::Site;
