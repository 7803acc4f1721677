//! Demo consent backend
//!
//! Two illustrative endpoints backing the consent form component:
//! `GET /api/consent-config` serves the branding/regions/permissions
//! block a frontend would render from, and `POST /api/authorize` accepts
//! the submitted form. No real credential validation happens here.

pub mod error;
pub mod handlers;
pub mod settings;
