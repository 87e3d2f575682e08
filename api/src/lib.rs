//! # API crate — typed REST client for the QuoteDesk backend
//!
//! Every network operation the storefront and the admin panel perform goes
//! through this crate. The backend is an external service; this crate only
//! mirrors its REST surface as async functions and serde DTOs.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Backend base URL resolution (build-time env, same-origin fallback) |
//! | [`error`] | [`ApiError`] — transport, decode, and non-2xx status errors |
//! | [`http`] | [`ApiClient`] — thin `reqwest` wrapper with optional Basic auth |
//! | [`models`] | DTOs for every entity the backend returns |
//! | [`admin`] | Admin login, password management, admin users, visitor log |
//! | [`catalog`] | Categories, products, brands, file upload |
//! | [`quotes`] | Quote submission and the admin quote workflow |
//! | [`customers`] | Customer accounts, balances, balance audit log |
//! | [`content`] | Campaigns, FAQs, contact messages, site settings, visit tracking |
//! | [`fleet`] | Vehicle fleet CRUD |

pub mod config;
pub mod error;
pub mod http;
pub mod models;

pub mod admin;
pub mod catalog;
pub mod content;
pub mod customers;
pub mod fleet;
pub mod quotes;

pub use config::ApiConfig;
pub use error::ApiError;
pub use http::ApiClient;
