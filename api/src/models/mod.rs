//! DTOs mirroring the backend's REST entities.
//!
//! Everything here is owned by the backend; these types only describe what
//! crosses the wire. All of them derive serde both ways so forms can echo
//! fetched records back on update.

mod admin;
mod catalog;
mod content;
mod customer;
mod quote;
mod vehicle;

pub use admin::{AdminUser, AdminUserInput, ChangePasswordRequest, Credentials};
pub use catalog::{
    Brand, BrandInput, Category, CategoryInput, Product, ProductInput, UploadedFile,
};
pub use content::{
    Campaign, CampaignInput, CampaignState, ContactMessage, ContactRequest, Faq, FaqInput,
    MessageStatus, SiteSettings, VisitRequest, Visitor,
};
pub use customer::{
    BalanceAction, BalanceEntry, Customer, CustomerLoginRequest, CustomerQuotes,
    CustomerRegisterRequest, CustomerSession, CustomerUpdate, ForgotPasswordRequest,
    ResetPasswordRequest,
};
pub use quote::{Quote, QuoteItem, QuoteLine, QuoteRequest, QuoteStatus, QuoteUpdate};
pub use vehicle::{DueStatus, Vehicle, VehicleInput, DUE_SOON_DAYS};
