//! Back-office views.

mod balance;
mod brands;
mod campaigns;
mod categories;
mod customers;
mod dashboard;
mod faqs;
mod layout;
mod login;
mod messages;
mod products;
mod quote_detail;
mod quotes;
mod security;
mod settings;
mod users;
mod vehicles;
mod visitors;

pub use balance::AdminBalance;
pub use brands::AdminBrands;
pub use campaigns::AdminCampaigns;
pub use categories::AdminCategories;
pub use customers::AdminCustomers;
pub use dashboard::AdminDashboard;
pub use faqs::AdminFaqs;
pub use layout::{AdminHome, AdminLayout};
pub use login::AdminLogin;
pub use messages::AdminMessages;
pub use products::AdminProducts;
pub use quote_detail::AdminQuoteDetail;
pub use quotes::AdminQuotes;
pub use security::AdminSecurity;
pub use settings::AdminSettings;
pub use users::AdminUsers;
pub use vehicles::AdminVehicles;
pub use visitors::AdminVisitors;
