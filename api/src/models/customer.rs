use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::quote::Quote;

/// A registered storefront customer, as listed in the admin archive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub quote_count: u32,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// Case-insensitive match against name, email, and company, used by the
    /// admin archive's search box.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.email.to_lowercase().contains(&term)
            || self
                .company
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(&term))
    }
}

/// The only field the admin panel ever writes back on a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerUpdate {
    pub balance: f64,
}

/// Response of `GET /api/admin/customers/{id}/quotes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerQuotes {
    pub quotes: Vec<Quote>,
}

/// How a staff member changes a customer balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceAction {
    Add,
    Subtract,
    Set,
}

impl BalanceAction {
    pub fn label(self) -> &'static str {
        match self {
            BalanceAction::Add => "Add",
            BalanceAction::Subtract => "Subtract",
            BalanceAction::Set => "Set",
        }
    }

    /// Resulting balance, or `None` when the operation would go negative.
    /// A negative `amount` is rejected outright.
    pub fn apply(self, current: f64, amount: f64) -> Option<f64> {
        if !amount.is_finite() || amount < 0.0 {
            return None;
        }
        let next = match self {
            BalanceAction::Add => current + amount,
            BalanceAction::Subtract => current - amount,
            BalanceAction::Set => amount,
        };
        (next >= 0.0).then_some(next)
    }
}

/// Audit line recorded after every balance change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceEntry {
    pub customer_id: String,
    pub customer_name: String,
    pub action: BalanceAction,
    pub amount: f64,
    pub old_balance: f64,
    pub new_balance: f64,
    #[serde(default)]
    pub note: Option<String>,
}

/// What customer login/register hand back; persisted as the storefront session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSession {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerRegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerLoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_add_and_set() {
        assert_eq!(BalanceAction::Add.apply(100.0, 25.5), Some(125.5));
        assert_eq!(BalanceAction::Set.apply(100.0, 40.0), Some(40.0));
    }

    #[test]
    fn test_balance_subtract_refuses_negative_result() {
        assert_eq!(BalanceAction::Subtract.apply(50.0, 20.0), Some(30.0));
        assert_eq!(BalanceAction::Subtract.apply(50.0, 50.0), Some(0.0));
        assert_eq!(BalanceAction::Subtract.apply(50.0, 50.01), None);
    }

    #[test]
    fn test_balance_rejects_negative_amount() {
        assert_eq!(BalanceAction::Add.apply(10.0, -1.0), None);
        assert_eq!(BalanceAction::Set.apply(10.0, f64::NAN), None);
    }

    #[test]
    fn test_customer_search_matches_company() {
        let customer: Customer = serde_json::from_value(serde_json::json!({
            "id": "c1",
            "name": "Jane Doe",
            "email": "jane@volta.test",
            "company": "Volta Machining",
            "created_at": "2026-01-01T00:00:00Z"
        }))
        .unwrap();
        assert!(customer.matches("volta"));
        assert!(customer.matches("JANE"));
        assert!(!customer.matches("acme"));
    }
}
