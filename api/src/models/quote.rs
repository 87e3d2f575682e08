use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of a quote request.
///
/// `Pending` on submission; staff move it through review, attach pricing
/// (which lands it in `Priced`), and finally approve or reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    Pending,
    Reviewing,
    Priced,
    Approved,
    Rejected,
}

impl QuoteStatus {
    pub const ALL: [QuoteStatus; 5] = [
        QuoteStatus::Pending,
        QuoteStatus::Reviewing,
        QuoteStatus::Priced,
        QuoteStatus::Approved,
        QuoteStatus::Rejected,
    ];

    /// Wire value, also used for the `status_filter` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            QuoteStatus::Pending => "pending",
            QuoteStatus::Reviewing => "reviewing",
            QuoteStatus::Priced => "priced",
            QuoteStatus::Approved => "approved",
            QuoteStatus::Rejected => "rejected",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QuoteStatus::Pending => "Pending",
            QuoteStatus::Reviewing => "In review",
            QuoteStatus::Priced => "Priced",
            QuoteStatus::Approved => "Approved",
            QuoteStatus::Rejected => "Rejected",
        }
    }
}

/// One requested product line, as submitted by the customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteItem {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
}

/// One priced line, filled in by staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteLine {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub total_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub id: String,
    pub customer_name: String,
    #[serde(default)]
    pub company: Option<String>,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    pub items: Vec<QuoteItem>,
    #[serde(default)]
    pub pricing: Vec<QuoteLine>,
    #[serde(default)]
    pub file_url: Option<String>,
    pub status: QuoteStatus,
    #[serde(default)]
    pub admin_note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Quote {
    /// Sum of all priced lines, `None` until staff have entered pricing.
    pub fn priced_total(&self) -> Option<f64> {
        if self.pricing.is_empty() {
            None
        } else {
            Some(self.pricing.iter().map(|line| line.total_price).sum())
        }
    }
}

/// Payload of `POST /api/quotes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub customer_name: String,
    pub company: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub items: Vec<QuoteItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
}

/// Partial update for the admin quote workflow; unset fields are untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<QuoteStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing: Option<Vec<QuoteLine>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&QuoteStatus::Reviewing).unwrap(),
            "\"reviewing\""
        );
        let parsed: QuoteStatus = serde_json::from_str("\"approved\"").unwrap();
        assert_eq!(parsed, QuoteStatus::Approved);
    }

    #[test]
    fn test_priced_total() {
        let mut quote: Quote = serde_json::from_value(serde_json::json!({
            "id": "q1",
            "customer_name": "Acme",
            "email": "a@b.test",
            "items": [],
            "status": "pending",
            "created_at": "2026-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(quote.priced_total(), None);

        quote.pricing = vec![
            QuoteLine {
                product_id: "p1".into(),
                product_name: "Filter".into(),
                quantity: 10,
                unit_price: 2.5,
                total_price: 25.0,
            },
            QuoteLine {
                product_id: "p2".into(),
                product_name: "Pad".into(),
                quantity: 4,
                unit_price: 10.0,
                total_price: 40.0,
            },
        ];
        assert_eq!(quote.priced_total(), Some(65.0));
    }

    #[test]
    fn test_update_skips_unset_fields() {
        let update = QuoteUpdate {
            status: Some(QuoteStatus::Approved),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            "{\"status\":\"approved\"}"
        );
    }
}
