use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// A time-boxed promotional banner shown to storefront visitors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub title: String,
    pub description: String,
    pub button_label: String,
    pub button_url: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub active: bool,
}

/// Where a campaign sits relative to its schedule. Computed client-side for
/// the admin list; the popup itself trusts the backend's active-campaign
/// endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignState {
    Disabled,
    Scheduled,
    Running,
    Expired,
}

impl CampaignState {
    pub fn label(self) -> &'static str {
        match self {
            CampaignState::Disabled => "Disabled",
            CampaignState::Scheduled => "Scheduled",
            CampaignState::Running => "Running",
            CampaignState::Expired => "Expired",
        }
    }
}

impl Campaign {
    pub fn state(&self, now: DateTime<Utc>) -> CampaignState {
        if !self.active {
            CampaignState::Disabled
        } else if now < self.starts_at {
            CampaignState::Scheduled
        } else if now > self.ends_at {
            CampaignState::Expired
        } else {
            CampaignState::Running
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignInput {
    pub title: String,
    pub description: String,
    pub button_label: String,
    pub button_url: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub order: u32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqInput {
    pub question: String,
    pub answer: String,
    pub order: u32,
    pub is_active: bool,
}

impl Default for FaqInput {
    fn default() -> Self {
        Self {
            question: String::new(),
            answer: String::new(),
            order: 0,
            is_active: true,
        }
    }
}

/// Lifecycle of an inbound contact-form message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    New,
    Read,
    Replied,
}

impl MessageStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageStatus::New => "new",
            MessageStatus::Read => "read",
            MessageStatus::Replied => "replied",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MessageStatus::New => "New",
            MessageStatus::Read => "Read",
            MessageStatus::Replied => "Replied",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub status: MessageStatus,
    pub created_at: DateTime<Utc>,
}

/// Payload of the public contact form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

/// Site-wide copy and company identity, edited wholesale in the admin panel.
/// Everything is optional; the backend returns whatever has been configured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub company_name: Option<String>,
    pub company_address: Option<String>,
    pub company_phone: Option<String>,
    pub company_email: Option<String>,
    pub company_website: Option<String>,
    pub tax_number: Option<String>,
    pub logo_url: Option<String>,
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub about_title: Option<String>,
    pub about_text: Option<String>,
    pub terms_and_conditions: Option<String>,
    pub bank_info: Option<String>,
    pub contact_form_success_message: Option<String>,
}

/// One tracked page view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visitor {
    pub id: String,
    pub page: String,
    pub ip: String,
    pub country: String,
    pub city: String,
    pub browser: String,
    pub os: String,
    /// "Desktop", "Mobile", or "Tablet"; the backend derives it from the
    /// user agent.
    pub device: String,
    pub visited_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitRequest {
    pub page: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn campaign(active: bool) -> Campaign {
        Campaign {
            id: "c1".into(),
            title: "Spring stock-up".into(),
            description: "Volume pricing on filters".into(),
            button_label: "Browse".into(),
            button_url: "/products".into(),
            starts_at: Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap(),
            ends_at: Utc.with_ymd_and_hms(2026, 3, 31, 23, 59, 59).unwrap(),
            active,
        }
    }

    #[test]
    fn test_campaign_state_over_schedule() {
        let c = campaign(true);
        let before = Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap();
        let during = Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap();

        assert_eq!(c.state(before), CampaignState::Scheduled);
        assert_eq!(c.state(during), CampaignState::Running);
        assert_eq!(c.state(after), CampaignState::Expired);
    }

    #[test]
    fn test_disabled_campaign_never_runs() {
        let c = campaign(false);
        let during = Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap();
        assert_eq!(c.state(during), CampaignState::Disabled);
    }

    #[test]
    fn test_message_status_round_trip() {
        let parsed: MessageStatus = serde_json::from_str("\"replied\"").unwrap();
        assert_eq!(parsed, MessageStatus::Replied);
        assert_eq!(serde_json::to_string(&MessageStatus::New).unwrap(), "\"new\"");
    }
}
