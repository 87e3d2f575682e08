use api::models::{CampaignState, DueStatus, MessageStatus, QuoteStatus};
use dioxus::prelude::*;

/// Color family for a [`Badge`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tone {
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Tone::Neutral => "badge-neutral",
            Tone::Info => "badge-info",
            Tone::Success => "badge-success",
            Tone::Warning => "badge-warning",
            Tone::Danger => "badge-danger",
        }
    }
}

#[component]
pub fn Badge(tone: Tone, label: String) -> Element {
    rsx! {
        span { class: "badge {tone.class()}", "{label}" }
    }
}

pub fn quote_status_tone(status: QuoteStatus) -> Tone {
    match status {
        QuoteStatus::Pending => Tone::Warning,
        QuoteStatus::Reviewing => Tone::Info,
        QuoteStatus::Priced => Tone::Info,
        QuoteStatus::Approved => Tone::Success,
        QuoteStatus::Rejected => Tone::Danger,
    }
}

pub fn message_status_tone(status: MessageStatus) -> Tone {
    match status {
        MessageStatus::New => Tone::Warning,
        MessageStatus::Read => Tone::Neutral,
        MessageStatus::Replied => Tone::Success,
    }
}

pub fn campaign_state_tone(state: CampaignState) -> Tone {
    match state {
        CampaignState::Running => Tone::Success,
        CampaignState::Scheduled => Tone::Info,
        CampaignState::Expired => Tone::Neutral,
        CampaignState::Disabled => Tone::Danger,
    }
}

pub fn due_status_tone(status: DueStatus) -> Tone {
    match status {
        DueStatus::Overdue { .. } => Tone::Danger,
        DueStatus::DueSoon { .. } => Tone::Warning,
        DueStatus::Ok { .. } => Tone::Success,
    }
}
