use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::Record;
use crate::shared::badge::{Badge, BadgeValue};
use crate::shared::detail::TabSpec;
use crate::shared::validation::{FieldErrors, ValidationRules, EMAIL_PATTERN};

crate::badge_enum! {
    pub enum ComplaintStatus {
        Open => ("open", "Open", Danger),
        InProgress => ("in_progress", "In progress", Warning),
        Resolved => ("resolved", "Resolved", Success),
        Closed => ("closed", "Closed", Neutral),
    }
}

crate::badge_enum! {
    pub enum ComplaintPriority {
        Low => ("low", "Low", Neutral),
        Medium => ("medium", "Medium", Info),
        High => ("high", "High", Warning),
        Urgent => ("urgent", "Urgent", Danger),
    }
}

static DETAIL_TABS: [TabSpec; 3] = [
    TabSpec::new("conversation", "Conversation"),
    TabSpec::new("timeline", "Timeline"),
    TabSpec::new("attachments", "Attachments"),
];

/// Сообщение в переписке по жалобе
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplaintMessage {
    pub author: String,
    /// Сообщение от сотрудника поддержки, а не от покупателя
    pub from_staff: bool,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub label: String,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub file_name: String,
    pub size_kb: u32,
}

/// Жалоба покупателя
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complaint {
    pub id: String,
    pub subject: String,
    pub customer_name: String,
    pub customer_email: String,
    pub order_id: Option<String>,
    pub priority: ComplaintPriority,
    pub status: ComplaintStatus,
    pub description: String,
    #[serde(default)]
    pub messages: Vec<ComplaintMessage>,
    #[serde(default)]
    pub timeline: Vec<TimelineEvent>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    pub created_at: DateTime<Utc>,
}

impl Complaint {
    /// Жалоба ещё требует работы
    pub fn is_open(&self) -> bool {
        matches!(self.status, ComplaintStatus::Open | ComplaintStatus::InProgress)
    }

    pub fn last_activity(&self) -> DateTime<Utc> {
        self.messages
            .iter()
            .map(|m| m.sent_at)
            .chain(self.timeline.iter().map(|e| e.at))
            .fold(self.created_at, std::cmp::max)
    }
}

impl Record for Complaint {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.subject
    }

    fn status_key(&self) -> &'static str {
        self.status.key()
    }

    fn status_badge(&self) -> Badge {
        self.status.badge()
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.id.as_str(),
            self.subject.as_str(),
            self.customer_name.as_str(),
            self.customer_email.as_str(),
        ];
        if let Some(order_id) = &self.order_id {
            fields.push(order_id.as_str());
        }
        fields
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors
            .string("subject", "Subject", &self.subject, ValidationRules::required().with_max_length(150))
            .string("customer_name", "Customer", &self.customer_name, ValidationRules::required())
            .string(
                "customer_email",
                "Customer email",
                &self.customer_email,
                ValidationRules::required().with_pattern(EMAIL_PATTERN, "Email address is not valid"),
            )
            .string("description", "Description", &self.description, ValidationRules::required());
        errors.into_result()
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "complaints"
    }

    fn element_name() -> &'static str {
        "Complaint"
    }

    fn list_name() -> &'static str {
        "Complaints"
    }

    fn id_prefix() -> &'static str {
        "CMP"
    }

    fn status_options() -> Vec<(&'static str, &'static str)> {
        ComplaintStatus::options()
    }

    fn detail_tabs() -> &'static [TabSpec] {
        &DETAIL_TABS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::utc_date;

    #[test]
    fn test_last_activity_and_open() {
        let complaint = Complaint {
            id: "CMP-001".into(),
            subject: "Damaged parcel".into(),
            customer_name: "Bob".into(),
            customer_email: "bob@example.com".into(),
            order_id: Some("ORD-1002".into()),
            priority: ComplaintPriority::High,
            status: ComplaintStatus::InProgress,
            description: "Box arrived crushed".into(),
            messages: vec![ComplaintMessage {
                author: "Bob".into(),
                from_staff: false,
                body: "See photos".into(),
                sent_at: utc_date(2024, 6, 3),
            }],
            timeline: vec![TimelineEvent {
                label: "Escalated".into(),
                at: utc_date(2024, 6, 5),
            }],
            attachments: vec![],
            created_at: utc_date(2024, 6, 1),
        };
        assert!(complaint.is_open());
        assert_eq!(complaint.last_activity(), utc_date(2024, 6, 5));
        assert!(complaint.search_fields().contains(&"ORD-1002"));
        assert!(complaint.validate().is_ok());
    }
}
