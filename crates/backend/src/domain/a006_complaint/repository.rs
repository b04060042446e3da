use chrono::{DateTime, Duration, Utc};
use contracts::domain::a006_complaint::aggregate::{
    Attachment, Complaint, ComplaintMessage, ComplaintPriority, ComplaintStatus, TimelineEvent,
};
use contracts::domain::common::utc_date;
use once_cell::sync::Lazy;

use crate::shared::data::mock_store::MockStore;

static STORE: Lazy<MockStore<Complaint>> = Lazy::new(|| MockStore::new(fixtures()));

pub fn store() -> &'static MockStore<Complaint> {
    &STORE
}

fn message(author: &str, from_staff: bool, body: &str, at: DateTime<Utc>) -> ComplaintMessage {
    ComplaintMessage {
        author: author.to_string(),
        from_staff,
        body: body.to_string(),
        sent_at: at,
    }
}

fn event(label: &str, at: DateTime<Utc>) -> TimelineEvent {
    TimelineEvent {
        label: label.to_string(),
        at,
    }
}

fn attachment(file_name: &str, size_kb: u32) -> Attachment {
    Attachment {
        file_name: file_name.to_string(),
        size_kb,
    }
}

fn fixtures() -> Vec<Complaint> {
    use ComplaintPriority::*;
    use ComplaintStatus::*;

    let c1 = utc_date(2024, 3, 20);
    let c2 = utc_date(2024, 4, 18);
    let c3 = utc_date(2024, 5, 2);
    let c4 = utc_date(2024, 5, 20);
    let c5 = utc_date(2024, 6, 4);
    let c6 = utc_date(2024, 6, 12);
    let h = Duration::hours;

    vec![
        Complaint {
            id: "CMP-001".to_string(),
            subject: "Headphones arrived with a cracked headband".to_string(),
            customer_name: "Ethan Lopez".to_string(),
            customer_email: "ethan.lopez@example.com".to_string(),
            order_id: Some("ORD-1006".to_string()),
            priority: High,
            status: Resolved,
            description: "The left hinge of the headband is cracked straight out of the box.".to_string(),
            messages: vec![
                message("Ethan Lopez", false, "The headband is cracked, photos attached.", c1),
                message("Support · Mason", true, "Sorry about that! A replacement is on its way and we refunded the first unit.", c1 + h(5)),
                message("Ethan Lopez", false, "Replacement received, all good now.", c1 + h(96)),
            ],
            timeline: vec![
                event("Complaint opened", c1),
                event("Assigned to Mason Kim", c1 + h(2)),
                event("Refund issued (PAY-013)", c1 + h(30)),
                event("Marked as resolved", c1 + h(97)),
            ],
            attachments: vec![attachment("headband_left.jpg", 842), attachment("box_label.jpg", 311)],
            created_at: c1,
        },
        Complaint {
            id: "CMP-002".to_string(),
            subject: "Desk lamp flickers at low brightness".to_string(),
            customer_name: "Mia Johnson".to_string(),
            customer_email: "mia.johnson@example.com".to_string(),
            order_id: Some("ORD-1008".to_string()),
            priority: Medium,
            status: InProgress,
            description: "Below 30% brightness the lamp flickers noticeably.".to_string(),
            messages: vec![
                message("Mia Johnson", false, "Both lamps flicker when dimmed.", c2),
                message("Support · Olivia", true, "Could you send a short video? We are checking the batch.", c2 + h(20)),
            ],
            timeline: vec![event("Complaint opened", c2), event("Escalated to vendor", c2 + h(26))],
            attachments: vec![attachment("flicker.mp4", 5120)],
            created_at: c2,
        },
        Complaint {
            id: "CMP-003".to_string(),
            subject: "Order not delivered".to_string(),
            customer_name: "Daniel Brooks".to_string(),
            customer_email: "d.brooks@example.net".to_string(),
            order_id: Some("ORD-1010".to_string()),
            priority: Urgent,
            status: Open,
            description: "Tracking has not updated for a week and the watch never arrived.".to_string(),
            messages: vec![message("Daniel Brooks", false, "Where is my order?", c3)],
            timeline: vec![event("Complaint opened", c3)],
            attachments: Vec::new(),
            created_at: c3,
        },
        Complaint {
            id: "CMP-004".to_string(),
            subject: "Charged twice for one order".to_string(),
            customer_name: "Sophia Nguyen".to_string(),
            customer_email: "sophia.nguyen@example.com".to_string(),
            order_id: Some("ORD-1011".to_string()),
            priority: High,
            status: Open,
            description: "My PayPal account shows two identical charges.".to_string(),
            messages: Vec::new(),
            timeline: vec![event("Complaint opened", c4)],
            attachments: vec![attachment("paypal_statement.pdf", 96)],
            created_at: c4,
        },
        Complaint {
            id: "CMP-005".to_string(),
            subject: "Website checkout is slow".to_string(),
            customer_name: "Isabella Chen".to_string(),
            customer_email: "isabella.chen@example.com".to_string(),
            order_id: None,
            priority: Low,
            status: Closed,
            description: "Checkout took more than a minute to load on mobile.".to_string(),
            messages: vec![message("Support · Olivia", true, "Thanks for the report, this was fixed in the last release.", c5 + h(8))],
            timeline: vec![event("Complaint opened", c5), event("Closed", c5 + h(8))],
            attachments: Vec::new(),
            created_at: c5,
        },
        Complaint {
            id: "CMP-006".to_string(),
            subject: "Wrong size of resistance bands".to_string(),
            customer_name: "Liam Carter".to_string(),
            customer_email: "liam.carter@example.com".to_string(),
            order_id: Some("ORD-1014".to_string()),
            priority: Medium,
            status: InProgress,
            description: "Received the light set instead of the heavy one.".to_string(),
            messages: vec![
                message("Liam Carter", false, "Got the wrong set.", c6),
                message("Support · Mason", true, "An exchange label has been sent to your email.", c6 + h(3)),
            ],
            timeline: vec![event("Complaint opened", c6), event("Exchange label sent", c6 + h(3))],
            attachments: Vec::new(),
            created_at: c6,
        },
    ]
}
