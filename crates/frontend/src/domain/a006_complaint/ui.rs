use crate::shared::data_view::{Cell, FormField, RecordView};
use crate::shared::date_utils::{format_date, format_datetime};
use contracts::domain::a006_complaint::aggregate::{Complaint, ComplaintMessage};
use contracts::domain::common::Record;
use contracts::shared::badge::BadgeValue;

fn message_line(message: &ComplaintMessage) -> String {
    let who = if message.from_staff { "staff" } else { "customer" };
    format!(
        "[{}] {} ({}): {}",
        format_datetime(&message.sent_at),
        message.author,
        who,
        message.body
    )
}

impl RecordView for Complaint {
    fn icon() -> &'static str {
        "alert-circle"
    }

    fn columns() -> &'static [&'static str] {
        &["ID", "Subject", "Customer", "Priority", "Status", "Last activity"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.id),
            Cell::text(&self.subject),
            Cell::text(&self.customer_name),
            Cell::Badge(self.priority.badge()),
            Cell::Badge(self.status_badge()),
            Cell::text(format_date(&self.last_activity())),
        ]
    }

    fn tab_fields(&self, tab: &str) -> Vec<(&'static str, Cell)> {
        match tab {
            "conversation" => vec![
                ("Customer", Cell::text(format!("{} <{}>", self.customer_name, self.customer_email))),
                ("Order", Cell::text(self.order_id.clone().unwrap_or_else(|| "—".to_string()))),
                ("Priority", Cell::Badge(self.priority.badge())),
                ("Description", Cell::Long(self.description.clone())),
                ("Messages", Cell::Lines(self.messages.iter().map(message_line).collect())),
            ],
            "timeline" => vec![(
                "Events",
                Cell::Lines(
                    self.timeline
                        .iter()
                        .map(|event| format!("{}  {}", format_datetime(&event.at), event.label))
                        .collect(),
                ),
            )],
            "attachments" => vec![(
                "Files",
                Cell::Lines(
                    self.attachments
                        .iter()
                        .map(|file| format!("{} ({} KB)", file.file_name, file.size_kb))
                        .collect(),
                ),
            )],
            _ => Vec::new(),
        }
    }

    fn form_fields(&self) -> Vec<FormField> {
        vec![
            FormField::new("subject", "Subject", &self.subject),
            FormField::new("customer_email", "Customer email", &self.customer_email),
            FormField::new("description", "Description", &self.description).multiline(),
        ]
    }

    fn set_field(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "subject" => self.subject = value.trim().to_string(),
            "customer_email" => self.customer_email = value.trim().to_string(),
            "description" => self.description = value.to_string(),
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::utc_date;

    #[test]
    fn test_message_line_marks_staff_replies() {
        let message = ComplaintMessage {
            author: "Support".to_string(),
            from_staff: true,
            body: "We have issued a refund".to_string(),
            sent_at: utc_date(2024, 5, 2),
        };
        assert_eq!(
            message_line(&message),
            "[2024-05-02 00:00] Support (staff): We have issued a refund"
        );
    }
}
