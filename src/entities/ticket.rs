//! Support ticket records

use crate::core::field::FieldValue;
use crate::core::record::Record;
use crate::query::aggregate::AggregateSpec;
use crate::query::filter::FilterSpec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportTicket {
    pub id: String,
    pub user: String,
    /// "customer" or "provider"
    pub user_type: String,
    pub subject: String,
    /// "open", "in-progress", "resolved", or "closed"
    pub status: String,
    /// "low", "medium", or "high"
    pub priority: String,
    pub date: String,
}

impl SupportTicket {
    pub fn sample(
        id: &str,
        user: &str,
        user_type: &str,
        subject: &str,
        status: &str,
        priority: &str,
        date: &str,
    ) -> Self {
        SupportTicket {
            id: id.to_string(),
            user: user.to_string(),
            user_type: user_type.to_string(),
            subject: subject.to_string(),
            status: status.to_string(),
            priority: priority.to_string(),
            date: date.to_string(),
        }
    }

    /// Status tallies shown in the tickets footer
    pub fn headline_stats() -> AggregateSpec {
        AggregateSpec::new()
            .count("total_tickets")
            .count_where("open", FilterSpec::new().equals("status", "open"))
            .count_where("in_progress", FilterSpec::new().equals("status", "in-progress"))
            .count_where("resolved", FilterSpec::new().equals("status", "resolved"))
            .count_where("high_priority", FilterSpec::new().equals("priority", "high"))
    }
}

impl Record for SupportTicket {
    fn entity_name() -> &'static str {
        "ticket"
    }

    fn searchable_fields() -> &'static [&'static str] {
        &["id", "user", "subject"]
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(self.id.as_str().into()),
            "user" => Some(self.user.as_str().into()),
            "user_type" => Some(self.user_type.as_str().into()),
            "subject" => Some(self.subject.as_str().into()),
            "status" => Some(self.status.as_str().into()),
            "priority" => Some(self.priority.as_str().into()),
            "date" => Some(self.date.as_str().into()),
            _ => None,
        }
    }

    fn export_columns() -> &'static [&'static str] {
        &["Ticket ID", "User", "User Type", "Subject", "Status", "Priority", "Date"]
    }

    fn export_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.user.clone(),
            self.user_type.clone(),
            self.subject.clone(),
            self.status.clone(),
            self.priority.clone(),
            self.date.clone(),
        ]
    }
}
