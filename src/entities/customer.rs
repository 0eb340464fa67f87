//! Customer records

use crate::core::field::FieldValue;
use crate::core::record::Record;
use crate::query::aggregate::AggregateSpec;
use crate::query::filter::FilterSpec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub registration_date: String,
    pub total_bookings: i64,
    pub total_spending: f64,
    pub last_activity: String,
    /// "active" or "inactive"
    pub status: String,
}

impl Customer {
    #[allow(clippy::too_many_arguments)]
    pub fn sample(
        id: &str,
        name: &str,
        email: &str,
        registration_date: &str,
        total_bookings: i64,
        total_spending: f64,
        status: &str,
    ) -> Self {
        Customer {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone: "+1 (555) 234-5678".to_string(),
            registration_date: registration_date.to_string(),
            total_bookings,
            total_spending,
            last_activity: registration_date.to_string(),
            status: status.to_string(),
        }
    }

    pub fn headline_stats() -> AggregateSpec {
        AggregateSpec::new()
            .count("total_customers")
            .count_where("active", FilterSpec::new().equals("status", "active"))
            .sum("total_revenue", "total_spending")
            .average("avg_spending", "total_spending")
            .sum("total_bookings", "total_bookings")
    }
}

impl Record for Customer {
    fn entity_name() -> &'static str {
        "customer"
    }

    fn searchable_fields() -> &'static [&'static str] {
        &["name", "email", "phone"]
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(self.id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "email" => Some(self.email.as_str().into()),
            "phone" => Some(self.phone.as_str().into()),
            "registration_date" => Some(self.registration_date.as_str().into()),
            "total_bookings" => Some(self.total_bookings.into()),
            "total_spending" => Some(self.total_spending.into()),
            "last_activity" => Some(self.last_activity.as_str().into()),
            "status" => Some(self.status.as_str().into()),
            _ => None,
        }
    }

    fn export_columns() -> &'static [&'static str] {
        &[
            "Customer ID",
            "Name",
            "Email",
            "Phone",
            "Registration Date",
            "Total Bookings",
            "Total Spending",
            "Last Activity",
            "Status",
        ]
    }

    fn export_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.registration_date.clone(),
            self.total_bookings.to_string(),
            format!("{:.2}", self.total_spending),
            self.last_activity.clone(),
            self.status.clone(),
        ]
    }
}
