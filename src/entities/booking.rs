//! Booking records
//!
//! Bookings carry nested customer/service/provider sub-objects; the query
//! engine addresses them through dotted field paths (`customer.name`), and
//! export flattens each to its own column. The provider relation is
//! optional — unassigned bookings expose `FieldValue::Null` there and
//! export the fixed placeholder.

use crate::core::field::FieldValue;
use crate::core::record::{NOT_ASSIGNED, Record};
use crate::query::aggregate::AggregateSpec;
use crate::query::filter::FilterSpec;
use serde::{Deserialize, Serialize};

/// Name and phone of a customer or assigned provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRef {
    pub name: String,
    pub phone: String,
}

/// The booked service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRef {
    pub name: String,
    pub description: String,
}

/// One service booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub customer: ContactRef,
    pub service: ServiceRef,
    /// None until a provider accepts the job
    pub provider: Option<ContactRef>,
    /// ISO-8601 date
    pub date: String,
    pub time: String,
    pub amount: f64,
    /// "pending", "in-progress", "completed", or "cancelled"
    pub status: String,
}

impl Booking {
    /// Compact constructor used by tests and seed data
    pub fn sample(
        id: &str,
        customer: &str,
        service: &str,
        provider: Option<&str>,
        date: &str,
        amount: f64,
        status: &str,
    ) -> Self {
        Booking {
            id: id.to_string(),
            customer: ContactRef {
                name: customer.to_string(),
                phone: "+1 (555) 123-4567".to_string(),
            },
            service: ServiceRef {
                name: service.to_string(),
                description: format!("{service} service"),
            },
            provider: provider.map(|name| ContactRef {
                name: name.to_string(),
                phone: "+1 (555) 987-6543".to_string(),
            }),
            date: date.to_string(),
            time: "10:00 AM".to_string(),
            amount,
            status: status.to_string(),
        }
    }

    /// Headline KPIs for the bookings page, computed over the full collection
    pub fn headline_stats() -> AggregateSpec {
        AggregateSpec::new()
            .count("total_bookings")
            .count_where("completed", FilterSpec::new().equals("status", "completed"))
            .sum_where(
                "revenue",
                "amount",
                FilterSpec::new().equals("status", "completed"),
            )
            .percent_of_total(
                "completion_rate",
                FilterSpec::new().equals("status", "completed"),
            )
    }
}

impl Record for Booking {
    fn entity_name() -> &'static str {
        "booking"
    }

    fn searchable_fields() -> &'static [&'static str] {
        &["id", "customer.name", "service.name"]
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(self.id.as_str().into()),
            "customer.name" => Some(self.customer.name.as_str().into()),
            "customer.phone" => Some(self.customer.phone.as_str().into()),
            "service.name" => Some(self.service.name.as_str().into()),
            "service.description" => Some(self.service.description.as_str().into()),
            "provider.name" => Some(
                self.provider
                    .as_ref()
                    .map_or(FieldValue::Null, |p| p.name.as_str().into()),
            ),
            "provider.phone" => Some(
                self.provider
                    .as_ref()
                    .map_or(FieldValue::Null, |p| p.phone.as_str().into()),
            ),
            "date" => Some(self.date.as_str().into()),
            "time" => Some(self.time.as_str().into()),
            "amount" => Some(self.amount.into()),
            "status" => Some(self.status.as_str().into()),
            _ => None,
        }
    }

    fn export_columns() -> &'static [&'static str] {
        &[
            "Booking ID",
            "Customer Name",
            "Customer Phone",
            "Service",
            "Provider",
            "Date",
            "Time",
            "Amount",
            "Status",
        ]
    }

    fn export_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.customer.name.clone(),
            self.customer.phone.clone(),
            self.service.name.clone(),
            self.provider
                .as_ref()
                .map_or_else(|| NOT_ASSIGNED.to_string(), |p| p.name.clone()),
            self.date.clone(),
            self.time.clone(),
            format!("{:.2}", self.amount),
            self.status.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotted_field_paths() {
        let booking = Booking::sample(
            "BK-001",
            "Sarah Johnson",
            "Electrician",
            Some("Alex Martinez"),
            "2024-01-15",
            100.0,
            "completed",
        );
        assert_eq!(
            booking.field_value("customer.name"),
            Some(FieldValue::from("Sarah Johnson"))
        );
        assert_eq!(
            booking.field_value("provider.name"),
            Some(FieldValue::from("Alex Martinez"))
        );
        assert_eq!(booking.field_value("amount"), Some(FieldValue::Float(100.0)));
        assert_eq!(booking.field_value("bogus"), None);
    }

    #[test]
    fn test_unassigned_provider_is_null_not_missing() {
        let booking = Booking::sample("BK-002", "Mike", "Plumber", None, "2024-01-16", 50.0, "pending");
        assert_eq!(booking.field_value("provider.name"), Some(FieldValue::Null));
        // Equality filters on provider.name therefore fail closed
        let spec = FilterSpec::new().equals("provider.name", "Alex Martinez");
        assert!(!spec.matches(&booking));
    }

    #[test]
    fn test_export_row_matches_column_count() {
        let booking = Booking::sample("BK-002", "Mike", "Plumber", None, "2024-01-16", 50.0, "pending");
        assert_eq!(booking.export_row().len(), Booking::export_columns().len());
        assert_eq!(booking.export_row()[4], NOT_ASSIGNED);
    }
}
