//! Customer review records

use crate::core::field::FieldValue;
use crate::core::record::Record;
use crate::query::aggregate::AggregateSpec;
use crate::query::filter::FilterSpec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub customer: String,
    pub provider: String,
    pub service: String,
    /// 1 through 5
    pub rating: i64,
    pub comment: String,
    pub date: String,
}

impl Review {
    pub fn sample(
        id: &str,
        customer: &str,
        provider: &str,
        service: &str,
        rating: i64,
        comment: &str,
        date: &str,
    ) -> Self {
        Review {
            id: id.to_string(),
            customer: customer.to_string(),
            provider: provider.to_string(),
            service: service.to_string(),
            rating,
            comment: comment.to_string(),
            date: date.to_string(),
        }
    }

    pub fn headline_stats() -> AggregateSpec {
        AggregateSpec::new()
            .count("total_reviews")
            .average("average_rating", "rating")
            .percent_of_total(
                "five_star_rate",
                FilterSpec::new().equals("rating", 5i64),
            )
    }
}

impl Record for Review {
    fn entity_name() -> &'static str {
        "review"
    }

    fn searchable_fields() -> &'static [&'static str] {
        &["customer", "provider", "comment"]
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(self.id.as_str().into()),
            "customer" => Some(self.customer.as_str().into()),
            "provider" => Some(self.provider.as_str().into()),
            "service" => Some(self.service.as_str().into()),
            "rating" => Some(self.rating.into()),
            "comment" => Some(self.comment.as_str().into()),
            "date" => Some(self.date.as_str().into()),
            _ => None,
        }
    }

    fn export_columns() -> &'static [&'static str] {
        &["Review ID", "Customer", "Provider", "Service", "Rating", "Comment", "Date"]
    }

    fn export_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.customer.clone(),
            self.provider.clone(),
            self.service.clone(),
            self.rating.to_string(),
            self.comment.clone(),
            self.date.clone(),
        ]
    }
}
