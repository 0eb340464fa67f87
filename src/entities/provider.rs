//! Service provider records

use crate::core::field::FieldValue;
use crate::core::record::Record;
use crate::query::aggregate::AggregateSpec;
use crate::query::filter::FilterSpec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provider {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub category: String,
    /// Years of experience
    pub experience: i64,
    pub rating: f64,
    pub review_count: i64,
    pub jobs_completed: i64,
    /// "active", "inactive", or "pending"
    pub status: String,
}

impl Provider {
    #[allow(clippy::too_many_arguments)]
    pub fn sample(
        id: &str,
        name: &str,
        category: &str,
        experience: i64,
        rating: f64,
        jobs_completed: i64,
        status: &str,
    ) -> Self {
        Provider {
            id: id.to_string(),
            name: name.to_string(),
            email: format!(
                "{}@example.com",
                name.to_lowercase().replace(' ', ".")
            ),
            phone: "+1 (555) 345-6789".to_string(),
            category: category.to_string(),
            experience,
            rating,
            review_count: jobs_completed / 2,
            jobs_completed,
            status: status.to_string(),
        }
    }

    pub fn headline_stats() -> AggregateSpec {
        AggregateSpec::new()
            .count("total_providers")
            .count_where("active", FilterSpec::new().equals("status", "active"))
            .count_where("pending", FilterSpec::new().equals("status", "pending"))
            .average("avg_rating", "rating")
            .sum("jobs_completed", "jobs_completed")
    }
}

impl Record for Provider {
    fn entity_name() -> &'static str {
        "provider"
    }

    fn searchable_fields() -> &'static [&'static str] {
        &["name", "email"]
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(self.id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "email" => Some(self.email.as_str().into()),
            "phone" => Some(self.phone.as_str().into()),
            "category" => Some(self.category.as_str().into()),
            "experience" => Some(self.experience.into()),
            "rating" => Some(self.rating.into()),
            "review_count" => Some(self.review_count.into()),
            "jobs_completed" => Some(self.jobs_completed.into()),
            "status" => Some(self.status.as_str().into()),
            _ => None,
        }
    }

    fn export_columns() -> &'static [&'static str] {
        &[
            "Provider ID",
            "Name",
            "Email",
            "Phone",
            "Category",
            "Experience (Years)",
            "Rating",
            "Reviews",
            "Jobs Completed",
            "Status",
        ]
    }

    fn export_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.category.clone(),
            self.experience.to_string(),
            format!("{:.1}", self.rating),
            self.review_count.to_string(),
            self.jobs_completed.to_string(),
            self.status.clone(),
        ]
    }
}
