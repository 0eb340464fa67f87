//! Service category records

use crate::core::field::FieldValue;
use crate::core::record::Record;
use crate::query::aggregate::AggregateSpec;
use crate::query::filter::FilterSpec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    pub provider_count: i64,
    pub is_active: bool,
}

impl Category {
    pub fn sample(id: &str, name: &str, description: &str, provider_count: i64, is_active: bool) -> Self {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            provider_count,
            is_active,
        }
    }

    pub fn headline_stats() -> AggregateSpec {
        AggregateSpec::new()
            .count("total_categories")
            .count_where("active", FilterSpec::new().equals("status", "active"))
            .count_where("inactive", FilterSpec::new().equals("status", "inactive"))
            .sum("total_providers", "provider_count")
            .average("avg_providers", "provider_count")
    }
}

impl Record for Category {
    fn entity_name() -> &'static str {
        "category"
    }

    fn searchable_fields() -> &'static [&'static str] {
        &["name", "description"]
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(self.id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "description" => Some(self.description.as_str().into()),
            "provider_count" => Some(self.provider_count.into()),
            "is_active" => Some(FieldValue::Boolean(self.is_active)),
            // Derived field so the shared status dropdown works unchanged
            "status" => Some(if self.is_active { "active" } else { "inactive" }.into()),
            _ => None,
        }
    }

    fn export_columns() -> &'static [&'static str] {
        &["Category ID", "Name", "Description", "Provider Count", "Status"]
    }

    fn export_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.description.clone(),
            self.provider_count.to_string(),
            if self.is_active { "active" } else { "inactive" }.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_status_field() {
        let active = Category::sample("1", "Electrician", "Electrical work", 24, true);
        let inactive = Category::sample("2", "Gardening", "Garden care", 0, false);
        assert_eq!(active.field_value("status"), Some(FieldValue::from("active")));
        assert_eq!(inactive.field_value("status"), Some(FieldValue::from("inactive")));

        let spec = FilterSpec::new().equals("status", "active");
        assert!(spec.matches(&active));
        assert!(!spec.matches(&inactive));
    }
}
