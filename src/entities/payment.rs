//! Payment transaction records

use crate::core::field::FieldValue;
use crate::core::record::Record;
use crate::query::aggregate::AggregateSpec;
use crate::query::filter::FilterSpec;
use serde::{Deserialize, Serialize};

/// One payment transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub transaction_id: String,
    pub customer: String,
    pub provider: String,
    pub service: String,
    pub amount: f64,
    /// "completed", "pending", or "failed"
    pub status: String,
    /// "Credit Card", "PayPal", "Bank Transfer", or "Digital Wallet"
    pub method: String,
    pub date: String,
}

impl Payment {
    #[allow(clippy::too_many_arguments)]
    pub fn sample(
        transaction_id: &str,
        customer: &str,
        provider: &str,
        service: &str,
        amount: f64,
        status: &str,
        method: &str,
        date: &str,
    ) -> Self {
        Payment {
            id: transaction_id.to_string(),
            transaction_id: transaction_id.to_string(),
            customer: customer.to_string(),
            provider: provider.to_string(),
            service: service.to_string(),
            amount,
            status: status.to_string(),
            method: method.to_string(),
            date: date.to_string(),
        }
    }

    /// Headline KPIs for the payments page: revenue, volume, success and
    /// failure rates. Computed over the full collection.
    pub fn headline_stats() -> AggregateSpec {
        let completed = FilterSpec::new().equals("status", "completed");
        let failed = FilterSpec::new().equals("status", "failed");
        AggregateSpec::new()
            .sum_where("total_revenue", "amount", completed.clone())
            .count("total_transactions")
            .percent_of_total("success_rate", completed.clone())
            .count_where("failed_payments", failed)
            .average_where("avg_transaction", "amount", completed)
    }
}

impl Record for Payment {
    fn entity_name() -> &'static str {
        "payment"
    }

    fn searchable_fields() -> &'static [&'static str] {
        &["transaction_id", "customer", "provider"]
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(self.id.as_str().into()),
            "transaction_id" => Some(self.transaction_id.as_str().into()),
            "customer" => Some(self.customer.as_str().into()),
            "provider" => Some(self.provider.as_str().into()),
            "service" => Some(self.service.as_str().into()),
            "amount" => Some(self.amount.into()),
            "status" => Some(self.status.as_str().into()),
            "method" => Some(self.method.as_str().into()),
            "date" => Some(self.date.as_str().into()),
            _ => None,
        }
    }

    fn export_columns() -> &'static [&'static str] {
        &[
            "Transaction ID",
            "Customer",
            "Provider",
            "Service",
            "Amount",
            "Status",
            "Method",
            "Date",
        ]
    }

    fn export_row(&self) -> Vec<String> {
        vec![
            self.transaction_id.clone(),
            self.customer.clone(),
            self.provider.clone(),
            self.service.clone(),
            format!("{:.2}", self.amount),
            self.status.clone(),
            self.method.clone(),
            self.date.clone(),
        ]
    }
}
