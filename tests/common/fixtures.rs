//! Customer fixtures shared by the integration and property tests

use chrono::NaiveDate;
use customer_desk::shared::{Customer, CustomerFields, CustomerId};

pub fn sample_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// Complete create body for a customer with the given name
pub fn customer_fields(name: &str) -> CustomerFields {
    CustomerFields {
        name: Some(name.to_string()),
        date: Some(sample_date()),
        member: Some(5.0),
        interest: Some("Widgets".to_string()),
    }
}

pub fn acme_fields() -> CustomerFields {
    customer_fields("Acme")
}

/// A stored record with a fixed id
pub fn customer(id: &str, name: &str) -> Customer {
    Customer {
        id: CustomerId::new(id),
        name: name.to_string(),
        date: sample_date(),
        member: 5.0,
        interest: "Widgets".to_string(),
    }
}
