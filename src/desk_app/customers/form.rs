use chrono::NaiveDate;

use crate::shared::customer::{Customer, CustomerFields};
use crate::shared::error::CustomerError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Editable text buffers behind the customer form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerForm {
    pub name: String,
    pub date: String,
    pub member: String,
    pub interest: String,
}

impl CustomerForm {
    /// Pre-fill the form from an existing record
    pub fn from_customer(customer: &Customer) -> Self {
        Self {
            name: customer.name.clone(),
            date: customer.date.format(DATE_FORMAT).to_string(),
            member: customer.member.to_string(),
            interest: customer.interest.clone(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }

    /// Parse the buffers into a complete request body
    ///
    /// Fails on the first missing or malformed field, in form order.
    pub fn to_fields(&self) -> Result<CustomerFields, CustomerError> {
        let name = required("name", &self.name)?;
        let date = required("date", &self.date)?;
        let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|_| CustomerError::validation("date", "date must be YYYY-MM-DD"))?;
        let member = required("member", &self.member)?
            .parse::<f64>()
            .map_err(|_| CustomerError::validation("member", "member must be a number"))?;
        let interest = required("interest", &self.interest)?;

        let fields = CustomerFields {
            name: Some(name.to_string()),
            date: Some(date),
            member: Some(member),
            interest: Some(interest.to_string()),
        };
        fields.validate_present()?;
        Ok(fields)
    }
}

fn required<'a>(field: &str, value: &'a str) -> Result<&'a str, CustomerError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CustomerError::missing(field));
    }
    Ok(value)
}
