// core/src/rfq/contact.rs

use serde::Serialize;

/// The five mandatory buyer contact fields.
///
/// Fields are retained in memory across backward transitions in the
/// workflow; they are only reset after the buyer acknowledges a completed
/// submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactDetails {
  pub customer_name: String,
  pub company: String,
  pub location: String,
  pub email: String,
  pub phone: String,
}

/// Fixed validation order: name, company, location, email, phone. Only the
/// first missing field is reported; errors are not aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
  Name,
  Company,
  Location,
  Email,
  Phone,
}

impl ContactField {
  pub fn requirement_message(&self) -> &'static str {
    match self {
      ContactField::Name => "Please enter your name.",
      ContactField::Company => "Please enter your company name.",
      ContactField::Location => "Please enter your project location.",
      ContactField::Email => "Please enter your email address.",
      ContactField::Phone => "Please enter your phone number.",
    }
  }
}

impl ContactDetails {
  /// First field that is empty after trimming, in the fixed order.
  pub fn first_missing(&self) -> Option<ContactField> {
    let checks = [
      (ContactField::Name, &self.customer_name),
      (ContactField::Company, &self.company),
      (ContactField::Location, &self.location),
      (ContactField::Email, &self.email),
      (ContactField::Phone, &self.phone),
    ];
    checks
      .into_iter()
      .find(|(_, value)| value.trim().is_empty())
      .map(|(field, _)| field)
  }

  /// Whitespace-trimmed copy used when assembling the submission payload.
  pub fn trimmed(&self) -> ContactDetails {
    ContactDetails {
      customer_name: self.customer_name.trim().to_string(),
      company: self.company.trim().to_string(),
      location: self.location.trim().to_string(),
      email: self.email.trim().to_string(),
      phone: self.phone.trim().to_string(),
    }
  }

  pub fn reset(&mut self) {
    *self = ContactDetails::default();
  }
}
