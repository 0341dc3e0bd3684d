//! Customer requests raised from the storefront: the contact form, the
//! "contact a manager" button on a vehicle card and the loan application.
//! They are queued in the session for the host to forward.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

use super::entities::VehicleId;
use super::loan::LoanQuote;

const MIN_PHONE_DIGITS: usize = 10;
const MAX_PHONE_DIGITS: usize = 15;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InquiryError {
    #[error("customer name is required")]
    MissingName,
    #[error("phone number {0:?} is not a valid phone number")]
    InvalidPhone(String),
    #[error("vehicle {0} is not in the catalog")]
    UnknownVehicle(VehicleId),
}

/// What the visitor typed into the form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub name: String,
    pub phone: String,
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InquiryKind {
    General,
    VehicleCallback { vehicle_id: VehicleId },
    LoanApplication { quote: LoanQuote },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub contact: ContactDetails,
    pub kind: InquiryKind,
}

impl Inquiry {
    /// Validates and normalizes the contact details.
    pub fn new(contact: ContactDetails, kind: InquiryKind) -> Result<Self, InquiryError> {
        let name = contact.name.trim();
        if name.is_empty() {
            return Err(InquiryError::MissingName);
        }
        let phone = normalize_phone(&contact.phone)?;
        let message = contact
            .message
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string);

        Ok(Self {
            id: Uuid::new_v4(),
            created_at: OffsetDateTime::now_utc(),
            contact: ContactDetails {
                name: name.to_string(),
                phone,
                message,
            },
            kind,
        })
    }

    pub fn vehicle_id(&self) -> Option<VehicleId> {
        match self.kind {
            InquiryKind::VehicleCallback { vehicle_id } => Some(vehicle_id),
            _ => None,
        }
    }
}

/// Strips formatting from a phone number and keeps a leading `+`.
///
/// Accepts separators used in the storefront placeholder `+7 (___) ___-__-__`.
pub fn normalize_phone(raw: &str) -> Result<String, InquiryError> {
    let trimmed = raw.trim();
    let mut digits = String::with_capacity(trimmed.len());
    for (idx, ch) in trimmed.chars().enumerate() {
        match ch {
            '0'..='9' => digits.push(ch),
            '+' if idx == 0 => {}
            ' ' | '(' | ')' | '-' | '.' => {}
            _ => return Err(InquiryError::InvalidPhone(raw.to_string())),
        }
    }

    if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits.len()) {
        return Err(InquiryError::InvalidPhone(raw.to_string()));
    }

    if trimmed.starts_with('+') {
        Ok(format!("+{digits}"))
    } else {
        Ok(digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, phone: &str) -> ContactDetails {
        ContactDetails {
            name: name.to_string(),
            phone: phone.to_string(),
            message: Some("  Интересует BMW X7  ".to_string()),
        }
    }

    #[test]
    fn phone_formatting_is_stripped() {
        assert_eq!(normalize_phone("+7 (495) 123-45-67").unwrap(), "+74951234567");
        assert_eq!(normalize_phone("8 916 000 11 22").unwrap(), "89160001122");
    }

    #[test]
    fn bad_phones_are_rejected() {
        for raw in ["+7 (___) ___-__-__", "12345", "7+9160001122"] {
            assert!(matches!(
                normalize_phone(raw),
                Err(InquiryError::InvalidPhone(_))
            ));
        }
    }

    #[test]
    fn new_inquiry_trims_fields() {
        let details = contact("  Иван Иванов ", "+7 (495) 123-45-67");
        let inquiry = Inquiry::new(details, InquiryKind::General).unwrap();
        assert_eq!(inquiry.contact.name, "Иван Иванов");
        assert_eq!(inquiry.contact.phone, "+74951234567");
        assert_eq!(inquiry.contact.message.as_deref(), Some("Интересует BMW X7"));
        assert_eq!(inquiry.vehicle_id(), None);
    }

    #[test]
    fn blank_name_is_rejected() {
        assert_eq!(
            Inquiry::new(contact("   ", "+74951234567"), InquiryKind::General),
            Err(InquiryError::MissingName)
        );
    }

    #[test]
    fn blank_message_becomes_none() {
        let mut details = contact("Мария", "+74951234567");
        details.message = Some("   ".to_string());
        let kind = InquiryKind::VehicleCallback { vehicle_id: 3 };
        let inquiry = Inquiry::new(details, kind).unwrap();
        assert_eq!(inquiry.contact.message, None);
        assert_eq!(inquiry.vehicle_id(), Some(3));
    }

    #[test]
    fn inquiry_ids_are_unique() {
        let a = Inquiry::new(contact("A", "+74951234567"), InquiryKind::General).unwrap();
        let b = Inquiry::new(contact("B", "+74951234567"), InquiryKind::General).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn inquiry_serializes_with_tagged_kind() {
        let inquiry = Inquiry::new(
            contact("Дмитрий", "+74951234567"),
            InquiryKind::VehicleCallback { vehicle_id: 2 },
        )
        .unwrap();
        let value = serde_json::to_value(&inquiry).unwrap();
        assert_eq!(value["kind"]["kind"], "vehicle_callback");
        assert_eq!(value["kind"]["vehicle_id"], 2);

        let back: Inquiry = serde_json::from_value(value).unwrap();
        assert_eq!(back.id, inquiry.id);
    }
}
