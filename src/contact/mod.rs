//! Contact metadata of a context document.

use serde::{Deserialize, Serialize};

/// Postal address of the contact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub address_type: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state_or_province: Option<String>,
    pub post_code: Option<String>,
    pub country: Option<String>,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self.address_type.is_none()
            && self.address.is_none()
            && self.city.is_none()
            && self.state_or_province.is_none()
            && self.post_code.is_none()
            && self.country.is_none()
    }
}

/// The `ContactInformation` block of `General`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInformation {
    /// Written together with `organization` under `ContactPersonPrimary`.
    pub person: Option<String>,
    pub organization: Option<String>,
    pub position: Option<String>,
    pub address: Address,
    pub telephone: Option<String>,
    pub fax: Option<String>,
    pub email: Option<String>,
}

impl ContactInformation {
    /// Whether a `ContactPersonPrimary` element is needed.
    pub fn has_primary_person(&self) -> bool {
        self.person.is_some() || self.organization.is_some()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_primary_person()
            && self.position.is_none()
            && self.address.is_empty()
            && self.telephone.is_none()
            && self.fax.is_none()
            && self.email.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_contact() {
        let mut contact = ContactInformation::default();
        assert!(contact.is_empty());

        contact.address.city = Some("Ottawa".to_string());
        assert!(!contact.is_empty());
        assert!(!contact.has_primary_person());

        contact.organization = Some("OGC".to_string());
        assert!(contact.has_primary_person());
    }
}
