//! Contact information deserialization module.

use crate::contact::{Address, ContactInformation};
use crate::namespace::Namespace;
use crate::xml::deserialize::helpers::opt_text;
use crate::xml::deserialize::{DeserializeError, FromElement};
use crate::xml::tree::Element;

impl FromElement for Address {
    fn from_element(element: &Element) -> Result<Self, DeserializeError> {
        Ok(Address {
            address_type: opt_text(element, "AddressType"),
            address: opt_text(element, "Address"),
            city: opt_text(element, "City"),
            state_or_province: opt_text(element, "StateOrProvince"),
            post_code: opt_text(element, "PostCode"),
            country: opt_text(element, "Country"),
        })
    }
}

impl FromElement for ContactInformation {
    fn from_element(element: &Element) -> Result<Self, DeserializeError> {
        let primary = element.find(Namespace::Context, "ContactPersonPrimary");

        let address = match element.find(Namespace::Context, "ContactAddress") {
            Some(el) => Address::from_element(el)?,
            None => Address::default(),
        };

        Ok(ContactInformation {
            person: primary.and_then(|p| opt_text(p, "ContactPerson")),
            organization: primary.and_then(|p| opt_text(p, "ContactOrganization")),
            position: opt_text(element, "ContactPosition"),
            address,
            telephone: opt_text(element, "ContactVoiceTelephone"),
            fax: opt_text(element, "ContactFacsimileTelephone"),
            email: opt_text(element, "ContactElectronicMailAddress"),
        })
    }
}
