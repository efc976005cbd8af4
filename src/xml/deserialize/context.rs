//! Document root deserialization module.

use log::{debug, trace};

use crate::context::ViewContext;
use crate::general::General;
use crate::layer::Layer;
use crate::namespace::Namespace;
use crate::xml::deserialize::{DeserializeError, FromElement};
use crate::xml::tree::Element;

impl FromElement for ViewContext {
    fn from_element(element: &Element) -> Result<Self, DeserializeError> {
        if !element.name.is(Namespace::Context, "ViewContext") {
            return Err(DeserializeError::UnexpectedElement {
                expected: Namespace::Context.clark("ViewContext"),
                found: element.name.to_string(),
            });
        }

        let general = match element.find(Namespace::Context, "General") {
            Some(el) => General::from_element(el)?,
            None => {
                trace!("ViewContext has no General section");
                General::default()
            }
        };

        let mut layers = Vec::new();
        for (index, el) in element
            .find_all_path(&[
                (Namespace::Context, "LayerList"),
                (Namespace::Context, "Layer"),
            ])
            .into_iter()
            .enumerate()
        {
            let layer = Layer::from_element(el)?;
            debug!("Parsed layer {} ({})", index, layer.name);
            layers.push(layer);
        }

        Ok(ViewContext {
            id: element.attr_string("id"),
            version: element.attr_string("version"),
            general,
            layers,
        })
    }
}
