//! Lookup of loosely-typed extension data attached to model elements.

use crate::model::{Attributes, ExtensionBlock};

/// Value of the extension attribute `key`, if present.
pub fn extension_attribute<'a>(attributes: &'a Attributes, key: &str) -> Option<&'a str> {
    attributes.get(key).map(String::as_str)
}

/// First value named `key` across a list of extension blocks.
pub fn extension_value<'a>(blocks: &'a [ExtensionBlock], key: &str) -> Option<&'a str> {
    blocks
        .iter()
        .find_map(|block| block.values.get(key).map(String::as_str))
}
