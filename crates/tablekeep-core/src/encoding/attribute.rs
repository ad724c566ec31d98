use crate::error::EncodingError;
use crate::types::AttributeType;

use super::string::{decode_string, encode_string};

/// Type tag bytes for attribute keys. Tags are part of the persisted
/// format: new variants get new tags, existing tags are never reused.
pub const TAG_INT: u8 = 0x01;
pub const TAG_STRING: u8 = 0x02;
pub const TAG_BOOLEAN: u8 = 0x03;
pub const TAG_DOUBLE: u8 = 0x04;

/// Flag value bytes (is-primary-key).
pub const FLAG_FALSE: u8 = 0x00;
pub const FLAG_TRUE: u8 = 0x01;

/// Map an `AttributeType` to its persisted tag byte.
pub fn attribute_type_tag(at: AttributeType) -> u8 {
    match at {
        AttributeType::Int => TAG_INT,
        AttributeType::String => TAG_STRING,
        AttributeType::Boolean => TAG_BOOLEAN,
        AttributeType::Double => TAG_DOUBLE,
    }
}

/// Map a tag byte back to an `AttributeType`.
pub fn tag_to_attribute_type(tag: u8) -> Result<AttributeType, EncodingError> {
    match tag {
        TAG_INT => Ok(AttributeType::Int),
        TAG_STRING => Ok(AttributeType::String),
        TAG_BOOLEAN => Ok(AttributeType::Boolean),
        TAG_DOUBLE => Ok(AttributeType::Double),
        _ => Err(EncodingError::InvalidTypeTag(tag)),
    }
}

/// Encode the composite key for one attribute record: the encoded name
/// followed by exactly one type tag byte.
///
/// The name is the leading field, so a range scan over a table's schema
/// subtree yields entries grouped and ordered by attribute name.
pub fn encode_attribute_key(name: &str, attr_type: AttributeType) -> Vec<u8> {
    let mut out = encode_string(name);
    out.push(attribute_type_tag(attr_type));
    out
}

/// Decode an attribute key back into (name, type).
///
/// Fails with `MalformedKey` when the composite arity is wrong (anything
/// but exactly one byte after the name) and `InvalidTypeTag` when the
/// trailing tag is not a recognized type.
pub fn decode_attribute_key(data: &[u8]) -> Result<(String, AttributeType), EncodingError> {
    let (name, consumed) = decode_string(data)?;
    if data.len() - consumed != 1 {
        return Err(EncodingError::MalformedKey);
    }
    let attr_type = tag_to_attribute_type(data[consumed])?;
    Ok((name, attr_type))
}

/// Encode the is-primary-key flag stored as the record value.
pub fn encode_flag(primary_key: bool) -> [u8; 1] {
    if primary_key { [FLAG_TRUE] } else { [FLAG_FALSE] }
}

/// Decode a flag value. Anything but a single 0x00 or 0x01 byte is
/// malformed.
pub fn decode_flag(data: &[u8]) -> Result<bool, EncodingError> {
    match data {
        [FLAG_FALSE] => Ok(false),
        [FLAG_TRUE] => Ok(true),
        _ => Err(EncodingError::MalformedValue),
    }
}
