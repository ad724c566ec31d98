//! Order-preserving key and value codecs.
//!
//! Every schema record is persisted as a composite key (attribute name,
//! type tag) and a one-byte flag value. The encodings are chosen so that
//! lexicographic comparison of encoded bytes matches the ordering of the
//! original fields, which is what makes one contiguous range scan per
//! table possible.

pub mod attribute;
pub mod string;

pub use attribute::{decode_attribute_key, decode_flag, encode_attribute_key, encode_flag};
pub use string::{decode_string, encode_string};
