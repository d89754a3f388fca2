//! Context fields attached to log records

use std::collections::HashMap;

use serde_json::Value;

/// Key/value annotations attached to a record
pub type Fields = HashMap<String, Value>;

/// Build a [`Fields`] map from `key => value` pairs.
///
/// Values go through `Value::from`, so strings, numbers, booleans and vectors
/// of those work directly.
///
/// ```
/// use fieldlog_core_types::{fields, Value};
///
/// let f = fields! { "service" => "api", "port" => 8080 };
/// assert_eq!(f["service"], Value::from("api"));
/// assert_eq!(f.len(), 2);
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::Fields::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut fields = $crate::Fields::new();
        $(
            fields.insert(::std::string::String::from($key), $crate::Value::from($value));
        )+
        fields
    }};
}

/// Merge `incoming` into `target`; keys already present are overwritten
pub fn merge(target: &mut Fields, incoming: Fields) {
    target.extend(incoming);
}
