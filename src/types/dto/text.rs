use std::borrow::Cow;

use poem_openapi::registry::MetaSchemaRef;
use poem_openapi::types::{ParseError, ParseFromJSON, ParseResult, ToJSON, Type};
use serde_json::Value;

/// JSON string field that rejects every other JSON type
///
/// poem-openapi's `String` accepts numbers and booleans and stringifies them;
/// item fields must arrive as real strings. The raw value is the inner
/// `String`, so `min_length`/`max_length` validators still apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrictText(pub String);

impl StrictText {
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Type for StrictText {
    const IS_REQUIRED: bool = true;

    type RawValueType = String;

    type RawElementValueType = String;

    fn name() -> Cow<'static, str> {
        <String as Type>::name()
    }

    fn schema_ref() -> MetaSchemaRef {
        <String as Type>::schema_ref()
    }

    fn as_raw_value(&self) -> Option<&Self::RawValueType> {
        Some(&self.0)
    }

    fn raw_element_iter<'a>(
        &'a self,
    ) -> Box<dyn Iterator<Item = &'a Self::RawElementValueType> + 'a> {
        Box::new(self.as_raw_value().into_iter())
    }
}

impl ParseFromJSON for StrictText {
    fn parse_from_json(value: Option<Value>) -> ParseResult<Self> {
        match value.unwrap_or_default() {
            Value::String(text) => Ok(Self(text)),
            other => Err(ParseError::expected_type(other)),
        }
    }
}

impl ToJSON for StrictText {
    fn to_json(&self) -> Option<Value> {
        Some(Value::String(self.0.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_json_string() {
        let parsed = StrictText::parse_from_json(Some(json!("widget"))).unwrap();
        assert_eq!(parsed.into_inner(), "widget");
    }

    #[test]
    fn test_rejects_non_string_values() {
        for value in [json!(42), json!(true), json!(1.5), json!(["a"]), json!({"a": 1}), Value::Null] {
            assert!(
                StrictText::parse_from_json(Some(value.clone())).is_err(),
                "expected {} to be rejected",
                value
            );
        }
    }

    #[test]
    fn test_missing_value_is_rejected() {
        assert!(StrictText::parse_from_json(None).is_err());
    }

    #[test]
    fn test_round_trips_to_json() {
        assert_eq!(StrictText("widget".to_string()).to_json(), Some(json!("widget")));
    }
}
