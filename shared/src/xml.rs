//! XML to plain structure conversion
//!
//! The resto API answers most of its legacy endpoints with XML. Callers want
//! plain mappings, so documents are folded into [`serde_json::Value`]:
//!
//! ```text
//! <employees>                         {"employees": {"employee": [
//!   <employee><id>1</id></employee>      {"id": "1"},
//!   <employee><id>2</id></employee>      {"id": "2"}
//! </employees>                        ]}}
//! ```
//!
//! The conversion is shape-ambiguous by nature: a repeated child becomes an
//! array, a single one an object, an absent one nothing. [`as_list`] removes
//! that ambiguity for collection endpoints.

use quick_xml::events::attributes::AttrError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use serde_json::{Map, Value};
use thiserror::Error;

/// Key prefix used for attributes
pub const ATTRIBUTE_PREFIX: &str = "@";

/// Key used for text that sits next to child elements or attributes
pub const TEXT_KEY: &str = "#text";

/// XML conversion error
#[derive(Debug, Error)]
pub enum XmlError {
    /// Reader rejected the document (bad syntax, mismatched end tag, ...)
    #[error("malformed XML: {0}")]
    Malformed(#[from] quick_xml::Error),

    /// Invalid attribute syntax
    #[error("malformed XML attribute: {0}")]
    Attribute(#[from] AttrError),

    /// Tag or attribute name is not valid UTF-8
    #[error("invalid UTF-8 in XML name: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// Document holds no element at all
    #[error("XML document has no root element")]
    Empty,

    /// A second top-level element follows the root
    #[error("XML document has more than one root element (second: <{0}>)")]
    MultipleRoots(String),

    /// Non-whitespace text before or after the root element
    #[error("XML document has text outside the root element: {0:?}")]
    TextOutsideRoot(String),

    /// Input ended while elements were still open
    #[error("XML document ended inside <{0}>")]
    Unclosed(String),
}

/// Element under construction
struct Frame {
    name: String,
    fields: Map<String, Value>,
    text: String,
}

impl Frame {
    fn open(start: &BytesStart<'_>) -> Result<Self, XmlError> {
        let name = std::str::from_utf8(start.name().as_ref())?.to_string();
        let mut fields = Map::new();

        for attr in start.attributes() {
            let attr = attr?;
            let key = std::str::from_utf8(attr.key.as_ref())?;
            let value = attr.unescape_value()?;
            fields.insert(
                format!("{ATTRIBUTE_PREFIX}{key}"),
                Value::String(value.into_owned()),
            );
        }

        Ok(Self {
            name,
            fields,
            text: String::new(),
        })
    }

    fn close(self) -> (String, Value) {
        let text = self.text.trim();
        let value = if self.fields.is_empty() {
            if text.is_empty() {
                Value::Null
            } else {
                Value::String(text.to_string())
            }
        } else {
            let mut fields = self.fields;
            if !text.is_empty() {
                fields.insert(TEXT_KEY.to_string(), Value::String(text.to_string()));
            }
            Value::Object(fields)
        };
        (self.name, value)
    }
}

/// Insert a child value, promoting repeated names to arrays
fn insert_child(fields: &mut Map<String, Value>, name: String, value: Value) {
    match fields.get_mut(&name) {
        None => {
            fields.insert(name, value);
        }
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
    }
}

/// Parse an XML document into a plain value
///
/// The result is an object with a single key, the root element's name.
pub fn parse(text: &str) -> Result<Value, XmlError> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Frame> = Vec::new();
    let mut root: Option<(String, Value)> = None;

    let mut finish = |frame: Frame, stack: &mut Vec<Frame>| -> Result<(), XmlError> {
        let (name, value) = frame.close();
        match stack.last_mut() {
            Some(parent) => insert_child(&mut parent.fields, name, value),
            None => {
                if root.is_some() {
                    return Err(XmlError::MultipleRoots(name));
                }
                root = Some((name, value));
            }
        }
        Ok(())
    };

    loop {
        match reader.read_event()? {
            Event::Start(start) => stack.push(Frame::open(&start)?),
            Event::Empty(start) => {
                let frame = Frame::open(&start)?;
                finish(frame, &mut stack)?;
            }
            Event::End(_) => {
                if let Some(frame) = stack.pop() {
                    finish(frame, &mut stack)?;
                }
            }
            Event::Text(content) => {
                let text = content.unescape()?;
                match stack.last_mut() {
                    Some(frame) => frame.text.push_str(&text),
                    None if text.trim().is_empty() => {}
                    None => return Err(XmlError::TextOutsideRoot(text.trim().to_string())),
                }
            }
            Event::CData(content) => {
                let raw = content.into_inner();
                let text = std::str::from_utf8(&raw)?;
                match stack.last_mut() {
                    Some(frame) => frame.text.push_str(text),
                    None => return Err(XmlError::TextOutsideRoot(text.to_string())),
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(XmlError::Unclosed(open.name.clone()));
    }

    let (name, value) = root.ok_or(XmlError::Empty)?;
    let mut document = Map::new();
    document.insert(name, value);
    Ok(Value::Object(document))
}

/// Walk nested object keys
pub fn path<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().try_fold(value, |current, key| current.get(key))
}

/// Normalize an optional value into a list
///
/// Absent or `null` gives an empty list, an array gives its items and any
/// other value becomes a one-element list.
pub fn as_list(value: Option<&Value>) -> Vec<Value> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.clone(),
        Some(other) => vec![other.clone()],
    }
}

/// Owned variant of [`as_list`]
pub fn into_list(value: Option<Value>) -> Vec<Value> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items,
        Some(other) => vec![other],
    }
}

/// Rewrite `key` in place so it always holds an array
///
/// Empty strings count as absent.
pub fn normalize_list_field(record: &mut Map<String, Value>, key: &str) {
    let normalized = match record.remove(key) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::String(s)) if s.is_empty() => Vec::new(),
        Some(Value::Array(items)) => items,
        Some(other) => vec![other],
    };
    record.insert(key.to_string(), Value::Array(normalized));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_repeated_children_become_array() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
            <employees>
                <employee><id>1</id><name>Anna</name></employee>
                <employee><id>2</id><name>Boris</name></employee>
            </employees>"#;

        let value = parse(xml).unwrap();
        assert_eq!(
            value,
            json!({"employees": {"employee": [
                {"id": "1", "name": "Anna"},
                {"id": "2", "name": "Boris"}
            ]}})
        );
    }

    #[test]
    fn test_parse_single_child_stays_object() {
        let value = parse("<roles><role><code>W</code></role></roles>").unwrap();
        assert_eq!(value, json!({"roles": {"role": {"code": "W"}}}));
    }

    #[test]
    fn test_parse_empty_elements_are_null() {
        let value = parse("<employee><note/><email></email></employee>").unwrap();
        assert_eq!(value, json!({"employee": {"note": null, "email": null}}));
    }

    #[test]
    fn test_parse_attributes_and_text() {
        let value = parse(r#"<item type="DISH" id="7">Soup &amp; bread</item>"#).unwrap();
        assert_eq!(
            value,
            json!({"item": {"@type": "DISH", "@id": "7", "#text": "Soup & bread"}})
        );
    }

    #[test]
    fn test_parse_cdata() {
        let value = parse("<note><![CDATA[a < b]]></note>").unwrap();
        assert_eq!(value, json!({"note": "a < b"}));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse(""), Err(XmlError::Empty)));
        assert!(matches!(parse("<a><b></a>"), Err(XmlError::Malformed(_))));
        assert!(matches!(
            parse("<a><b></b>"),
            Err(XmlError::Unclosed(_) | XmlError::Malformed(_))
        ));
        assert!(matches!(
            parse("<a/><b/>"),
            Err(XmlError::MultipleRoots(name)) if name == "b"
        ));
    }

    #[test]
    fn test_parse_rejects_text_outside_root() {
        assert!(matches!(
            parse("<a/>trailing"),
            Err(XmlError::TextOutsideRoot(text)) if text == "trailing"
        ));
        assert!(matches!(parse("junk<a/>"), Err(XmlError::TextOutsideRoot(_))));
        assert!(matches!(parse("<a/><![CDATA[x]]>"), Err(XmlError::TextOutsideRoot(_))));
        assert_eq!(parse("  <a/>\n  ").unwrap(), json!({"a": null}));
    }

    #[test]
    fn test_as_list_shapes() {
        let list = json!([1, 2]);
        let single = json!({"id": "1"});
        assert!(as_list(None).is_empty());
        assert!(as_list(Some(&Value::Null)).is_empty());
        assert_eq!(as_list(Some(&list)).len(), 2);
        assert_eq!(as_list(Some(&single)), vec![single.clone()]);
        assert_eq!(into_list(Some(single.clone())), vec![single]);
    }

    #[test]
    fn test_path() {
        let value = json!({"a": {"b": {"c": 1}}});
        assert_eq!(path(&value, &["a", "b", "c"]), Some(&json!(1)));
        assert_eq!(path(&value, &["a", "x"]), None);
        assert_eq!(path(&value, &[]), Some(&value));
    }

    #[test]
    fn test_normalize_list_field() {
        let mut record = json!({"departmentCodes": "D1"}).as_object().unwrap().clone();
        normalize_list_field(&mut record, "departmentCodes");
        assert_eq!(record["departmentCodes"], json!(["D1"]));

        let mut record = json!({"departmentCodes": ["D1", "D2"]}).as_object().unwrap().clone();
        normalize_list_field(&mut record, "departmentCodes");
        assert_eq!(record["departmentCodes"], json!(["D1", "D2"]));

        let mut record = json!({"departmentCodes": null}).as_object().unwrap().clone();
        normalize_list_field(&mut record, "departmentCodes");
        assert_eq!(record["departmentCodes"], json!([]));

        let mut record = Map::new();
        normalize_list_field(&mut record, "departmentCodes");
        assert_eq!(record["departmentCodes"], json!([]));
    }
}
