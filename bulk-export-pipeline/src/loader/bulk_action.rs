//! Encoding of a triple as a bulk index action pair.

use std::fmt;

use bulk_export_shared::Triple;

/// A bulk `index` action: the metadata line followed by the document line.
///
/// ```text
/// {"index":{"_index":"<index>","_type":"<type>","_id":"<id>"}}
/// {"<field>":<value>}
/// ```
///
/// Both lines end in `\n`. The field value is written verbatim, it is
/// already a JSON literal.
pub struct BulkAction<'a> {
    pub index_name: &'a str,
    pub type_name: &'a str,
    pub triple: &'a Triple,
}

impl<'a> BulkAction<'a> {
    pub fn new(index_name: &'a str, type_name: &'a str, triple: &'a Triple) -> Self {
        Self {
            index_name,
            type_name,
            triple,
        }
    }
}

fn json_string(value: &str) -> String {
    serde_json::Value::String(value.to_owned()).to_string()
}

impl fmt::Display for BulkAction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            r#"{{"index":{{"_index":{},"_type":{},"_id":{}}}}}"#,
            json_string(self.index_name),
            json_string(self.type_name),
            json_string(&self.triple.identifier),
        )?;
        writeln!(
            f,
            "{{{}:{}}}",
            json_string(self.triple.field.as_str()),
            self.triple.value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulk_export_shared::{FieldName, FieldValue};
    use serde_json::Value;

    #[test]
    fn test_uri_count_action() {
        let triple = Triple::new(
            "Baz",
            FieldName::UriCount,
            FieldValue::raw_number("7").unwrap(),
        );

        let encoded = BulkAction::new("spotlight", "entities", &triple).to_string();

        assert_eq!(
            encoded,
            "{\"index\":{\"_index\":\"spotlight\",\"_type\":\"entities\",\"_id\":\"Baz\"}}\n\
             {\"uriCount\":7}\n"
        );
    }

    #[test]
    fn test_string_field_is_not_encoded_twice() {
        let triple = Triple::new("Bar", FieldName::SurfaceForm, FieldValue::string("Bar"));

        let encoded = BulkAction::new("idx", "entities", &triple).to_string();

        assert!(encoded.ends_with("{\"sf\":\"Bar\"}\n"));
    }

    #[test]
    fn test_lines_are_valid_json() {
        let triple = Triple::new(
            "Say_\"Hi\"",
            FieldName::Context,
            FieldValue::string("a \"b\" "),
        );

        let encoded = BulkAction::new("idx", "entities", &triple).to_string();
        let lines: Vec<&str> = encoded.lines().collect();
        assert_eq!(lines.len(), 2);

        let header: Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(header["index"]["_id"], "Say_\"Hi\"");
        assert_eq!(header["index"]["_type"], "entities");

        let body: Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(body["context"], "a \"b\" ");
    }
}
