//! Binder — run every schema field through its registered parser.

use std::any::Any;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::args::error::ArgsError;
use crate::args::parser::Value;
use crate::args::registry::{default_registry, ParserRegistry};
use crate::args::schema::{FieldSpec, Schema};
use crate::args::tokenizer;

/// A record that declares its own schema and builds itself from parsed values.
pub trait FromArgs: Sized {
    fn schema() -> Schema;

    fn from_options(options: &ParsedOptions) -> Result<Self, ArgsError>;
}

/// Parses argument lists against a schema using one registry.
#[derive(Debug, Clone, Copy)]
pub struct Args<'r> {
    registry: &'r ParserRegistry,
}

impl Default for Args<'static> {
    fn default() -> Self {
        Self::new(default_registry())
    }
}

impl<'r> Args<'r> {
    pub fn new(registry: &'r ParserRegistry) -> Self {
        Self { registry }
    }

    /// Parse every field in schema order, stopping at the first error.
    pub fn parse(&self, schema: &Schema, arguments: &[String]) -> Result<ParsedOptions, ArgsError> {
        let mut options = ParsedOptions::default();
        for spec in schema.fields() {
            let value = self.parse_field(spec, arguments)?;
            options.insert(&spec.field, value);
        }
        Ok(options)
    }

    /// Parse every field, collecting all errors instead of stopping early.
    pub fn parse_all(
        &self,
        schema: &Schema,
        arguments: &[String],
    ) -> Result<ParsedOptions, Vec<ArgsError>> {
        let mut options = ParsedOptions::default();
        let mut errors = Vec::new();
        for spec in schema.fields() {
            match self.parse_field(spec, arguments) {
                Ok(value) => options.insert(&spec.field, value),
                Err(err) => errors.push(err),
            }
        }

        if errors.is_empty() {
            Ok(options)
        } else {
            Err(errors)
        }
    }

    /// Parse straight into a record type.
    pub fn parse_into<T: FromArgs>(&self, arguments: &[String]) -> Result<T, ArgsError> {
        let options = self.parse(&T::schema(), arguments)?;
        T::from_options(&options)
    }

    fn parse_field(&self, spec: &FieldSpec, arguments: &[String]) -> Result<Value, ArgsError> {
        let flag = spec
            .flag
            .as_deref()
            .ok_or_else(|| ArgsError::MissingSchemaAnnotation {
                field: spec.field.clone(),
            })?;

        if !tokenizer::is_valid_flag_name(flag) {
            return Err(ArgsError::InvalidFlagName {
                field: spec.field.clone(),
                flag: flag.to_string(),
            });
        }

        let parser = self
            .registry
            .lookup(&spec.kind)
            .ok_or_else(|| ArgsError::UnsupportedFieldType {
                field: spec.field.clone(),
                kind: spec.kind.clone(),
            })?;

        match parser.parse_value(arguments, flag) {
            Ok(value) => {
                tracing::trace!(field = %spec.field, flag, kind = %spec.kind, "field bound");
                Ok(value)
            }
            Err(err) => {
                tracing::debug!(field = %spec.field, error = %err, "field rejected");
                Err(err)
            }
        }
    }
}

/// Parsed values keyed by field name, in schema order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedOptions {
    values: Vec<(String, Value)>,
}

impl ParsedOptions {
    /// Insert or replace the value for `field`.
    pub fn insert(&mut self, field: &str, value: Value) {
        match self.values.iter_mut().find(|(name, _)| name == field) {
            Some(entry) => entry.1 = value,
            None => self.values.push((field.to_string(), value)),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn boolean(&self, field: &str) -> Result<bool, ArgsError> {
        match self.get(field) {
            Some(Value::Bool(v)) => Ok(*v),
            _ => Err(mismatch(field, "boolean")),
        }
    }

    pub fn int(&self, field: &str) -> Result<i32, ArgsError> {
        match self.get(field) {
            Some(Value::Int(v)) => Ok(*v),
            _ => Err(mismatch(field, "integer")),
        }
    }

    pub fn string(&self, field: &str) -> Result<&str, ArgsError> {
        match self.get(field) {
            Some(Value::Str(v)) => Ok(v.as_str()),
            _ => Err(mismatch(field, "string")),
        }
    }

    pub fn int_list(&self, field: &str) -> Result<&[i32], ArgsError> {
        match self.get(field) {
            Some(Value::IntList(v)) => Ok(v.as_slice()),
            _ => Err(mismatch(field, "integer-list")),
        }
    }

    pub fn string_list(&self, field: &str) -> Result<&[String], ArgsError> {
        match self.get(field) {
            Some(Value::StrList(v)) => Ok(v.as_slice()),
            _ => Err(mismatch(field, "string-list")),
        }
    }

    /// Value of a caller-registered kind.
    pub fn other<T: Any>(&self, field: &str) -> Result<&T, ArgsError> {
        self.get(field)
            .and_then(|value| value.downcast_ref::<T>())
            .ok_or_else(|| mismatch(field, std::any::type_name::<T>()))
    }
}

fn mismatch(field: &str, expected: &'static str) -> ArgsError {
    ArgsError::FieldMismatch {
        field: field.to_string(),
        expected,
    }
}

impl Serialize for ParsedOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in &self.values {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::registry::{BOOLEAN, INTEGER, STRING};

    fn raw_args(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    fn multi_schema() -> Schema {
        Schema::new()
            .field("logging", "l", BOOLEAN)
            .field("port", "p", INTEGER)
            .field("directory", "d", STRING)
    }

    #[test]
    fn test_parse_keeps_schema_order() {
        let options = Args::default()
            .parse(&multi_schema(), &raw_args(&["-d", "/tmp", "-p", "1", "-l"]))
            .unwrap();
        let names: Vec<_> = options.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["logging", "port", "directory"]);
    }

    #[test]
    fn test_missing_flag_checked_before_kind() {
        let schema = Schema::new().unflagged("port", "long");
        let err = Args::default().parse(&schema, &[]).unwrap_err();
        assert!(matches!(err, ArgsError::MissingSchemaAnnotation { ref field } if field == "port"));
    }

    #[test]
    fn test_digit_flag_rejected_before_reading_arguments() {
        let schema = Schema::new()
            .field("group", "g", crate::args::registry::STRING_LIST)
            .field("one", "1", BOOLEAN);
        let err = Args::default()
            .parse(&schema, &raw_args(&["-g", "a", "-1"]))
            .unwrap_err();

        match err {
            ArgsError::InvalidFlagName { field, flag } => {
                assert_eq!(field, "one");
                assert_eq!(flag, "1");
            }
            other => panic!("Expected InvalidFlagName, got {:?}", other),
        }
    }

    #[test]
    fn test_dashed_flag_rejected() {
        let schema = Schema::new().field("port", "-p", INTEGER);
        let err = Args::default().parse(&schema, &[]).unwrap_err();
        assert_eq!(err.error_type(), "invalid_flag_name");
    }

    #[test]
    fn test_parse_all_collects_errors() {
        let schema = multi_schema().field("group", "g", "long");
        let errors = Args::default()
            .parse_all(&schema, &raw_args(&["-l", "x", "-p", "8080L"]))
            .unwrap_err();

        let kinds: Vec<_> = errors.iter().map(ArgsError::error_type).collect();
        assert_eq!(
            kinds,
            vec!["too_many_arguments", "invalid_value_format", "unsupported_field_type"]
        );
    }

    #[test]
    fn test_accessor_type_mismatch() {
        let options = Args::default().parse(&multi_schema(), &[]).unwrap();
        assert!(!options.boolean("logging").unwrap());
        assert!(matches!(
            options.int("logging"),
            Err(ArgsError::FieldMismatch { expected: "integer", .. })
        ));
        assert!(options.string("missing").is_err());
    }

    #[test]
    fn test_insert_replaces_existing_field() {
        let mut options = ParsedOptions::default();
        options.insert("port", Value::Int(1));
        options.insert("port", Value::Int(2));
        assert_eq!(options.len(), 1);
        assert!(!options.is_empty());
        assert_eq!(options.int("port").unwrap(), 2);
    }

    #[test]
    fn test_serialize_as_object() {
        let options = Args::default()
            .parse(&multi_schema(), &raw_args(&["-l", "-p", "8088", "-d", "/usr/logs"]))
            .unwrap();
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"logging": true, "port": 8088, "directory": "/usr/logs"})
        );
    }
}
