//! Schema — statically declared field → (flag, kind) bindings.

/// One bound field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name in the target record (e.g., "port").
    pub field: String,
    /// Flag without the leading `-` (e.g., "p"). `None` is rejected at parse time.
    pub flag: Option<String>,
    /// Registry kind identifier (e.g., "integer").
    pub kind: String,
}

/// Ordered list of field bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `field` to `-<flag>`, parsed as `kind`.
    pub fn field(mut self, field: &str, flag: &str, kind: &str) -> Self {
        self.fields.push(FieldSpec {
            field: field.to_string(),
            flag: Some(flag.to_string()),
            kind: kind.to_string(),
        });
        self
    }

    /// Declare a field with no flag.
    pub fn unflagged(mut self, field: &str, kind: &str) -> Self {
        self.fields.push(FieldSpec {
            field: field.to_string(),
            flag: None,
            kind: kind.to_string(),
        });
        self
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }
}

impl FromIterator<FieldSpec> for Schema {
    fn from_iter<I: IntoIterator<Item = FieldSpec>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
