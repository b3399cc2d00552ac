use serde::{Deserialize, Serialize};

use crate::args::{FieldSpec, Schema};

/// Root of a schema file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaFile {
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
}

/// One `[[fields]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDecl {
    /// Field name in the output (e.g., "port").
    pub name: String,
    /// Flag without the leading dash (e.g., "p").
    #[serde(default)]
    pub flag: Option<String>,
    /// Registry kind identifier (e.g., "integer", "string-list").
    pub kind: String,
}

impl SchemaFile {
    pub fn to_schema(&self) -> Schema {
        self.fields
            .iter()
            .map(|decl| FieldSpec {
                field: decl.name.clone(),
                flag: decl.flag.clone(),
                kind: decl.kind.clone(),
            })
            .collect()
    }
}
