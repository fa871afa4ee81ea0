use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::domain::types::{DocumentTypeId, DocumentTypeName};
use crate::domain::{Record, Tabular};
use crate::search::Searchable;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DocumentType {
    pub id: DocumentTypeId,
    pub document_type_code: String,
    pub document_type: DocumentTypeName,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewDocumentType {
    pub document_type_code: String,
    pub document_type: DocumentTypeName,
}

impl Record for DocumentType {
    fn record_id(&self) -> i32 {
        self.id.get()
    }

    fn display_name(&self) -> String {
        self.document_type.to_string()
    }
}

impl Searchable for DocumentType {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Owned(self.id.padded()),
            Cow::Borrowed(&self.document_type_code),
            Cow::Borrowed(self.document_type.as_str()),
        ]
    }
}

impl Tabular for DocumentType {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Code", "Document Type"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.padded(),
            self.document_type_code.clone(),
            self.document_type.to_string(),
        ]
    }
}
