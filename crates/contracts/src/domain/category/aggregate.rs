use serde::{Deserialize, Serialize};

use crate::domain::common::Identified;
use crate::domain::competence::Competence;

/// Competence category, e.g. a skill area employees are rated in.
///
/// Matches the server-side JSON shape: every field is optional and absent
/// fields are omitted on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,

    /// Competences filed under this category. Informational back-reference
    /// owned by the server; never written from the client side.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub competences: Option<Vec<Competence>>,
}

impl Identified for Category {
    fn entity_id(&self) -> Option<i64> {
        self.id
    }
}
