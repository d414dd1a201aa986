use serde::{Deserialize, Serialize};

use crate::domain::common::Identified;
use crate::domain::competence::Competence;

/// Employee whose competences are tracked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,

    #[serde(rename = "firstName", skip_serializing_if = "Option::is_none", default)]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub address: Option<String>,

    /// Competences held by this employee. Informational back-reference
    /// owned by the server; never written from the client side.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub competences: Option<Vec<Competence>>,
}

impl Identified for Employee {
    fn entity_id(&self) -> Option<i64> {
        self.id
    }
}
