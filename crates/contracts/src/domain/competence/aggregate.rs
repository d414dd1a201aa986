use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::common::Identified;
use crate::domain::employee::Employee;

/// Rated competence of an employee.
///
/// Owning side of both relationships: the category and employee references
/// live here, while the entities on the other end only carry informational
/// back-references. A reference is meaningful downstream only when it points
/// at a persisted entity (one with a defined id).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Competence {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub level: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub category: Option<Category>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub employee: Option<Employee>,
}

impl Identified for Competence {
    fn entity_id(&self) -> Option<i64> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_competence_serializes_without_id() {
        let competence = Competence {
            name: Some("Rust".into()),
            level: Some(3),
            ..Competence::default()
        };

        let json = serde_json::to_value(&competence).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Rust", "level": 3 }));
    }

    #[test]
    fn deserializes_the_server_shape_with_nested_references() {
        let json = r#"{
            "id": 456,
            "name": "SQL",
            "level": 2,
            "category": { "id": 96675, "name": "Databases" },
            "employee": { "id": 47567, "name": "Doe", "firstName": "Jane" }
        }"#;

        let competence: Competence = serde_json::from_str(json).unwrap();
        assert_eq!(competence.entity_id(), Some(456));
        assert_eq!(competence.category.as_ref().and_then(|c| c.id), Some(96675));
        let employee = competence.employee.unwrap();
        assert_eq!(employee.id, Some(47567));
        assert_eq!(employee.first_name.as_deref(), Some("Jane"));
        assert_eq!(employee.competences, None);
    }
}
