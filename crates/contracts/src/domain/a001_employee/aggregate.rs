use serde::{Deserialize, Serialize};

use crate::domain::common::EntityMetadata;

/// Employee record as returned by the backend.
///
/// Identity is owned by the backend; the id is an opaque string and is never
/// minted client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub position: String,
    pub salary: i64,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

/// Create/update payload for an employee.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateEmployee {
    pub name: String,
    pub age: u32,
    pub position: String,
    pub salary: i64,
}

impl CreateEmployee {
    /// Validate the form rules enforced before any request is made.
    ///
    /// The backend re-validates; these are the same rules so the user gets
    /// feedback without a round trip. Messages are user-facing (Indonesian).
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut issues = Vec::new();
        if self.name.trim().is_empty() {
            issues.push("Nama wajib diisi".to_string());
        }
        if self.age < 18 {
            issues.push("Umur minimal 18 tahun".to_string());
        }
        if self.position.trim().is_empty() {
            issues.push("Posisi wajib diisi".to_string());
        }
        if self.salary <= 0 {
            issues.push("Gaji wajib diisi".to_string());
        }
        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}

impl From<&Employee> for CreateEmployee {
    fn from(e: &Employee) -> Self {
        Self {
            name: e.name.clone(),
            age: e.age,
            position: e.position.clone(),
            salary: e.salary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CreateEmployee {
        CreateEmployee {
            name: "Budi Santoso".to_string(),
            age: 27,
            position: "Staff Gudang".to_string(),
            salary: 4_500_000,
        }
    }

    #[test]
    fn test_valid_employee_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_underage_rejected() {
        let mut e = valid();
        e.age = 17;
        let issues = e.validate().unwrap_err();
        assert_eq!(issues, vec!["Umur minimal 18 tahun".to_string()]);
    }

    #[test]
    fn test_all_issues_collected() {
        let e = CreateEmployee {
            name: "  ".to_string(),
            age: 16,
            position: String::new(),
            salary: 0,
        };
        assert_eq!(e.validate().unwrap_err().len(), 4);
    }

    #[test]
    fn test_employee_deserializes_camel_case() {
        let json = r#"{
            "id": "emp-42",
            "name": "Siti",
            "age": 31,
            "position": "HRD",
            "salary": 7000000,
            "createdAt": "2025-01-10T08:00:00Z",
            "updatedAt": "2025-01-11T09:30:00Z",
            "deletedAt": null
        }"#;
        let e: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(e.id, "emp-42");
        assert_eq!(e.salary, 7_000_000);
        assert!(!e.metadata.is_deleted());
    }
}
