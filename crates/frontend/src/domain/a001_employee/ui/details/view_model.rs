use contracts::domain::a001_employee::{CreateEmployee, Employee};
use leptos::prelude::*;
use std::rc::Rc;

use crate::domain::a001_employee::api;

/// Form fields are kept as raw strings so partially typed numbers
/// do not fight the inputs; parsing happens on validation.
#[derive(Clone, Debug, Default)]
pub struct EmployeeForm {
    pub name: String,
    pub age: String,
    pub position: String,
    pub salary: String,
}

impl EmployeeForm {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            age: employee.age.to_string(),
            position: employee.position.clone(),
            salary: employee.salary.to_string(),
        }
    }

    /// Parse into the wire payload. Unparseable numbers become zero and
    /// are rejected by the payload validation with the proper message.
    pub fn to_payload(&self) -> CreateEmployee {
        CreateEmployee {
            name: self.name.trim().to_string(),
            age: self.age.trim().parse().unwrap_or(0),
            position: self.position.trim().to_string(),
            salary: self.salary.trim().parse().unwrap_or(0),
        }
    }
}

/// ViewModel for the employee details form
#[derive(Clone)]
pub struct EmployeeDetailsViewModel {
    pub form: RwSignal<EmployeeForm>,
    pub errors: RwSignal<Vec<String>>,
    pub saving: RwSignal<bool>,
    /// `Some` when editing an existing row.
    pub editing_id: Option<String>,
}

impl EmployeeDetailsViewModel {
    pub fn new(existing: Option<&Employee>) -> Self {
        let form = match existing {
            Some(employee) => EmployeeForm::from_employee(employee),
            None => EmployeeForm::default(),
        };
        Self {
            form: RwSignal::new(form),
            errors: RwSignal::new(Vec::new()),
            saving: RwSignal::new(false),
            editing_id: existing.map(|e| e.id.clone()),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Validate and save; calls `on_saved` only after the server accepts.
    pub fn save_command(&self, token: String, on_saved: Rc<dyn Fn(Employee)>) {
        let payload = self.form.get().to_payload();

        if let Err(issues) = payload.validate() {
            self.errors.set(issues);
            return;
        }
        self.errors.set(Vec::new());
        self.saving.set(true);

        let errors = self.errors;
        let saving = self.saving;
        let editing_id = self.editing_id.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = match &editing_id {
                Some(id) => api::update_employee(id, &payload, &token).await,
                None => api::create_employee(&payload, &token).await,
            };
            saving.set(false);
            match result {
                Ok(employee) => (on_saved)(employee),
                Err(e) => errors.set(vec![e]),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use contracts::domain::common::EntityMetadata;

    fn sample_employee() -> Employee {
        let ts = Utc.with_ymd_and_hms(2025, 1, 10, 8, 0, 0).unwrap();
        Employee {
            id: "emp-42".to_string(),
            name: "Siti Rahma".to_string(),
            age: 31,
            position: "HRD".to_string(),
            salary: 7_000_000,
            metadata: EntityMetadata {
                created_at: ts,
                updated_at: ts,
                deleted_at: None,
            },
        }
    }

    #[test]
    fn test_create_mode_starts_empty() {
        let vm = EmployeeDetailsViewModel::new(None);
        assert!(!vm.is_edit_mode());
        assert!(vm.form.get_untracked().name.is_empty());
    }

    #[test]
    fn test_edit_mode_prefills_from_row() {
        let employee = sample_employee();
        let vm = EmployeeDetailsViewModel::new(Some(&employee));
        assert!(vm.is_edit_mode());
        assert_eq!(vm.editing_id.as_deref(), Some("emp-42"));

        let form = vm.form.get_untracked();
        assert_eq!(form.name, "Siti Rahma");
        assert_eq!(form.age, "31");
        assert_eq!(form.salary, "7000000");
    }

    #[test]
    fn test_form_round_trips_to_payload() {
        let form = EmployeeForm::from_employee(&sample_employee());
        let payload = form.to_payload();
        assert_eq!(payload.age, 31);
        assert_eq!(payload.salary, 7_000_000);
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_unparseable_numbers_fail_validation() {
        let form = EmployeeForm {
            name: "Budi".to_string(),
            age: "abc".to_string(),
            position: "Staff".to_string(),
            salary: "".to_string(),
        };
        let issues = form.to_payload().validate().unwrap_err();
        assert!(issues.contains(&"Umur minimal 18 tahun".to_string()));
        assert!(issues.contains(&"Gaji wajib diisi".to_string()));
    }
}
