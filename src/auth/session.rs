use serde::Serialize;

use crate::model::employee::Employee;
use crate::model::role::Role;

/// The authenticated identity. Exactly one exists per process while a
/// session is open; it drives every access-policy check.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: String,
    pub designation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    /// Bearer token handed back at login. Not part of the `user` view.
    #[serde(skip_serializing)]
    pub token: String,
}

impl Principal {
    pub fn for_employee(employee: &Employee) -> Self {
        Self {
            id: employee.id.clone(),
            name: format!("{} {}", employee.first_name, employee.last_name),
            email: employee.email.clone(),
            role: employee.role,
            department: employee.department.clone(),
            designation: employee.designation.clone(),
            profile_image: employee.profile_image.clone(),
            token: format!("fake-jwt-token-{}", employee.id),
        }
    }
}

/// The single session slot. Only this type mutates it: created on login,
/// destroyed on logout, no expiry in between.
#[derive(Debug, Default)]
pub struct Session {
    current: Option<Principal>,
}

impl Session {
    pub fn establish(&mut self, principal: Principal) {
        self.current = Some(principal);
    }

    /// Unconditional; clearing an empty slot is fine.
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Principal> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }
}
