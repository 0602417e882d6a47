//! In-memory resource collections and identifier generation. The store is
//! an owned object handed to the boundary layer by reference; nothing here
//! is ambient or global, so every test run gets its own state.

mod seed;

use std::collections::HashMap;

use crate::error::ServiceError;
use crate::model::announcement::Announcement;
use crate::model::attendance::{AttendanceRecord, AttendanceSummary};
use crate::model::employee::Employee;
use crate::model::leave::{LeaveBalance, LeaveRequest};
use crate::model::message::Message;
use crate::model::payroll::{Payslip, PayrollSummary, SalaryStructure};
use crate::model::performance::{Feedback, PerformanceGoal, PerformanceReview};

/// Minimal interface a stored entity exposes to its collection: identity
/// plus the fixed id scheme for that collection.
pub trait Record {
    /// Resource kind as it appears in not-found messages.
    const KIND: &'static str;
    const PREFIX: &'static str;
    const PAD: usize;

    fn id(&self) -> &str;
    fn id_mut(&mut self) -> &mut String;
}

macro_rules! impl_record {
    ($t:ty, $kind:literal, $prefix:literal, $pad:literal) => {
        impl Record for $t {
            const KIND: &'static str = $kind;
            const PREFIX: &'static str = $prefix;
            const PAD: usize = $pad;

            fn id(&self) -> &str {
                &self.id
            }

            fn id_mut(&mut self) -> &mut String {
                &mut self.id
            }
        }
    };
}

impl_record!(Employee, "Employee", "EMP", 3);
impl_record!(AttendanceRecord, "Attendance record", "ATT", 3);
impl_record!(LeaveRequest, "Leave request", "LV", 3);
impl_record!(PerformanceGoal, "Goal", "GOAL", 3);
impl_record!(PerformanceReview, "Review", "REV", 3);
impl_record!(Feedback, "Feedback", "FB", 3);
impl_record!(Announcement, "Announcement", "ANN", 3);
impl_record!(Message, "Message", "MSG", 3);
impl_record!(Payslip, "Payslip", "PAY", 3);

/// One insertion-ordered sequence of same-typed entities.
#[derive(Debug)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids derive from the current length, zero-padded. A delete followed
    /// by a create can therefore hand out an id again; deliberate, not a
    /// monotonic counter.
    fn next_id(&self) -> String {
        format!("{}{:0pad$}", T::PREFIX, self.items.len() + 1, pad = T::PAD)
    }

    /// Assigns the next id and appends the record.
    pub fn insert(&mut self, mut record: T) -> &T {
        *record.id_mut() = self.next_id();
        self.items.push(record);
        &self.items[self.items.len() - 1]
    }

    /// Appends the record exactly as supplied, caller id included.
    pub fn push_raw(&mut self, record: T) -> &T {
        self.items.push(record);
        &self.items[self.items.len() - 1]
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|r| r.id() == id)
    }

    /// Applies `patch` to the matching record and returns it.
    pub fn update_with<F>(&mut self, id: &str, patch: F) -> Result<&T, ServiceError>
    where
        F: FnOnce(&mut T),
    {
        match self.items.iter_mut().position(|r| r.id() == id) {
            Some(idx) => {
                patch(&mut self.items[idx]);
                Ok(&self.items[idx])
            }
            None => Err(ServiceError::NotFound(T::KIND)),
        }
    }

    /// Splices the record out. Not idempotent: a second remove of the same
    /// id fails with `NotFound`.
    pub fn remove(&mut self, id: &str) -> Result<T, ServiceError> {
        match self.items.iter().position(|r| r.id() == id) {
            Some(idx) => Ok(self.items.remove(idx)),
            None => Err(ServiceError::NotFound(T::KIND)),
        }
    }

    pub fn all(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Every mutable collection plus the static read-only data sets.
#[derive(Debug, Default)]
pub struct ResourceStore {
    pub employees: Collection<Employee>,
    pub attendance: Collection<AttendanceRecord>,
    pub leaves: Collection<LeaveRequest>,
    pub goals: Collection<PerformanceGoal>,
    pub reviews: Collection<PerformanceReview>,
    pub feedback: Collection<Feedback>,
    pub announcements: Collection<Announcement>,
    pub messages: Collection<Message>,
    pub payslips: Collection<Payslip>,
    pub salary_structures: HashMap<String, SalaryStructure>,
    pub leave_balances: HashMap<String, LeaveBalance>,
    pub departments: Vec<String>,
    pub designations: Vec<String>,
    pub attendance_summary: AttendanceSummary,
    pub payroll_summary: PayrollSummary,
}

impl ResourceStore {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The demo data set the application boots with.
    pub fn seeded() -> Self {
        seed::build()
    }

    /// Login key lookup. Linear scan, exact match.
    pub fn find_by_email(&self, email: &str) -> Option<&Employee> {
        self.employees.all().iter().find(|e| e.email == email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::employee::EmployeeStatus;
    use crate::model::role::Role;
    use chrono::NaiveDate;

    fn employee(first: &str, last: &str) -> Employee {
        Employee {
            id: String::new(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}.{}@company.com", first.to_lowercase(), last.to_lowercase()),
            phone: "+91 98100 00000".to_string(),
            department: "Engineering".to_string(),
            designation: "Software Engineer".to_string(),
            role: Role::Employee,
            status: EmployeeStatus::Active,
            salary: 50_000.0,
            joining_date: NaiveDate::from_ymd_opt(2023, 1, 9).unwrap(),
            emergency_contact: None,
            documents: Vec::new(),
            profile_image: None,
        }
    }

    #[test]
    fn insert_assigns_prefixed_padded_ids() {
        let mut coll = Collection::<Employee>::new();
        let first = coll.insert(employee("Asha", "Rao")).id.clone();
        let second = coll.insert(employee("Dev", "Nair")).id.clone();
        assert_eq!(first, "EMP001");
        assert_eq!(second, "EMP002");
    }

    #[test]
    fn ids_are_unique_across_creates() {
        let mut coll = Collection::<Employee>::new();
        for i in 0..12 {
            coll.insert(employee(&format!("E{i}"), "X"));
        }
        let mut ids: Vec<_> = coll.all().iter().map(|e| e.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 12);
        assert!(ids.iter().all(|id| id.starts_with("EMP") && id.len() == 6));
    }

    #[test]
    fn update_preserves_unpatched_fields() {
        let mut coll = Collection::<Employee>::new();
        let id = coll.insert(employee("Asha", "Rao")).id.clone();
        let before = coll.get(&id).unwrap().clone();

        let updated = coll
            .update_with(&id, |e| e.department = "Sales".to_string())
            .unwrap();

        assert_eq!(updated.department, "Sales");
        assert_eq!(updated.first_name, before.first_name);
        assert_eq!(updated.email, before.email);
        assert_eq!(updated.salary, before.salary);
        assert_eq!(updated.joining_date, before.joining_date);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut coll = Collection::<Employee>::new();
        coll.insert(employee("Asha", "Rao"));
        let err = coll.update_with("EMP999", |_| {}).unwrap_err();
        assert_eq!(err.to_string(), "Employee not found");
    }

    #[test]
    fn remove_is_not_idempotent() {
        let mut coll = Collection::<Employee>::new();
        let id = coll.insert(employee("Asha", "Rao")).id.clone();

        assert!(coll.remove(&id).is_ok());
        assert!(coll.get(&id).is_none());
        assert!(matches!(
            coll.remove(&id),
            Err(ServiceError::NotFound("Employee"))
        ));
    }

    #[test]
    fn ids_derive_from_current_length() {
        // Known scheme quirk: after a delete, the next create repeats an id.
        let mut coll = Collection::<Employee>::new();
        coll.insert(employee("A", "A"));
        coll.insert(employee("B", "B"));
        coll.remove("EMP001").unwrap();
        let reused = coll.insert(employee("C", "C")).id.clone();
        assert_eq!(reused, "EMP002");
    }

    #[test]
    fn seeded_store_has_admin_login_key() {
        let store = ResourceStore::seeded();
        let admin = store.find_by_email("sunita.kapoor@company.com").unwrap();
        assert_eq!(admin.role, Role::Admin);
        assert_eq!(admin.id, "EMP001");
    }
}
