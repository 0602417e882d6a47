//! Demo data set served by the mock boundary. Dates are fixed so seeded
//! state is identical from run to run.

use chrono::{NaiveDate, NaiveTime};

use super::ResourceStore;
use crate::model::announcement::{Announcement, AnnouncementStatus};
use crate::model::attendance::{AttendanceRecord, AttendanceStatus, AttendanceSummary};
use crate::model::employee::{EmergencyContact, Employee, EmployeeStatus};
use crate::model::leave::{BalanceEntry, LeaveBalance, LeaveRequest, LeaveStatus};
use crate::model::message::Message;
use crate::model::payroll::{Payslip, PayrollSummary, PayslipStatus, SalaryStructure};
use crate::model::performance::{Feedback, GoalStatus, PerformanceGoal, PerformanceReview};
use crate::model::role::Role;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid seed date")
}

fn t(h: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, min, 0).expect("valid seed time")
}

#[allow(clippy::too_many_arguments)]
fn employee(
    first: &str,
    last: &str,
    phone: &str,
    department: &str,
    designation: &str,
    role: Role,
    salary: f64,
    joined: NaiveDate,
) -> Employee {
    Employee {
        id: String::new(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}.{}@company.com", first.to_lowercase(), last.to_lowercase()),
        phone: phone.to_string(),
        department: department.to_string(),
        designation: designation.to_string(),
        role,
        status: EmployeeStatus::Active,
        salary,
        joining_date: joined,
        emergency_contact: None,
        documents: Vec::new(),
        profile_image: None,
    }
}

fn attendance(
    employee_id: &str,
    date: NaiveDate,
    status: AttendanceStatus,
    check_in: Option<NaiveTime>,
    check_out: Option<NaiveTime>,
    work_hours: f64,
    notes: &str,
) -> AttendanceRecord {
    AttendanceRecord {
        id: format!("ATT-{employee_id}-{date}"),
        employee_id: employee_id.to_string(),
        date,
        status,
        check_in,
        check_out,
        work_hours,
        location: "Office".to_string(),
        notes: notes.to_string(),
    }
}

pub fn build() -> ResourceStore {
    let mut store = ResourceStore::empty();

    // Roster. Insertion order fixes the ids: EMP001 is the admin account.
    store.employees.insert({
        let mut e = employee(
            "Sunita",
            "Kapoor",
            "+91 98100 11001",
            "Human Resources",
            "HR Director",
            Role::Admin,
            165_000.0,
            d(2018, 3, 12),
        );
        e.emergency_contact = Some(EmergencyContact {
            name: "Rohan Kapoor".to_string(),
            phone: "+91 98100 11002".to_string(),
            relation: "Spouse".to_string(),
        });
        e
    });
    store.employees.insert(employee(
        "Rajesh",
        "Kumar",
        "+91 98100 11003",
        "Human Resources",
        "HR Manager",
        Role::HR,
        95_000.0,
        d(2019, 7, 1),
    ));
    store.employees.insert(employee(
        "Priya",
        "Sharma",
        "+91 98100 11004",
        "Engineering",
        "Engineering Manager",
        Role::Manager,
        140_000.0,
        d(2019, 1, 21),
    ));
    store.employees.insert(employee(
        "Amit",
        "Patel",
        "+91 98100 11005",
        "Engineering",
        "Senior Software Engineer",
        Role::Employee,
        110_000.0,
        d(2020, 10, 5),
    ));
    store.employees.insert(employee(
        "Neha",
        "Gupta",
        "+91 98100 11006",
        "Engineering",
        "Software Engineer",
        Role::Employee,
        78_000.0,
        d(2022, 2, 14),
    ));
    store.employees.insert(employee(
        "Vikram",
        "Singh",
        "+91 98100 11007",
        "Sales",
        "Sales Executive",
        Role::Employee,
        62_000.0,
        d(2021, 6, 28),
    ));
    store.employees.insert({
        let mut e = employee(
            "Ananya",
            "Iyer",
            "+91 98100 11008",
            "Marketing",
            "Marketing Specialist",
            Role::Employee,
            58_000.0,
            d(2021, 11, 8),
        );
        e.status = EmployeeStatus::Inactive;
        e
    });
    store.employees.insert(employee(
        "Arjun",
        "Mehta",
        "+91 98100 11009",
        "Sales",
        "Sales Manager",
        Role::Manager,
        120_000.0,
        d(2018, 9, 17),
    ));

    store.departments = vec![
        "Engineering".to_string(),
        "Human Resources".to_string(),
        "Sales".to_string(),
        "Marketing".to_string(),
        "Finance".to_string(),
    ];
    store.designations = vec![
        "HR Director".to_string(),
        "HR Manager".to_string(),
        "Engineering Manager".to_string(),
        "Senior Software Engineer".to_string(),
        "Software Engineer".to_string(),
        "Sales Manager".to_string(),
        "Sales Executive".to_string(),
        "Marketing Specialist".to_string(),
    ];

    // Attendance for the first week of August 2025.
    for date in [d(2025, 8, 4), d(2025, 8, 5), d(2025, 8, 6)] {
        store.attendance.push_raw(attendance(
            "EMP004",
            date,
            AttendanceStatus::Present,
            Some(t(9, 0)),
            Some(t(18, 0)),
            9.0,
            "",
        ));
    }
    store.attendance.push_raw(attendance(
        "EMP005",
        d(2025, 8, 4),
        AttendanceStatus::Late,
        Some(t(10, 30)),
        Some(t(18, 0)),
        7.5,
        "Traffic delay",
    ));
    store.attendance.push_raw(attendance(
        "EMP005",
        d(2025, 8, 5),
        AttendanceStatus::HalfDay,
        Some(t(9, 0)),
        Some(t(13, 0)),
        4.0,
        "",
    ));
    store.attendance.push_raw(attendance(
        "EMP006",
        d(2025, 8, 4),
        AttendanceStatus::Absent,
        None,
        None,
        0.0,
        "",
    ));

    store.attendance_summary = AttendanceSummary {
        total_working_days: 22,
        present_days: 20,
        absent_days: 1,
        half_days: 1,
        late_days: 2,
        leaves: 1,
        attendance_percentage: 90.9,
    };

    // Leave requests: LV001 stays Pending so the approval flow has work.
    store.leaves.insert(LeaveRequest {
        id: String::new(),
        employee_id: "EMP004".to_string(),
        employee_name: "Amit Patel".to_string(),
        leave_type: "casual".to_string(),
        start_date: d(2025, 8, 18),
        end_date: d(2025, 8, 20),
        days: 3.0,
        reason: "Family function".to_string(),
        status: LeaveStatus::Pending,
        applied_on: d(2025, 8, 1),
    });
    store.leaves.insert(LeaveRequest {
        id: String::new(),
        employee_id: "EMP005".to_string(),
        employee_name: "Neha Gupta".to_string(),
        leave_type: "sick".to_string(),
        start_date: d(2025, 7, 22),
        end_date: d(2025, 7, 23),
        days: 2.0,
        reason: "Fever".to_string(),
        status: LeaveStatus::Approved,
        applied_on: d(2025, 7, 21),
    });
    store.leaves.insert(LeaveRequest {
        id: String::new(),
        employee_id: "EMP006".to_string(),
        employee_name: "Vikram Singh".to_string(),
        leave_type: "earned".to_string(),
        start_date: d(2025, 7, 7),
        end_date: d(2025, 7, 11),
        days: 5.0,
        reason: "Vacation".to_string(),
        status: LeaveStatus::Rejected,
        applied_on: d(2025, 6, 30),
    });
    store.leaves.insert(LeaveRequest {
        id: String::new(),
        employee_id: "EMP002".to_string(),
        employee_name: "Rajesh Kumar".to_string(),
        leave_type: "casual".to_string(),
        start_date: d(2025, 8, 25),
        end_date: d(2025, 8, 25),
        days: 1.0,
        reason: "Personal errand".to_string(),
        status: LeaveStatus::Pending,
        applied_on: d(2025, 8, 5),
    });

    store.leave_balances.insert(
        "EMP004".to_string(),
        LeaveBalance {
            casual: BalanceEntry::used(12, 4),
            sick: BalanceEntry::used(10, 1),
            earned: BalanceEntry::used(15, 5),
        },
    );
    store.leave_balances.insert(
        "EMP005".to_string(),
        LeaveBalance {
            casual: BalanceEntry::used(12, 2),
            sick: BalanceEntry::used(10, 3),
            earned: BalanceEntry::fresh(15),
        },
    );

    // Payroll. Structures and slips are read-only through the boundary.
    for (emp, basic) in [("EMP001", 99_000.0), ("EMP004", 66_000.0), ("EMP005", 46_800.0)] {
        let hra = basic * 0.4;
        let conveyance = 1_600.0;
        let special_allowance = basic * 0.25;
        let pf = basic * 0.12;
        let tax = basic * 0.1;
        let gross = basic + hra + conveyance + special_allowance;
        store.salary_structures.insert(
            emp.to_string(),
            SalaryStructure {
                employee_id: emp.to_string(),
                basic,
                hra,
                conveyance,
                special_allowance,
                pf,
                tax,
                gross,
                net: gross - pf - tax,
            },
        );
    }

    for (emp, month, basic, paid_on) in [
        ("EMP004", "2025-06", 66_000.0, Some(d(2025, 6, 30))),
        ("EMP004", "2025-07", 66_000.0, Some(d(2025, 7, 31))),
        ("EMP005", "2025-06", 46_800.0, Some(d(2025, 6, 30))),
        ("EMP005", "2025-07", 46_800.0, None),
    ] {
        let allowances = basic * 0.65;
        let deductions = basic * 0.22;
        store.payslips.insert(Payslip {
            id: String::new(),
            employee_id: emp.to_string(),
            month: month.to_string(),
            basic,
            allowances,
            deductions,
            net_pay: basic + allowances - deductions,
            status: if paid_on.is_some() {
                PayslipStatus::Paid
            } else {
                PayslipStatus::Unpaid
            },
            paid_on,
        });
    }

    store.payroll_summary = PayrollSummary {
        month: "2025-07".to_string(),
        total_gross: 612_400.0,
        total_deductions: 98_200.0,
        total_net_salary: 514_200.0,
        employees_paid: 7,
    };

    // Performance artifacts. Only goals are creatable through the boundary.
    store.goals.insert(PerformanceGoal {
        id: String::new(),
        employee_id: "EMP004".to_string(),
        title: "Ship the billing module".to_string(),
        description: "Own the invoicing rewrite end to end".to_string(),
        target_date: Some(d(2025, 9, 30)),
        progress: 60,
        status: GoalStatus::InProgress,
    });
    store.goals.insert(PerformanceGoal {
        id: String::new(),
        employee_id: "EMP005".to_string(),
        title: "Cut page load times by 30%".to_string(),
        description: String::new(),
        target_date: Some(d(2025, 12, 15)),
        progress: 0,
        status: GoalStatus::NotStarted,
    });
    store.reviews.insert(PerformanceReview {
        id: String::new(),
        employee_id: "EMP004".to_string(),
        reviewer: "Priya Sharma".to_string(),
        period: "H1 2025".to_string(),
        rating: 4.5,
        comments: "Consistently strong delivery".to_string(),
    });
    store.reviews.insert(PerformanceReview {
        id: String::new(),
        employee_id: "EMP005".to_string(),
        reviewer: "Priya Sharma".to_string(),
        period: "H1 2025".to_string(),
        rating: 3.8,
        comments: "Solid; needs more ownership of rollouts".to_string(),
    });
    store.feedback.insert(Feedback {
        id: String::new(),
        employee_id: "EMP004".to_string(),
        from: "Priya Sharma".to_string(),
        category: "Appreciation".to_string(),
        message: "Great incident handling last week".to_string(),
        given_on: d(2025, 7, 18),
    });
    store.feedback.insert(Feedback {
        id: String::new(),
        employee_id: "EMP005".to_string(),
        from: "Amit Patel".to_string(),
        category: "Peer".to_string(),
        message: "Very helpful during the migration".to_string(),
        given_on: d(2025, 7, 25),
    });

    // One archived announcement so the Active-only listing has something
    // to hide.
    store.announcements.insert(Announcement {
        id: String::new(),
        title: "Quarterly town hall".to_string(),
        content: "Join us on the 14th in the main auditorium.".to_string(),
        category: "Event".to_string(),
        posted_by: "Sunita Kapoor".to_string(),
        posted_on: d(2025, 8, 1),
        status: AnnouncementStatus::Active,
    });
    store.announcements.insert(Announcement {
        id: String::new(),
        title: "New health insurance partner".to_string(),
        content: "Policy cards will be reissued this month.".to_string(),
        category: "Policy".to_string(),
        posted_by: "Rajesh Kumar".to_string(),
        posted_on: d(2025, 7, 28),
        status: AnnouncementStatus::Active,
    });
    store.announcements.insert(Announcement {
        id: String::new(),
        title: "Office closed for Holi".to_string(),
        content: "The office stays closed on March 14.".to_string(),
        category: "Holiday".to_string(),
        posted_by: "Sunita Kapoor".to_string(),
        posted_on: d(2025, 3, 10),
        status: AnnouncementStatus::Archived,
    });

    store.messages.insert(Message {
        id: String::new(),
        from: "EMP001".to_string(),
        to: "EMP004".to_string(),
        subject: "Document verification".to_string(),
        content: "Please upload your updated address proof.".to_string(),
        sent_on: d(2025, 8, 4),
        read: false,
    });
    store.messages.insert(Message {
        id: String::new(),
        from: "EMP004".to_string(),
        to: "EMP001".to_string(),
        subject: "Re: Document verification".to_string(),
        content: "Uploaded, thanks for the reminder.".to_string(),
        sent_on: d(2025, 8, 5),
        read: true,
    });
    store.messages.insert(Message {
        id: String::new(),
        from: "EMP003".to_string(),
        to: "EMP005".to_string(),
        subject: "Sprint retro notes".to_string(),
        content: "Retro moved to Thursday 4pm.".to_string(),
        sent_on: d(2025, 8, 6),
        read: false,
    });

    store
}
