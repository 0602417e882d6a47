//! The complete route table. Everything the boundary can serve is
//! enumerated here, once, at startup.

use http::Method;

use crate::api::{
    admin, announcement, attendance, employee, leave, message, payroll, performance, reports,
};
use crate::auth::handlers as auth;
use crate::boundary::Router;

pub fn table() -> Router {
    let mut r = Router::new();

    // Auth
    r.route(Method::POST, "/auth/login", auth::login);
    r.route(Method::POST, "/auth/logout", auth::logout);

    // Employees
    r.route(Method::GET, "/employees", employee::list);
    r.route(Method::GET, "/employees/:id", employee::get);
    r.route(Method::POST, "/employees", employee::create);
    r.route(Method::PUT, "/employees/:id", employee::update);
    r.route(Method::DELETE, "/employees/:id", employee::delete);

    // Attendance
    r.route(Method::GET, "/attendance", attendance::list);
    r.route(Method::POST, "/attendance", attendance::create);
    r.route(Method::GET, "/attendance/summary", attendance::summary);

    // Leaves; literal /leaves/types before the parameterized update.
    r.route(Method::GET, "/leaves", leave::list);
    r.route(Method::POST, "/leaves", leave::create);
    r.route(Method::GET, "/leaves/types", leave::types);
    r.route(Method::PUT, "/leaves/:id", leave::update);
    r.route(Method::GET, "/leaves/balance/:employeeId", leave::balance);

    // Payroll (read-only)
    r.route(Method::GET, "/payroll/payslips", payroll::payslips);
    r.route(Method::GET, "/payroll/structure/:employeeId", payroll::structure);
    r.route(Method::GET, "/payroll/summary", payroll::summary);

    // Performance
    r.route(Method::GET, "/performance/goals", performance::goals);
    r.route(Method::POST, "/performance/goals", performance::create_goal);
    r.route(Method::GET, "/performance/reviews", performance::reviews);
    r.route(Method::GET, "/performance/feedback", performance::feedback);

    // Announcements
    r.route(Method::GET, "/announcements", announcement::list);
    r.route(Method::POST, "/announcements", announcement::create);

    // Messages
    r.route(Method::GET, "/messages", message::list);

    // Reports
    r.route(Method::GET, "/reports/dashboard", reports::dashboard);

    // Admin
    r.route(Method::GET, "/admin/departments", admin::departments);
    r.route(Method::GET, "/admin/designations", admin::designations);

    r
}
