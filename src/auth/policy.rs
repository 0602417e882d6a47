//! The static role->route matrix. One table, one evaluation function,
//! consumed by both the route guard and the navigation menu so the two
//! can never diverge.

use crate::auth::session::Principal;
use crate::model::role::Role;

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// No session; the caller redirects to login.
    Unauthenticated,
    Allowed,
    /// Terminal access-denied view; no further navigation state change.
    Denied,
}

pub struct RoutePolicy {
    pub path: &'static str,
    /// Menu label when the route is offered as a navigation link.
    pub menu: Option<&'static str>,
    /// `None` means any authenticated role.
    pub allowed: Option<&'static [Role]>,
}

const ADMIN_ONLY: &[Role] = &[Role::Admin];
const ADMIN_HR: &[Role] = &[Role::Admin, Role::HR];
const ADMIN_HR_MANAGER: &[Role] = &[Role::Admin, Role::HR, Role::Manager];

/// Literal paths come before their parameterized siblings; first match
/// wins during lookup.
pub static ROUTES: &[RoutePolicy] = &[
    RoutePolicy {
        path: "/dashboard",
        menu: Some("Dashboard"),
        allowed: None,
    },
    RoutePolicy {
        path: "/employees",
        menu: Some("Employees"),
        allowed: Some(ADMIN_HR_MANAGER),
    },
    RoutePolicy {
        path: "/employees/new",
        menu: None,
        allowed: Some(ADMIN_HR),
    },
    RoutePolicy {
        path: "/employees/:id",
        menu: None,
        allowed: Some(ADMIN_HR_MANAGER),
    },
    RoutePolicy {
        path: "/employees/:id/edit",
        menu: None,
        allowed: Some(ADMIN_HR),
    },
    RoutePolicy {
        path: "/attendance",
        menu: Some("Attendance"),
        allowed: None,
    },
    RoutePolicy {
        path: "/leaves",
        menu: Some("Leaves"),
        allowed: None,
    },
    RoutePolicy {
        path: "/payroll",
        menu: Some("Payroll"),
        allowed: Some(ADMIN_HR),
    },
    RoutePolicy {
        path: "/performance",
        menu: Some("Performance"),
        allowed: None,
    },
    RoutePolicy {
        path: "/messages",
        menu: Some("Messages"),
        allowed: None,
    },
    RoutePolicy {
        path: "/reports",
        menu: Some("Reports"),
        allowed: Some(ADMIN_HR_MANAGER),
    },
    RoutePolicy {
        path: "/admin",
        menu: Some("Admin"),
        allowed: Some(ADMIN_ONLY),
    },
    RoutePolicy {
        path: "/profile",
        menu: None,
        allowed: None,
    },
];

/// The one policy decision. No session -> Unauthenticated; declared set
/// absent or containing the principal's role -> Allowed; otherwise
/// Denied. Paths outside the table fall back to "any authenticated".
pub fn evaluate(principal: Option<&Principal>, path: &str) -> RouteAccess {
    let Some(principal) = principal else {
        return RouteAccess::Unauthenticated;
    };

    match find_policy(path).and_then(|p| p.allowed) {
        None => RouteAccess::Allowed,
        Some(roles) if roles.contains(&principal.role) => RouteAccess::Allowed,
        Some(_) => RouteAccess::Denied,
    }
}

/// A navigation link offered to the current principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub name: &'static str,
    pub path: &'static str,
}

/// The menu is a projection of the same table the guard consults: a role
/// that would be denied never sees the link. UI affordance only, not a
/// security boundary.
pub fn menu_for(principal: Option<&Principal>) -> Vec<MenuItem> {
    let Some(principal) = principal else {
        return Vec::new();
    };

    ROUTES
        .iter()
        .filter_map(|route| route.menu.map(|name| (route, name)))
        .filter(|(route, _)| evaluate(Some(principal), route.path) == RouteAccess::Allowed)
        .map(|(route, name)| MenuItem {
            name,
            path: route.path,
        })
        .collect()
}

fn find_policy(path: &str) -> Option<&'static RoutePolicy> {
    ROUTES.iter().find(|p| pattern_matches(p.path, path))
}

fn pattern_matches(pattern: &str, path: &str) -> bool {
    let pattern_parts: Vec<&str> = pattern.trim_matches('/').split('/').collect();
    let path_parts: Vec<&str> = path.trim_matches('/').split('/').collect();

    pattern_parts.len() == path_parts.len()
        && pattern_parts
            .iter()
            .zip(&path_parts)
            .all(|(pat, part)| pat.starts_with(':') || pat == part)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(role: Role) -> Principal {
        Principal {
            id: "EMP999".to_string(),
            name: "Test User".to_string(),
            email: "test.user@company.com".to_string(),
            role,
            department: "Engineering".to_string(),
            designation: "Engineer".to_string(),
            profile_image: None,
            token: "fake-jwt-token-EMP999".to_string(),
        }
    }

    #[test]
    fn no_session_redirects_to_login() {
        assert_eq!(evaluate(None, "/dashboard"), RouteAccess::Unauthenticated);
        assert_eq!(evaluate(None, "/payroll"), RouteAccess::Unauthenticated);
    }

    #[test]
    fn guard_matches_declared_table_exactly() {
        let cases: &[(&str, &[Role], &[Role])] = &[
            (
                "/dashboard",
                &[Role::Admin, Role::HR, Role::Manager, Role::Employee],
                &[],
            ),
            (
                "/employees",
                &[Role::Admin, Role::HR, Role::Manager],
                &[Role::Employee],
            ),
            (
                "/payroll",
                &[Role::Admin, Role::HR],
                &[Role::Manager, Role::Employee],
            ),
            (
                "/admin",
                &[Role::Admin],
                &[Role::HR, Role::Manager, Role::Employee],
            ),
            (
                "/reports",
                &[Role::Admin, Role::HR, Role::Manager],
                &[Role::Employee],
            ),
        ];

        for (path, allowed, denied) in cases {
            for role in *allowed {
                assert_eq!(
                    evaluate(Some(&principal(*role)), path),
                    RouteAccess::Allowed,
                    "{role:?} should reach {path}"
                );
            }
            for role in *denied {
                assert_eq!(
                    evaluate(Some(&principal(*role)), path),
                    RouteAccess::Denied,
                    "{role:?} should be denied {path}"
                );
            }
        }
    }

    #[test]
    fn parameterized_paths_inherit_their_policy() {
        let manager = principal(Role::Manager);
        assert_eq!(
            evaluate(Some(&manager), "/employees/EMP004"),
            RouteAccess::Allowed
        );
        assert_eq!(
            evaluate(Some(&manager), "/employees/EMP004/edit"),
            RouteAccess::Denied
        );
        assert_eq!(
            evaluate(Some(&manager), "/employees/new"),
            RouteAccess::Denied
        );
    }

    #[test]
    fn menu_offers_exactly_the_reachable_links() {
        for role in [Role::Admin, Role::HR, Role::Manager, Role::Employee] {
            let p = principal(role);
            let menu = menu_for(Some(&p));
            for item in &menu {
                assert_eq!(evaluate(Some(&p), item.path), RouteAccess::Allowed);
            }
            // Nothing reachable-with-a-label is missing from the menu.
            for route in ROUTES.iter().filter(|r| r.menu.is_some()) {
                let offered = menu.iter().any(|m| m.path == route.path);
                let allowed = evaluate(Some(&p), route.path) == RouteAccess::Allowed;
                assert_eq!(offered, allowed, "{role:?} menu vs guard on {}", route.path);
            }
        }
    }

    #[test]
    fn employee_role_menu_is_the_short_one() {
        let menu = menu_for(Some(&principal(Role::Employee)));
        let names: Vec<_> = menu.iter().map(|m| m.name).collect();
        assert_eq!(
            names,
            [
                "Dashboard",
                "Attendance",
                "Leaves",
                "Performance",
                "Messages"
            ]
        );
    }

    #[test]
    fn menu_is_empty_when_unauthenticated() {
        assert!(menu_for(None).is_empty());
    }
}
