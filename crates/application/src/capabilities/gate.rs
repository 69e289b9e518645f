use std::fmt::{Display, Formatter};

use timecard_domain::Scope;

/// A named capability query, used to gate privileged calls.
///
/// Scoped variants carry the requested scope; `None` uses the query's
/// default scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// See [`super::Capabilities::can_view_timesheets`].
    ViewTimesheets(Option<Scope>),
    /// See [`super::Capabilities::can_create_timesheets`].
    CreateTimesheets(Option<Scope>),
    /// See [`super::Capabilities::can_edit_timesheets`].
    EditTimesheets(Option<Scope>),
    /// See [`super::Capabilities::can_delete_timesheets`].
    DeleteTimesheets(Option<Scope>),
    /// See [`super::Capabilities::can_submit_timesheets`].
    SubmitTimesheets(Option<Scope>),
    /// See [`super::Capabilities::can_approve_timesheets`].
    ApproveTimesheets(Option<Scope>),
    /// See [`super::Capabilities::can_view_projects`].
    ViewProjects(Option<Scope>),
    /// See [`super::Capabilities::can_create_projects`].
    CreateProjects(Option<Scope>),
    /// See [`super::Capabilities::can_edit_projects`].
    EditProjects(Option<Scope>),
    /// See [`super::Capabilities::can_delete_projects`].
    DeleteProjects(Option<Scope>),
    /// See [`super::Capabilities::can_assign_projects`].
    AssignProjects(Option<Scope>),
    /// See [`super::Capabilities::can_view_employees`].
    ViewEmployees,
    /// See [`super::Capabilities::can_create_employees`].
    CreateEmployees,
    /// See [`super::Capabilities::can_edit_employees`].
    EditEmployees,
    /// See [`super::Capabilities::can_delete_employees`].
    DeleteEmployees,
    /// See [`super::Capabilities::can_view_departments`].
    ViewDepartments,
    /// See [`super::Capabilities::can_manage_departments`].
    ManageDepartments,
    /// See [`super::Capabilities::can_view_clients`].
    ViewClients,
    /// See [`super::Capabilities::can_manage_clients`].
    ManageClients,
    /// See [`super::Capabilities::can_view_users`].
    ViewUsers,
    /// See [`super::Capabilities::can_manage_users`].
    ManageUsers,
    /// See [`super::Capabilities::can_view_roles`].
    ViewRoles,
    /// See [`super::Capabilities::can_manage_roles`].
    ManageRoles,
    /// See [`super::Capabilities::can_view_profile`].
    ViewProfile,
    /// See [`super::Capabilities::can_edit_profile`].
    EditProfile,
    /// See [`super::Capabilities::can_view_reports`].
    ViewReports,
    /// See [`super::Capabilities::can_export_reports`].
    ExportReports,
    /// See [`super::Capabilities::can_access_administration`].
    AccessAdministration,
}

impl Capability {
    /// Returns every capability at its default scope.
    #[must_use]
    pub fn defaults() -> &'static [Self] {
        &[
            Self::ViewTimesheets(None),
            Self::CreateTimesheets(None),
            Self::EditTimesheets(None),
            Self::DeleteTimesheets(None),
            Self::SubmitTimesheets(None),
            Self::ApproveTimesheets(None),
            Self::ViewProjects(None),
            Self::CreateProjects(None),
            Self::EditProjects(None),
            Self::DeleteProjects(None),
            Self::AssignProjects(None),
            Self::ViewEmployees,
            Self::CreateEmployees,
            Self::EditEmployees,
            Self::DeleteEmployees,
            Self::ViewDepartments,
            Self::ManageDepartments,
            Self::ViewClients,
            Self::ManageClients,
            Self::ViewUsers,
            Self::ManageUsers,
            Self::ViewRoles,
            Self::ManageRoles,
            Self::ViewProfile,
            Self::EditProfile,
            Self::ViewReports,
            Self::ExportReports,
            Self::AccessAdministration,
        ]
    }

    /// Returns the stable name of the query.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::ViewTimesheets(_) => "view_timesheets",
            Self::CreateTimesheets(_) => "create_timesheets",
            Self::EditTimesheets(_) => "edit_timesheets",
            Self::DeleteTimesheets(_) => "delete_timesheets",
            Self::SubmitTimesheets(_) => "submit_timesheets",
            Self::ApproveTimesheets(_) => "approve_timesheets",
            Self::ViewProjects(_) => "view_projects",
            Self::CreateProjects(_) => "create_projects",
            Self::EditProjects(_) => "edit_projects",
            Self::DeleteProjects(_) => "delete_projects",
            Self::AssignProjects(_) => "assign_projects",
            Self::ViewEmployees => "view_employees",
            Self::CreateEmployees => "create_employees",
            Self::EditEmployees => "edit_employees",
            Self::DeleteEmployees => "delete_employees",
            Self::ViewDepartments => "view_departments",
            Self::ManageDepartments => "manage_departments",
            Self::ViewClients => "view_clients",
            Self::ManageClients => "manage_clients",
            Self::ViewUsers => "view_users",
            Self::ManageUsers => "manage_users",
            Self::ViewRoles => "view_roles",
            Self::ManageRoles => "manage_roles",
            Self::ViewProfile => "view_profile",
            Self::EditProfile => "edit_profile",
            Self::ViewReports => "view_reports",
            Self::ExportReports => "export_reports",
            Self::AccessAdministration => "access_administration",
        }
    }

    /// Returns the explicitly requested scope, if any.
    #[must_use]
    pub fn scope(&self) -> Option<Scope> {
        match self {
            Self::ViewTimesheets(scope)
            | Self::CreateTimesheets(scope)
            | Self::EditTimesheets(scope)
            | Self::DeleteTimesheets(scope)
            | Self::SubmitTimesheets(scope)
            | Self::ApproveTimesheets(scope)
            | Self::ViewProjects(scope)
            | Self::CreateProjects(scope)
            | Self::EditProjects(scope)
            | Self::DeleteProjects(scope)
            | Self::AssignProjects(scope) => *scope,
            _ => None,
        }
    }
}

impl Display for Capability {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self.scope() {
            Some(scope) => write!(formatter, "{} ({scope})", self.name()),
            None => formatter.write_str(self.name()),
        }
    }
}
