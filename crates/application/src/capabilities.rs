//! Named capability queries derived from a session's permission set.
//!
//! Capabilities only decide which actions the client offers. The backend
//! re-checks every request and remains the authority.

mod gate;
mod memo;
mod summary;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use timecard_domain::{Permission, PermissionSet, Scope, ScopedAction, ScopedResource, SessionUser};

use crate::resolve_scoped_permission;

pub use gate::Capability;
pub use memo::CapabilityMemo;
pub use summary::CapabilitySummary;

const MANAGER_PERMISSIONS: &[Permission] = &[
    Permission::ApproveTeamTimesheet,
    Permission::ViewTeamTimesheet,
    Permission::ViewTeamEmployee,
];

const REPORT_VIEW_PERMISSIONS: &[Permission] = &[
    Permission::ViewTeamReports,
    Permission::ViewAllReports,
    Permission::ViewHrReports,
    Permission::ViewOwnReports,
];

/// Capability facade over one immutable permission set.
#[derive(Debug, Clone)]
pub struct Capabilities {
    permissions: Arc<PermissionSet>,
}

impl Capabilities {
    /// Creates the facade for a permission set.
    #[must_use]
    pub fn new(permissions: Arc<PermissionSet>) -> Self {
        Self { permissions }
    }

    /// Creates the facade for the signed-in user, or a deny-all facade.
    #[must_use]
    pub fn for_user(user: Option<&SessionUser>) -> Self {
        user.map_or_else(Self::none, |user| Self::new(Arc::clone(user.permissions())))
    }

    /// Returns a facade that denies every capability.
    #[must_use]
    pub fn none() -> Self {
        Self::new(Arc::new(PermissionSet::empty()))
    }

    /// Returns the permission set this facade was derived from.
    #[must_use]
    pub fn permissions(&self) -> &Arc<PermissionSet> {
        &self.permissions
    }

    fn scoped(&self, resource: ScopedResource, action: ScopedAction, scope: Scope) -> bool {
        resolve_scoped_permission(Some(&self.permissions), resource, action, scope)
    }

    fn timesheet(&self, action: ScopedAction, scope: Option<Scope>, default: Scope) -> bool {
        self.scoped(ScopedResource::Timesheet, action, scope.unwrap_or(default))
    }

    fn project(&self, action: ScopedAction, scope: Option<Scope>, default: Scope) -> bool {
        self.scoped(ScopedResource::Project, action, scope.unwrap_or(default))
    }

    fn has(&self, permission: Permission) -> bool {
        self.permissions.contains(permission)
    }

    /// Whether timesheets can be viewed at `scope` (default own).
    #[must_use]
    pub fn can_view_timesheets(&self, scope: Option<Scope>) -> bool {
        self.timesheet(ScopedAction::View, scope, Scope::Own)
    }

    /// Whether timesheets can be created at `scope` (default own).
    #[must_use]
    pub fn can_create_timesheets(&self, scope: Option<Scope>) -> bool {
        self.timesheet(ScopedAction::Create, scope, Scope::Own)
    }

    /// Whether timesheets can be edited at `scope` (default own).
    #[must_use]
    pub fn can_edit_timesheets(&self, scope: Option<Scope>) -> bool {
        self.timesheet(ScopedAction::Edit, scope, Scope::Own)
    }

    /// Whether timesheets can be deleted at `scope` (default own).
    #[must_use]
    pub fn can_delete_timesheets(&self, scope: Option<Scope>) -> bool {
        self.timesheet(ScopedAction::Delete, scope, Scope::Own)
    }

    /// Whether timesheets can be submitted at `scope` (default own).
    #[must_use]
    pub fn can_submit_timesheets(&self, scope: Option<Scope>) -> bool {
        self.timesheet(ScopedAction::Submit, scope, Scope::Own)
    }

    /// Whether timesheets can be approved at `scope` (default team).
    #[must_use]
    pub fn can_approve_timesheets(&self, scope: Option<Scope>) -> bool {
        self.timesheet(ScopedAction::Approve, scope, Scope::Team)
    }

    /// Whether projects can be viewed at `scope` (default assigned).
    #[must_use]
    pub fn can_view_projects(&self, scope: Option<Scope>) -> bool {
        self.project(ScopedAction::View, scope, Scope::Assigned)
    }

    /// Whether projects can be created at `scope` (default all).
    #[must_use]
    pub fn can_create_projects(&self, scope: Option<Scope>) -> bool {
        self.project(ScopedAction::Create, scope, Scope::All)
    }

    /// Whether projects can be edited at `scope` (default team).
    #[must_use]
    pub fn can_edit_projects(&self, scope: Option<Scope>) -> bool {
        self.project(ScopedAction::Edit, scope, Scope::Team)
    }

    /// Whether projects can be deleted at `scope` (default all).
    #[must_use]
    pub fn can_delete_projects(&self, scope: Option<Scope>) -> bool {
        self.project(ScopedAction::Delete, scope, Scope::All)
    }

    /// Whether people can be assigned to projects at `scope` (default team).
    #[must_use]
    pub fn can_assign_projects(&self, scope: Option<Scope>) -> bool {
        self.project(ScopedAction::Assign, scope, Scope::Team)
    }

    /// Whether any employee list is visible.
    #[must_use]
    pub fn can_view_employees(&self) -> bool {
        self.permissions
            .contains_any(&[Permission::ViewTeamEmployee, Permission::ViewAllEmployee])
    }

    /// Whether employee records can be created.
    #[must_use]
    pub fn can_create_employees(&self) -> bool {
        self.has(Permission::CreateAllEmployee)
    }

    /// Whether employee records can be edited.
    #[must_use]
    pub fn can_edit_employees(&self) -> bool {
        self.has(Permission::EditAllEmployee)
    }

    /// Whether employee records can be deleted.
    #[must_use]
    pub fn can_delete_employees(&self) -> bool {
        self.has(Permission::DeleteAllEmployee)
    }

    /// Whether departments are visible.
    #[must_use]
    pub fn can_view_departments(&self) -> bool {
        self.has(Permission::ViewAllDepartment)
    }

    /// Whether departments can be managed.
    #[must_use]
    pub fn can_manage_departments(&self) -> bool {
        self.has(Permission::ManageAllDepartment)
    }

    /// Whether clients are visible.
    #[must_use]
    pub fn can_view_clients(&self) -> bool {
        self.has(Permission::ViewAllClient)
    }

    /// Whether clients can be managed.
    #[must_use]
    pub fn can_manage_clients(&self) -> bool {
        self.has(Permission::ManageAllClient)
    }

    /// Whether user accounts are visible.
    #[must_use]
    pub fn can_view_users(&self) -> bool {
        self.has(Permission::ViewAllUser)
    }

    /// Whether user accounts can be managed.
    #[must_use]
    pub fn can_manage_users(&self) -> bool {
        self.has(Permission::ManageAllUser)
    }

    /// Whether roles are visible.
    #[must_use]
    pub fn can_view_roles(&self) -> bool {
        self.has(Permission::ViewAllRole)
    }

    /// Whether roles can be managed.
    #[must_use]
    pub fn can_manage_roles(&self) -> bool {
        self.has(Permission::ManageAllRole)
    }

    /// Whether the own profile is visible.
    #[must_use]
    pub fn can_view_profile(&self) -> bool {
        self.has(Permission::ViewOwnProfile)
    }

    /// Whether the own profile can be edited.
    #[must_use]
    pub fn can_edit_profile(&self) -> bool {
        self.has(Permission::EditOwnProfile)
    }

    /// Whether any report family is visible.
    #[must_use]
    pub fn can_view_reports(&self) -> bool {
        self.permissions.contains_any(REPORT_VIEW_PERMISSIONS)
    }

    /// Whether reports can be exported.
    #[must_use]
    pub fn can_export_reports(&self) -> bool {
        self.has(Permission::ExportAllReports)
    }

    /// Whether the administration area is reachable.
    #[must_use]
    pub fn can_access_administration(&self) -> bool {
        self.has(Permission::AccessAllAdministration)
    }

    /// Shortcut for [`Self::can_access_administration`].
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.can_access_administration()
    }

    /// Whether the user holds any team-lead permission.
    #[must_use]
    pub fn is_manager(&self) -> bool {
        self.permissions.contains_any(MANAGER_PERMISSIONS)
    }

    /// Evaluates a named capability.
    #[must_use]
    pub fn allows(&self, capability: Capability) -> bool {
        match capability {
            Capability::ViewTimesheets(scope) => self.can_view_timesheets(scope),
            Capability::CreateTimesheets(scope) => self.can_create_timesheets(scope),
            Capability::EditTimesheets(scope) => self.can_edit_timesheets(scope),
            Capability::DeleteTimesheets(scope) => self.can_delete_timesheets(scope),
            Capability::SubmitTimesheets(scope) => self.can_submit_timesheets(scope),
            Capability::ApproveTimesheets(scope) => self.can_approve_timesheets(scope),
            Capability::ViewProjects(scope) => self.can_view_projects(scope),
            Capability::CreateProjects(scope) => self.can_create_projects(scope),
            Capability::EditProjects(scope) => self.can_edit_projects(scope),
            Capability::DeleteProjects(scope) => self.can_delete_projects(scope),
            Capability::AssignProjects(scope) => self.can_assign_projects(scope),
            Capability::ViewEmployees => self.can_view_employees(),
            Capability::CreateEmployees => self.can_create_employees(),
            Capability::EditEmployees => self.can_edit_employees(),
            Capability::DeleteEmployees => self.can_delete_employees(),
            Capability::ViewDepartments => self.can_view_departments(),
            Capability::ManageDepartments => self.can_manage_departments(),
            Capability::ViewClients => self.can_view_clients(),
            Capability::ManageClients => self.can_manage_clients(),
            Capability::ViewUsers => self.can_view_users(),
            Capability::ManageUsers => self.can_manage_users(),
            Capability::ViewRoles => self.can_view_roles(),
            Capability::ManageRoles => self.can_manage_roles(),
            Capability::ViewProfile => self.can_view_profile(),
            Capability::EditProfile => self.can_edit_profile(),
            Capability::ViewReports => self.can_view_reports(),
            Capability::ExportReports => self.can_export_reports(),
            Capability::AccessAdministration => self.can_access_administration(),
        }
    }

    /// Returns a diagnostic snapshot.
    ///
    /// The snapshot flattens each capability group into one boolean and must
    /// not be used to authorize anything; call the precise queries instead.
    #[must_use]
    pub fn summary(&self) -> CapabilitySummary {
        CapabilitySummary {
            is_admin: self.is_admin(),
            is_manager: self.is_manager(),
            can_view_timesheets: self.can_view_timesheets(None),
            can_approve_timesheets: self.can_approve_timesheets(None),
            can_view_projects: self.can_view_projects(None),
            can_view_employees: self.can_view_employees(),
            can_view_reports: self.can_view_reports(),
            can_access_administration: self.can_access_administration(),
            permissions: self.permissions.raw().to_vec(),
            total_permissions: self.permissions.len(),
        }
    }
}
