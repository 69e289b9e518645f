use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use timecard_core::AppError;

/// Resource groups of the permission catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    /// Timesheet entries and their approval workflow.
    Timesheet,
    /// Projects and project assignments.
    Project,
    /// Employee records.
    Employee,
    /// Department records.
    Department,
    /// Client records.
    Client,
    /// Application user accounts.
    User,
    /// Roles and their permission bundles.
    Role,
    /// The signed-in user's own profile.
    Profile,
    /// Reporting views.
    Reports,
    /// The administration area.
    Administration,
}

impl Resource {
    /// Returns the token used as the last segment of permission strings.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Timesheet => "timesheet",
            Self::Project => "project",
            Self::Employee => "employee",
            Self::Department => "department",
            Self::Client => "client",
            Self::User => "user",
            Self::Role => "role",
            Self::Profile => "profile",
            Self::Reports => "reports",
            Self::Administration => "administration",
        }
    }
}

/// Permissions granted to users, either directly or through a role.
///
/// Every variant maps to exactly one `<action>_<scope>_<resource>` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// View the user's own timesheets.
    ViewOwnTimesheet,
    /// View timesheets of the user's team.
    ViewTeamTimesheet,
    /// View every timesheet.
    ViewAllTimesheet,
    /// Create timesheets for the user.
    CreateOwnTimesheet,
    /// Edit the user's own timesheets.
    EditOwnTimesheet,
    /// Edit timesheets of the user's team.
    EditTeamTimesheet,
    /// Edit every timesheet.
    EditAllTimesheet,
    /// Delete the user's own timesheets.
    DeleteOwnTimesheet,
    /// Delete every timesheet.
    DeleteAllTimesheet,
    /// Submit the user's own timesheets for approval.
    SubmitOwnTimesheet,
    /// Approve or reject timesheets of the user's team.
    ApproveTeamTimesheet,
    /// Approve or reject every timesheet.
    ApproveAllTimesheet,

    /// View projects the user is assigned to.
    ViewAssignedProject,
    /// View projects of the user's team.
    ViewTeamProject,
    /// View every project.
    ViewAllProject,
    /// Create projects.
    CreateAllProject,
    /// Edit projects of the user's team.
    EditTeamProject,
    /// Edit every project.
    EditAllProject,
    /// Delete projects.
    DeleteAllProject,
    /// Assign team members to team projects.
    AssignTeamProject,
    /// Assign anyone to any project.
    AssignAllProject,

    /// View employees in the user's team.
    ViewTeamEmployee,
    /// View every employee.
    ViewAllEmployee,
    /// Create employee records.
    CreateAllEmployee,
    /// Edit employee records.
    EditAllEmployee,
    /// Delete employee records.
    DeleteAllEmployee,

    /// View departments.
    ViewAllDepartment,
    /// Create, edit and delete departments.
    ManageAllDepartment,

    /// View clients.
    ViewAllClient,
    /// Create, edit and delete clients.
    ManageAllClient,

    /// View user accounts.
    ViewAllUser,
    /// Create, edit and deactivate user accounts.
    ManageAllUser,

    /// View roles.
    ViewAllRole,
    /// Create and edit roles.
    ManageAllRole,

    /// View the user's own profile.
    ViewOwnProfile,
    /// Edit the user's own profile.
    EditOwnProfile,

    /// View the user's own (employee) reports.
    ViewOwnReports,
    /// View team reports.
    ViewTeamReports,
    /// View organisation-wide reports.
    ViewAllReports,
    /// View HR reports.
    ViewHrReports,
    /// Export reports.
    ExportAllReports,

    /// Access the administration area.
    AccessAllAdministration,
}

impl Permission {
    /// Returns the stable transport token for this permission.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ViewOwnTimesheet => "view_own_timesheet",
            Self::ViewTeamTimesheet => "view_team_timesheet",
            Self::ViewAllTimesheet => "view_all_timesheet",
            Self::CreateOwnTimesheet => "create_own_timesheet",
            Self::EditOwnTimesheet => "edit_own_timesheet",
            Self::EditTeamTimesheet => "edit_team_timesheet",
            Self::EditAllTimesheet => "edit_all_timesheet",
            Self::DeleteOwnTimesheet => "delete_own_timesheet",
            Self::DeleteAllTimesheet => "delete_all_timesheet",
            Self::SubmitOwnTimesheet => "submit_own_timesheet",
            Self::ApproveTeamTimesheet => "approve_team_timesheet",
            Self::ApproveAllTimesheet => "approve_all_timesheet",
            Self::ViewAssignedProject => "view_assigned_project",
            Self::ViewTeamProject => "view_team_project",
            Self::ViewAllProject => "view_all_project",
            Self::CreateAllProject => "create_all_project",
            Self::EditTeamProject => "edit_team_project",
            Self::EditAllProject => "edit_all_project",
            Self::DeleteAllProject => "delete_all_project",
            Self::AssignTeamProject => "assign_team_project",
            Self::AssignAllProject => "assign_all_project",
            Self::ViewTeamEmployee => "view_team_employee",
            Self::ViewAllEmployee => "view_all_employee",
            Self::CreateAllEmployee => "create_all_employee",
            Self::EditAllEmployee => "edit_all_employee",
            Self::DeleteAllEmployee => "delete_all_employee",
            Self::ViewAllDepartment => "view_all_department",
            Self::ManageAllDepartment => "manage_all_department",
            Self::ViewAllClient => "view_all_client",
            Self::ManageAllClient => "manage_all_client",
            Self::ViewAllUser => "view_all_user",
            Self::ManageAllUser => "manage_all_user",
            Self::ViewAllRole => "view_all_role",
            Self::ManageAllRole => "manage_all_role",
            Self::ViewOwnProfile => "view_own_profile",
            Self::EditOwnProfile => "edit_own_profile",
            Self::ViewOwnReports => "view_own_reports",
            Self::ViewTeamReports => "view_team_reports",
            Self::ViewAllReports => "view_all_reports",
            Self::ViewHrReports => "view_hr_reports",
            Self::ExportAllReports => "export_all_reports",
            Self::AccessAllAdministration => "access_all_administration",
        }
    }

    /// Returns the resource group this permission belongs to.
    #[must_use]
    pub fn resource(&self) -> Resource {
        match self {
            Self::ViewOwnTimesheet
            | Self::ViewTeamTimesheet
            | Self::ViewAllTimesheet
            | Self::CreateOwnTimesheet
            | Self::EditOwnTimesheet
            | Self::EditTeamTimesheet
            | Self::EditAllTimesheet
            | Self::DeleteOwnTimesheet
            | Self::DeleteAllTimesheet
            | Self::SubmitOwnTimesheet
            | Self::ApproveTeamTimesheet
            | Self::ApproveAllTimesheet => Resource::Timesheet,
            Self::ViewAssignedProject
            | Self::ViewTeamProject
            | Self::ViewAllProject
            | Self::CreateAllProject
            | Self::EditTeamProject
            | Self::EditAllProject
            | Self::DeleteAllProject
            | Self::AssignTeamProject
            | Self::AssignAllProject => Resource::Project,
            Self::ViewTeamEmployee
            | Self::ViewAllEmployee
            | Self::CreateAllEmployee
            | Self::EditAllEmployee
            | Self::DeleteAllEmployee => Resource::Employee,
            Self::ViewAllDepartment | Self::ManageAllDepartment => Resource::Department,
            Self::ViewAllClient | Self::ManageAllClient => Resource::Client,
            Self::ViewAllUser | Self::ManageAllUser => Resource::User,
            Self::ViewAllRole | Self::ManageAllRole => Resource::Role,
            Self::ViewOwnProfile | Self::EditOwnProfile => Resource::Profile,
            Self::ViewOwnReports
            | Self::ViewTeamReports
            | Self::ViewAllReports
            | Self::ViewHrReports
            | Self::ExportAllReports => Resource::Reports,
            Self::AccessAllAdministration => Resource::Administration,
        }
    }

    /// Returns all known permissions.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Permission] = &[
            Permission::ViewOwnTimesheet,
            Permission::ViewTeamTimesheet,
            Permission::ViewAllTimesheet,
            Permission::CreateOwnTimesheet,
            Permission::EditOwnTimesheet,
            Permission::EditTeamTimesheet,
            Permission::EditAllTimesheet,
            Permission::DeleteOwnTimesheet,
            Permission::DeleteAllTimesheet,
            Permission::SubmitOwnTimesheet,
            Permission::ApproveTeamTimesheet,
            Permission::ApproveAllTimesheet,
            Permission::ViewAssignedProject,
            Permission::ViewTeamProject,
            Permission::ViewAllProject,
            Permission::CreateAllProject,
            Permission::EditTeamProject,
            Permission::EditAllProject,
            Permission::DeleteAllProject,
            Permission::AssignTeamProject,
            Permission::AssignAllProject,
            Permission::ViewTeamEmployee,
            Permission::ViewAllEmployee,
            Permission::CreateAllEmployee,
            Permission::EditAllEmployee,
            Permission::DeleteAllEmployee,
            Permission::ViewAllDepartment,
            Permission::ManageAllDepartment,
            Permission::ViewAllClient,
            Permission::ManageAllClient,
            Permission::ViewAllUser,
            Permission::ManageAllUser,
            Permission::ViewAllRole,
            Permission::ManageAllRole,
            Permission::ViewOwnProfile,
            Permission::EditOwnProfile,
            Permission::ViewOwnReports,
            Permission::ViewTeamReports,
            Permission::ViewAllReports,
            Permission::ViewHrReports,
            Permission::ExportAllReports,
            Permission::AccessAllAdministration,
        ];

        ALL
    }

    /// Parses a transport value into a permission.
    pub fn from_transport(value: &str) -> Result<Self, AppError> {
        Self::from_str(value)
    }
}

impl Display for Permission {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|permission| permission.as_str() == value)
            .ok_or_else(|| AppError::Validation(format!("unknown permission value '{value}'")))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::str::FromStr;

    use super::{Permission, Resource};

    #[test]
    fn permission_roundtrip_storage_value() {
        let permission = Permission::ApproveTeamTimesheet;
        let restored = Permission::from_str(permission.as_str());
        assert!(restored.is_ok());
        assert_eq!(
            restored.unwrap_or(Permission::ViewOwnTimesheet),
            permission
        );
    }

    #[test]
    fn unknown_permission_is_rejected() {
        let parsed = Permission::from_str("frobnicate_own_timesheet");
        assert!(parsed.is_err());
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(Permission::from_str("VIEW_OWN_TIMESHEET").is_err());
        assert!(Permission::from_str(" view_own_timesheet").is_err());
    }

    #[test]
    fn tokens_are_unique_and_end_with_resource() {
        let mut seen = HashSet::new();
        for permission in Permission::all() {
            assert!(seen.insert(permission.as_str()));
            assert!(
                permission
                    .as_str()
                    .ends_with(&format!("_{}", permission.resource().as_str()))
            );
            assert_eq!(permission.as_str(), permission.as_str().to_lowercase());
        }
    }

    #[test]
    fn administration_has_single_access_permission() {
        let administration: Vec<_> = Permission::all()
            .iter()
            .filter(|permission| permission.resource() == Resource::Administration)
            .collect();
        assert_eq!(administration, vec![&Permission::AccessAllAdministration]);
    }
}
