use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use timecard_core::AppError;

use crate::Permission;

/// Predefined roles shipped with the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Records and submits their own time.
    Employee,
    /// Leads a team and approves its timesheets.
    Manager,
    /// Human resources staff.
    Hr,
    /// Full administrative access.
    Admin,
}

impl Role {
    /// Returns all predefined roles.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[Self::Employee, Self::Manager, Self::Hr, Self::Admin]
    }

    /// Returns the stable storage value for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Manager => "manager",
            Self::Hr => "hr",
            Self::Admin => "admin",
        }
    }

    /// Returns the permission bundle granted by this role.
    #[must_use]
    pub fn default_permissions(&self) -> Vec<Permission> {
        use Permission as P;

        const EMPLOYEE: &[Permission] = &[
            P::ViewOwnTimesheet,
            P::CreateOwnTimesheet,
            P::EditOwnTimesheet,
            P::DeleteOwnTimesheet,
            P::SubmitOwnTimesheet,
            P::ViewAssignedProject,
            P::ViewOwnProfile,
            P::EditOwnProfile,
            P::ViewOwnReports,
        ];
        const MANAGER: &[Permission] = &[
            P::ViewTeamTimesheet,
            P::EditTeamTimesheet,
            P::ApproveTeamTimesheet,
            P::ViewTeamProject,
            P::EditTeamProject,
            P::AssignTeamProject,
            P::ViewTeamEmployee,
            P::ViewTeamReports,
        ];
        const HR: &[Permission] = &[
            P::ViewAllTimesheet,
            P::ViewAllEmployee,
            P::CreateAllEmployee,
            P::EditAllEmployee,
            P::ViewAllDepartment,
            P::ManageAllDepartment,
            P::ViewHrReports,
            P::ExportAllReports,
        ];

        match self {
            Self::Employee => EMPLOYEE.to_vec(),
            Self::Manager => [EMPLOYEE, MANAGER].concat(),
            Self::Hr => [EMPLOYEE, HR].concat(),
            Self::Admin => Permission::all().to_vec(),
        }
    }

    /// Parses a transport value into a role, ignoring ASCII case.
    pub fn from_transport(value: &str) -> Result<Self, AppError> {
        Self::from_str(value)
    }
}

impl Display for Role {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        Self::all()
            .iter()
            .copied()
            .find(|role| role.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| AppError::Validation(format!("unknown role '{value}'")))
    }
}
