use serde::Serialize;

/// Diagnostic snapshot of a capability facade.
///
/// Each boolean represents a whole capability group and can diverge from the
/// precise per-scope queries. Debug display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapabilitySummary {
    /// Holds the administration access permission.
    pub is_admin: bool,
    /// Holds any team-lead permission.
    pub is_manager: bool,
    /// Own-scope timesheet visibility.
    pub can_view_timesheets: bool,
    /// Team-scope timesheet approval.
    pub can_approve_timesheets: bool,
    /// Assigned-scope project visibility.
    pub can_view_projects: bool,
    /// Any employee visibility.
    pub can_view_employees: bool,
    /// Any report visibility.
    pub can_view_reports: bool,
    /// Administration area access.
    pub can_access_administration: bool,
    /// Permission tokens as supplied. Non-string entries appear as JSON text.
    pub permissions: Vec<String>,
    /// Length of the supplied permissions array, counting duplicates and
    /// unrecognised entries.
    pub total_permissions: usize,
}
