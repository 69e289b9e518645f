use std::collections::BTreeMap;

use serde::Serialize;
use timecard_application::{ActiveSession, Capabilities, Capability};
use timecard_domain::PermissionSource;
use ts_rs::TS;

/// Diagnostic capability report for one session.
///
/// Shared with the frontend debug panel. Not an authorization input.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/access-types/src/generated/capability-report-response.ts"
)]
pub struct CapabilityReportResponse {
    pub session_id: String,
    pub subject: String,
    pub display_name: String,
    pub email: Option<String>,
    pub role: Option<String>,
    pub permission_source: String,
    pub is_admin: bool,
    pub is_manager: bool,
    pub can_view_timesheets: bool,
    pub can_approve_timesheets: bool,
    pub can_view_projects: bool,
    pub can_view_employees: bool,
    pub can_view_reports: bool,
    pub can_access_administration: bool,
    pub permissions: Vec<String>,
    pub unrecognized_permissions: Vec<String>,
    #[ts(type = "number")]
    pub total_permissions: usize,
    pub capabilities: BTreeMap<String, bool>,
}

impl CapabilityReportResponse {
    pub fn from_session(session: &ActiveSession, capabilities: &Capabilities) -> Self {
        let summary = capabilities.summary();
        let user = session.user.as_ref();

        Self {
            session_id: session.session_id.to_string(),
            subject: user.identity().subject().to_owned(),
            display_name: user.identity().display_name().to_owned(),
            email: user.identity().email().map(str::to_owned),
            role: user.role().map(|role| role.as_str().to_owned()),
            permission_source: match user.source() {
                PermissionSource::Role { .. } => "role".to_owned(),
                PermissionSource::Direct => "direct".to_owned(),
                PermissionSource::Missing => "missing".to_owned(),
            },
            is_admin: summary.is_admin,
            is_manager: summary.is_manager,
            can_view_timesheets: summary.can_view_timesheets,
            can_approve_timesheets: summary.can_approve_timesheets,
            can_view_projects: summary.can_view_projects,
            can_view_employees: summary.can_view_employees,
            can_view_reports: summary.can_view_reports,
            can_access_administration: summary.can_access_administration,
            permissions: summary.permissions,
            unrecognized_permissions: user
                .permissions()
                .unrecognized()
                .map(str::to_owned)
                .collect(),
            total_permissions: summary.total_permissions,
            capabilities: Capability::defaults()
                .iter()
                .map(|capability| {
                    (
                        capability.name().to_owned(),
                        capabilities.allows(*capability),
                    )
                })
                .collect(),
        }
    }
}
