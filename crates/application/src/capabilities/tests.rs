use std::sync::Arc;

use proptest::prelude::*;
use serde_json::json;
use timecard_domain::{
    Permission, PermissionSet, Role, Scope, ScopedAction, ScopedResource, SessionUser,
};

use crate::resolve_scoped_permission;

use super::{Capabilities, Capability, CapabilityMemo};

fn capabilities(tokens: &[&str]) -> Capabilities {
    Capabilities::new(Arc::new(PermissionSet::from_raw(tokens.iter().copied())))
}

fn every_capability() -> Vec<Capability> {
    let scopes = [Some(Scope::Own), Some(Scope::Assigned), Some(Scope::Team), Some(Scope::All)];
    let mut capabilities = Capability::defaults().to_vec();
    for scope in scopes {
        capabilities.extend([
            Capability::ViewTimesheets(scope),
            Capability::CreateTimesheets(scope),
            Capability::EditTimesheets(scope),
            Capability::DeleteTimesheets(scope),
            Capability::SubmitTimesheets(scope),
            Capability::ApproveTimesheets(scope),
            Capability::ViewProjects(scope),
            Capability::CreateProjects(scope),
            Capability::EditProjects(scope),
            Capability::DeleteProjects(scope),
            Capability::AssignProjects(scope),
        ]);
    }
    capabilities
}

#[test]
fn employee_scenario() {
    let capabilities = capabilities(&["view_own_timesheet", "create_own_timesheet"]);

    assert!(capabilities.can_view_timesheets(Some(Scope::Own)));
    assert!(capabilities.can_create_timesheets(None));
    assert!(!capabilities.can_approve_timesheets(Some(Scope::Team)));
    assert!(!capabilities.can_view_timesheets(Some(Scope::Team)));
    assert!(!capabilities.is_admin());
    assert!(!capabilities.is_manager());
}

#[test]
fn approve_all_scenario() {
    let capabilities = capabilities(&["approve_all_timesheet"]);

    assert!(capabilities.can_approve_timesheets(Some(Scope::Team)));
    assert!(capabilities.can_approve_timesheets(Some(Scope::All)));
    assert!(capabilities.can_approve_timesheets(None));
    assert!(!capabilities.is_manager());
}

#[test]
fn empty_and_absent_permissions_deny_everything() {
    let empty = capabilities(&[]);
    let absent = Capabilities::for_user(None);
    let missing_field = Capabilities::for_user(Some(&SessionUser::from_payload(&json!({
        "id": 1,
        "name": "No Grants"
    }))));

    for facade in [&empty, &absent, &missing_field] {
        for capability in every_capability() {
            assert!(!facade.allows(capability), "{capability} should be denied");
        }
        assert!(!facade.is_admin());
        assert!(!facade.is_manager());
        assert_eq!(facade.summary().total_permissions, 0);
    }
}

#[test]
fn report_visibility_accepts_any_report_family() {
    for token in [
        "view_team_reports",
        "view_all_reports",
        "view_hr_reports",
        "view_own_reports",
    ] {
        assert!(capabilities(&[token]).can_view_reports());
    }
    assert!(!capabilities(&["export_all_reports"]).can_view_reports());
}

#[test]
fn project_defaults_follow_their_scope() {
    let assigned = capabilities(&["view_assigned_project"]);
    assert!(assigned.can_view_projects(None));
    assert!(!assigned.can_view_projects(Some(Scope::Team)));

    let team_editor = capabilities(&["edit_team_project"]);
    assert!(team_editor.can_edit_projects(None));
    assert!(!team_editor.can_edit_projects(Some(Scope::All)));

    let creator = capabilities(&["create_all_project"]);
    assert!(creator.can_create_projects(None));
}

#[test]
fn admin_role_is_admin_and_manager() {
    let admin = Capabilities::for_user(Some(&SessionUser::with_role(
        Default::default(),
        Role::Admin,
    )));
    assert!(admin.is_admin());
    assert!(admin.is_manager());
    assert!(admin.allows(Capability::ManageRoles));
}

#[test]
fn summary_reports_raw_tokens() {
    let summary = capabilities(&["view_team_timesheet", "not_a_permission"]).summary();

    assert!(summary.is_manager);
    assert!(summary.can_view_timesheets);
    assert!(!summary.can_approve_timesheets);
    assert_eq!(
        summary.permissions,
        vec!["view_team_timesheet".to_owned(), "not_a_permission".to_owned()]
    );
    assert_eq!(summary.total_permissions, 2);
}

#[test]
fn summary_counts_every_supplied_entry() {
    let user = SessionUser::from_payload(&json!({
        "permissions": ["view_own_profile", 3, "view_own_profile"]
    }));
    let summary = Capabilities::for_user(Some(&user)).summary();

    assert_eq!(summary.total_permissions, 3);
    assert_eq!(
        summary.permissions,
        vec![
            "view_own_profile".to_owned(),
            "3".to_owned(),
            "view_own_profile".to_owned()
        ]
    );
}

#[test]
fn default_catalog_names_are_unique() {
    let mut names: Vec<_> = Capability::defaults().iter().map(Capability::name).collect();
    let total = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), total);
    assert!(Capability::defaults().iter().all(|capability| capability.scope().is_none()));
}

#[test]
fn capability_display_includes_scope() {
    assert_eq!(
        Capability::ApproveTimesheets(Some(Scope::Team)).to_string(),
        "approve_timesheets (team)"
    );
    assert_eq!(Capability::ViewReports.to_string(), "view_reports");
}

#[test]
fn memo_reuses_facade_for_same_set() {
    let memo = CapabilityMemo::new();
    let user = SessionUser::with_role(Default::default(), Role::Manager);

    let first = memo.get_for_user(Some(&user));
    let second = memo.get_for_user(Some(&user));
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn memo_recomputes_when_set_is_replaced() {
    let memo = CapabilityMemo::new();
    let manager = SessionUser::with_role(Default::default(), Role::Manager);
    let replaced = SessionUser::with_role(Default::default(), Role::Manager);

    let first = memo.get_for_user(Some(&manager));
    let second = memo.get_for_user(Some(&replaced));
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(first.summary(), second.summary());

    let signed_out = memo.get_for_user(None);
    assert!(!signed_out.can_view_timesheets(None));
    assert!(Arc::ptr_eq(&signed_out, &memo.get_for_user(None)));
}

proptest! {
    #[test]
    fn manager_flag_implies_an_underlying_capability(
        granted in proptest::collection::vec(proptest::sample::select(Permission::all()), 0..12),
    ) {
        let permissions = PermissionSet::from_permissions(granted);
        let capabilities = Capabilities::new(Arc::new(permissions.clone()));

        if capabilities.is_manager() {
            let approve_team = resolve_scoped_permission(
                Some(&permissions),
                ScopedResource::Timesheet,
                ScopedAction::Approve,
                Scope::Team,
            );
            let view_team = resolve_scoped_permission(
                Some(&permissions),
                ScopedResource::Timesheet,
                ScopedAction::View,
                Scope::Team,
            );
            let team_employees = permissions.contains(Permission::ViewTeamEmployee);
            prop_assert!(approve_team || view_team || team_employees);
        }
    }

    #[test]
    fn queries_are_idempotent_and_pure(
        granted in proptest::collection::vec(proptest::sample::select(Permission::all()), 0..12),
    ) {
        let first = Capabilities::new(Arc::new(PermissionSet::from_permissions(granted.clone())));
        let rederived = Capabilities::new(Arc::new(PermissionSet::from_permissions(granted)));

        for capability in every_capability() {
            let once = first.allows(capability);
            prop_assert_eq!(once, first.allows(capability));
            prop_assert_eq!(once, rederived.allows(capability));
        }
        prop_assert_eq!(first.summary(), rederived.summary());
    }

    #[test]
    fn admin_flag_matches_administration_query(
        granted in proptest::collection::vec(proptest::sample::select(Permission::all()), 0..12),
    ) {
        let capabilities = Capabilities::new(Arc::new(PermissionSet::from_permissions(granted)));
        prop_assert_eq!(capabilities.is_admin(), capabilities.can_access_administration());
    }
}
