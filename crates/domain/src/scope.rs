//! Scope hierarchy and the action to scope permission table.
//!
//! Scopes are ordered per resource from narrowest to broadest:
//! `own < team < all` for timesheets and `assigned < team < all` for
//! projects. A grant at a broader scope implies every narrower scope of the
//! same action.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use timecard_core::AppError;

use crate::Permission;

/// Breadth of the data an action applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// The user's own data.
    Own,
    /// Data the user is assigned to.
    Assigned,
    /// Data of the user's team.
    Team,
    /// Every record.
    All,
}

impl Scope {
    /// Returns the stable transport token for this scope.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Own => "own",
            Self::Assigned => "assigned",
            Self::Team => "team",
            Self::All => "all",
        }
    }
}

impl Display for Scope {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "own" => Ok(Self::Own),
            "assigned" => Ok(Self::Assigned),
            "team" => Ok(Self::Team),
            "all" => Ok(Self::All),
            _ => Err(AppError::Validation(format!("unknown scope '{value}'"))),
        }
    }
}

/// Resources whose permissions are resolved through a scope hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopedResource {
    /// Timesheets: `own < team < all`.
    Timesheet,
    /// Projects: `assigned < team < all`.
    Project,
}

impl ScopedResource {
    /// Returns the stable transport token for this resource.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Timesheet => "timesheet",
            Self::Project => "project",
        }
    }

    /// Returns the scopes of this resource ordered from narrowest to broadest.
    #[must_use]
    pub fn hierarchy(&self) -> &'static [Scope] {
        match self {
            Self::Timesheet => &[Scope::Own, Scope::Team, Scope::All],
            Self::Project => &[Scope::Assigned, Scope::Team, Scope::All],
        }
    }

    /// Returns the requested scope followed by every broader scope.
    ///
    /// Empty when the scope is not part of this resource's hierarchy.
    #[must_use]
    pub fn scopes_from(&self, requested: Scope) -> &'static [Scope] {
        let hierarchy = self.hierarchy();
        match hierarchy.iter().position(|scope| *scope == requested) {
            Some(index) => &hierarchy[index..],
            None => &[],
        }
    }

    /// Returns the permission granting `action` at exactly `scope`, if the
    /// table defines one.
    #[must_use]
    pub fn permission_for(&self, action: ScopedAction, scope: Scope) -> Option<Permission> {
        use Permission as P;
        use Scope as S;
        use ScopedAction as A;

        match (self, action, scope) {
            (Self::Timesheet, A::View, S::Own) => Some(P::ViewOwnTimesheet),
            (Self::Timesheet, A::View, S::Team) => Some(P::ViewTeamTimesheet),
            (Self::Timesheet, A::View, S::All) => Some(P::ViewAllTimesheet),
            (Self::Timesheet, A::Create, S::Own) => Some(P::CreateOwnTimesheet),
            (Self::Timesheet, A::Edit, S::Own) => Some(P::EditOwnTimesheet),
            (Self::Timesheet, A::Edit, S::Team) => Some(P::EditTeamTimesheet),
            (Self::Timesheet, A::Edit, S::All) => Some(P::EditAllTimesheet),
            (Self::Timesheet, A::Delete, S::Own) => Some(P::DeleteOwnTimesheet),
            (Self::Timesheet, A::Delete, S::All) => Some(P::DeleteAllTimesheet),
            (Self::Timesheet, A::Submit, S::Own) => Some(P::SubmitOwnTimesheet),
            (Self::Timesheet, A::Approve, S::Team) => Some(P::ApproveTeamTimesheet),
            (Self::Timesheet, A::Approve, S::All) => Some(P::ApproveAllTimesheet),
            (Self::Project, A::View, S::Assigned) => Some(P::ViewAssignedProject),
            (Self::Project, A::View, S::Team) => Some(P::ViewTeamProject),
            (Self::Project, A::View, S::All) => Some(P::ViewAllProject),
            (Self::Project, A::Create, S::All) => Some(P::CreateAllProject),
            (Self::Project, A::Edit, S::Team) => Some(P::EditTeamProject),
            (Self::Project, A::Edit, S::All) => Some(P::EditAllProject),
            (Self::Project, A::Delete, S::All) => Some(P::DeleteAllProject),
            (Self::Project, A::Assign, S::Team) => Some(P::AssignTeamProject),
            (Self::Project, A::Assign, S::All) => Some(P::AssignAllProject),
            _ => None,
        }
    }

    /// Returns whether the table knows `action` for this resource at any scope.
    #[must_use]
    pub fn supports(&self, action: ScopedAction) -> bool {
        self.hierarchy()
            .iter()
            .any(|scope| self.permission_for(action, *scope).is_some())
    }
}

impl FromStr for ScopedResource {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "timesheet" => Ok(Self::Timesheet),
            "project" => Ok(Self::Project),
            _ => Err(AppError::Validation(format!(
                "unknown scoped resource '{value}'"
            ))),
        }
    }
}

/// Actions listed in the scope table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopedAction {
    /// Read records.
    View,
    /// Create records.
    Create,
    /// Edit records.
    Edit,
    /// Delete records.
    Delete,
    /// Submit timesheets for approval.
    Submit,
    /// Approve or reject submitted timesheets.
    Approve,
    /// Assign people to projects.
    Assign,
}

impl ScopedAction {
    /// Returns all known scoped actions.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[
            Self::View,
            Self::Create,
            Self::Edit,
            Self::Delete,
            Self::Submit,
            Self::Approve,
            Self::Assign,
        ]
    }

    /// Returns the stable transport token for this action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Create => "create",
            Self::Edit => "edit",
            Self::Delete => "delete",
            Self::Submit => "submit",
            Self::Approve => "approve",
            Self::Assign => "assign",
        }
    }
}

impl FromStr for ScopedAction {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|action| action.as_str() == value)
            .ok_or_else(|| AppError::Validation(format!("unknown scoped action '{value}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::{Scope, ScopedAction, ScopedResource};
    use crate::Permission;

    #[test]
    fn scopes_from_walks_upward_only() {
        assert_eq!(
            ScopedResource::Timesheet.scopes_from(Scope::Team),
            &[Scope::Team, Scope::All]
        );
        assert_eq!(
            ScopedResource::Project.scopes_from(Scope::Assigned),
            &[Scope::Assigned, Scope::Team, Scope::All]
        );
    }

    #[test]
    fn foreign_scope_has_no_walk() {
        assert!(ScopedResource::Timesheet.scopes_from(Scope::Assigned).is_empty());
        assert!(ScopedResource::Project.scopes_from(Scope::Own).is_empty());
    }

    #[test]
    fn table_entries_are_consistent_with_tokens() {
        for resource in [ScopedResource::Timesheet, ScopedResource::Project] {
            for action in ScopedAction::all() {
                for scope in resource.hierarchy() {
                    if let Some(permission) = resource.permission_for(*action, *scope) {
                        let expected = format!(
                            "{}_{}_{}",
                            action.as_str(),
                            scope.as_str(),
                            resource.as_str()
                        );
                        assert_eq!(permission.as_str(), expected);
                    }
                }
            }
        }
    }

    #[test]
    fn submit_is_not_a_project_action() {
        assert!(ScopedResource::Timesheet.supports(ScopedAction::Submit));
        assert!(!ScopedResource::Project.supports(ScopedAction::Submit));
        assert_eq!(
            ScopedResource::Timesheet.permission_for(ScopedAction::Approve, Scope::Own),
            None
        );
        assert_eq!(
            ScopedResource::Timesheet.permission_for(ScopedAction::Approve, Scope::All),
            Some(Permission::ApproveAllTimesheet)
        );
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        assert!("frobnicate".parse::<ScopedAction>().is_err());
        assert!("invoice".parse::<ScopedResource>().is_err());
        assert!("world".parse::<Scope>().is_err());
    }
}
