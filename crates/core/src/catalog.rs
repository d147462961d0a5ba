//! Builtin permission catalog
//!
//! The fixed permission table the process registers at startup. Changing
//! it requires a redeploy; no runtime API adds or removes permissions.
//!
//! Two trees: `ROOT` covers platform internals (currently just `TESTING`),
//! and `ORG_OWNER` heads the organization tree with `TEAM_OWNER` nested
//! under it. Granting `ROOT` therefore does not imply any organization
//! permission.

use crate::types::{PermissionId, PermissionNode};

/// Well-known permission ids.
pub mod ids {
    use crate::types::PermissionId;

    pub const ROOT: PermissionId = PermissionId(0);
    pub const TESTING: PermissionId = PermissionId(1);
    pub const ORG_OWNER: PermissionId = PermissionId(10);
    pub const TEAM_OWNER: PermissionId = PermissionId(15);

    pub const CREATE_ORG: PermissionId = PermissionId(25);
    pub const EDIT_ORG: PermissionId = PermissionId(30);
    pub const DELETE_ORG: PermissionId = PermissionId(35);

    pub const CREATE_TEAM: PermissionId = PermissionId(40);
    pub const EDIT_TEAM: PermissionId = PermissionId(45);
    pub const DELETE_TEAM: PermissionId = PermissionId(50);

    pub const ADD_TEAM_MEMBER: PermissionId = PermissionId(55);
    pub const EDIT_TEAM_MEMBER: PermissionId = PermissionId(60);
    pub const REMOVE_TEAM_MEMBER: PermissionId = PermissionId(65);

    pub const CREATE_APP: PermissionId = PermissionId(70);
    pub const EDIT_APP: PermissionId = PermissionId(75);
    pub const DELETE_APP: PermissionId = PermissionId(80);

    pub const CREATE_DEPLOYMENT: PermissionId = PermissionId(85);
    pub const EDIT_DEPLOYMENT: PermissionId = PermissionId(90);
    pub const DELETE_DEPLOYMENT: PermissionId = PermissionId(95);

    pub const CREATE_AGENT: PermissionId = PermissionId(100);
    pub const EDIT_AGENT: PermissionId = PermissionId(105);
    pub const DELETE_AGENT: PermissionId = PermissionId(110);

    pub const CREATE_MODEL: PermissionId = PermissionId(115);
    pub const EDIT_MODEL: PermissionId = PermissionId(120);
    pub const DELETE_MODEL: PermissionId = PermissionId(125);

    pub const CREATE_CREDENTIAL: PermissionId = PermissionId(130);
    pub const EDIT_CREDENTIAL: PermissionId = PermissionId(135);
    pub const DELETE_CREDENTIAL: PermissionId = PermissionId(140);

    pub const CREATE_TASK: PermissionId = PermissionId(145);
    pub const EDIT_TASK: PermissionId = PermissionId(150);
    pub const DELETE_TASK: PermissionId = PermissionId(155);

    pub const CREATE_TOOL: PermissionId = PermissionId(160);
    pub const EDIT_TOOL: PermissionId = PermissionId(165);
    pub const DELETE_TOOL: PermissionId = PermissionId(170);

    pub const CREATE_DATASOURCE: PermissionId = PermissionId(175);
    pub const EDIT_DATASOURCE: PermissionId = PermissionId(180);
    pub const DELETE_DATASOURCE: PermissionId = PermissionId(185);
}

/// The builtin node table, in id order.
pub fn builtin_nodes() -> Vec<PermissionNode> {
    use ids::*;

    fn root(
        id: PermissionId,
        title: &str,
        label: &str,
        description: &str,
    ) -> PermissionNode {
        PermissionNode::root(id, title, label, description)
    }

    fn child(
        id: PermissionId,
        parent: PermissionId,
        title: &str,
        label: &str,
        description: &str,
    ) -> PermissionNode {
        PermissionNode::child(id, parent, title, label, description)
    }

    vec![
        root(ROOT, "Root", "Root", "Root permissions"),
        child(TESTING, ROOT, "TESTING", "TESTING", "TESTING"),
        root(
            ORG_OWNER,
            "Org Owner",
            "Organization Owner",
            "Permissions for organization owners",
        ),
        child(
            TEAM_OWNER,
            ORG_OWNER,
            "Team Owner",
            "Team Owner",
            "Permissions for team owners",
        ),
        child(
            CREATE_ORG,
            ORG_OWNER,
            "Create Organization",
            "Create Org",
            "Ability to create an organization",
        ),
        child(
            EDIT_ORG,
            ORG_OWNER,
            "Edit Organization",
            "Edit Org",
            "Ability to edit an organization",
        ),
        child(
            DELETE_ORG,
            ORG_OWNER,
            "Delete Organization",
            "Delete Org",
            "Ability to delete an organization",
        ),
        child(
            CREATE_TEAM,
            TEAM_OWNER,
            "Create Team",
            "Create Team",
            "Ability to create a team",
        ),
        child(
            EDIT_TEAM,
            TEAM_OWNER,
            "Edit Team",
            "Edit Team",
            "Ability to edit a team",
        ),
        child(
            DELETE_TEAM,
            TEAM_OWNER,
            "Delete Team",
            "Delete Team",
            "Ability to delete a team",
        ),
        child(
            ADD_TEAM_MEMBER,
            TEAM_OWNER,
            "Add Team Member",
            "Add Member",
            "Ability to add a team member",
        ),
        child(
            EDIT_TEAM_MEMBER,
            TEAM_OWNER,
            "Edit Team Member",
            "Edit Member",
            "Ability to edit team members",
        ),
        child(
            REMOVE_TEAM_MEMBER,
            TEAM_OWNER,
            "Remove Team Member",
            "Remove Member",
            "Ability to remove a team member",
        ),
        child(
            CREATE_APP,
            ORG_OWNER,
            "Create App",
            "Create App",
            "Ability to create an app",
        ),
        child(
            EDIT_APP,
            ORG_OWNER,
            "Edit App",
            "Edit App",
            "Ability to edit an app",
        ),
        child(
            DELETE_APP,
            ORG_OWNER,
            "Delete App",
            "Delete App",
            "Ability to delete an app",
        ),
        child(
            CREATE_DEPLOYMENT,
            ORG_OWNER,
            "Create Deployment",
            "Create Deployment",
            "Ability to create a deployment",
        ),
        child(
            EDIT_DEPLOYMENT,
            ORG_OWNER,
            "Edit Deployment",
            "Edit Deployment",
            "Ability to edit a deployment",
        ),
        child(
            DELETE_DEPLOYMENT,
            ORG_OWNER,
            "Delete Deployment",
            "Delete Deployment",
            "Ability to delete a deployment",
        ),
        child(
            CREATE_AGENT,
            ORG_OWNER,
            "Create Agent",
            "Create Agent",
            "Ability to create an agent",
        ),
        child(
            EDIT_AGENT,
            ORG_OWNER,
            "Edit Agent",
            "Edit Agent",
            "Ability to edit an agent",
        ),
        child(
            DELETE_AGENT,
            ORG_OWNER,
            "Delete Agent",
            "Delete Agent",
            "Ability to delete an agent",
        ),
        child(
            CREATE_MODEL,
            ORG_OWNER,
            "Create Model",
            "Create Model",
            "Ability to create a model",
        ),
        child(
            EDIT_MODEL,
            ORG_OWNER,
            "Edit Model",
            "Edit Model",
            "Ability to edit a model",
        ),
        child(
            DELETE_MODEL,
            ORG_OWNER,
            "Delete Model",
            "Delete Model",
            "Ability to delete a model",
        ),
        child(
            CREATE_CREDENTIAL,
            ORG_OWNER,
            "Create Credential",
            "Create Credential",
            "Ability to create a credential",
        ),
        child(
            EDIT_CREDENTIAL,
            ORG_OWNER,
            "Edit Credential",
            "Edit Credential",
            "Ability to edit a credential",
        ),
        child(
            DELETE_CREDENTIAL,
            ORG_OWNER,
            "Delete Credential",
            "Delete Credential",
            "Ability to delete a credential",
        ),
        child(
            CREATE_TASK,
            ORG_OWNER,
            "Create Task",
            "Create Task",
            "Ability to create a task",
        ),
        child(
            EDIT_TASK,
            ORG_OWNER,
            "Edit Task",
            "Edit Task",
            "Ability to edit a task",
        ),
        child(
            DELETE_TASK,
            ORG_OWNER,
            "Delete Task",
            "Delete Task",
            "Ability to delete a task",
        ),
        child(
            CREATE_TOOL,
            ORG_OWNER,
            "Create Tool",
            "Create Tool",
            "Ability to create a tool",
        ),
        child(
            EDIT_TOOL,
            ORG_OWNER,
            "Edit Tool",
            "Edit Tool",
            "Ability to edit a tool",
        ),
        child(
            DELETE_TOOL,
            ORG_OWNER,
            "Delete Tool",
            "Delete Tool",
            "Ability to delete a tool",
        ),
        child(
            CREATE_DATASOURCE,
            ORG_OWNER,
            "Create DataSource",
            "Create DataSource",
            "Ability to create a data source",
        ),
        child(
            EDIT_DATASOURCE,
            ORG_OWNER,
            "Edit DataSource",
            "Edit DataSource",
            "Ability to edit a data source",
        ),
        child(
            DELETE_DATASOURCE,
            ORG_OWNER,
            "Delete DataSource",
            "Delete DataSource",
            "Ability to delete a data source",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::PermissionRegistry;

    #[test]
    fn test_builtin_table_is_valid() {
        let registry = PermissionRegistry::register(builtin_nodes()).unwrap();
        assert_eq!(registry.len(), 37);
        assert!(registry.is_root(ids::ROOT));
        assert!(registry.is_root(ids::ORG_OWNER));
        assert!(!registry.is_root(ids::TEAM_OWNER));
    }

    #[test]
    fn test_team_ops_sit_under_team_owner() {
        let registry = PermissionRegistry::register(builtin_nodes()).unwrap();
        let team_children = registry.children(ids::TEAM_OWNER);

        for op in [
            ids::CREATE_TEAM,
            ids::EDIT_TEAM,
            ids::DELETE_TEAM,
            ids::ADD_TEAM_MEMBER,
            ids::EDIT_TEAM_MEMBER,
            ids::REMOVE_TEAM_MEMBER,
        ] {
            assert!(team_children.contains(&op));
        }
    }
}
