//! Users, roles and invitations of the current organization.

use serde::Serialize;
use store::commands::UserCommand;
use store::filters::{ListQuery, QueryPairs, UserFilters};
use store::list::{CommandSink, ListSource};
use store::models::{Invitation, InvitationInput, OrganizationUser, Permission, Role, RoleInput};
use store::{Id, Page};

use crate::client::ApiClient;
use crate::error::ApiError;

#[derive(Serialize)]
struct RolesRequest<'a> {
    roles: &'a [String],
    custom_role_ids: &'a [Id],
}

#[derive(Clone, Debug, PartialEq)]
pub struct UsersApi {
    client: ApiClient,
}

impl UsersApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn users(&self, filters: &UserFilters) -> Result<Page<OrganizationUser>, ApiError> {
        self.client.get_page("/organization/users", &filters.to_query()).await
    }

    pub async fn activate(&self, id: Id) -> Result<(), ApiError> {
        self.client
            .post_empty(&format!("/organization/users/{id}/activate"), &serde_json::json!({}))
            .await
    }

    pub async fn deactivate(&self, id: Id) -> Result<(), ApiError> {
        self.client
            .post_empty(&format!("/organization/users/{id}/deactivate"), &serde_json::json!({}))
            .await
    }

    pub async fn remove(&self, id: Id) -> Result<(), ApiError> {
        self.client.delete(&format!("/organization/users/{id}")).await
    }

    pub async fn update_roles(
        &self,
        id: Id,
        roles: &[String],
        custom_role_ids: &[Id],
    ) -> Result<OrganizationUser, ApiError> {
        self.client
            .put(
                &format!("/organization/users/{id}/roles"),
                &RolesRequest { roles, custom_role_ids },
            )
            .await
    }

    pub async fn roles(&self) -> Result<Vec<Role>, ApiError> {
        self.client.get("/organization/roles", &QueryPairs::new()).await
    }

    pub async fn create_role(&self, input: &RoleInput) -> Result<Role, ApiError> {
        self.client.post("/organization/roles", input).await
    }

    pub async fn update_role(&self, id: Id, input: &RoleInput) -> Result<Role, ApiError> {
        self.client.put(&format!("/organization/roles/{id}"), input).await
    }

    pub async fn delete_role(&self, id: Id) -> Result<(), ApiError> {
        self.client.delete(&format!("/organization/roles/{id}")).await
    }

    pub async fn permissions(&self) -> Result<Vec<Permission>, ApiError> {
        self.client.get("/organization/permissions", &QueryPairs::new()).await
    }

    pub async fn invitations(&self) -> Result<Vec<Invitation>, ApiError> {
        self.client.get("/organization/invitations", &QueryPairs::new()).await
    }

    pub async fn invite(&self, input: &InvitationInput) -> Result<Invitation, ApiError> {
        self.client.post("/organization/invitations", input).await
    }

    pub async fn resend_invitation(&self, id: Id) -> Result<(), ApiError> {
        self.client
            .post_empty(&format!("/organization/invitations/{id}/resend"), &serde_json::json!({}))
            .await
    }

    pub async fn cancel_invitation(&self, id: Id) -> Result<(), ApiError> {
        self.client.delete(&format!("/organization/invitations/{id}")).await
    }
}

impl ListSource<UserFilters> for UsersApi {
    type Item = OrganizationUser;
    type Error = ApiError;

    async fn fetch(&self, filters: &UserFilters) -> Result<Page<OrganizationUser>, ApiError> {
        self.users(filters).await
    }
}

impl CommandSink<UserCommand> for UsersApi {
    type Error = ApiError;

    async fn execute(&self, command: &UserCommand) -> Result<(), ApiError> {
        match *command {
            UserCommand::Activate(id) => self.activate(id).await,
            UserCommand::Deactivate(id) => self.deactivate(id).await,
            UserCommand::Delete(id) => self.remove(id).await,
        }
    }
}
