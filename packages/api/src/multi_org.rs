//! Users across several organizations, for holding-company accounts.

use store::filters::{ListQuery, MultiOrgUserFilters, QueryPairs};
use store::list::ListSource;
use store::models::{Organization, OrganizationUser};
use store::Page;

use crate::client::ApiClient;
use crate::error::ApiError;

#[derive(Clone, Debug, PartialEq)]
pub struct MultiOrgApi {
    client: ApiClient,
}

impl MultiOrgApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Organizations the current user may see.
    pub async fn organizations(&self) -> Result<Vec<Organization>, ApiError> {
        self.client.get("/multi-organization/organizations", &QueryPairs::new()).await
    }

    /// Users of the selected organizations; no selection means all of them.
    pub async fn users(&self, filters: &MultiOrgUserFilters) -> Result<Page<OrganizationUser>, ApiError> {
        self.client
            .get_page("/multi-organization/users", &filters.to_query())
            .await
    }
}

impl ListSource<MultiOrgUserFilters> for MultiOrgApi {
    type Item = OrganizationUser;
    type Error = ApiError;

    async fn fetch(&self, filters: &MultiOrgUserFilters) -> Result<Page<OrganizationUser>, ApiError> {
        self.users(filters).await
    }
}
