//! Optional page/per_page parameters for list endpoints.
//!
//! Lists return everything unless the caller asks for a page; a bare `page`
//! uses the default page size of 30.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, FromQueryResult, PaginatorTrait, Select};
use serde::Deserialize;
use utoipa::IntoParams;

pub const DEFAULT_PAGE_SIZE: u64 = 30;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct PageParams {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

impl PageParams {
    pub fn is_paged(&self) -> bool {
        self.page.is_some() || self.per_page.is_some()
    }

    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn per_page(&self) -> u64 {
        self.per_page.unwrap_or(DEFAULT_PAGE_SIZE).max(1)
    }
}

/// Run a select, applying pagination only when the caller asked for it.
pub async fn fetch_page<E>(
    db: &DatabaseConnection,
    query: Select<E>,
    params: &PageParams,
) -> Result<Vec<E::Model>, DbErr>
where
    E: EntityTrait,
    E::Model: FromQueryResult + Send + Sync,
{
    if params.is_paged() {
        query
            .paginate(db, params.per_page())
            .fetch_page(params.page() - 1)
            .await
    } else {
        query.all(db).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_only_when_paged() {
        let params = PageParams::default();
        assert!(!params.is_paged());

        let params = PageParams {
            page: Some(2),
            per_page: None,
        };
        assert!(params.is_paged());
        assert_eq!(params.page(), 2);
        assert_eq!(params.per_page(), DEFAULT_PAGE_SIZE);

        // page is clamped to at least 1
        let params = PageParams {
            page: Some(0),
            per_page: Some(0),
        };
        assert_eq!(params.page(), 1);
        assert_eq!(params.per_page(), 1);
    }
}
