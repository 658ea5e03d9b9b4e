use database::entities::terms;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct TermResponse {
    pub term_id: i32,
    pub term_name: String,
}

impl From<terms::Model> for TermResponse {
    fn from(term: terms::Model) -> Self {
        Self {
            term_id: term.term_id,
            term_name: term.term_name,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TermWrite {
    #[serde(default)]
    pub term_name: Option<String>,
}
