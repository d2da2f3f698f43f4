pub mod list_snippets_query;
pub mod pagination;
pub mod snippet_dto;
pub mod snippet_list_response;
pub mod snippet_response;
#[allow(clippy::module_inception)]
pub mod snippets;
