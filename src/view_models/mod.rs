//! # ViewModels
//!
//! Caller-owned state holders sitting between the repository and the views.

pub mod character_detail;
pub mod character_list;

#[cfg(test)]
pub(crate) mod test_support;

pub use character_detail::{CharacterDetailViewModel, MODAL_EPISODE_LIMIT};
pub use character_list::{CharacterListViewModel, ListFetchMessage, PaginationState, FIRST_PAGE};
