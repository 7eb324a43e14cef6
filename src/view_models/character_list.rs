//! # Character List ViewModel
//!
//! Holds the paginated character list together with its loading flag, error
//! message and pagination state.
//!
//! Every fetch runs as a spawned task tagged with a generation number. Starting
//! a new fetch aborts the previous task, and a completed result whose
//! generation is no longer current is dropped, so a slow response for an old
//! page or query can never overwrite a newer one.

use crate::models::{Character, CharacterFilters, CharacterPage, Episode};
use crate::repository::{self, CharacterRepository};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub const FIRST_PAGE: u32 = 1;

/// Pagination as seen by the views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub current_page: u32,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: FIRST_PAGE,
            total_pages: 0,
            has_next: false,
            has_prev: false,
        }
    }
}

/// Completed list fetch, sent back from the fetch task
#[derive(Debug)]
pub struct ListFetchMessage {
    generation: u64,
    page: u32,
    result: repository::Result<CharacterPage>,
}

pub struct CharacterListViewModel {
    repository: Arc<dyn CharacterRepository>,
    characters: Vec<Character>,
    loading: bool,
    error: Option<String>,
    pagination: PaginationState,
    filters: CharacterFilters,
    generation: u64,
    in_flight: Option<JoinHandle<()>>,
    result_sender: mpsc::Sender<ListFetchMessage>,
    result_receiver: mpsc::Receiver<ListFetchMessage>,
}

impl CharacterListViewModel {
    pub fn new(repository: Arc<dyn CharacterRepository>) -> Self {
        let (result_sender, result_receiver) = mpsc::channel(16);
        Self {
            repository,
            characters: Vec::new(),
            loading: false,
            error: None,
            pagination: PaginationState::default(),
            filters: CharacterFilters::default(),
            generation: 0,
            in_flight: None,
            result_sender,
            result_receiver,
        }
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }

    /// Filters of the most recent fetch
    pub fn filters(&self) -> &CharacterFilters {
        &self.filters
    }

    /// Active name search, if any
    pub fn search_query(&self) -> Option<&str> {
        self.filters.name.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn find_character(&self, id: u32) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    /// Start fetching a page. Must be called from within a tokio runtime.
    ///
    /// A missing or zero page means the first page.
    pub fn fetch_characters(&mut self, filters: CharacterFilters) {
        let page = filters.page.filter(|p| *p > 0).unwrap_or(FIRST_PAGE);
        let filters = filters.with_page(page);

        self.loading = true;
        self.error = None;
        self.filters = filters.clone();
        self.generation += 1;
        if let Some(previous) = self.in_flight.take() {
            previous.abort();
        }

        let generation = self.generation;
        let repository = Arc::clone(&self.repository);
        let result_sender = self.result_sender.clone();
        tracing::debug!("Fetching characters (generation {generation}): {:?}", filters);

        self.in_flight = Some(tokio::spawn(async move {
            let result = repository.get_characters(&filters).await;
            // Ignore send errors (receiver might have been dropped)
            let _ = result_sender
                .send(ListFetchMessage {
                    generation,
                    page,
                    result,
                })
                .await;
        }));
    }

    /// Go to `page` keeping the current filters
    pub fn go_to_page(&mut self, page: u32) {
        let filters = self.filters.clone().with_page(page);
        self.fetch_characters(filters);
    }

    /// Returns false when there is no next page
    pub fn next_page(&mut self) -> bool {
        if !self.pagination.has_next {
            return false;
        }
        self.go_to_page(self.pagination.current_page + 1);
        true
    }

    /// Returns false when there is no previous page
    pub fn prev_page(&mut self) -> bool {
        if !self.pagination.has_prev {
            return false;
        }
        self.go_to_page(self.pagination.current_page.saturating_sub(1).max(FIRST_PAGE));
        true
    }

    /// Search by name from the first page. Blank text clears the search.
    pub fn search(&mut self, text: &str) {
        let text = text.trim();
        let mut filters = self.filters.clone().with_page(FIRST_PAGE);
        filters.name = (!text.is_empty()).then(|| text.to_string());
        self.fetch_characters(filters);
    }

    /// Start over from the first page without filters
    pub fn retry(&mut self) {
        self.fetch_characters(CharacterFilters::default().with_page(FIRST_PAGE));
    }

    /// Apply any completed fetches without blocking. Returns true if the state changed.
    pub fn poll(&mut self) -> bool {
        let mut applied = false;
        while let Ok(message) = self.result_receiver.try_recv() {
            applied |= self.apply(message);
        }
        applied
    }

    /// Wait until the current fetch has been applied
    pub async fn wait(&mut self) {
        while self.loading {
            match self.result_receiver.recv().await {
                Some(message) => {
                    self.apply(message);
                }
                None => break,
            }
        }
    }

    fn apply(&mut self, message: ListFetchMessage) -> bool {
        if message.generation != self.generation {
            tracing::debug!(
                "Dropping stale result (generation {}, current {})",
                message.generation,
                self.generation
            );
            return false;
        }

        match message.result {
            Ok(page) => {
                self.pagination = PaginationState {
                    current_page: message.page,
                    total_pages: page.info.pages,
                    has_next: page.info.next.is_some(),
                    has_prev: page.info.prev.is_some(),
                };
                self.characters = page.results;
            }
            Err(e) => {
                tracing::error!("Failed to load characters: {e}");
                self.error = Some(e.to_string());
                self.characters.clear();
            }
        }
        self.loading = false;
        self.in_flight = None;
        true
    }

    /// Episodes for a character's references. Any failure yields an empty list.
    pub async fn fetch_character_episodes(&self, urls: &[String]) -> Vec<Episode> {
        match self.repository.get_episodes(urls).await {
            Ok(episodes) => episodes,
            Err(e) => {
                tracing::error!("Error fetching episodes: {e}");
                Vec::new()
            }
        }
    }
}

impl Drop for CharacterListViewModel {
    fn drop(&mut self) {
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
    }
}
