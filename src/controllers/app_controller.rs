//! # Application Controller
//!
//! Loads the profile, builds the repository and drives the view models for
//! the one-shot subcommands and the interactive browse loop.

use crate::cmd_args::{Command, CommandLineArgs};
use crate::config::{self, ApiProfile, IniProfileStore};
use crate::controllers::browse_command::{BrowseCommand, HELP_TEXT};
use crate::models::{CharacterFilters, CharacterPage};
use crate::repository::{CharacterRepository, HttpCharacterRepository};
use crate::view_models::{CharacterDetailViewModel, CharacterListViewModel};
use crate::views::TerminalRenderer;
use anyhow::{bail, Context, Result};
use std::io::{self, Write};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

pub struct AppController<W: Write> {
    cmd_args: CommandLineArgs,
    repository: Arc<dyn CharacterRepository>,
    renderer: TerminalRenderer<W>,
}

impl AppController<io::Stdout> {
    /// Create the controller for the real terminal and the configured API
    pub fn new(cmd_args: CommandLineArgs) -> Result<Self> {
        let profile_name = cmd_args.profile();
        let profile_path = config::get_profile_path();
        let mut profile = Self::load_profile(profile_name, &profile_path)?;
        if let Some(base_url) = cmd_args.base_url() {
            tracing::debug!("Base URL overridden from command line: {}", base_url);
            profile = profile.with_base_url(base_url);
        }

        let repository = HttpCharacterRepository::new(&profile)
            .with_context(|| format!("Failed to set up API client for profile '{profile_name}'"))?;

        Ok(Self::with_parts(
            cmd_args,
            Arc::new(repository),
            TerminalRenderer::stdout(),
        ))
    }
}

impl<W: Write> AppController<W> {
    /// Create a controller with injected repository and output
    pub fn with_parts(
        cmd_args: CommandLineArgs,
        repository: Arc<dyn CharacterRepository>,
        renderer: TerminalRenderer<W>,
    ) -> Self {
        Self {
            cmd_args,
            repository,
            renderer,
        }
    }

    pub fn into_renderer(self) -> TerminalRenderer<W> {
        self.renderer
    }

    /// Load profile from INI file or return the default profile if not found
    fn load_profile(profile_name: &str, profile_path: &str) -> Result<ApiProfile> {
        tracing::debug!("Loading profile '{}' from '{}'", profile_name, profile_path);

        let ini_store = IniProfileStore::new(profile_path);
        let profile = match ini_store.get_profile(profile_name)? {
            Some(p) => {
                tracing::debug!("Profile loaded successfully, base URL: {}", p.base_url());
                p
            }
            None => {
                tracing::debug!("Profile '{}' not found, using defaults", profile_name);
                ApiProfile::default()
            }
        };

        Ok(profile)
    }

    /// Run the selected subcommand. `browse` reads commands from stdin.
    pub async fn run(&mut self) -> Result<()> {
        match self.cmd_args.command().clone() {
            Command::List(list) => self.list(list.to_filters()).await,
            Command::Character { id } => self.show_character(id).await,
            Command::Episode { id } => self.show_episode(id).await,
            Command::Episodes { urls } => self.show_episodes(&urls).await,
            Command::Browse { name } => {
                let stdin = BufReader::new(tokio::io::stdin());
                self.browse(stdin, name.as_deref()).await
            }
        }
    }

    async fn list(&mut self, filters: CharacterFilters) -> Result<()> {
        if self.cmd_args.json() {
            let page: CharacterPage = self.repository.get_characters(&filters).await?;
            self.renderer.render_json(&page)?;
            return Ok(());
        }

        let mut list = CharacterListViewModel::new(Arc::clone(&self.repository));
        list.fetch_characters(filters);
        list.wait().await;
        if let Some(message) = list.error() {
            bail!("{message}");
        }
        self.renderer.render_character_list(&list)?;
        Ok(())
    }

    async fn show_character(&mut self, id: u32) -> Result<()> {
        let character = self.repository.get_character_by_id(id).await?;
        let mut detail = CharacterDetailViewModel::new(Arc::clone(&self.repository));
        detail.open(character).await;

        match detail.details() {
            Some(details) if self.cmd_args.json() => self.renderer.render_json(&details)?,
            _ => self.renderer.render_character_detail(&detail)?,
        }
        Ok(())
    }

    async fn show_episode(&mut self, id: u32) -> Result<()> {
        let episode = self.repository.get_episode_by_id(id).await?;
        if self.cmd_args.json() {
            self.renderer.render_json(&episode)?;
        } else {
            self.renderer.render_episode(&episode)?;
        }
        Ok(())
    }

    async fn show_episodes(&mut self, urls: &[String]) -> Result<()> {
        let episodes = self.repository.get_episodes(urls).await?;
        if self.cmd_args.json() {
            self.renderer.render_json(&episodes)?;
        } else if episodes.is_empty() {
            self.renderer.render_message("No episodes found")?;
        } else {
            self.renderer.render_episodes(&episodes)?;
        }
        Ok(())
    }

    /// Interactive explorer reading one command per line until `quit` or EOF
    pub async fn browse<R: AsyncBufRead + Unpin>(
        &mut self,
        input: R,
        name: Option<&str>,
    ) -> Result<()> {
        let mut list = CharacterListViewModel::new(Arc::clone(&self.repository));
        let mut detail = CharacterDetailViewModel::new(Arc::clone(&self.repository));

        self.renderer.render_header()?;
        let mut filters = CharacterFilters::default();
        filters.name = name.map(str::to_string).filter(|n| !n.trim().is_empty());
        list.fetch_characters(filters);
        self.refresh_list(&mut list).await?;

        let mut lines = input.lines();
        loop {
            self.renderer.render_prompt()?;
            let Some(line) = lines.next_line().await.context("Failed to read input")? else {
                break;
            };

            match BrowseCommand::parse(&line) {
                BrowseCommand::Quit => break,
                BrowseCommand::Next => {
                    if !list.next_page() {
                        self.renderer.render_message("Already on the last page")?;
                        continue;
                    }
                    self.refresh_list(&mut list).await?;
                }
                BrowseCommand::Prev => {
                    if !list.prev_page() {
                        self.renderer.render_message("Already on the first page")?;
                        continue;
                    }
                    self.refresh_list(&mut list).await?;
                }
                BrowseCommand::Page(page) => {
                    let total = list.pagination().total_pages;
                    if page == 0 || (total > 0 && page > total) {
                        self.renderer
                            .render_message(&format!("Page must be between 1 and {}", total.max(1)))?;
                        continue;
                    }
                    list.go_to_page(page);
                    self.refresh_list(&mut list).await?;
                }
                BrowseCommand::Search(text) => {
                    list.search(&text);
                    self.refresh_list(&mut list).await?;
                }
                BrowseCommand::Retry => {
                    list.retry();
                    self.refresh_list(&mut list).await?;
                }
                BrowseCommand::Show(id) => {
                    let character = match list.find_character(id) {
                        Some(character) => character.clone(),
                        None => match self.repository.get_character_by_id(id).await {
                            Ok(character) => character,
                            Err(e) => {
                                self.renderer.render_message(&e.to_string())?;
                                continue;
                            }
                        },
                    };
                    detail.open(character).await;
                    self.renderer.render_character_detail(&detail)?;
                    detail.close();
                }
                BrowseCommand::Refresh => self.renderer.render_character_list(&list)?,
                BrowseCommand::Help => self.renderer.render_message(HELP_TEXT)?,
                BrowseCommand::Unknown(input) => {
                    self.renderer
                        .render_message(&format!("Unknown command '{input}'"))?;
                    self.renderer.render_message(HELP_TEXT)?;
                }
            }
        }

        self.renderer.flush()?;
        Ok(())
    }

    async fn refresh_list(&mut self, list: &mut CharacterListViewModel) -> Result<()> {
        list.wait().await;
        self.renderer.render_character_list(list)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_models::test_support::FakeRepository;

    fn controller(args: &[&str], repo: Arc<FakeRepository>) -> AppController<Vec<u8>> {
        AppController::with_parts(
            CommandLineArgs::parse_from(args),
            repo,
            TerminalRenderer::with_writer(Vec::new(), false),
        )
    }

    fn output(controller: AppController<Vec<u8>>) -> String {
        String::from_utf8(controller.into_renderer().into_inner()).unwrap()
    }

    #[test]
    fn missing_profile_falls_back_to_defaults() {
        let profile =
            AppController::<Vec<u8>>::load_profile("default", "/nonexistent/portaline/profile")
                .unwrap();
        assert_eq!(profile, ApiProfile::default());
    }

    #[tokio::test]
    async fn browse_pages_searches_and_quits() {
        let repo = Arc::new(FakeRepository::default());
        let mut app = controller(&["portaline"], repo.clone());

        let input: &[u8] = b"n\n/rick\ns 1\nq\nn\n";
        app.browse(input, None).await.unwrap();

        assert_eq!(repo.requested_pages(), vec![Some(1), Some(2), Some(1)]);
        let text = output(app);
        assert!(text.contains("Rick & Morty Explorer"));
        assert!(text.contains("Page 2 of 3"));
        assert!(text.contains("Recent Episodes"));
    }

    #[tokio::test]
    async fn browse_reports_navigation_limits() {
        let repo = Arc::new(FakeRepository::default());
        let mut app = controller(&["portaline"], repo);

        let input: &[u8] = b"p\ng 9\nbogus\n";
        app.browse(input, None).await.unwrap();

        let text = output(app);
        assert!(text.contains("Already on the first page"));
        assert!(text.contains("Page must be between 1 and 3"));
        assert!(text.contains("Unknown command 'bogus'"));
    }

    #[tokio::test]
    async fn browse_shows_error_prompt_and_recovers() {
        let repo = Arc::new(FakeRepository::default());
        repo.fail_characters(true);
        let mut app = controller(&["portaline"], repo.clone());

        let input: &[u8] = b"";
        app.browse(input, Some("rick")).await.unwrap();
        let text = output(app);
        assert!(text.contains("Something went wrong"));
    }

    #[tokio::test]
    async fn show_unknown_character_prints_error() {
        let repo = Arc::new(FakeRepository::default());
        let mut app = controller(&["portaline"], repo);

        let input: &[u8] = b"s 404\n";
        app.browse(input, None).await.unwrap();
        assert!(output(app).contains("Error fetching character with id 404"));
    }

    #[tokio::test]
    async fn list_command_renders_page() {
        let repo = Arc::new(FakeRepository::default());
        let mut app = controller(&["portaline", "list", "--page", "2"], repo.clone());

        app.run().await.unwrap();
        assert_eq!(repo.requested_pages(), vec![Some(2)]);
        assert!(output(app).contains("Character 3"));
    }

    #[tokio::test]
    async fn list_command_fails_on_repository_error() {
        let repo = Arc::new(FakeRepository::default());
        repo.fail_characters(true);
        let mut app = controller(&["portaline", "list"], repo);

        let err = app.run().await.unwrap_err();
        assert_eq!(err.to_string(), "Error fetching characters");
    }

    #[tokio::test]
    async fn character_command_prints_json_details() {
        let repo = Arc::new(FakeRepository::default());
        let mut app = controller(&["portaline", "--json", "character", "1"], repo);

        app.run().await.unwrap();
        let text = output(app);
        assert!(text.contains("\"first_seen\": \"Episode 1\""));
        assert!(text.contains("\"last_known_location\": \"Citadel of Ricks\""));
    }
}
