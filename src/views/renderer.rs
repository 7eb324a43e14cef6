//! # Terminal Renderer
//!
//! Plain-text rendering of the view models. Output goes to any `io::Write`
//! so it can be captured in tests; colors are only emitted when enabled.

use crate::models::{
    create_character_summary, format_episode_code, status_color, Character, Episode,
};
use crate::view_models::{CharacterDetailViewModel, CharacterListViewModel, PaginationState};
use crate::views::ansi_escape_codes::{
    BOLD, DIM, FG_DIM_TEXT, FG_ERROR, FG_INFO, FG_WARNING, RESET, STATUS_BULLET,
};
use serde::Serialize;
use std::io::{self, Write};

pub struct TerminalRenderer<W: Write> {
    out: W,
    colored: bool,
}

impl TerminalRenderer<io::Stdout> {
    /// Render to stdout, colored when stdout is a terminal
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout(), atty::is(atty::Stream::Stdout))
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W, colored: bool) -> Self {
        Self { out, colored }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, style: &str, text: &str) -> String {
        if self.colored {
            format!("{style}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    pub fn render_header(&mut self) -> io::Result<()> {
        let title = self.paint(BOLD, "Rick & Morty Explorer");
        writeln!(self.out, "{title}")?;
        writeln!(self.out)
    }

    /// List, empty state, loading line or error prompt, whichever applies
    pub fn render_character_list(&mut self, vm: &CharacterListViewModel) -> io::Result<()> {
        if let Some(message) = vm.error() {
            return self.render_error(message);
        }
        if vm.is_loading() && vm.characters().is_empty() {
            let line = self.paint(FG_WARNING, "Loading characters...");
            return writeln!(self.out, "{line}");
        }
        if vm.characters().is_empty() {
            return self.render_empty_state(vm.search_query());
        }

        for character in vm.characters() {
            self.render_character_line(character)?;
        }
        let pagination = vm.pagination();
        if pagination.total_pages > 1 {
            writeln!(self.out)?;
            self.render_pagination(pagination)?;
        }
        Ok(())
    }

    pub fn render_character_line(&mut self, character: &Character) -> io::Result<()> {
        let summary = create_character_summary(character);
        let color = status_color(summary.status);
        let bullet = self.paint(color.ansi(), STATUS_BULLET);
        let episodes = self.paint(
            FG_DIM_TEXT,
            &format!(
                "{} episode{}",
                summary.episode_count,
                if summary.episode_count == 1 { "" } else { "s" }
            ),
        );
        writeln!(
            self.out,
            "{:>4}  {:<28} {} {:<8} {:<14} {}",
            summary.id,
            summary.name,
            bullet,
            summary.status.as_str(),
            summary.species,
            episodes
        )
    }

    pub fn render_pagination(&mut self, pagination: PaginationState) -> io::Result<()> {
        let current = self.paint(FG_INFO, &pagination.current_page.to_string());
        let mut line = format!("Page {current} of {}", pagination.total_pages);
        if pagination.has_prev {
            line = format!("[p] Previous  {line}");
        }
        if pagination.has_next {
            line.push_str("  Next [n]");
        }
        writeln!(self.out, "{line}")
    }

    pub fn render_empty_state(&mut self, query: Option<&str>) -> io::Result<()> {
        writeln!(self.out, "No characters found")?;
        match query {
            Some(query) => writeln!(
                self.out,
                "No results for \"{query}\". Try a different search."
            ),
            None => writeln!(self.out, "No characters available at the moment."),
        }
    }

    /// Full error prompt for a failed character list
    pub fn render_error(&mut self, message: &str) -> io::Result<()> {
        let title = self.paint(FG_ERROR, "Something went wrong");
        writeln!(self.out, "{title}")?;
        writeln!(self.out, "{message}")?;
        let hint = self.paint(FG_DIM_TEXT, "Type 'r' to try again.");
        writeln!(self.out, "{hint}")
    }

    pub fn render_character_detail(&mut self, vm: &CharacterDetailViewModel) -> io::Result<()> {
        let Some(character) = vm.character() else {
            return Ok(());
        };
        let color = status_color(character.status);

        let name = self.paint(BOLD, &character.name);
        writeln!(self.out, "{name}")?;
        let status = self.paint(color.ansi(), &format!("{STATUS_BULLET} {}", character.status));
        writeln!(self.out, "  {status} - {}", character.species)?;
        if !character.character_type.is_empty() {
            writeln!(self.out, "  Type:              {}", character.character_type)?;
        }
        writeln!(self.out, "  Gender:            {}", character.gender)?;
        writeln!(self.out, "  Origin:            {}", character.origin.name)?;
        writeln!(self.out, "  Last known location: {}", character.location.name)?;
        if let Some(details) = vm.details().filter(|_| !vm.is_loading_episodes()) {
            writeln!(self.out, "  First seen in:     {}", details.first_seen)?;
        }
        writeln!(self.out)?;

        let heading = self.paint(BOLD, "Recent Episodes");
        writeln!(self.out, "{heading}")?;
        if vm.is_loading_episodes() {
            let line = self.paint(FG_WARNING, "Loading episodes...");
            writeln!(self.out, "  {line}")
        } else if vm.episodes().is_empty() {
            writeln!(self.out, "  No episodes found")
        } else {
            self.render_episodes(vm.episodes())
        }
    }

    pub fn render_episodes(&mut self, episodes: &[Episode]) -> io::Result<()> {
        for episode in episodes {
            self.render_episode(episode)?;
        }
        Ok(())
    }

    pub fn render_episode(&mut self, episode: &Episode) -> io::Result<()> {
        let code = self.paint(FG_INFO, &format_episode_code(&episode.episode));
        let air_date = self.paint(DIM, &format!("Air date: {}", episode.air_date));
        writeln!(self.out, "  {} ({})", episode.name, episode.episode)?;
        writeln!(self.out, "    {code}")?;
        writeln!(self.out, "    {air_date}")
    }

    /// Pretty-printed JSON of any domain object
    pub fn render_json<T: Serialize + ?Sized>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, value)?;
        writeln!(self.out)
    }

    pub fn render_message(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{message}")
    }

    pub fn render_prompt(&mut self) -> io::Result<()> {
        write!(self.out, "> ")?;
        self.out.flush()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
