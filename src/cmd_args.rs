use crate::models::{CharacterFilters, CharacterStatus, Gender};
use clap::{Args, Subcommand};
use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Profile name
    /// Optional. Profile name to read connection settings from. Default is 'default'.
    /// If the profile is not configured, the public API defaults are used.
    #[clap(short = 'p', long, default_value = "default", help = "profile name")]
    profile: String,

    /// Verbose mode
    /// Optional. Print debug logs to stderr.
    #[clap(
        short = 'v',
        long,
        help = "Print verbose message",
        default_value = "false"
    )]
    verbose: bool,

    /// Optional. Overrides the base URL of the profile.
    #[clap(long, help = "API base URL")]
    base_url: Option<String>,

    /// Optional. Print results as JSON instead of text.
    #[clap(long, help = "Print JSON output", default_value = "false")]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List one page of characters
    List(ListArgs),
    /// Show a character with its most recent episodes
    Character { id: u32 },
    /// Show a single episode
    Episode { id: u32 },
    /// Fetch episodes by their reference URLs
    Episodes {
        #[arg(required = true)]
        urls: Vec<String>,
    },
    /// Browse characters interactively
    Browse {
        #[clap(long, help = "initial name search")]
        name: Option<String>,
    },
}

#[derive(Args, Debug, Clone, PartialEq, Eq, Default)]
pub struct ListArgs {
    #[clap(long, help = "name substring")]
    pub name: Option<String>,
    #[clap(long, help = "Alive, Dead or unknown")]
    pub status: Option<CharacterStatus>,
    #[clap(long)]
    pub species: Option<String>,
    #[clap(long = "type")]
    pub character_type: Option<String>,
    #[clap(long, help = "Female, Male, Genderless or unknown")]
    pub gender: Option<Gender>,
    #[clap(long, help = "1-based page number")]
    pub page: Option<u32>,
}

impl ListArgs {
    pub fn to_filters(&self) -> CharacterFilters {
        CharacterFilters {
            name: self.name.clone(),
            status: self.status,
            species: self.species.clone(),
            character_type: self.character_type.clone(),
            gender: self.gender,
            page: self.page,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    profile: String,
    verbose: bool,
    base_url: Option<String>,
    json: bool,
    command: Command,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        Self::from_clap(ClapArgs::parse())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from_clap(ClapArgs::parse_from(itr))
    }

    fn from_clap(args: ClapArgs) -> Self {
        Self {
            profile: args.profile,
            verbose: args.verbose,
            base_url: args.base_url,
            json: args.json,
            command: args.command.unwrap_or(Command::Browse { name: None }),
        }
    }

    pub fn profile(&self) -> &String {
        &self.profile
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn json(&self) -> bool {
        self.json
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}
