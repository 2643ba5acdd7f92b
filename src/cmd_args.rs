use std::ffi::OsString;

use crate::config::DEFAULT_PROFILE_NAME;
use crate::models::SortOption;
use crate::view_models::{ErrorMode, DEFAULT_PER_PAGE};

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Profile name
    /// Section of the profile file holding base_url and access_key.
    #[clap(short = 'p', long, default_value = DEFAULT_PROFILE_NAME, help = "profile name")]
    profile: String,

    /// Page size of the initial load
    #[clap(short = 'n', long, default_value_t = DEFAULT_PER_PAGE, help = "items per page")]
    per_page: u32,

    /// Sort key applied after loading
    #[clap(short = 's', long, help = "sort by 'price' or 'name'")]
    sort: Option<SortOption>,

    /// Text filter applied after loading (and sorting)
    #[clap(short = 'q', long, help = "filter by name or brand")]
    search: Option<String>,

    /// Sort and search through the API instead of on the loaded page
    #[clap(long, help = "re-fetch from the API to sort or search")]
    remote: bool,

    /// Swallow fetch errors and show an empty list instead
    #[clap(long, help = "hide fetch errors behind an empty list")]
    silent: bool,

    /// Verbose mode
    /// Optional. Print verbose messages.
    #[clap(short = 'v', long, help = "Print verbose message")]
    verbose: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    profile: String,
    per_page: u32,
    sort: Option<SortOption>,
    search: Option<String>,
    remote: bool,
    silent: bool,
    verbose: bool,
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            profile: args.profile,
            per_page: args.per_page,
            sort: args.sort,
            search: args.search,
            remote: args.remote,
            silent: args.silent,
            verbose: args.verbose,
        }
    }
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn profile(&self) -> &String {
        &self.profile
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn sort(&self) -> Option<SortOption> {
        self.sort
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn remote(&self) -> bool {
        self.remote
    }

    pub fn error_mode(&self) -> ErrorMode {
        if self.silent {
            ErrorMode::Silent
        } else {
            ErrorMode::Surface
        }
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_values() {
        let args = CommandLineArgs::parse_from(["program"]);
        assert_eq!(args.profile(), "default");
        assert_eq!(args.per_page(), 20);
        assert_eq!(args.sort(), None);
        assert_eq!(args.search(), None);
        assert!(!args.remote());
        assert_eq!(args.error_mode(), ErrorMode::Surface);
        assert!(!args.verbose());
    }

    #[test]
    fn test_parse_args_long_flags() {
        let args = CommandLineArgs::parse_from([
            "program",
            "--profile",
            "test",
            "--per-page",
            "50",
            "--sort",
            "name",
            "--search",
            "acme",
            "--remote",
            "--silent",
            "--verbose",
        ]);
        assert_eq!(args.profile(), "test");
        assert_eq!(args.per_page(), 50);
        assert_eq!(args.sort(), Some(SortOption::ByName));
        assert_eq!(args.search(), Some("acme"));
        assert!(args.remote());
        assert_eq!(args.error_mode(), ErrorMode::Silent);
        assert!(args.verbose());
    }

    #[test]
    fn test_parse_args_short_flags() {
        let args =
            CommandLineArgs::parse_from(["program", "-p", "dev", "-n", "5", "-s", "price", "-q", "red"]);
        assert_eq!(args.profile(), "dev");
        assert_eq!(args.per_page(), 5);
        assert_eq!(args.sort(), Some(SortOption::ByPrice));
        assert_eq!(args.search(), Some("red"));
    }

    #[test]
    fn test_invalid_sort_is_rejected() {
        let result = ClapArgs::try_parse_from(["program", "--sort", "rating"]);
        assert!(result.is_err());
    }
}
