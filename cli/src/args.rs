use std::ffi::OsString;

use clap::Parser;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Parser, Debug)]
#[command(version, about = "Browse and edit a remote movie list", long_about = None)]
struct ClapArgs {
    /// Base URL of the movies API; requests go to `<url>/movies`.
    #[arg(short = 'u', long, env = "MOVIES_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    api_url: String,
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
            api_url: args.api_url,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_api_url_long() {
        let args = CommandLineArgs::parse_from(["movies", "--api-url", "http://example.test:8080"]);
        assert_eq!(args.api_url(), "http://example.test:8080");
    }

    #[test]
    fn test_parse_api_url_short() {
        let args = CommandLineArgs::parse_from(["movies", "-u", "http://other"]);
        assert_eq!(args.api_url(), "http://other");
    }
}
