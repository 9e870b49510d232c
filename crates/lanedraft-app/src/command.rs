// Command-line interface for the `lanedraft` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use lanedraft_core::draft::hero::Lane;

#[derive(Debug, Parser)]
#[command(name = "lanedraft", version, about = "Recommend the next hero pick for a lane draft")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print every known hero with its roles, lanes and damage types
    Heroes {
        /// Only list heroes that can play this lane
        #[arg(long, value_parser = parse_lane)]
        lane: Option<Lane>,
    },
    /// Answer one JSON draft request
    Recommend {
        /// Request file; reads stdin when omitted
        input: Option<PathBuf>,
    },
}

fn parse_lane(s: &str) -> Result<Lane, String> {
    Lane::from_str_lane(s).ok_or_else(|| {
        let valid: Vec<&str> = Lane::ALL.iter().map(|l| l.as_str()).collect();
        format!("unknown lane `{s}`; expected one of: {}", valid.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Command, clap::Error> {
        Cli::try_parse_from(std::iter::once("lanedraft").chain(args.iter().copied()))
            .map(|cli| cli.command)
    }

    #[test]
    fn parses_heroes() {
        assert_eq!(parse(&["heroes"]).unwrap(), Command::Heroes { lane: None });
    }

    #[test]
    fn heroes_lane_filter() {
        assert_eq!(
            parse(&["heroes", "--lane", "roam"]).unwrap(),
            Command::Heroes {
                lane: Some(Lane::Roam)
            }
        );
        let err = parse(&["heroes", "--lane", "top"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn recommend_reads_stdin_without_file() {
        assert_eq!(
            parse(&["recommend"]).unwrap(),
            Command::Recommend { input: None }
        );
    }

    #[test]
    fn recommend_takes_one_file() {
        assert_eq!(
            parse(&["recommend", "req.json"]).unwrap(),
            Command::Recommend {
                input: Some(PathBuf::from("req.json"))
            }
        );
        let err = parse(&["recommend", "a.json", "b.json"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn rejects_unknown_and_missing_commands() {
        assert!(parse(&[]).is_err());
        assert_eq!(
            parse(&["draft"]).unwrap_err().kind(),
            ErrorKind::InvalidSubcommand
        );
        assert_eq!(
            parse(&["heroes", "--all"]).unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
