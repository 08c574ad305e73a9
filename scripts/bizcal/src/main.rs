use clap::Parser;
use cmds::Cmd;

mod cmds;
mod util;

/// Business-day calendar queries over calendar files.
#[derive(Debug, Parser)]
#[command(name = "bizcal", version)]
struct Cli {
    /// Show debug logs
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: cmds::Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::builder()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    log::info!("{:?}", cli);
    cli.command.run()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from([
            "bizcal",
            "add",
            "bacs",
            "2013-01-03",
            "-2",
            "--calendar-dir",
            "a",
            "--calendar-dir",
            "b,c",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        let cmds::Commands::Add(args) = cli.command else {
            panic!("unexpected command");
        };
        assert_eq!(args.calendar, "bacs");
        assert_eq!(args.n, -2);
        assert_eq!(
            args.src.calendar_dirs,
            vec![PathBuf::from("a"), PathBuf::from("b"), PathBuf::from("c")]
        );
    }

    #[test]
    fn test_parse_roll_backward() {
        let cli = Cli::try_parse_from([
            "bizcal",
            "roll",
            "--backward",
            "bacs",
            "January 1st, 2013",
            "--calendar-dir",
            "a",
        ])
        .unwrap();

        assert!(!cli.verbose);
        let cmds::Commands::Roll(args) = cli.command else {
            panic!("unexpected command");
        };
        assert!(args.backward);
        assert_eq!(args.date.to_string(), "2013-01-01");
    }

    #[test]
    fn test_parse_invalid_date() {
        let err = Cli::try_parse_from([
            "bizcal",
            "check",
            "bacs",
            "2013-02-30",
            "--calendar-dir",
            "a",
        ])
        .unwrap_err();

        assert!(
            err.to_string().contains("Failed to parse '2013-02-30' as a date"),
            "{err}"
        );
    }

    #[test]
    fn test_parse_schema() {
        let cli = Cli::try_parse_from(["bizcal", "schema"]).unwrap();

        assert!(matches!(cli.command, cmds::Commands::Schema(_)));
    }
}
