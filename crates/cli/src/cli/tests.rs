use std::path::PathBuf;

use clap::Parser;

use super::*;

#[test]
fn parse_caps_command() {
	let cli = Cli::try_parse_from(["fixture", "caps"]).unwrap();
	assert!(matches!(cli.command, Commands::Caps));
	assert!(!cli.sauce);
	assert_eq!(cli.verbose, 0);
}

#[test]
fn global_flags_follow_subcommand() {
	let cli = Cli::try_parse_from(["fixture", "endpoint", "--sauce", "-vv", "--dir", "/home/u/proj"]).unwrap();
	assert!(matches!(cli.command, Commands::Endpoint));
	assert!(cli.sauce);
	assert_eq!(cli.verbose, 2);
	assert_eq!(cli.dir, Some(PathBuf::from("/home/u/proj")));
}

#[test]
fn parse_smoke_defaults() {
	let cli = Cli::try_parse_from(["fixture", "smoke"]).unwrap();
	match cli.command {
		Commands::Smoke(args) => {
			assert_eq!(args.name, "smoke");
			assert_eq!(args.wait_for, None);
		}
		_ => panic!("Expected Smoke command"),
	}
}

#[test]
fn parse_smoke_with_wait() {
	let cli = Cli::try_parse_from(["fixture", "smoke", "--name", "testTextFields", "--wait-for", "#home"]).unwrap();
	match cli.command {
		Commands::Smoke(args) => {
			assert_eq!(args.name, "testTextFields");
			assert_eq!(args.wait_for.as_deref(), Some("#home"));
		}
		_ => panic!("Expected Smoke command"),
	}
}

#[test]
fn missing_subcommand_is_an_error() {
	assert!(Cli::try_parse_from(["fixture"]).is_err());
}
