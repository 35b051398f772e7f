use std::env;
use std::net::SocketAddr;
use std::process;

use getopts::Options;

pub const ADDRESS_ENV: &str = "EVENTS_BOARD_ADDR";
pub const DEFAULT_NAME: &str = "Community Events";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub address: SocketAddr,
    pub name: String,
    pub seed: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(Args),
    Help(String),
}

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optopt(
        "a",
        "address",
        concat!(
            "Socket address (IP and port) to listen on ",
            "[Default: $EVENTS_BOARD_ADDR or 127.0.0.1:8080]"
        ),
        "SOCKET_ADDRESS",
    );
    opts.optopt(
        "n",
        "name",
        "Name of the exported calendar [Default: Community Events]",
        "NAME",
    );
    opts.optflag(
        "s",
        "seed",
        "Start with the sample events on the board [Default: false]",
    );
    opts
}

/// The listen address used when `--address` is absent, given the value of `EVENTS_BOARD_ADDR`.
fn default_address(env_value: Option<String>) -> Result<SocketAddr, String> {
    match env_value {
        Some(value) => value
            .parse()
            .map_err(|err| format!("Value of `{ADDRESS_ENV}` is invalid: {err}")),
        None => Ok(SocketAddr::from(([127, 0, 0, 1], 8080))),
    }
}

pub fn try_parse(args: Vec<String>) -> Result<Command, String> {
    let opts = opts();
    let matches = opts.parse(args).map_err(|fail| fail.to_string())?;

    if matches.opt_present("help") {
        return Ok(Command::Help(
            opts.usage(&opts.short_usage(env!("CARGO_PKG_NAME"))),
        ));
    }

    let address = match matches.opt_str("address") {
        Some(raw) => raw
            .parse()
            .map_err(|err| format!("Provided value for option 'address' is invalid: {err}"))?,
        None => default_address(env::var(ADDRESS_ENV).ok())?,
    };

    let name = matches
        .opt_str("name")
        .unwrap_or_else(|| DEFAULT_NAME.to_string());

    Ok(Command::Run(Args {
        address,
        name,
        seed: matches.opt_present("seed"),
    }))
}

/// Like [`try_parse`], but prints help or errors and exits.
pub fn parse(args: Vec<String>) -> Args {
    match try_parse(args) {
        Ok(Command::Run(args)) => args,
        Ok(Command::Help(usage)) => {
            println!("{usage}");
            process::exit(0);
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn parses_every_option() {
        let command = try_parse(args(&[
            "-a",
            "0.0.0.0:3000",
            "--name",
            "Parish Board",
            "-s",
        ]));

        assert_eq!(
            command,
            Ok(Command::Run(Args {
                address: SocketAddr::from(([0, 0, 0, 0], 3000)),
                name: "Parish Board".to_string(),
                seed: true,
            }))
        );
    }

    #[test]
    fn falls_back_to_defaults() {
        let Ok(Command::Run(parsed)) = try_parse(args(&["-a", "127.0.0.1:9000"])) else {
            panic!("address-only arguments must parse");
        };
        assert_eq!(parsed.name, DEFAULT_NAME);
        assert!(!parsed.seed);
    }

    #[test]
    fn default_address_reads_env_value() {
        assert_eq!(default_address(None), Ok(SocketAddr::from(([127, 0, 0, 1], 8080))));
        assert_eq!(
            default_address(Some("0.0.0.0:4000".to_string())),
            Ok(SocketAddr::from(([0, 0, 0, 0], 4000)))
        );
        assert!(default_address(Some("localhost".to_string())).is_err());
    }

    #[test]
    fn rejects_bad_address_and_unknown_flags() {
        assert!(try_parse(args(&["--address", "localhost"])).is_err());
        assert!(try_parse(args(&["--verbose"])).is_err());
    }

    #[test]
    fn help_returns_usage() {
        let Ok(Command::Help(usage)) = try_parse(args(&["-h"])) else {
            panic!("-h must produce usage");
        };
        assert!(usage.contains("--address"));
    }
}
