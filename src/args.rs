use std::ffi::OsString;

use clap::{CommandFactory as _, Parser, Subcommand, error::ErrorKind};

/// Launches the PWSP daemon, GUI and CLI from inside the flatpak.
#[derive(Parser, Debug)]
#[command(name = "PWSP Flatpak", version, disable_help_subcommand = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run pwsp-cli with the given arguments
    #[command(disable_help_flag = true)]
    Cli {
        /// Arguments for pwsp-cli
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Start or kill pwsp-daemon
    #[command(infer_long_args = true)]
    Daemon(DaemonArgs),
}

#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
pub struct DaemonArgs {
    /// Start pwsp-daemon
    #[arg(long)]
    start: bool,
    /// Kill pwsp-daemon
    #[arg(long)]
    kill: bool,
}

/// What the launcher was asked to do, once parsing succeeded.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Invocation {
    /// No command: bring up both the daemon and the GUI.
    None,
    /// Forward everything after `cli` to the CLI tool.
    Cli(Vec<String>),
    Daemon(DaemonAction),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DaemonAction {
    Start,
    Kill,
}

impl Invocation {
    /// Parses the process arguments, printing usage and exiting on error.
    pub fn parse() -> Self {
        Self::try_parse_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Parses `args`, whose first item is the binary name.
    ///
    /// Everything after `cli` is taken before clap runs so that no token, `--` included, is consumed.
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

        if args.get(1).is_some_and(|command| command == "cli") {
            return args[2..]
                .iter()
                .map(|arg| {
                    arg.clone().into_string().map_err(|arg| {
                        Args::command().error(
                            ErrorKind::InvalidUtf8,
                            format!("Invalid UTF-8 in argument {arg:?}"),
                        )
                    })
                })
                .collect::<Result<_, _>>()
                .map(Invocation::Cli);
        }

        Args::try_parse_from(args).map(Args::into_invocation)
    }
}

impl Args {
    /// Lowers the parsed arguments into an [`Invocation`].
    pub fn into_invocation(self) -> Invocation {
        match self.command {
            None => Invocation::None,
            Some(Command::Cli { args }) => Invocation::Cli(args),
            Some(Command::Daemon(daemon)) => Invocation::Daemon(daemon.action()),
        }
    }
}

impl DaemonArgs {
    /// The argument group guarantees exactly one flag is set.
    fn action(&self) -> DaemonAction {
        if self.kill {
            DaemonAction::Kill
        } else {
            DaemonAction::Start
        }
    }
}
