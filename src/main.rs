use clap::Parser;
use passvault::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        None | Some(Commands::Menu) => passvault::cli::commands::menu::execute(&cli),
        Some(Commands::Add {
            ref service,
            ref login,
            ref password,
        }) => passvault::cli::commands::add::execute(&cli, service, login, password.as_deref()),
        Some(Commands::Find { ref service }) => {
            passvault::cli::commands::find::execute(&cli, service)
        }
        Some(Commands::Delete { ref service, force }) => {
            passvault::cli::commands::delete::execute(&cli, service, force)
        }
        Some(Commands::List) => passvault::cli::commands::list::execute(&cli),
        Some(Commands::Generate { ref length }) => {
            passvault::cli::commands::generate::execute(length.as_deref())
        }
        Some(Commands::Completions { shell }) => {
            passvault::cli::commands::completions::execute(shell)
        }
    };

    if let Err(e) = result {
        passvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}

/// Send diagnostics to stderr; `RUST_LOG` overrides the default filter.
fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("passvault={level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
