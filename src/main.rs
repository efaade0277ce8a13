//! displaykit CLI

use clap::Parser;

use displaykit::cli::{self, Cli, Commands, ConfigCommands, GlobalOptions};
use displaykit::error::Result;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);
    log::debug!("Running {:?}", cli.command);

    match cli.command {
        Commands::Success { content } => cli::display::success(&opts, &content),
        Commands::Error { content } => cli::display::error(&opts, &content),
        Commands::Warning { content } => cli::display::warning(&opts, &content),
        Commands::Info { content } => cli::display::info(&opts, &content),
        Commands::Card(args) => cli::display::card(
            &opts,
            &args.content,
            args.id.as_deref(),
            args.position.map(Into::into),
            args.reset.as_deref(),
        ),
        Commands::Show {
            kind,
            content,
            reset,
        } => cli::display::show(&opts, &kind, &content, reset.as_deref()),
        Commands::Include { filename } => cli::include::run(&opts, &filename),
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::SetTemplates { dir } => cli::config::set_templates(&opts, &dir),
            ConfigCommands::SetFormat { format } => cli::config::set_format(&opts, format),
        },
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("displaykit version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
    }
}
