use clap::Parser;
use passkeep::cli::commands::{add::AddArgs, update::UpdateArgs};
use passkeep::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => passkeep::cli::commands::init::execute(&cli),
        Commands::Add {
            ref service,
            ref username,
            ref password,
            ref notes,
            ref tags,
            auto,
            length,
            symbols,
            allow_ambiguous,
        } => passkeep::cli::commands::add::execute(
            &cli,
            &AddArgs {
                service,
                username,
                password: password.as_deref(),
                notes,
                tags: tags.as_deref(),
                auto,
                length,
                symbols,
                allow_ambiguous,
            },
        ),
        Commands::List { ref filter } => {
            passkeep::cli::commands::list::execute(&cli, filter.as_deref())
        }
        Commands::Show { ref id, reveal } => {
            passkeep::cli::commands::show::execute(&cli, id, reveal)
        }
        Commands::Update {
            ref id,
            ref password,
            auto,
            ref notes,
            ref tags,
        } => passkeep::cli::commands::update::execute(
            &cli,
            &UpdateArgs {
                id,
                password: password.as_deref(),
                auto,
                notes: notes.as_deref(),
                tags: tags.as_deref(),
            },
        ),
        Commands::Delete { ref id, force } => {
            passkeep::cli::commands::delete::execute(&cli, id, force)
        }
        Commands::Generate {
            length,
            symbols,
            allow_ambiguous,
            no_require_each,
        } => passkeep::cli::commands::generate::execute(
            length,
            symbols,
            allow_ambiguous,
            no_require_each,
        ),
    };

    if let Err(e) = result {
        passkeep::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
