use clap::Parser;
use vigil::cli::{
    handle_completions, handle_config_init, pins, report, Cli, Commands, ConfigCommands,
    PinsCommands,
};
use vigil::config::VigilConfig;
use vigil::store::open_board;

fn main() {
    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = match cli.command {
        Commands::Report(args) => match report::handle_report(&args) {
            Ok(output) => {
                println!("{}", output);
                Ok(())
            }
            Err(e) => Err(e.into()),
        },
        Commands::Pins(cmd) => {
            let config_path = match &cmd {
                PinsCommands::List(args) => &args.config,
                PinsCommands::Show(args) => &args.config,
            };
            let config = VigilConfig::load(Some(config_path.as_path()))
                .unwrap_or_else(|_| VigilConfig::default());

            match open_board(&config.store) {
                Ok(board) => {
                    let output = match cmd {
                        PinsCommands::List(args) => pins::handle_pins_list(&args, board.as_ref()),
                        PinsCommands::Show(args) => pins::handle_pins_show(&args, board.as_ref()),
                    };
                    match output {
                        Ok(output) => {
                            println!("{}", output);
                            Ok(())
                        }
                        Err(e) => Err(e),
                    }
                }
                Err(e) => Err(e.into()),
            }
        }
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Init(args) => handle_config_init(&args),
        },
        Commands::Completions(args) => {
            handle_completions(&args);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
