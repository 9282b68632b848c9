mod commands;
mod config;
mod terminal;

use commands::{CommandLine, Commands, OrderArgs, menu, order};
use config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = Config {
        quiet: commands.quiet,
        no_banner: commands.no_banner,
    };
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Some(Commands::Order(args)) => order::order(args, &cfg),
        Some(Commands::Menu) => {
            menu::menu(&cfg);
            Ok(())
        }
        None => order::order(OrderArgs::default(), &cfg),
    }
}
