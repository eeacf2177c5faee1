//! Lumin CLI - SVG icon library compiler
//!
//! Usage: lumin <COMMAND>
//!
//! Commands:
//!   add      Add custom icons to the library
//!   publish  Test, build and publish the package to npm
//!   verify   Check that every icon has all six weights

mod cli;
mod commands;
mod ui;

use clap::Parser;

use cli::{Cli, Commands};
use commands::{AddArgs, GlobalArgs};
use lumin::PublishOptions;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(cli::parse_exit_code(&err));
        }
    };
    let json = cli.json;

    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let global = GlobalArgs {
        json: cli.json,
        verbose: cli.verbose,
        color: cli.color,
        config: cli.config,
    };

    match cli.command {
        Commands::Add {
            folder,
            icon,
            name,
            dry_run,
            render,
            overwrite,
            preset,
        } => commands::cmd_add(
            AddArgs {
                folder,
                icon,
                name,
                dry_run,
                render,
                overwrite,
                preset,
            },
            &global,
        ),
        Commands::Publish {
            dry_run,
            tag,
            skip_tests,
            skip_build,
        } => commands::cmd_publish(
            PublishOptions {
                tag,
                dry_run,
                skip_tests,
                skip_build,
            },
            &global,
        ),
        Commands::Verify { assets } => commands::cmd_verify(assets, &global),
    }
}
