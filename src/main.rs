//! duration-parser CLI entry point

use std::process::ExitCode;

use clap::Parser;

use duration_parser::cli::{run_format, run_parse, Cli, Commands, OutputOptions, Presenter};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    if cli.no_color {
        presenter.set_color(false);
    }

    let style = cli.style.unwrap_or_default();

    match cli.command {
        Commands::Parse {
            text,
            seconds,
            json,
        } => run_parse(
            &text.join(" "),
            OutputOptions {
                style,
                json,
                seconds,
            },
            &presenter,
        ),
        Commands::Format { seconds, json } => run_format(
            seconds,
            OutputOptions {
                style,
                json,
                seconds: false,
            },
            &presenter,
        ),
    }
}
