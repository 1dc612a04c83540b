use clap::Parser;
use std::io;

mod commands;
mod output;

use commands::rewrite::{self, RewriteArgs};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "borderfix")]
#[command(version = VERSION)]
#[command(about = "Rewrite color-class tokens across a frontend source tree")]
struct Cli {
    /// Print a JSON envelope with the run report instead of per-file notices
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    args: RewriteArgs,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    // --show-config always answers with the JSON envelope.
    let json_mode = cli.json || cli.args.show_config;

    let result = if json_mode {
        rewrite::run(cli.args, &mut io::sink())
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        rewrite::run(cli.args, &mut handle)
    };

    let (json_result, exit_code) = output::map_cmd_result_to_json(result);

    if json_mode {
        output::print_json_result(json_result);
    } else if let Err(err) = &json_result {
        output::print_error(err);
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
