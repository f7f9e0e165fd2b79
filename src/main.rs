use clap::Parser;

use commands::GlobalArgs;

mod commands;
mod output;

use commands::replace::{self, ReplaceOutput};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "rebrand")]
#[command(version = VERSION)]
#[command(about = "Replace brand strings across a project tree in place")]
struct Cli {
    #[command(flatten)]
    args: replace::ReplaceArgs,

    /// Print a JSON report instead of progress lines
    #[arg(long)]
    json: bool,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs { json: cli.json };

    let result = replace::run(cli.args, &global);

    if global.json {
        let (json_result, exit_code) = output::map_cmd_result_to_json(result);
        if let Err(err) = output::print_json_result(json_result) {
            output::print_error(&err);
            return std::process::ExitCode::from(1);
        }
        return std::process::ExitCode::from(exit_code_to_u8(exit_code));
    }

    match result {
        Ok((ReplaceOutput::Config { config }, exit_code)) => {
            match serde_json::to_string_pretty(&config) {
                Ok(text) => println!("{}", text),
                Err(e) => {
                    output::print_error(&rebrand::Error::internal_json(
                        e.to_string(),
                        Some("serialize config".to_string()),
                    ));
                    return std::process::ExitCode::from(1);
                }
            }
            std::process::ExitCode::from(exit_code_to_u8(exit_code))
        }
        // Progress lines were already printed during the run.
        Ok((ReplaceOutput::Run(_), exit_code)) => {
            std::process::ExitCode::from(exit_code_to_u8(exit_code))
        }
        Err(err) => {
            output::print_error(&err);
            std::process::ExitCode::from(exit_code_to_u8(output::exit_code_for_error(err.code)))
        }
    }
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
