use std::path::PathBuf;

use crate::CliOptions;

/// Parse CLI arguments to a [CliOptions] struct.
///
/// If an unrecognised argument is found a message is sent and the process is terminated.
pub fn parse_args(args: &[String], cli_options: &mut CliOptions) {
    for arg in args.iter().skip(1) {
        let mut split = arg.split("=");
        match split.next() {
            Some("--table") => {
                cli_options.table = true;
            }

            Some("--models") => {
                cli_options.models = true;
            }

            Some("--csv") => match split.next() {
                Some(path) => cli_options.csv = Some(PathBuf::from(path)),
                None => {
                    println!("A path is required, e.g. --csv=table.csv");
                    std::process::exit(1);
                }
            },

            Some("--help") | Some("-h") => {
                println!("veritable_cli [--table] [--models] [--csv=PATH]");
                println!("  --table     print the full truth table");
                println!("  --models    print the count of satisfying assignments");
                println!("  --csv=PATH  write the truth table to PATH as CSV");
                std::process::exit(0);
            }

            _ => {
                println!("Unrecognised argument: {arg}");
                std::process::exit(1);
            }
        }
    }
}
