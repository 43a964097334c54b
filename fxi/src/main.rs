use fixint::bits::*;
use fixint::unsigned::{parse_unsigned_int_radix, to_unsigned_string_radix};
use fixint::{Int8, NumberError, decode, parse_int_radix, to_binary_string, to_hex_string, to_string_radix};

#[derive(clap::Parser)]
#[command(name = "fxi", version, about = "Fixed-width integer codec")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Format an integer literal (decimal, 0x/# hex or 0 octal) in a radix
    Format {
        #[arg(allow_hyphen_values = true)]
        value: String,
        #[arg(short, long, default_value_t = 10, allow_negative_numbers = true)]
        radix: i32,
        /// Read the value's bit pattern as unsigned
        #[arg(long)]
        unsigned: bool,
    },
    /// Parse text in a radix
    Parse {
        #[arg(allow_hyphen_values = true)]
        text: String,
        #[arg(short, long, default_value_t = 10, allow_negative_numbers = true)]
        radix: i32,
        #[arg(long, conflicts_with = "byte")]
        unsigned: bool,
        /// Require the value to fit in 8 bits
        #[arg(long)]
        byte: bool,
    },
    /// Decode a prefixed integer literal
    Decode {
        #[arg(allow_hyphen_values = true)]
        text: String,
        #[arg(long)]
        byte: bool,
    },
    /// Show the bit primitives of an integer literal
    Bits {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

fn run_command(command: &Command) -> Result<String, NumberError> {
    match command {
        Command::Format { value, radix, unsigned } => {
            let v = decode(value)?;
            if *unsigned {
                Ok(to_unsigned_string_radix(v, *radix))
            } else {
                Ok(to_string_radix(v, *radix))
            }
        }
        Command::Parse {
            text,
            radix,
            unsigned,
            byte,
        } => {
            if *byte {
                Ok(Int8::parse_byte_radix(text, *radix)?.to_string())
            } else if *unsigned {
                Ok(parse_unsigned_int_radix(text, *radix)?.to_string())
            } else {
                Ok(parse_int_radix(text, *radix)?.to_string())
            }
        }
        Command::Decode { text, byte } => {
            if *byte {
                Ok(Int8::decode(text)?.to_string())
            } else {
                Ok(decode(text)?.to_string())
            }
        }
        Command::Bits { value } => Ok(describe_bits(decode(value)?)),
    }
}

fn describe_bits(v: i32) -> String {
    let rows = [
        ("hex", to_hex_string(v)),
        ("binary", to_binary_string(v)),
        ("leading zeros", number_of_leading_zeros(v).to_string()),
        ("trailing zeros", number_of_trailing_zeros(v).to_string()),
        ("bit count", bit_count(v).to_string()),
        ("highest one bit", to_hex_string(highest_one_bit(v))),
        ("lowest one bit", to_hex_string(lowest_one_bit(v))),
        ("reverse", to_hex_string(reverse(v))),
        ("reverse bytes", to_hex_string(reverse_bytes(v))),
        ("signum", signum(v).to_string()),
    ];
    rows.iter().map(|(name, value)| format!("{name:>15}: {value}")).collect::<Vec<_>>().join("\n")
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    // Initialize logger (controlled by RUST_LOG)
    env_logger::init();

    let cli = <Cli as clap::Parser>::parse();
    let Some(command) = cli.command else {
        // No subcommand -> start the interactive prompt
        run_repl()?;
        return Ok(());
    };

    match run_command(&command) {
        Ok(out) => println!("{out}"),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

// Each line is parsed with the same clap definition as the command line.
#[allow(clippy::println_empty_string)]
fn run_repl() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    use rustyline::Editor;
    use rustyline::error::ReadlineError;
    use std::path::PathBuf;

    let ver = clap::crate_version!();
    println!("fxi v{ver}. Commands: format, parse, decode, bits, help. Type 'exit' or Ctrl-D to quit.");

    let mut rl = match Editor::<(), rustyline::history::FileHistory>::new() {
        Ok(e) => e,
        Err(err) => {
            eprintln!("Failed to initialize line editor: {err}");
            std::process::exit(1);
        }
    };

    let history_path: Option<PathBuf> = std::env::var("HOME").ok().map(|h| PathBuf::from(h).join(".fxi_history"));
    if let Some(ref p) = history_path
        && let Err(err) = rl.load_history(p)
    {
        log::debug!("no history loaded from {}: {err}", p.display());
    }

    loop {
        match rl.readline("fxi> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed == "exit" || trimmed == ".exit" {
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }
                rl.add_history_entry(trimmed)?;

                let args = std::iter::once("fxi").chain(trimmed.split_whitespace());
                match <Cli as clap::Parser>::try_parse_from(args) {
                    Ok(Cli { command: Some(command) }) => match run_command(&command) {
                        Ok(out) => println!("{out}"),
                        Err(err) => eprintln!("{err}"),
                    },
                    Ok(Cli { command: None }) => {}
                    Err(err) => eprintln!("{err}"),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("Goodbye");
                break;
            }
            Err(err) => {
                eprintln!("Readline error: {err}");
                break;
            }
        }
    }

    if let Some(ref p) = history_path {
        rl.save_history(p)?;
    }
    Ok(())
}
