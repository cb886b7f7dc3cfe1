use clap::Parser;
use truth_table::{Alphabet, Options, TruthTable, MAX_VARIABLES};

#[derive(Parser)]
#[command(name = "truth-table")]
#[command(about = "Print the truth table of a propositional expression")]
struct Args {
    /// Expression, e.g. "(A ∧ B) → ∼C"
    expression: String,

    /// Only accept the variables A to D
    #[arg(long)]
    classic: bool,

    /// Maximum number of distinct variables
    #[arg(short, long, default_value_t = MAX_VARIABLES)]
    max_vars: usize,

    /// Log pipeline steps
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    simplelog::TermLogger::init(
        if args.verbose {
            simplelog::LevelFilter::Trace
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    if args.max_vars == 0 || args.max_vars > MAX_VARIABLES {
        color_eyre::eyre::bail!("--max-vars must be between 1 and {}", MAX_VARIABLES);
    }
    let alphabet = if args.classic {
        Alphabet::new('A', 'D')
    } else {
        Alphabet::default()
    };
    let options = Options::new(alphabet, args.max_vars);

    match TruthTable::generate_with(&args.expression, &options) {
        Ok(table) => {
            print!("{}", table);
            println!();
            if table.is_tautology() {
                println!("tautology");
            } else if table.is_contradiction() {
                println!("contradiction");
            } else {
                println!("satisfiable: {} of {} rows", table.count_true(), table.len());
            }
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
