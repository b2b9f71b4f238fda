use pocket_ledger::cli;

fn main() {
    if let Err(err) = cli::run_cli() {
        cli::output::error(err);
        std::process::exit(1);
    }
}
