use std::{env, process};

use sparsebench::{
    SparseBenchError, cli::GeomeanArgs, load_records, speedup_report, speedup_table,
};

const OPERATIONS: [(&str, &str); 2] = [("bfs", "BFS"), ("bellmanford", "Bellman-Ford")];

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", GeomeanArgs::help());
        return;
    }
    let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
    let config = match GeomeanArgs::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };
    if let Err(err) = run(&config) {
        eprintln!("command failed: {err}");
        process::exit(1);
    }
}

fn run(config: &GeomeanArgs) -> Result<(), SparseBenchError> {
    let records = load_records(&config.results_path)?;
    for (idx, (operation, label)) in OPERATIONS.into_iter().enumerate() {
        if idx > 0 {
            println!();
        }
        let table = speedup_table(&records, operation);
        print!("{}", speedup_report(label, &table));
    }
    Ok(())
}
