use std::io::stdout;
use std::{env, process};

use rocks_lang::{rocks, Outcome};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut stdout = stdout();
    let mut rocks = rocks::new(&mut stdout);

    match args.len() {
        n if n > 2 => {
            eprintln!("Usage: rocks [script]");
            process::exit(64);
        }
        2 => {
            let outcome = rocks.run_file(&args[1]);
            process::exit(match outcome {
                Outcome::Ok => 0,
                Outcome::StaticError => 65,
                Outcome::RuntimeError => 70,
            });
        }
        _ => rocks.run_prompt(),
    };
}
