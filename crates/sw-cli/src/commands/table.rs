use std::io::{self, BufRead, Write};

use colored::Colorize;

use sw_console::output;
use sw_dice::{Roll, Roller};

pub fn run(seed: Option<u64>) -> Result<(), String> {
    let mut roller = super::roller(seed);

    output::header(&mut io::stdout(), "SPIELWERK DICE TABLE", '=', 44)
        .map_err(|e| e.to_string())?;
    if let Some(seed) = seed {
        println!("  Seed: {seed}");
    }
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }

        match respond(&mut roller, input) {
            Ok(output) => println!("{output}\n"),
            Err(e) => println!("{}\n", e.yellow()),
        }
    }

    Ok(())
}

/// Dispatch one table command and render its response.
fn respond(roller: &mut Roller, input: &str) -> Result<String, String> {
    let (command, rest) = match input.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim()),
        None => (input, ""),
    };

    match command.to_lowercase().as_str() {
        "help" | "h" => Ok(help_text()),
        "roll" | "r" => {
            let notation = if rest.is_empty() { "d20" } else { rest };
            let roll = Roll::parse(notation).map_err(|e| e.to_string())?;
            let outcome = roller.roll(&roll);
            Ok(format!("  {roll}: {outcome}"))
        }
        "chance" | "c" => {
            let percentage: u32 = rest
                .trim_end_matches('%')
                .trim()
                .parse()
                .map_err(|_| format!("'{rest}' is not a percentage"))?;
            let outcome = roller.chance_detailed(percentage);
            let answer = if outcome.success { "Yes" } else { "No" };
            Ok(format!(
                "  {answer} (rolled {} vs {}%)",
                outcome.roll, outcome.threshold
            ))
        }
        "pick" | "p" => {
            let items: Vec<&str> = rest.split_whitespace().collect();
            match roller.pick(&items) {
                Some(choice) => Ok(format!("  {choice}")),
                None => Err("pick needs at least one item".to_string()),
            }
        }
        _ => Err(format!("unknown command '{command}' (try 'help')")),
    }
}

fn help_text() -> String {
    [
        "  roll <notation>   roll dice (e.g. roll 2d6+1)",
        "  chance <percent>  d100 check against a threshold",
        "  pick <a> <b> ...  pick one item at random",
        "  quit              leave the table",
    ]
    .join("\n")
}
