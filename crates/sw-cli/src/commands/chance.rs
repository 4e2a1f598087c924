use colored::Colorize;

pub fn run(percentage: u32, seed: Option<u64>) -> Result<(), String> {
    let mut roller = super::roller(seed);
    let outcome = roller.chance_detailed(percentage);

    let answer = if outcome.success {
        "Yes".green().bold()
    } else {
        "No".red().bold()
    };
    println!(
        "  {answer} (rolled {} vs {}%)",
        outcome.roll, outcome.threshold
    );

    Ok(())
}
