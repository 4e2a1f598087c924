use colored::Colorize;

use sw_dice::Roll;

pub fn run(notation: &str, times: u32, seed: Option<u64>) -> Result<(), String> {
    let roll = Roll::parse(notation).map_err(|e| e.to_string())?;
    let mut roller = super::roller(seed);

    for _ in 0..times {
        let outcome = roller.roll(&roll);
        println!("  {}: {outcome}", roll.to_string().bold());
    }

    Ok(())
}
