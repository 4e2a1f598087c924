pub fn run(items: &[String], seed: Option<u64>) -> Result<(), String> {
    let mut roller = super::roller(seed);
    match roller.pick(items) {
        Some(choice) => {
            println!("  {choice}");
            Ok(())
        }
        None => Err("nothing to pick from".to_string()),
    }
}
