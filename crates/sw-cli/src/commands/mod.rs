pub mod chance;
pub mod log;
pub mod pick;
pub mod roll;
pub mod table;

use sw_dice::Roller;

/// Build the roller a command will use: seeded when the user asked for a
/// reproducible run, OS entropy otherwise.
fn roller(seed: Option<u64>) -> Roller {
    match seed {
        Some(seed) => Roller::seeded(seed),
        None => Roller::from_os_rng(),
    }
}
