use colored::Colorize;

use vd_core::{standard_chambers, standard_hideouts, standard_participants};

pub fn run() -> Result<(), String> {
    println!("{}", "Participants".bold());
    for p in standard_participants() {
        println!("  {}", p.label());
    }

    println!("\n{}", "Hideouts".bold());
    for h in standard_hideouts() {
        println!("  {}", h.label());
    }

    println!("\n{}", "Chambers".bold());
    for c in standard_chambers() {
        println!("  {}", c.label());
    }

    Ok(())
}
