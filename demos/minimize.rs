//! Basic minimization example

use qm_logic::{Problem, QmConfig, ReportOptions};

fn main() -> std::io::Result<()> {
    println!("Boolean Function Minimization Example\n");

    println!("Creating a 4-input Boolean function");
    println!("Minterms:    4 5 6 8 9 10 13");
    println!("Don't-cares: 0 7 15\n");

    let problem = Problem::new(4, &[4, 5, 6, 8, 9, 10, 13], &[0, 7, 15])?;

    println!("Minimizing using the Quine-McCluskey method...");
    let result = problem.minimize(&QmConfig::default())?;

    println!("\n{} prime implicants:", result.primes().len());
    for prime in result.primes() {
        println!("  {}", prime.pattern(problem.width()));
    }

    println!();
    let options = ReportOptions {
        table: true,
        ..Default::default()
    };
    result.write_sections(&mut std::io::stdout(), &options)?;

    let stats = result.stats();
    println!(
        "\nMinimized to {} terms with {} literals",
        stats.cover_size, stats.cover_literals
    );

    Ok(())
}
