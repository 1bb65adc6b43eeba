use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use shiftbreak::attack::{Candidate, ScoredCandidate};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn print_brute_force(candidates: &[Candidate]) {
    println!("\n=== BRUTE FORCE ATTACK RESULTS ===");
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Shift").add_attribute(Attribute::Bold),
        Cell::new("Plaintext"),
    ]);
    if let Some(col) = table.column_mut(0) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for c in candidates {
        table.add_row(vec![Cell::new(c.shift), Cell::new(&c.text)]);
    }
    println!("{}", table);
}

pub fn print_ranked(ranked: &[ScoredCandidate]) {
    println!("\n=== TOP {} FREQUENCY ANALYSIS GUESSES ===", ranked.len());
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Shift"),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Plaintext"),
    ]);
    for i in 0..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (rank, c) in ranked.iter().enumerate() {
        let score = Cell::new(format!("{:.2}", c.score));
        let score = if rank == 0 { score.fg(Color::Green) } else { score };
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(c.shift),
            score,
            Cell::new(&c.text),
        ]);
    }
    println!("{}", table);
}

pub fn print_best(best: Option<&Candidate>) {
    match best {
        Some(c) => {
            println!("\n🔑 Best guess: shift {}", c.shift);
            println!("{}", c.text);
        }
        None => println!("\n⚠️  No letters to analyse; no best guess."),
    }
}
