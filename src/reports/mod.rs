use cipherforge::alphabet::Alphabet;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Table};

const PREVIEW_LEN: usize = 400;

/// Render a key as a cipher -> plain mapping grid.
pub fn print_key_table(key: &Alphabet) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let cols = 13;
    let cipher: Vec<u8> = (b'A'..=b'Z').collect();
    let plain = key.as_bytes();

    for (cipher_chunk, plain_chunk) in cipher.chunks(cols).zip(plain.chunks(cols)) {
        table.add_row(row_of(cipher_chunk));
        table.add_row(row_of(plain_chunk));
    }
    println!("{}", table);
}

fn row_of(letters: &[u8]) -> Vec<Cell> {
    letters
        .iter()
        .map(|&b| Cell::new((b as char).to_string()).set_alignment(CellAlignment::Center))
        .collect()
}

pub fn print_run_summary(fitness: f64, generations_run: usize) {
    println!("Score: {:.2}", fitness);
    println!("Generations: {}", generations_run);
}

pub fn print_preview(plaintext: &str) {
    let cut = plaintext
        .char_indices()
        .nth(PREVIEW_LEN)
        .map_or(plaintext.len(), |(i, _)| i);
    println!("\nDecrypted Text:");
    println!("{}", &plaintext[..cut]);
    if cut < plaintext.len() {
        println!("… ({} more symbols)", plaintext.len() - cut);
    }
}
