//! Eval command handler: evaluates a five-card hand given on the command line.

use crate::error::CliError;
use crate::formatters::format_cards;
use crate::ui;
use crate::validation::parse_cards;
use drawpoker_engine::hand::evaluate_hand;
use std::io::Write;

pub fn handle_eval_command(
    cards: &[String],
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cards = match parse_cards(cards) {
        Ok(c) => c,
        Err(msg) => {
            ui::write_error(err, &msg)?;
            return Err(CliError::InvalidInput(msg));
        }
    };
    let eval = evaluate_hand(&cards);
    writeln!(out, "Hand: {}", format_cards(&cards))?;
    writeln!(out, "Category: {}", eval.category)?;
    writeln!(out, "Evaluation: {}", eval)?;
    Ok(())
}
