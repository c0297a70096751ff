use anyhow::Result;
use castellan_core::{Color, Game};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let game = Game::new();
    game.board().validate()?;
    info!(
        turn = game.turn(),
        to_move = %game.side_to_move(),
        moves = game.legal_moves(Color::White).len(),
        outcome = %game.evaluate(game.side_to_move()),
        "castellan ready"
    );
    Ok(())
}
