use std::io::Write;
use std::process;

use clap::Parser;
use log::error;

use hexchess_core::console::console_top::run_stdio_loop;
use hexchess_core::console::session::EngineSession;
use hexchess_core::errors::HexChessResult;
use hexchess_core::game_state::chess_types::Color;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Start from this setup notation instead of the opening array
    #[arg(short, long, value_name = "NOTATION")]
    position: Option<String>,

    /// Give Black the first move
    #[arg(short, long)]
    black: bool,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .write_style(env_logger::WriteStyle::Never)
    .init();

    let session = match build_session(&args) {
        Ok(session) => session,
        Err(err) => {
            error!("cannot start from the requested position: {err}");
            process::exit(1);
        }
    };

    if let Err(err) = run_stdio_loop(session) {
        error!("console I/O failed: {err}");
        process::exit(1);
    }
}

fn build_session(args: &Args) -> HexChessResult<EngineSession> {
    let mut session = EngineSession::new();
    match &args.position {
        Some(notation) => session.load_position(notation)?,
        None => session.start_new_game(),
    }

    let side = if args.black { Color::Black } else { Color::White };
    session.set_side_to_move(side)?;
    Ok(session)
}
