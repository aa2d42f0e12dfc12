/// meshview terminal viewer
///
/// Usage: meshview-terminal [--config <options.toml>] [<mesh.stl>]
///
/// Without a mesh the placeholder triangle is shown.
/// Controls:
///   - Drag: orbit
///   - Shift/right drag: pan
///   - Ctrl/middle drag or wheel: zoom
///   - R: reset camera, Space: toggle spin
///   - Q/ESC: Quit
use log::info;
use meshview_core::ViewerSession;
use meshview_terminal::{AppError, AppOptions, TerminalApp, TerminalSource};
use std::path::PathBuf;
use std::{env, fs};

struct Args {
    config: Option<PathBuf>,
    mesh: Option<String>,
}

fn parse_args() -> Result<Args, AppError> {
    let mut args = Args {
        config: None,
        mesh: None,
    };
    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => args.config = Some(iter.next().ok_or(AppError::Usage)?.into()),
            "-h" | "--help" => return Err(AppError::Usage),
            _ if args.mesh.is_some() || arg.starts_with('-') => return Err(AppError::Usage),
            _ => args.mesh = Some(arg.clone()),
        }
    }
    Ok(args)
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let args = parse_args()?;
    let options = match &args.config {
        Some(path) => AppOptions::load(path)?,
        None => AppOptions::default(),
    };

    let mut session = match ViewerSession::new(TerminalSource, options.viewer) {
        Ok(session) => session,
        Err(never) => match never {},
    };
    let title = match &args.mesh {
        Some(path) => {
            let bytes = fs::read(path).map_err(|source| AppError::ReadMesh {
                path: path.clone(),
                source,
            })?;
            session.load_bytes(&bytes).map_err(|source| AppError::LoadMesh {
                path: path.clone(),
                source,
            })?;
            info!("loaded {} ({} bytes)", path, bytes.len());
            path.clone()
        }
        None => "placeholder".to_string(),
    };

    let mut app = TerminalApp::new(session, options.terminal, title)?;
    app.run()?;
    Ok(())
}
