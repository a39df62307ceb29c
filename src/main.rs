use anyhow::Context;
use sketchy::{init_logging, CliArgs, DesignerState, DrawingSummary, EditorSettings};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    let args = CliArgs::parse(std::env::args().skip(1))?;

    let settings = match &args.config {
        Some(path) => EditorSettings::load_from_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => match EditorSettings::default_path() {
            Some(path) => EditorSettings::load_or_default(&path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))?,
            None => EditorSettings::default(),
        },
    };
    tracing::debug!("Using settings {:?}", settings);

    let mut state = DesignerState::with_settings(settings);
    state
        .load(&args.drawing)
        .with_context(|| format!("Failed to open drawing {}", args.drawing.display()))?;

    let summary = DrawingSummary::of(&state.canvas);
    tracing::info!("Opened {}: {}", args.drawing.display(), summary);
    println!("{}: {}", args.drawing.display(), summary);

    Ok(())
}
