use std::path::PathBuf;

use galley::{Canvas, DesignSession, export, suggestions};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut session = DesignSession::new(Canvas::new(800, 600));

    // Cycle through every preset and snapshot each one.
    let out_dir = PathBuf::from("target/demo-snapshots");
    for preset in suggestions() {
        session.reset();
        session.apply_suggestion(preset)?;

        let slug = preset.title.to_lowercase().replace(' ', "-");
        let path = out_dir.join(format!("{slug}.png"));
        session.export_png(&path)?;
        println!("{}: {}", preset.title, path.display());
    }

    // And one default snapshot with the timestamped name.
    session.reset();
    let path = out_dir.join(export::snapshot_filename());
    session.export_png(&path)?;
    println!("default: {}", path.display());

    Ok(())
}
