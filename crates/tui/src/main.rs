use anyhow::Result;

fn main() -> Result<()> {
    // Log to a file only when asked; stderr would fight the terminal UI.
    if let Ok(path) = std::env::var("TRIPDECK_LOG") {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "tripdeck_tui=debug".into()),
            )
            .with_writer(file)
            .with_ansi(false)
            .init();
    }

    tripdeck_tui::run()
}
