use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use packlist::app::App;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("packlist=info")),
        )
        .init();

    tracing::info!("Starting Packlist v{}", env!("CARGO_PKG_VERSION"));

    let window = WindowBuilder::new()
        .with_title("Far Away")
        .with_inner_size(LogicalSize::new(1000.0, 720.0));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(App);
}
