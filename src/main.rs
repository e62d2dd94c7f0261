use anyhow::Result;
use orc_prototype::demo::config::DemoConfig;
use orc_prototype::demo::DemoApp;

const CONFIG_ENV: &str = "ORC_PROTOTYPE_CONFIG";

fn main() -> Result<()> {
    init_tracing();

    let config = load_config()?;
    let mut app = DemoApp::new(config);
    app.run()?;
    Ok(())
}

fn load_config() -> Result<DemoConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_ENV).ok());
    match path {
        Some(path) => DemoConfig::load(path),
        None => Ok(DemoConfig::default()),
    }
}

fn init_tracing() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
}
