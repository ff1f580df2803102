use bookstore_runner::RunnerConfig;

#[tokio::main]
async fn main() {
    // --print-pipelines: dump the aggregation pipelines and exit
    if std::env::args().any(|a| a == "--print-pipelines") {
        match bookstore_runner::pipelines_json() {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("Error: {e}"),
        }
        return;
    }

    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = RunnerConfig::from_env();
    let mut stdout = std::io::stdout();
    if let Err(e) = bookstore_runner::run(&config, &mut stdout).await {
        tracing::error!("run aborted: {e}");
        eprintln!("Error: {e}");
    }
}
