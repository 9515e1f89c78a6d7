use anyhow::Result;
use sliceview::cli::App;

#[tokio::main]
async fn main() -> Result<()> {
    let args = sliceview::cli::Args::parse_args();
    let mut app = App::from_args(&args)?;

    app.run(args).await?;

    Ok(())
}
