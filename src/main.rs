use log::{error, info};
use page_fetch::{error::Error, fetch::PageFetcher, target::FetchTarget};

const HOST: &str = "localhost";
const PORT: u16 = 81;
const OUTPUT: &str = "wp-sandbox.html";

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let fetcher = PageFetcher::new(FetchTarget::new(HOST, PORT, OUTPUT));
    info!("fetching {}", fetcher.target());

    let page = fetcher.run()?;
    let output = fetcher.target().output().display();

    match page.reason() {
        None => info!("saved {} bytes to {}", page.text().len(), output),
        Some(reason) => error!("{}; kept {} bytes in {}", reason, page.text().len(), output),
    }

    Ok(())
}
