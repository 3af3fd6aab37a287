use tracing_subscriber::EnvFilter;
use url::Url;

use tteonabom::{
    feed::{ListingFeed, ViewState},
    source::{ListingSource, DEFAULT_LISTINGS_URL},
};

#[derive(clap::Parser)]
pub struct Args {
    #[clap(subcommand)]
    pub cmd: Cmd,
}

impl Args {
    pub fn run(self) -> Result<(), anyhow::Error> {
        init_tracing();

        match self.cmd {
            Cmd::Serve(cmd) => cmd.run(),
            Cmd::Fetch(cmd) => cmd.run(),
        }
    }
}

// Logs go to stderr so `fetch` output on stdout stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[derive(clap::Subcommand)]
pub enum Cmd {
    /// Run the web server.
    Serve(CmdServe),
    /// Load the listing feed once and print the rendered fragment.
    Fetch(CmdFetch),
}

#[derive(clap::Parser)]
pub struct CmdServe {
    /// Endpoint returning the JSON list of accommodations.
    #[clap(long, env = "LISTINGS_URL", default_value = DEFAULT_LISTINGS_URL)]
    listings_url: Url,

    #[clap(long, env = "PORT", default_value_t = tteonabom::server::DEFAULT_PORT)]
    port: u16,
}

impl CmdServe {
    #[tokio::main]
    pub async fn run(self) -> Result<(), anyhow::Error> {
        tteonabom::server::CtxBuilder::new(self.listings_url)
            .build()?
            .run_server(self.port)
            .await?;

        Ok(())
    }
}

#[derive(clap::Parser)]
pub struct CmdFetch {
    /// Endpoint returning the JSON list of accommodations.
    #[clap(long, env = "LISTINGS_URL", default_value = DEFAULT_LISTINGS_URL)]
    listings_url: Url,
}

impl CmdFetch {
    #[tokio::main]
    pub async fn run(self) -> Result<(), anyhow::Error> {
        let feed = ListingFeed::new(ListingSource::new(self.listings_url)?);

        let mut activation = feed.start();
        let state = activation.settled().await;

        println!("{}", state.render());

        match state {
            ViewState::Loaded(listings) => {
                tracing::info!("loaded {} listings", listings.len());
                Ok(())
            }
            ViewState::Error(message) => anyhow::bail!("{}", message),
            ViewState::Loading => anyhow::bail!("listing feed did not settle"),
        }
    }
}
