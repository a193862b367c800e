//! Preview command implementation

use crate::config::Config;
use clap::Args;

#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Coin identifier (e.g., "bitcoin")
    pub coin_id: String,

    /// Print compact JSON instead of pretty JSON
    #[arg(long)]
    pub compact: bool,
}

impl PreviewArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let builder = super::payload_builder(config)?;

        let Some(payload) = builder.build(&self.coin_id).await? else {
            tracing::warn!(coin_id = %self.coin_id, "Unknown coin");
            return Ok(());
        };

        let json = if self.compact {
            serde_json::to_string(&payload)?
        } else {
            serde_json::to_string_pretty(&payload)?
        };
        println!("{}", json);
        Ok(())
    }
}
