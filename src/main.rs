use std::io::{self, Write};

use contract_proposal::error::ProposalResult;
use contract_proposal::proposal::generate_contract_proposal;
use contract_proposal::telemetry::{self, TelemetryConfig};
use tracing::info;

fn main() -> ProposalResult<()> {
    telemetry::init(&TelemetryConfig::default())?;

    let document = generate_contract_proposal();

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", document)?;
    stdout.flush()?;

    info!(bytes = document.len(), "Contract proposal written");
    Ok(())
}
