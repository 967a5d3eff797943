//! Health command implementation

use anyhow::Result;

use crate::gateway::BackendGateway;

pub async fn run(gateway: &BackendGateway) -> Result<()> {
    if gateway.check_health().await {
        println!("Backend Health: OK");
        Ok(())
    } else {
        println!("Backend Health: DOWN");
        std::process::exit(1);
    }
}
