//! `tguard health` - Check whether the services are up.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use trustguard::Service;

use super::Context;
use crate::output::print_structured;

#[derive(Serialize)]
struct ServiceStatus {
    service: String,
    url: String,
    healthy: bool,
    detail: String,
}

pub async fn execute(ctx: Context) -> Result<()> {
    let Some(client) = ctx.client()? else {
        println!("{}", "Offline mode: no services are contacted.".yellow());
        return Ok(());
    };

    let mut statuses = Vec::new();
    for service in [Service::Backend, Service::Analysis] {
        let url = client.base_url(service).to_string();
        let status = match client.health(service).await {
            Ok(health) => ServiceStatus {
                service: service.to_string(),
                url,
                healthy: health.is_healthy(),
                detail: health.status,
            },
            Err(e) => ServiceStatus {
                service: service.to_string(),
                url,
                healthy: false,
                detail: e.to_string(),
            },
        };
        statuses.push(status);
    }

    if print_structured(ctx.output_format, &statuses)? {
        return Ok(());
    }

    for s in &statuses {
        let mark = if s.healthy { "up".green().bold() } else { "down".red().bold() };
        println!("{:<10} {:<6} {} {}", s.service.bold(), mark, s.url.dimmed(), s.detail);
    }
    if statuses.iter().any(|s| !s.healthy) {
        println!();
        println!("{}", "Scoring still works: the local heuristic covers unavailable services.".dimmed());
    }

    Ok(())
}
