use anyhow::Result;
use colored::Colorize;
use crate::graphql::run_server;

use super::CommandContext;

pub fn handle_serve(mut ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(h) = host {
        ctx.config.server.host = h;
    }
    if let Some(p) = port {
        ctx.config.server.port = p;
    }

    let schema = ctx.schema();
    let settings = &ctx.config.server;
    let base = format!("http://{}:{}", settings.host, settings.port);

    println!("{} {}/graphql", "Starting GraphQL server on".green(), base);
    if settings.graphiql {
        println!("GraphiQL: {}/graphql", base.cyan());
    }

    tokio::runtime::Runtime::new()?.block_on(run_server(schema, settings))?;
    Ok(())
}
