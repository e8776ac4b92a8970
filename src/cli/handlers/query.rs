use anyhow::Result;

use super::{CommandContext, execute};

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    execute(&ctx, &query, variables)
}
