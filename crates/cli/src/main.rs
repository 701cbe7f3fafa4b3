use std::io;

use anyhow::Context;

use stockroom_cli::{login, AppContext, Console, Dispatcher};
use stockroom_observability::LogConfig;

fn main() -> anyhow::Result<()> {
    let (log_config, rejected_format) = LogConfig::from_env();
    stockroom_observability::init(&log_config);
    if let Some(e) = rejected_format {
        tracing::warn!(error = %e, "ignoring log format setting");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    let Some(session) = login(&mut console).context("failed to read login")? else {
        tracing::info!("input closed before login");
        return Ok(());
    };

    let mut ctx = AppContext::new();
    Dispatcher::new(&mut ctx, session)
        .run(&mut console)
        .context("console session failed")?;

    Ok(())
}
