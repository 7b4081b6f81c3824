use crate::libs::{config::Config, messages::Message};
use crate::msg_success;
use std::env;

pub async fn cmd() -> anyhow::Result<()> {
    let path = Config::dump_env(&env::current_dir()?)?;
    msg_success!(Message::EnvTemplateCreated(path.display().to_string()));

    Ok(())
}
