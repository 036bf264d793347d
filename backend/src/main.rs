//! Static file server for the Crater Admin frontend.

use moon::*;
use shared::ShellConfig;

async fn frontend() -> Frontend {
    let config = ShellConfig::load();
    Frontend::new().title(&config.app_name).index_by_robots(false)
}

async fn up_msg_handler(_: UpMsgRequest<()>) {}

#[moon::main]
async fn main() -> std::io::Result<()> {
    start(frontend, up_msg_handler, |_| {}).await
}
