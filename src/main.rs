use anyhow::Result;
use clap::Parser;
use question_extract::cli::Cli;
use question_extract::utils::logging;
use question_extract::App;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    logging::init();

    // 加载配置
    let config = cli.load_config()?;

    // 初始化并运行应用
    App::initialize(config).run().await?;

    Ok(())
}
