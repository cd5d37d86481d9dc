use clap::Parser;
use radix_convert::adapters::server::{shutdown_signal, ConvertServer};
use radix_convert::utils::logger;
use radix_convert::{CliArgs, ServerSettings};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    // 設定錯誤時日誌尚未初始化，直接輸出到 stderr
    let settings = match ServerSettings::load(&args) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    logger::init_logger(&settings.log_level, settings.log_format, settings.verbose);

    tracing::info!("Starting radix-convert");
    tracing::debug!("Settings: {:?}", settings);

    let result = match ConvertServer::bind(&settings).await {
        Ok(server) => server.run(shutdown_signal()).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ Server failed: {} (Category: {:?})",
            e,
            e.category()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}
