use chrono::Local;
use clap::Parser;
use secret_santa::config::Settings;
use secret_santa::utils::{error::ErrorSeverity, logger, validation::Validate};
use secret_santa::{
    read_participants, CliConfig, Delivery, DispatchReport, OutboxDelivery, Result, RngSource,
    SantaEngine, Template, TracingLog,
};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌,試跑時同時輸出到終端
    if let Err(e) = logger::init_cli_logger(&config.log_file, !config.send, config.verbose) {
        eprintln!("❌ Could not open log file {}: {}", config.log_file.display(), e);
        std::process::exit(e.exit_code());
    }

    match run(&config) {
        Ok(report) => {
            if report.failed > 0 {
                tracing::warn!("⚠️ {} messages could not be delivered", report.failed);
                eprintln!("❌ {} messages could not be delivered", report.failed);
                std::process::exit(ErrorSeverity::Medium.exit_code());
            }
            tracing::info!("Program ran successfully.");
        }
        Err(e) => {
            tracing::error!("❌ Secret Santa failed: {} (Severity: {:?})", e, e.severity());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }
}

fn run(config: &CliConfig) -> Result<DispatchReport> {
    let started = Local::now().format("%d/%m/%y %H:%M").to_string();
    tracing::info!("{:=^80}", started);

    // 載入並驗證配置
    let settings = Settings::from_cli(config)?;
    settings.validate()?;
    for entry in settings.entries() {
        tracing::info!("{}", entry);
    }

    let template = match &settings.template {
        Some(path) => Template::from_file(path)?,
        None => Template::default(),
    };
    tracing::info!(
        "The message template is as follows:\n\"\"\"\n{}\"\"\"\n",
        template.source()
    );
    if !template.placeholders().iter().any(|name| name == "receiver") {
        tracing::warn!("The template never mentions ${{receiver}}, nobody will learn whom they drew");
    }

    let participants = read_participants(&settings.participants_file, settings.format)?;
    tracing::debug!("Read {} participants", participants.len());

    let rng = match settings.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };
    // 執行抽籤
    let mut engine = SantaEngine::new(rng, TracingLog, template, settings.message.clone());
    let messages = engine.draw(&participants)?;

    if !settings.send {
        return Ok(engine.dispatch(&messages, None));
    }

    let mut delivery = open_delivery(&settings)?;
    Ok(engine.dispatch(&messages, Some(delivery.as_mut())))
}

fn open_delivery(settings: &Settings) -> Result<Box<dyn Delivery>> {
    if let Some(dir) = &settings.outbox {
        tracing::info!("Writing messages to {}", dir.display());
        return Ok(Box::new(OutboxDelivery::new(dir)));
    }

    smtp_delivery(settings)
}

#[cfg(feature = "smtp")]
fn smtp_delivery(settings: &Settings) -> Result<Box<dyn Delivery>> {
    tracing::info!(
        "Sending messages via {}:{}",
        settings.smtp_host,
        settings.smtp_port
    );
    Ok(Box::new(secret_santa::SmtpDelivery::relay(
        &settings.smtp_host,
        settings.smtp_port,
    )))
}

#[cfg(not(feature = "smtp"))]
fn smtp_delivery(_settings: &Settings) -> Result<Box<dyn Delivery>> {
    Err(secret_santa::SantaError::Config {
        message: "built without SMTP support, use --outbox to deliver".to_string(),
    })
}
