//! Basic logger usage example
//!
//! Demonstrates every severity, context data, deferred messages, category
//! alignment and catching a fatal signal.
//!
//! Run with: cargo run --example basic_usage

use console_logger::prelude::*;
use serde_json::json;

fn main() {
    let policy = LogPolicy::global();
    policy.set_alignment_categories(["Demo", "Database"]);

    let logger = Logger::with_category("Demo");
    let database = Logger::with_category("Database");

    let deferred = logger.message("Hello, deferred message!", LogLevel::Debug);

    logger.debug("Hello, debug!");
    logger.info("Hello, info!");
    logger.warn("Hello, warning!");
    let _ = logger.error("Hello, error!");
    database.info("Connected");

    logger.info_with_context(
        "Hello, message with context!",
        json!({
            "id": uuid::Uuid::new_v4().to_string(),
            "timestamp": chrono::Local::now().to_rfc3339(),
            "message": "Suh Dude",
        }),
    );

    let _ = logger.log_message(&deferred, None);

    {
        let _quiet = policy.scoped(LogLevel::Error, LogLevelOperator::GreaterOrEqual);
        logger.info("Hidden while the threshold is ERROR");
    }

    if let Err(signal) = logger.fatal("Hello, fatal!") {
        logger.newline();
        println!(">> Caught fatal - {}", signal);
    }
}
