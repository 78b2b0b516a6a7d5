//! Strictly Skill library - voice adapter for the noughts and crosses handler
//!
//! The game itself lives in `strictly_noughts`; this crate decodes platform
//! intents into events, exchanges the state blob as JSON and hosts a
//! terminal session for local play.
//!
//! # Example
//!
//! ```
//! use strictly_skill::{Exchange, IntentRequest, SkillConfig};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = SkillConfig::default().with_seed(7);
//! let mut handler = config.handler();
//! let exchange = Exchange {
//!     request: IntentRequest::named("LaunchRequest"),
//!     state: None,
//! };
//! let reply = exchange.run(&mut handler, &config)?;
//! assert!(!reply.should_end_session());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod exchange;
mod intent;
mod repl;

pub use config::{ConfigError, SkillConfig};
pub use exchange::Exchange;
pub use intent::{IntentRequest, LAUNCH_REQUEST, RequestError};
pub use repl::{parse_command, run as run_repl};
