//! tone 固有のドメイン型（型と不変条件）

pub mod command;
pub mod conversion;
pub mod credential;
pub mod error;
pub mod history;
pub mod prompt;
pub mod request;
pub mod review;
pub mod session;
pub mod strength;
pub mod tone;

pub use command::ToneCommand;
pub use conversion::ConversionResult;
pub use credential::{Credential, CredentialSource};
pub use error::{ConvertError, ValidationError};
pub use history::{HistoryLog, HISTORY_DISPLAY_LIMIT};
pub use prompt::{render_prompt, NONE_MARKER, SYSTEM_INSTRUCTION};
pub use request::ConversionRequest;
pub use review::{ReviewEntry, ReviewLog, ANONYMOUS, REVIEW_DISPLAY_LIMIT};
pub use session::Session;
pub use strength::Strength;
pub use tone::TonePreset;
