mod app;
mod args;
pub mod backend;
mod config;
pub mod group;
pub mod personas;
pub mod providers;
mod session;
pub mod strategy;
pub mod ui;

pub use app::Application;
pub use backend::{ChatBackend, HttpBackend};
pub use config::{ChatConfig, ModelConfig, ServerConfig, SessionConfig};
pub use group::{GroupChat, DEFAULT_MAX_ROUNDS};
pub use personas::{Persona, Roster};
pub use providers::message::{ChatMessage, ChatMessageRole};
pub use providers::ApiProvider;
pub use session::run_chat;
pub use strategy::{NextSpeakerPolicy, PromptSelection, PromptTermination, TerminationPolicy};
pub use ui::io_input::{with_input_source, InputSource, StdinInputSource, VecInputSource};
