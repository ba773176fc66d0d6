pub mod catalog;
pub mod llm;
pub mod media;
pub mod notify;
pub mod script;
pub mod stt;
pub mod thumbnail;

pub use catalog::{CatalogBackend, CatalogCategory, CatalogError, CatalogItem, CatalogService};
pub use llm::OpenAiChatBackend;
pub use media::{MediaError, MediaFetcher, MediaSource};
pub use notify::{Notifier, NotifyKind};
pub use script::{ScriptLength, ScriptSpec, ScriptStyle, ScriptWriter};
pub use stt::{SpeechToText, SttError, WhisperClient};
pub use thumbnail::{GeneratedImage, ImageGenBackend, ThumbnailError, ThumbnailStyle};
