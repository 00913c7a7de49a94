pub mod color_prompt;

pub use color_prompt::{ColorPrompt, PromptResult};
