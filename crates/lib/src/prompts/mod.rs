//! # Prompt Template Modules
//!
//! This module organizes the prompt templates sent to generation providers.

pub mod banner;

pub use banner::{build_banner_prompt, template_style, BANNER_SYSTEM_PROMPT};
