//! Emolog - Emotion Journaling Core
//!
//! This crate implements the orchestration glue for a personal emotion
//! journal: a user's free-text entry is analyzed by a chat-completion
//! service, the extracted emotions are offered for selection, and the chosen
//! emotion's polarity is appended to a session-scoped history rendered as a
//! line-chart series.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
