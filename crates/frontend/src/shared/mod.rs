pub mod components;
pub mod timers;
