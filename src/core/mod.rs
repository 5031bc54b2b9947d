//! Core domain logic for the site: contact form handling and the chatbot

pub mod chatbot;
pub mod contact;
pub mod random;
#[cfg(test)]
mod tests;
