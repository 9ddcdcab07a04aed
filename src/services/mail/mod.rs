//! 메일 발송

pub mod mail_service;

pub use mail_service::{MailSender, MailService};
