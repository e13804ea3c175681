pub mod message;

pub use message::{ContactForm, ContactMessage, InboxSummary, NewContactMessage};
