mod delete_message_service;
mod list_messages_service;
mod open_message_service;
mod submit_message_service;

pub use delete_message_service::DeleteMessageService;
pub use list_messages_service::ListMessagesService;
pub use open_message_service::OpenMessageService;
pub use submit_message_service::SubmitMessageService;
