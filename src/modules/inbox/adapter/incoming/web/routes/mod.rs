mod delete_message;
mod error_mapping;
mod list_messages;
mod open_message;
mod submit_message;

pub use delete_message::delete_message_handler;
pub use list_messages::list_messages_handler;
pub use open_message::open_message_handler;
pub use submit_message::submit_message_handler;

pub use delete_message::__path_delete_message_handler;
pub use list_messages::__path_list_messages_handler;
pub use open_message::__path_open_message_handler;
pub use submit_message::__path_submit_message_handler;
