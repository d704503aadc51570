mod message;
mod new_message;

pub use message::Message;
pub use new_message::NewMessage;
