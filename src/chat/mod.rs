pub mod keyword;
pub mod session;
pub mod r#trait;

pub use keyword::KeywordResponder;
pub use session::{ChatSession, Message, Role};
pub use r#trait::Responder;
