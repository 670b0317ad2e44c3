mod latest_questions;
mod published_question;

pub use self::latest_questions::*;
pub use self::published_question::*;
