use actix_web::web::block;
use chrono::Utc;

use db::{models::Question, Connection};
use errors::Error;

/// Questions whose publish date has not arrived yet are reported as `NotFound`,
/// the same as ids that were never created.
pub async fn get_published_question(
    connection: Connection,
    question_id: i32,
) -> Result<Question, Error> {
    let now = Utc::now().naive_utc();
    let question =
        block(move || Question::find_published(&connection, question_id, now)).await??;

    Ok(question)
}
