use actix_web::web::block;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use db::{models::Question, Connection};
use errors::Error;

#[derive(Debug, Deserialize, Serialize)]
pub struct LatestQuestions {
    pub latest_question_list: Vec<Question>,
}

pub async fn get_latest_questions(
    connection: Connection,
    limit: i64,
) -> Result<LatestQuestions, Error> {
    let now = Utc::now().naive_utc();
    let questions = block(move || Question::latest_published(&connection, now, limit)).await??;

    Ok(LatestQuestions {
        latest_question_list: questions,
    })
}
