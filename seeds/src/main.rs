#[macro_use]
extern crate log;

use std::env;

use chrono::{Duration, Utc};
use dotenv::dotenv;

use db::{get_conn, models::Question, new_pool};

fn main() {
    dotenv().ok();
    env_logger::init();

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = new_pool(&database_url).unwrap();
    let conn = get_conn(&pool).unwrap();

    if Question::count(&conn).unwrap() > 0 {
        info!("questions table already has rows, skipping seeds");
        return;
    }

    let now = Utc::now().naive_utc();

    for (question_text, offset) in &[
        ("What's new?", Duration::zero()),
        ("What's your favourite colour?", -Duration::hours(6)),
        ("Tabs or spaces?", -Duration::days(3)),
        ("Which language should we learn next?", Duration::days(7)),
    ] {
        let question = Question::create(&conn, question_text, now + *offset).unwrap();
        info!("Created question {} - {}", question.id, question);
    }
}
