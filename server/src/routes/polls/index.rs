use actix_web::{web::Data, HttpResponse};

use db::{get_conn, DbPool};
use errors::Error;

use super::{render, IndexTemplate};
use crate::config::Config;
use crate::handlers::get_latest_questions;

pub async fn index(pool: Data<DbPool>, config: Data<Config>) -> Result<HttpResponse, Error> {
    let connection = get_conn(&pool)?;
    let latest = get_latest_questions(connection, config.index_limit).await?;

    render(&IndexTemplate {
        latest_question_list: latest.latest_question_list,
    })
}
