use actix_web::web::{Data, Json};

use db::{get_conn, DbPool};
use errors::Error;

use crate::config::Config;
use crate::handlers::{get_latest_questions, LatestQuestions};

pub async fn get_all(
    pool: Data<DbPool>,
    config: Data<Config>,
) -> Result<Json<LatestQuestions>, Error> {
    let connection = get_conn(&pool)?;
    let latest = get_latest_questions(connection, config.index_limit).await?;

    Ok(Json(latest))
}
