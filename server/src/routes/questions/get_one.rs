use actix_web::web::{Data, Json, Path};

use db::{get_conn, models::Question, DbPool};
use errors::Error;

use crate::handlers::get_published_question;

pub async fn get_one(pool: Data<DbPool>, question_id: Path<i32>) -> Result<Json<Question>, Error> {
    let connection = get_conn(&pool)?;
    let question = get_published_question(connection, question_id.into_inner()).await?;

    Ok(Json(question))
}

#[cfg(test)]
mod tests {
    use db::models::Question;
    use errors::ErrorResponse;

    use crate::tests::helpers::tests::{create_question, get_pool, test_get_json};

    #[actix_rt::test]
    async fn test_get_past_question() {
        let pool = get_pool();
        let question = create_question(&pool, "Past question.", -5);

        let res: (u16, Question) =
            test_get_json(&pool, &format!("/api/questions/{}", question.id)).await;
        assert_eq!(res.0, 200);

        assert_eq!(res.1.id, question.id);
        assert_eq!(res.1.question_text, "Past question.");
    }

    #[actix_rt::test]
    async fn test_get_future_question() {
        let pool = get_pool();
        let question = create_question(&pool, "Future question.", 5);

        let res: (u16, ErrorResponse) =
            test_get_json(&pool, &format!("/api/questions/{}", question.id)).await;
        assert_eq!(res.0, 404);

        assert_eq!(res.1.errors, vec!["Record not found".to_string()]);
    }
}
