use actix_web::{
    web::{Data, Path},
    HttpResponse,
};

use db::{get_conn, DbPool};
use errors::Error;

use super::{render, DetailTemplate};
use crate::handlers::get_published_question;

pub async fn detail(pool: Data<DbPool>, question_id: Path<i32>) -> Result<HttpResponse, Error> {
    let question_id = question_id.into_inner();

    let connection = get_conn(&pool)?;
    let question = get_published_question(connection, question_id).await?;
    debug!("Showing question {} - {}", question.id, question);

    render(&DetailTemplate { question })
}

#[cfg(test)]
mod tests {
    use crate::tests::helpers::tests::{create_question, get_pool, test_get};

    #[actix_rt::test]
    async fn test_detail_with_a_future_question() {
        let pool = get_pool();
        let question = create_question(&pool, "Future question.", 5);

        let (status, body) = test_get(&pool, &format!("/polls/{}/", question.id)).await;
        assert_eq!(status, 404);
        assert!(!body.contains("Future question."));
    }

    #[actix_rt::test]
    async fn test_detail_with_a_past_question() {
        let pool = get_pool();
        let question = create_question(&pool, "Past question.", -5);

        let (status, body) = test_get(&pool, &format!("/polls/{}/", question.id)).await;
        assert_eq!(status, 200);
        assert!(body.contains(&question.question_text));
    }

    #[actix_rt::test]
    async fn test_detail_escapes_question_text() {
        let pool = get_pool();
        let question = create_question(&pool, "<b>Bold?</b>", -1);

        let (status, body) = test_get(&pool, &format!("/polls/{}/", question.id)).await;
        assert_eq!(status, 200);
        assert!(!body.contains("<b>Bold?</b>"));
        assert!(body.contains("&lt;b&gt;Bold?"));
    }

    #[actix_rt::test]
    async fn test_detail_with_unknown_id() {
        let pool = get_pool();

        let (status, _) = test_get(&pool, "/polls/42/").await;
        assert_eq!(status, 404);
    }

    #[actix_rt::test]
    async fn test_detail_with_non_numeric_id() {
        let pool = get_pool();

        let (status, _) = test_get(&pool, "/polls/latest/").await;
        assert_eq!(status, 404);
    }
}
