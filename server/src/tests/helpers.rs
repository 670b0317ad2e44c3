#[cfg(test)]
pub mod tests {
    use actix_web::test;
    use chrono::{Duration, Utc};
    use serde::de::DeserializeOwned;
    use serde_json;

    use db::{get_conn, models::Question, new_pool, DbPool, MEMORY_DATABASE};

    use crate::app::create_app;
    use crate::config::Config;

    /// Every call returns a fresh, migrated in-memory database.
    pub fn get_pool() -> DbPool {
        new_pool(MEMORY_DATABASE).unwrap()
    }

    /// Creates a question published `days` away from now: 0 is today, -1 yesterday, 1 tomorrow.
    pub fn create_question(pool: &DbPool, question_text: &str, days: i64) -> Question {
        let conn = get_conn(pool).unwrap();
        let pub_date = Utc::now().naive_utc() + Duration::days(days);

        Question::create(&conn, question_text, pub_date).unwrap()
    }

    /// Helper for HTTP GET integration tests, returns the status and the raw body
    pub async fn test_get(pool: &DbPool, route: &str) -> (u16, String) {
        let app = test::init_service(create_app(pool.clone(), Config::default())).await;

        let req = test::TestRequest::get().uri(route).to_request();
        let res = test::call_service(&app, req).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;
        let body = String::from_utf8(body.to_vec())
            .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string());

        (status, body)
    }

    /// Helper for HTTP GET integration tests against JSON routes
    pub async fn test_get_json<R>(pool: &DbPool, route: &str) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let (status, body) = test_get(pool, route).await;
        let json_body = serde_json::from_str(&body).unwrap_or_else(|_| {
            panic!(
                "read_response_json failed during deserialization. response: {} status: {}",
                body, status
            )
        });

        (status, json_body)
    }
}
