use actix_web::{http::header::ContentType, HttpResponse};
use askama::Template;

use db::models::Question;
use errors::Error;

mod detail;
mod index;

pub use self::detail::*;
pub use self::index::*;

#[derive(Template)]
#[template(path = "polls/index.html")]
pub struct IndexTemplate {
    pub latest_question_list: Vec<Question>,
}

#[derive(Template)]
#[template(path = "polls/detail.html")]
pub struct DetailTemplate {
    pub question: Question,
}

fn render<T: Template>(template: &T) -> Result<HttpResponse, Error> {
    let body = template.render().map_err(|err| {
        error!("Failed to render template - {}", err);
        Error::InternalServerError("Failed to render page".into())
    })?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}
