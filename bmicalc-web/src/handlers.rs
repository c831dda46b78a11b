use actix_web::{get, http::header::ContentType, post, web, HttpResponse, Responder};
use serde::Deserialize;

use bmicalc_model::report::BmiReport;
use bmicalc_model::submission::Submission;

use crate::pages;

/// Raw form fields as submitted. Every field is optional so that incomplete
/// submissions reach the validator and render the error page instead of
/// failing extraction with a 400.
#[derive(Debug, Deserialize)]
pub struct CalculateForm {
    weight: Option<String>,
    height: Option<String>,
    age: Option<String>,
    gender: Option<String>,
}

#[get("/style.css")]
async fn stylesheet() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .body(pages::STYLESHEET)
}

#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(pages::FORM)
}

#[post("/calculate")]
async fn calculate(form: web::Form<CalculateForm>) -> impl Responder {
    let form = form.into_inner();
    let page = match Submission::parse(
        form.weight.as_deref(),
        form.height.as_deref(),
        form.age.as_deref(),
        form.gender.as_deref(),
    ) {
        Ok(submission) => pages::result(&BmiReport::evaluate(&submission)),
        Err(_) => pages::INVALID_INPUT.to_owned(),
    };

    // Validation failures still answer 200; the page is the signal.
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(stylesheet).service(index).service(calculate);
}
