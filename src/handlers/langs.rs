use actix_web::{get, HttpResponse, Responder};

use crate::catalog::LANGUAGES;
use crate::models::LangInfo;

#[get("/api/langs")]
pub async fn get_langs() -> impl Responder {
    let langs: Vec<LangInfo> = LANGUAGES
        .iter()
        .map(|lang| LangInfo {
            name: lang.name.to_string(),
            code: lang.code.to_string(),
        })
        .collect();

    HttpResponse::Ok().json(langs)
}
