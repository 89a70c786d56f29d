use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use log::{error, info};

use crate::catalog::language_name;
use crate::config::DEFAULT_WORD_NUMBER;
use crate::models::{AppState, RelayErrorBody, WordsQuery};
use crate::services::upstream::fetch_words;
use crate::utils::parse_word_count;

pub const FETCH_FAILED: &str = "Failed to fetch words";

#[get("/api/words")]
pub async fn get_words(data: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let query = WordsQuery::from_query_string(req.query_string());

    let number = parse_word_count(query.number.as_deref(), DEFAULT_WORD_NUMBER);
    let lang = query.lang.as_deref().unwrap_or("");

    info!(
        "Fetching {} words in {}",
        number,
        if lang.is_empty() { "English" } else { language_name(lang) }
    );

    match fetch_words(&data.client, &data.upstream, number, lang).await {
        Ok(words) => HttpResponse::Ok().json(words),
        Err(e) => {
            error!("Word relay failed ({} words, lang '{}'): {}", number, lang, e);
            HttpResponse::InternalServerError()
                .json(RelayErrorBody::new(FETCH_FAILED, e.to_string()))
        }
    }
}
