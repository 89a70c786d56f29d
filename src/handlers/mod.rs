use actix_web::web;

pub mod langs;
pub mod words;

/// Register every relay route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(words::get_words).service(langs::get_langs);
}
