use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;

use anagrammer::{solve, AnagramQuery, HintPattern, SolverConfig, SortOrder, WordList};

/// Shared per-process state: the word list is loaded once at startup and
/// never mutated, so requests read it without synchronization.
#[derive(Clone)]
pub struct AppState {
    pub wordlist: Arc<WordList>,
    pub defaults: Arc<SolverConfig>,
}

#[derive(Debug, Deserialize)]
pub struct AnagramParams {
    word: Option<String>,
    min: Option<usize>,
    max: Option<usize>,
    sub: Option<bool>,
    sort: Option<bool>,
    reverse: Option<bool>,
    count: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct HintParams {
    hint: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/anagram", get(anagram))
        .route("/hint", get(hint))
        .with_state(state)
}

async fn anagram(State(state): State<AppState>, Query(params): Query<AnagramParams>) -> Response {
    let Some(word) = params.word else {
        return (StatusCode::BAD_REQUEST, "missing 'word' query parameter").into_response();
    };

    let defaults = &state.defaults;
    let query = AnagramQuery::new(
        &word,
        params.min.unwrap_or(defaults.min_size),
        params.max.unwrap_or(defaults.max_size),
        params.sub.unwrap_or(defaults.sub_anagrams),
    );
    let sort = params.sort.unwrap_or(defaults.sort_results);
    let reverse = params.reverse.unwrap_or(defaults.reverse);
    let count = params.count.unwrap_or(defaults.count);

    let wordlist = Arc::clone(&state.wordlist);
    let thread_count = defaults.thread_count;
    let solved = tokio::task::spawn_blocking(move || {
        let matches = solve(&query, &wordlist, thread_count);
        if sort {
            matches.sort(if reverse {
                SortOrder::Descending
            } else {
                SortOrder::Ascending
            });
        }
        matches.into_words()
    })
    .await;

    match solved {
        Ok(words) => Html(render_words(&words, count)).into_response(),
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "matching task failed").into_response(),
    }
}

async fn hint(State(state): State<AppState>, Query(params): Query<HintParams>) -> Response {
    let Some(hint) = params.hint else {
        return (StatusCode::BAD_REQUEST, "missing 'hint' query parameter").into_response();
    };

    let pattern = match HintPattern::new(&hint) {
        Ok(pattern) => pattern,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };

    let wordlist = Arc::clone(&state.wordlist);
    match tokio::task::spawn_blocking(move || pattern.filter(&wordlist)).await {
        Ok(words) => Html(render_words(&words, 0)).into_response(),
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "matching task failed").into_response(),
    }
}

/// Renders matches as a minimal HTML list, truncated to `count` when positive
fn render_words(words: &[String], count: usize) -> String {
    let shown = if count > 0 {
        words.len().min(count)
    } else {
        words.len()
    };

    let mut html = String::from("<ul>\n");
    for word in &words[..shown] {
        html.push_str("<li>");
        html.push_str(&escape_html(word));
        html.push_str("</li>\n");
    }
    html.push_str("</ul>\n");
    html
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
