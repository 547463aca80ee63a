//! REST transport for the lugat root lexicon.
//!
//! A thin axum layer over [`lugat_index::Index`]: every handler sanitizes
//! its path parameter, calls one search primitive, and projects the matching
//! roots into a small JSON shape. The index is shared behind an `Arc` and
//! never mutated after startup, so handlers borrow it concurrently without
//! locking.

use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tracing::info;

use lugat_core::visenc;
use lugat_index::{Index, SearchError, SearchField};

/// Maximum number of roots returned from any search endpoint.
pub const MAX_RESULT_LEN: usize = 20;

type SharedIndex = Arc<Index>;

// ---------------------------------------------------------------------------
// Response shapes
// ---------------------------------------------------------------------------

/// Latin-only projection used by the Latin prefix endpoint.
#[derive(Debug, Serialize)]
pub struct LatinEntry {
    pub turkish_latin: String,
}

/// Ottoman-only projection used by the Ottoman prefix endpoint.
#[derive(Debug, Serialize)]
pub struct OttomanEntry {
    pub ottoman_unicode: String,
}

/// The full projection returned by exact, search and abjad endpoints.
#[derive(Debug, Serialize)]
pub struct RootEntry {
    pub turkish_latin: String,
    pub abjad: i32,
    pub ottoman_unicode: String,
}

impl RootEntry {
    fn from_root(root: &lugat_core::Root) -> Self {
        RootEntry {
            turkish_latin: root.turkish_latin.clone(),
            abjad: root.ottoman.abjad,
            ottoman_unicode: root.ottoman.unicode.clone(),
        }
    }
}

/// Response of the abjad calculator endpoint.
#[derive(Debug, Serialize)]
pub struct AbjadCalc {
    pub ottoman_unicode: String,
    pub abjad: i32,
}

/// Response of the conversion endpoints.
#[derive(Debug, Serialize)]
pub struct Conversion {
    pub ottoman_visenc: String,
    pub ottoman_unicode: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

type HandlerError = (StatusCode, Json<ErrorBody>);

fn bad_request(message: String) -> HandlerError {
    (StatusCode::BAD_REQUEST, Json(ErrorBody { error: message }))
}

fn search_error(err: SearchError) -> HandlerError {
    bad_request(err.to_string())
}

// ---------------------------------------------------------------------------
// Query sanitization
// ---------------------------------------------------------------------------

/// Whether a character belongs to one of the searchable alphabets: the
/// Arabic block, Turkish Latin letters (circumflexed forms included), ASCII
/// digits, the zero width non-joiner, or space.
fn is_searchable(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
        || c.is_ascii_alphanumeric()
        || matches!(
            c,
            'ç' | 'ğ'
                | 'ı'
                | 'ö'
                | 'ş'
                | 'ü'
                | 'â'
                | 'î'
                | 'û'
                | 'Ç'
                | 'Ğ'
                | 'İ'
                | 'Ö'
                | 'Ş'
                | 'Ü'
                | 'Â'
                | 'Î'
                | 'Û'
        )
        || c == '\u{200C}'
        || c == ' '
}

/// Drop every character outside the searchable alphabets before the query
/// reaches the index.
pub fn sanitize(word: &str) -> String {
    word.chars().filter(|&c| is_searchable(c)).collect()
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn prefix_tr(
    State(index): State<SharedIndex>,
    Path(word): Path<String>,
) -> Json<Vec<LatinEntry>> {
    let word = sanitize(&word);
    let entries = index
        .prefix_search(SearchField::Latin, &word, MAX_RESULT_LEN)
        .into_iter()
        .map(|r| LatinEntry {
            turkish_latin: r.turkish_latin.clone(),
        })
        .collect();
    Json(entries)
}

async fn prefix_ot(
    State(index): State<SharedIndex>,
    Path(word): Path<String>,
) -> Json<Vec<OttomanEntry>> {
    let word = sanitize(&word);
    let entries = index
        .prefix_search(SearchField::Unicode, &word, MAX_RESULT_LEN)
        .into_iter()
        .map(|r| OttomanEntry {
            ottoman_unicode: r.ottoman.unicode.clone(),
        })
        .collect();
    Json(entries)
}

async fn exact_tr(
    State(index): State<SharedIndex>,
    Path(word): Path<String>,
) -> Json<Vec<RootEntry>> {
    let word = sanitize(&word);
    let entries = index
        .exact_search(SearchField::Latin, &word, MAX_RESULT_LEN)
        .into_iter()
        .map(RootEntry::from_root)
        .collect();
    Json(entries)
}

async fn exact_ot(
    State(index): State<SharedIndex>,
    Path(word): Path<String>,
) -> Json<Vec<RootEntry>> {
    let word = sanitize(&word);
    let entries = index
        .exact_search(SearchField::Unicode, &word, MAX_RESULT_LEN)
        .into_iter()
        .map(RootEntry::from_root)
        .collect();
    Json(entries)
}

async fn search_tr(
    State(index): State<SharedIndex>,
    Path(word): Path<String>,
) -> Result<Json<Vec<RootEntry>>, HandlerError> {
    let word = sanitize(&word);
    let entries = index
        .fuzzy_search(SearchField::Latin, &word, MAX_RESULT_LEN)
        .map_err(search_error)?
        .into_iter()
        .map(RootEntry::from_root)
        .collect();
    Ok(Json(entries))
}

async fn search_ot(
    State(index): State<SharedIndex>,
    Path(word): Path<String>,
) -> Result<Json<Vec<RootEntry>>, HandlerError> {
    let word = sanitize(&word);
    let entries = index
        .fuzzy_search(SearchField::Unicode, &word, MAX_RESULT_LEN)
        .map_err(search_error)?
        .into_iter()
        .map(RootEntry::from_root)
        .collect();
    Ok(Json(entries))
}

async fn search_any(
    State(index): State<SharedIndex>,
    Path(word): Path<String>,
) -> Result<Json<Vec<RootEntry>>, HandlerError> {
    let word = sanitize(&word);
    let entries = index
        .auto_search(&word, MAX_RESULT_LEN)
        .map_err(search_error)?
        .into_iter()
        .map(RootEntry::from_root)
        .collect();
    Ok(Json(entries))
}

async fn exact_abjad(
    State(index): State<SharedIndex>,
    Path(number): Path<String>,
) -> Result<Json<Vec<RootEntry>>, HandlerError> {
    let value: i32 = number
        .parse()
        .map_err(|_| bad_request(format!("not an abjad value: {number}")))?;
    let entries = index
        .abjad_search(value, MAX_RESULT_LEN)
        .into_iter()
        .map(RootEntry::from_root)
        .collect();
    Ok(Json(entries))
}

async fn calc_abjad(Path(word): Path<String>) -> Json<AbjadCalc> {
    let abjad = visenc::unicode_abjad(&word);
    Json(AbjadCalc {
        ottoman_unicode: word,
        abjad,
    })
}

async fn visenc_to_unicode(Path(word): Path<String>) -> Json<Conversion> {
    let unicode = visenc::visenc_to_unicode(&word);
    Json(Conversion {
        ottoman_visenc: word,
        ottoman_unicode: unicode,
    })
}

async fn unicode_to_visenc(Path(word): Path<String>) -> Json<Conversion> {
    let visenc = visenc::unicode_to_visenc(&word);
    Json(Conversion {
        ottoman_visenc: visenc,
        ottoman_unicode: word,
    })
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the service router over a shared index.
pub fn router(index: SharedIndex) -> Router {
    info!(roots = index.roots().len(), "building service router");
    Router::new()
        .route("/v1/json/prefix/tr/:word", get(prefix_tr))
        .route("/v1/json/prefix/ot/:word", get(prefix_ot))
        .route("/v1/json/exact/tr/:word", get(exact_tr))
        .route("/v1/json/exact/ot/:word", get(exact_ot))
        .route("/v1/json/search/tr/:word", get(search_tr))
        .route("/v1/json/search/ot/:word", get(search_ot))
        .route("/v1/json/search/any/:word", get(search_any))
        .route("/v1/json/exact/abjad/:number", get(exact_abjad))
        .route("/v1/json/calc/abjad/:word", get(calc_abjad))
        .route("/v1/json/v2u/:word", get(visenc_to_unicode))
        .route("/v1/json/u2v/:word", get(unicode_to_visenc))
        .layer(CorsLayer::permissive())
        .with_state(index)
}
