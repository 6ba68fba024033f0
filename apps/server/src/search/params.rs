//! Search request and response shapes.
//!
//! `SearchRequest` is the JSON body of `POST /search`. Field names follow the
//! index vocabulary (categoria, genero, ...); an empty or absent set means
//! "no constraint" for that attribute.

use serde::{Deserialize, Serialize, Serializer};

/// Default page size when the client does not specify one.
pub const DEFAULT_PAGE_SIZE: i32 = 20;
/// Largest page size a client may request; larger values are clamped.
pub const MAX_PAGE_SIZE: i32 = 100;

/// Structured search request.
///
/// Repeated values inside one attribute set are OR'd; distinct attributes are
/// AND'd together by the filter builder.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchRequest {
    /// Free-text query. Empty or absent means match-all.
    pub search_text: Option<String>,

    /// 1-based page number; values below 1 are floored to 1.
    pub page_number: i32,

    /// Requested page size; clamped to `[1, MAX_PAGE_SIZE]` before use.
    pub page_size: i32,

    /// Sort directive (`precio-asc` / `precio-desc`, case-insensitive).
    /// Anything else falls back to relevance ordering.
    pub order_by: Option<String>,

    /// Inclusive lower price bound.
    pub precio_min: Option<f64>,
    /// Inclusive upper price bound.
    pub precio_max: Option<f64>,

    /// Restrict to products with (or without) an active promotion.
    pub tiene_promocion: Option<bool>,

    // Single-valued document attributes.
    pub categoria: Vec<String>,
    pub genero: Vec<String>,
    pub deporte: Vec<String>,
    pub tipo: Vec<String>,
    pub coleccion: Vec<String>,

    // Collection-valued document attributes (`color`, `talla` on the index).
    pub colores: Vec<String>,
    pub tallas: Vec<String>,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            search_text: None,
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
            order_by: None,
            precio_min: None,
            precio_max: None,
            tiene_promocion: None,
            categoria: Vec::new(),
            genero: Vec::new(),
            deporte: Vec::new(),
            tipo: Vec::new(),
            coleccion: Vec::new(),
            colores: Vec::new(),
            tallas: Vec::new(),
        }
    }
}

/// Recognized result orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Provider relevance ranking; no explicit sort clause.
    Relevance,
    PriceAscending,
    PriceDescending,
}

impl SortOrder {
    /// Parse a sort directive. Unrecognized or absent directives sort by
    /// relevance; matching is case-insensitive.
    pub fn parse(directive: Option<&str>) -> Self {
        match directive {
            Some(d) if d.eq_ignore_ascii_case("precio-asc") => Self::PriceAscending,
            Some(d) if d.eq_ignore_ascii_case("precio-desc") => Self::PriceDescending,
            _ => Self::Relevance,
        }
    }

    /// Order-by clause in the provider grammar, if any.
    pub fn order_by_clause(self) -> Option<&'static str> {
        match self {
            Self::Relevance => None,
            Self::PriceAscending => Some("precio asc"),
            Self::PriceDescending => Some("precio desc"),
        }
    }
}

/// One page of results plus pagination metadata.
///
/// `totalPages` is derived from `totalCount` and `pageSize` at serialization
/// time; it is never stored separately.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedResponse<T> {
    pub items: Vec<T>,
    pub current_page: i32,
    pub page_size: i32,
    pub total_count: i64,
}

impl<T> PagedResponse<T> {
    pub fn total_pages(&self) -> i64 {
        if self.page_size <= 0 {
            return 0;
        }
        let size = i64::from(self.page_size);
        (self.total_count + size - 1) / size
    }
}

impl<T: Serialize> Serialize for PagedResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("PagedResponse", 5)?;
        s.serialize_field("items", &self.items)?;
        s.serialize_field("currentPage", &self.current_page)?;
        s.serialize_field("pageSize", &self.page_size)?;
        s.serialize_field("totalCount", &self.total_count)?;
        s.serialize_field("totalPages", &self.total_pages())?;
        s.end()
    }
}
