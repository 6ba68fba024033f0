//! Query planning.
//!
//! Resolves a [`SearchRequest`] into an immutable [`CompiledQuery`]: clamped
//! pagination window, fixed projection, sort clause, and the composed filter
//! expression. The compiled value is everything the gateway needs besides the
//! free-text term itself.

use super::filter::build_filter_expression;
use super::params::{SearchRequest, SortOrder, MAX_PAGE_SIZE};

/// Fields projected into every result document. The external response shape
/// is built from exactly this list; filterable-only fields are never selected.
pub const SELECT_FIELDS: &[&str] = &[
    "id",
    "nombre",
    "precio",
    "imagen",
    "tienePromocion",
    "calificacion",
];

/// A fully resolved query, ready for execution.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledQuery {
    /// Clamped 1-based page number.
    pub page_number: i32,
    /// Page size after clamping to `[1, MAX_PAGE_SIZE]`.
    pub page_size: i32,
    /// Result window offset: `(page_number - 1) * page_size`.
    pub skip: i32,
    /// Retrievable fields to project.
    pub select: &'static [&'static str],
    /// Composed filter expression, if any field was active.
    pub filter: Option<String>,
    /// Sort clause in provider grammar; `None` sorts by relevance.
    pub order_by: Option<String>,
    /// Total match count is always requested for pagination metadata.
    pub include_total_count: bool,
}

/// Resolve the request into a compiled query.
pub fn plan(request: &SearchRequest) -> CompiledQuery {
    let page_size = request.page_size.clamp(1, MAX_PAGE_SIZE);
    let page_number = request.page_number.max(1);
    let skip = (page_number - 1) * page_size;

    CompiledQuery {
        page_number,
        page_size,
        skip,
        select: SELECT_FIELDS,
        filter: build_filter_expression(request),
        order_by: SortOrder::parse(request.order_by.as_deref())
            .order_by_clause()
            .map(str::to_owned),
        include_total_count: true,
    }
}

/// The term handed to the provider. An empty or absent text searches all
/// documents; the term itself is passed through verbatim otherwise (only
/// filter literals are escaped).
pub fn effective_search_text(request: &SearchRequest) -> &str {
    match request.search_text.as_deref() {
        None | Some("") => "*",
        Some(text) => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::params::DEFAULT_PAGE_SIZE;

    #[test]
    fn empty_request_plans_a_match_all_default_page() {
        let request = SearchRequest::default();
        let query = plan(&request);

        assert_eq!(query.page_number, 1);
        assert_eq!(query.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(query.skip, 0);
        assert_eq!(query.filter, None);
        assert_eq!(query.order_by, None);
        assert!(query.include_total_count);
        assert_eq!(effective_search_text(&request), "*");
    }

    #[test]
    fn page_size_clamps_to_bounds() {
        let mut request = SearchRequest::default();

        request.page_size = 0;
        assert_eq!(plan(&request).page_size, 1);

        request.page_size = -5;
        assert_eq!(plan(&request).page_size, 1);

        request.page_size = 500;
        assert_eq!(plan(&request).page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn page_number_floors_to_one() {
        let mut request = SearchRequest::default();
        request.page_number = -3;
        let query = plan(&request);
        assert_eq!(query.page_number, 1);
        assert_eq!(query.skip, 0);
    }

    #[test]
    fn skip_is_window_arithmetic_on_clamped_values() {
        let mut request = SearchRequest::default();
        request.page_number = 4;
        request.page_size = 25;
        let query = plan(&request);
        assert_eq!(query.skip, 75);

        // Oversized page size clamps first, then the offset follows.
        request.page_size = 500;
        assert_eq!(plan(&request).skip, 300);
    }

    #[test]
    fn select_list_is_the_fixed_projection_regardless_of_filters() {
        let mut request = SearchRequest::default();
        request.categoria = vec!["ropa".into()];
        request.colores = vec!["rojo".into()];
        let query = plan(&request);
        assert_eq!(
            query.select,
            &["id", "nombre", "precio", "imagen", "tienePromocion", "calificacion"]
        );
    }

    #[test]
    fn sort_directive_maps_to_price_orderings_only() {
        let mut request = SearchRequest::default();

        request.order_by = Some("precio-asc".into());
        assert_eq!(plan(&request).order_by.as_deref(), Some("precio asc"));

        request.order_by = Some("PRECIO-DESC".into());
        assert_eq!(plan(&request).order_by.as_deref(), Some("precio desc"));

        request.order_by = Some("calificacion-desc".into());
        assert_eq!(plan(&request).order_by, None);
    }

    #[test]
    fn search_text_passes_through_verbatim_when_present() {
        let mut request = SearchRequest::default();
        request.search_text = Some("puma".into());
        assert_eq!(effective_search_text(&request), "puma");

        request.search_text = Some(String::new());
        assert_eq!(effective_search_text(&request), "*");
    }

    #[test]
    fn filtered_sorted_text_request_plans_all_clauses() {
        let mut request = SearchRequest::default();
        request.search_text = Some("puma".into());
        request.categoria = vec!["zapatillas".into(), "ropa".into()];
        request.precio_min = Some(50.0);
        request.order_by = Some("precio-asc".into());

        let query = plan(&request);
        assert_eq!(
            query.filter.as_deref(),
            Some("precio ge 50 and (categoria eq 'zapatillas' or categoria eq 'ropa')")
        );
        assert_eq!(query.order_by.as_deref(), Some("precio asc"));
        assert_eq!(effective_search_text(&request), "puma");
    }
}
