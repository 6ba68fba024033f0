//! Filter expression composition.
//!
//! Turns the typed filter fields of a [`SearchRequest`] into a single boolean
//! expression in the provider's filter grammar. Active clauses are AND'd in a
//! fixed order (price bounds, promotion flag, scalar attributes, collection
//! attributes) so compiled expressions are stable across runs.
//!
//! Grammar notes:
//! - scalar attributes are single-valued on the document; several requested
//!   values become a parenthesized OR of equality tests
//! - `color` and `talla` are string collections; membership is tested with
//!   `campo/any(t: t eq 'v')`
//! - every literal goes through [`escape_filter_literal`] before interpolation

use super::escape::escape_filter_literal;
use super::params::SearchRequest;

/// Compose the full filter expression, or `None` when no filter field is
/// active (match-all at the filter level).
pub fn build_filter_expression(request: &SearchRequest) -> Option<String> {
    let mut clauses = Vec::new();

    if let Some(min) = request.precio_min {
        clauses.push(format!("precio ge {}", min));
    }
    if let Some(max) = request.precio_max {
        clauses.push(format!("precio le {}", max));
    }
    if let Some(promocion) = request.tiene_promocion {
        clauses.push(format!("tienePromocion eq {}", promocion));
    }

    push_attribute_clause(&mut clauses, "categoria", &request.categoria);
    push_attribute_clause(&mut clauses, "genero", &request.genero);
    push_attribute_clause(&mut clauses, "deporte", &request.deporte);
    push_attribute_clause(&mut clauses, "tipo", &request.tipo);
    push_attribute_clause(&mut clauses, "coleccion", &request.coleccion);

    push_collection_clause(&mut clauses, "color", &request.colores);
    push_collection_clause(&mut clauses, "talla", &request.tallas);

    if clauses.is_empty() {
        None
    } else {
        Some(clauses.join(" and "))
    }
}

/// Single-valued attribute: OR of per-value equality tests, parenthesized so
/// the disjunction binds tighter than the surrounding AND chain.
fn push_attribute_clause(clauses: &mut Vec<String>, field: &str, values: &[String]) {
    if values.is_empty() {
        return;
    }
    let ors = values
        .iter()
        .map(|v| format!("{} eq '{}'", field, escape_filter_literal(v)))
        .collect::<Vec<_>>()
        .join(" or ");
    clauses.push(format!("({})", ors));
}

/// Collection-valued attribute: membership test per value. A single value is
/// emitted bare; two or more are OR'd and parenthesized.
fn push_collection_clause(clauses: &mut Vec<String>, field: &str, values: &[String]) {
    match values {
        [] => {}
        [single] => {
            clauses.push(format!(
                "{}/any(t: t eq '{}')",
                field,
                escape_filter_literal(single)
            ));
        }
        many => {
            let ors = many
                .iter()
                .map(|v| format!("{}/any(t: t eq '{}')", field, escape_filter_literal(v)))
                .collect::<Vec<_>>()
                .join(" or ");
            clauses.push(format!("({})", ors));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SearchRequest {
        SearchRequest::default()
    }

    #[test]
    fn empty_request_has_no_filter() {
        assert_eq!(build_filter_expression(&request()), None);
    }

    #[test]
    fn price_bounds_are_inclusive_and_joined_with_and() {
        let mut r = request();
        r.precio_min = Some(50.0);
        r.precio_max = Some(99.5);
        assert_eq!(
            build_filter_expression(&r).as_deref(),
            Some("precio ge 50 and precio le 99.5")
        );
    }

    #[test]
    fn promotion_flag_uses_lowercase_boolean_literal() {
        let mut r = request();
        r.tiene_promocion = Some(true);
        assert_eq!(
            build_filter_expression(&r).as_deref(),
            Some("tienePromocion eq true")
        );

        r.tiene_promocion = Some(false);
        assert_eq!(
            build_filter_expression(&r).as_deref(),
            Some("tienePromocion eq false")
        );
    }

    #[test]
    fn scalar_attribute_is_parenthesized_or_of_equalities() {
        let mut r = request();
        r.categoria = vec!["zapatillas".into()];
        assert_eq!(
            build_filter_expression(&r).as_deref(),
            Some("(categoria eq 'zapatillas')")
        );

        r.categoria = vec!["zapatillas".into(), "ropa".into()];
        assert_eq!(
            build_filter_expression(&r).as_deref(),
            Some("(categoria eq 'zapatillas' or categoria eq 'ropa')")
        );
    }

    #[test]
    fn single_collection_value_is_a_bare_membership_test() {
        let mut r = request();
        r.colores = vec!["rojo".into()];
        assert_eq!(
            build_filter_expression(&r).as_deref(),
            Some("color/any(t: t eq 'rojo')")
        );
    }

    #[test]
    fn multiple_collection_values_are_parenthesized() {
        let mut r = request();
        r.tallas = vec!["40".into(), "41".into()];
        assert_eq!(
            build_filter_expression(&r).as_deref(),
            Some("(talla/any(t: t eq '40') or talla/any(t: t eq '41'))")
        );
    }

    #[test]
    fn clause_order_is_deterministic() {
        let mut r = request();
        r.tallas = vec!["40".into()];
        r.genero = vec!["hombre".into()];
        r.precio_max = Some(200.0);
        r.tiene_promocion = Some(true);
        assert_eq!(
            build_filter_expression(&r).as_deref(),
            Some(
                "precio le 200 and tienePromocion eq true and (genero eq 'hombre') \
                 and talla/any(t: t eq '40')"
            )
        );
    }

    #[test]
    fn literals_with_quotes_are_escaped_everywhere() {
        let mut r = request();
        r.deporte = vec!["men's fitness".into()];
        r.colores = vec!["l'azul".into()];
        assert_eq!(
            build_filter_expression(&r).as_deref(),
            Some("(deporte eq 'men''s fitness') and color/any(t: t eq 'l''azul')")
        );
    }

    #[test]
    fn price_floor_with_categories_compiles_to_expected_expression() {
        let mut r = request();
        r.precio_min = Some(50.0);
        r.categoria = vec!["zapatillas".into(), "ropa".into()];
        assert_eq!(
            build_filter_expression(&r).as_deref(),
            Some("precio ge 50 and (categoria eq 'zapatillas' or categoria eq 'ropa')")
        );
    }
}
