//! Product index document and its external projection.

use serde::{Deserialize, Serialize};

/// Full shape of a document in the product search index.
///
/// Only the first six fields are retrievable through the public API; the rest
/// exist for filtering and scoring on the provider side and may be absent
/// from projected results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDocument {
    pub id: String,
    pub nombre: String,
    pub precio: Option<f64>,
    #[serde(default)]
    pub imagen: String,
    pub tiene_promocion: Option<bool>,
    pub calificacion: Option<f64>,

    // Filterable-only fields; never projected into responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categoria: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genero: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deporte: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coleccion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub talla: Option<Vec<String>>,
}

/// External response shape: exactly the retrievable fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub nombre: String,
    pub precio: Option<f64>,
    pub imagen: String,
    pub tiene_promocion: Option<bool>,
    pub calificacion: Option<f64>,
}

impl From<ProductDocument> for Product {
    fn from(doc: ProductDocument) -> Self {
        Self {
            id: doc.id,
            nombre: doc.nombre,
            precio: doc.precio,
            imagen: doc.imagen,
            tiene_promocion: doc.tiene_promocion,
            calificacion: doc.calificacion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> ProductDocument {
        ProductDocument {
            id: "p-1".into(),
            nombre: "Zapatilla Runner".into(),
            precio: Some(59.99),
            imagen: "https://img.example/p-1.jpg".into(),
            tiene_promocion: Some(true),
            calificacion: Some(4.5),
            descripcion: Some("texto interno".into()),
            categoria: Some("zapatillas".into()),
            color: Some(vec!["rojo".into()]),
            ..Default::default()
        }
    }

    #[test]
    fn projection_preserves_all_retrievable_fields() {
        let product = Product::from(document());
        assert_eq!(product.id, "p-1");
        assert_eq!(product.nombre, "Zapatilla Runner");
        assert_eq!(product.precio, Some(59.99));
        assert_eq!(product.imagen, "https://img.example/p-1.jpg");
        assert_eq!(product.tiene_promocion, Some(true));
        assert_eq!(product.calificacion, Some(4.5));
    }

    #[test]
    fn filterable_only_fields_never_reach_the_response() {
        let json = serde_json::to_value(Product::from(document())).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(
            keys,
            vec!["id", "nombre", "precio", "imagen", "tienePromocion", "calificacion"]
        );
    }

    #[test]
    fn document_deserializes_from_index_field_names() {
        let doc: ProductDocument = serde_json::from_str(
            r#"{
                "@search.score": 1.2,
                "id": "p-2",
                "nombre": "Camiseta",
                "precio": 19.9,
                "imagen": "img",
                "tienePromocion": false,
                "calificacion": 3.8
            }"#,
        )
        .unwrap();
        assert_eq!(doc.id, "p-2");
        assert_eq!(doc.tiene_promocion, Some(false));
        assert!(doc.categoria.is_none());
    }
}
