//! Response wrappers used by the list endpoints.

use serde::{Deserialize, Serialize};

/// List endpoints answer either with a bare array or with `{"products": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowsEnvelope<T> {
    Bare(Vec<T>),
    Wrapped {
        #[serde(default = "Option::default")]
        products: Option<Vec<T>>,
    },
}

impl<T> RowsEnvelope<T> {
    pub fn into_rows(self) -> Vec<T> {
        match self {
            Self::Bare(rows) => rows,
            Self::Wrapped { products } => products.unwrap_or_default(),
        }
    }
}

/// Product names used for autocomplete
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductNamesResponse {
    #[serde(default, alias = "products")]
    pub product_names: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_and_wrapped() {
        let bare: RowsEnvelope<i64> = serde_json::from_str("[1, 2]").unwrap();
        assert_eq!(bare.into_rows(), vec![1, 2]);

        let wrapped: RowsEnvelope<i64> = serde_json::from_str(r#"{"products": [3]}"#).unwrap();
        assert_eq!(wrapped.into_rows(), vec![3]);

        let empty: RowsEnvelope<i64> = serde_json::from_str(r#"{"products": null}"#).unwrap();
        assert!(empty.into_rows().is_empty());
    }

    #[test]
    fn test_product_rows() {
        use crate::domain::a001_product::aggregate::Product;

        let json = r#"{"products": [
            {"id": 1, "productName": "Oats", "kcal": 370},
            {"id": 2, "productName": null}
        ]}"#;
        let rows = serde_json::from_str::<RowsEnvelope<Product>>(json)
            .unwrap()
            .into_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].product_name.as_deref(), Some("Oats"));
        assert_eq!(rows[0].nutrition.kcal, Some(370.0));
        assert_eq!(rows[1].product_name, None);

        let bare: RowsEnvelope<Product> =
            serde_json::from_str(r#"[{"id": 3, "productName": "Rice"}]"#).unwrap();
        assert_eq!(bare.into_rows()[0].id, 3);

        let missing: RowsEnvelope<Product> = serde_json::from_str("{}").unwrap();
        assert!(missing.into_rows().is_empty());
    }

    #[test]
    fn test_names_alias() {
        let a: ProductNamesResponse =
            serde_json::from_str(r#"{"productNames": ["Apple"]}"#).unwrap();
        let b: ProductNamesResponse = serde_json::from_str(r#"{"products": ["Pear"]}"#).unwrap();
        assert_eq!(a.product_names, vec!["Apple"]);
        assert_eq!(b.product_names, vec!["Pear"]);
    }
}
