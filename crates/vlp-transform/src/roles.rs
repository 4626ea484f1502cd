//! Column role classification.

use polars::prelude::*;
use tracing::debug;

/// Column roles realized from post-normalization value types.
///
/// Computed once per dataset snapshot and handed to later stages, so
/// roles are never re-derived ad hoc at each use site.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnRoles {
    /// Columns holding numeric values.
    pub numeric: Vec<String>,
    /// Columns holding textual values.
    pub categorical: Vec<String>,
}

/// Classifies every column by its realized value type.
///
/// A column is categorical when its dtype is textual; everything else,
/// including an all-null column inferred numeric, is numeric. Pure:
/// the dataset is not mutated. Classification goes by realized type,
/// never by column name.
pub fn classify(df: &DataFrame) -> ColumnRoles {
    let mut roles = ColumnRoles::default();
    for column in df.get_columns() {
        let name = column.name().to_string();
        if column.dtype() == &DataType::String {
            roles.categorical.push(name);
        } else {
            roles.numeric.push(name);
        }
    }
    debug!(
        numeric = roles.numeric.len(),
        categorical = roles.categorical.len(),
        "columns classified"
    );
    roles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_columns_by_realized_type() {
        let price = Series::new("price".into(), &[1000.0f64, 2000.0]).into_column();
        let model = Series::new("model".into(), vec!["A4", "Golf"]).into_column();
        let fuel = Series::new("fuel".into(), vec!["Petrol", "Diesel"]).into_column();
        let df = DataFrame::new(vec![price, model, fuel]).unwrap();

        let roles = classify(&df);
        assert_eq!(roles.numeric, vec!["price".to_string()]);
        assert_eq!(
            roles.categorical,
            vec!["model".to_string(), "fuel".to_string()]
        );
    }

    #[test]
    fn all_null_numeric_column_stays_numeric() {
        let empty = Series::new("price".into(), &[None::<f64>, None]).into_column();
        let df = DataFrame::new(vec![empty]).unwrap();

        let roles = classify(&df);
        assert_eq!(roles.numeric, vec!["price".to_string()]);
        assert!(roles.categorical.is_empty());
    }
}
