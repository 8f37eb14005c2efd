use anyhow::{anyhow, Context, Result};
use nalgebra::Vector2;
use polars::prelude::*;

/// Read disk centers from a CSV with numeric `x` and `y` columns, in row order.
pub fn read_centers(path: &str) -> Result<Vec<Vector2<f64>>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {path}"))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns from {path}"))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys)
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Ok(Vector2::new(x, y)),
            _ => Err(anyhow!("{path}: row {row} has a missing or non-finite coordinate")),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_integer_and_float_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("centers.csv");
        fs::write(&path, "x,y\n0,0\n10,0.5\n20,-0.5\n").unwrap();
        let pts = read_centers(path.to_str().unwrap()).unwrap();
        assert_eq!(
            pts,
            vec![
                Vector2::new(0.0, 0.0),
                Vector2::new(10.0, 0.5),
                Vector2::new(20.0, -0.5)
            ]
        );
    }

    #[test]
    fn missing_values_are_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("holes.csv");
        fs::write(&path, "x,y\n0,0\n1,\n").unwrap();
        let err = read_centers(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }
}
