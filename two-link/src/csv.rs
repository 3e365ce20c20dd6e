//! Functions for reading CSV format.
use crate::LinearSystem;
pub use csv::Error;
use csv::ReaderBuilder;
use serde::de::DeserializeOwned;
use std::io::Cursor;

/// Parse CSV from string.
///
/// Headerless, `#` starts a comment line.
pub fn parse_csv<D>(s: &str) -> Result<Vec<D>, Error>
where
    D: DeserializeOwned,
{
    ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(Cursor::new(s))
        .deserialize()
        .collect()
}

/// Parse a linear system from three CSV rows `a, b, c, d`.
///
/// Return `None` if the row count is not three.
pub fn parse_system(s: &str) -> Result<Option<LinearSystem>, Error> {
    let rows = parse_csv::<[f64; 4]>(s)?;
    Ok(<[[f64; 4]; 3]>::try_from(rows).ok().map(LinearSystem::new))
}

#[test]
fn system_from_csv() {
    let s = "# 2x + 3y + z = 1\n2,3,1,1\n4, 1, 2, 2\n3,2,3,3\n";
    let sys = parse_system(s).unwrap().unwrap();
    assert_eq!(sys.rows[1], [4., 1., 2., 2.]);
    assert!(parse_system("1,2,3,4\n").unwrap().is_none());
    assert!(parse_system("1,2,3\n4,5,6\n7,8,9\n").is_err());
    let expected = LinearSystem::new([[2., 3., 1., 1.], [4., 1., 2., 2.], [3., 2., 3., 3.]]);
    assert_eq!(sys, expected);
}
