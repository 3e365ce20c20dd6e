use super::{AnyResult, Logger};
use std::{io::Write, path::PathBuf};
use two_link::LinearSystem;

#[derive(clap::Args)]
pub(super) struct Solve {
    /// CSV file with three rows `a, b, c, d`
    #[clap(long, conflicts_with = "row")]
    csv: Option<PathBuf>,
    /// Augmented row `a,b,c,d` of `ax + by + cz = d`, given three times
    #[clap(long, value_delimiter = ',', allow_negative_numbers = true)]
    row: Vec<f64>,
    /// Treat determinants within this tolerance as zero
    #[clap(long)]
    eps: Option<f64>,
}

#[derive(serde::Serialize)]
struct Report {
    determinants: [f64; 4],
    solution: String,
}

impl Solve {
    fn system(&self) -> AnyResult<LinearSystem> {
        if let Some(path) = &self.csv {
            let s = std::fs::read_to_string(path)?;
            return two_link::csv::parse_system(&s)?
                .ok_or_else(|| "the CSV file must have exactly three rows".into());
        }
        match self.row.as_slice() {
            [] => Err("no linear system given, use --csv or --row".into()),
            rows if rows.len() == 12 => {
                let rows = std::array::from_fn(|i| std::array::from_fn(|j| rows[i * 4 + j]));
                Ok(LinearSystem::new(rows))
            }
            _ => Err("three rows of four values are required".into()),
        }
    }
}

pub(super) fn solve<W: Write>(logger: &mut Logger<W>, solve: Solve) -> AnyResult {
    let sys = solve.system()?;
    let solution = match solve.eps {
        Some(eps) => sys.solve_eps(eps),
        None => sys.solve(),
    };
    logger.top_title("linear system")?;
    logger.log(Report {
        determinants: sys.determinants(),
        solution: solution.to_string(),
    })?;
    if let Some(xyz) = solution.unique() {
        logger.title("residual")?;
        logger.log(sys.residual(xyz))?;
        logger.newline()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(row: &[f64]) -> Solve {
        Solve { csv: None, row: row.to_vec(), eps: None }
    }

    #[test]
    fn rows() {
        let sys = cmd(&[2., 3., 1., 1., 4., 1., 2., 2., 3., 2., 3., 3.]).system().unwrap();
        assert_eq!(sys.rows[2], [3., 2., 3., 3.]);
        assert!(cmd(&[1., 2., 3.]).system().is_err());
        assert!(cmd(&[]).system().is_err());
    }

    #[test]
    fn report() {
        let mut buf = Vec::new();
        let solve = cmd(&[1., 1., 1., 1., 1., 1., 1., 1., 0., 1., -1., 0.]);
        super::solve(&mut Logger::new(&mut buf), solve).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.starts_with("[linear system]\n"));
        assert!(out.contains("solution=Infinite solutions\n"));
        assert!(!out.contains("[residual]"));
    }
}
