//! TSPLIB writer, the inverse of [`read_instance`](super::read_instance).

use std::fmt;
use std::path::Path;

use super::ProblemInstance;
use crate::distance::EdgeWeightFormat;
use crate::error::Result;

impl ProblemInstance {
    /// Renders the instance as TSPLIB text, one triangle row per line.
    ///
    /// ```
    /// use tsplib_nn::distance::EdgeWeightFormat;
    /// use tsplib_nn::instance::ProblemInstance;
    ///
    /// let inst = ProblemInstance::new(2, EdgeWeightFormat::LowerDiagRow, vec![0, 8, 0]).unwrap();
    /// let text = inst.to_tsplib();
    /// assert!(text.contains("EDGE_WEIGHT_FORMAT : LOWER_DIAG_ROW"));
    /// assert_eq!(text.parse::<ProblemInstance>().unwrap(), inst);
    /// ```
    pub fn to_tsplib(&self) -> String {
        self.to_string()
    }

    /// Writes [`to_tsplib`](Self::to_tsplib) output to `path`.
    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_tsplib())?;
        Ok(())
    }
}

impl fmt::Display for ProblemInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name() {
            writeln!(f, "NAME : {name}")?;
        }
        if let Some(comment) = self.comment() {
            writeln!(f, "COMMENT : {comment}")?;
        }
        writeln!(f, "TYPE : TSP")?;
        writeln!(f, "DIMENSION : {}", self.dimension())?;
        writeln!(f, "EDGE_WEIGHT_TYPE : EXPLICIT")?;
        writeln!(f, "EDGE_WEIGHT_FORMAT : {}", self.format())?;
        writeln!(f, "EDGE_WEIGHT_SECTION")?;

        let n = self.dimension();
        let mut rest = self.weights();
        for i in 0..n {
            let row_len = match self.format() {
                EdgeWeightFormat::UpperDiagRow => n - i,
                EdgeWeightFormat::LowerDiagRow => i + 1,
            };
            let (row, tail) = rest.split_at(row_len);
            let row: Vec<String> = row.iter().map(i64::to_string).collect();
            writeln!(f, "{}", row.join(" "))?;
            rest = tail;
        }
        writeln!(f, "EOF")
    }
}
