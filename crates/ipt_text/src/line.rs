/// Delimiter between columns of a training-file line.
pub const FIELD_DELIMITER: &str = "\t";

/// Joins the columns of one output line. No trailing newline is added.
pub fn join_line<S: AsRef<str>>(columns: &[S]) -> String {
    let mut line = String::new();
    for (idx, column) in columns.iter().enumerate() {
        if idx > 0 {
            line.push_str(FIELD_DELIMITER);
        }
        line.push_str(column.as_ref());
    }
    line
}
