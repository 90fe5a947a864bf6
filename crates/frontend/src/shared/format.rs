//! Formatting helpers for the upload panel.

/// Format a file size in bytes as "x.xx KB" below 1 MB and "x.xx MB" above.
pub fn format_file_size(bytes: f64) -> String {
    const MB: f64 = 1024.0 * 1024.0;
    if bytes < MB {
        format!("{:.2} KB", bytes / 1024.0)
    } else {
        format!("{:.2} MB", bytes / MB)
    }
}

/// Turn a snake_case pipeline step name into a display label.
/// Example: "generating_embeddings" -> "generating embeddings"
pub fn step_label(step: &str) -> String {
    step.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512.0), "0.50 KB");
        assert_eq!(format_file_size(1024.0 * 10.0), "10.00 KB");
        assert_eq!(format_file_size(1024.0 * 1024.0 * 2.5), "2.50 MB");
    }

    #[test]
    fn test_step_label() {
        assert_eq!(step_label("storing_in_vector_db"), "storing in vector db");
        assert_eq!(step_label("parsing"), "parsing");
    }
}
