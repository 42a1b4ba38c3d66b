use crate::layers::PaperMetadata;

const FORBIDDEN: &[char] = &['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

/// Drop characters that are illegal in Windows paths. Nothing is substituted.
pub fn sanitize_filename(s: &str) -> String {
    s.chars().filter(|c| !FORBIDDEN.contains(c)).collect()
}

/// `{year}{first_author}-{journal}-{title}.pdf`, with only the title sanitized.
pub fn compose_filename(meta: &PaperMetadata, title: &str) -> String {
    format!(
        "{}{}-{}-{}.pdf",
        meta.year,
        meta.first_author,
        meta.journal,
        sanitize_filename(title)
    )
}
