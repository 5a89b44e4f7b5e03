/// Canonical retrieval URLs for a stored artifact. Pure string
/// composition, no I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Links {
    pub page: String,
    pub svg_image: String,
    pub json_source: String,
    pub sandbox_page: String,
}

impl Links {
    #[must_use]
    pub fn build(base_url: &str, cid: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            page: format!("{base}/p/{cid}/"),
            svg_image: format!("{base}/img/{cid}.svg"),
            json_source: format!("{base}/src/{cid}.json"),
            sandbox_page: format!("{base}/sandbox/{cid}/"),
        }
    }
}
